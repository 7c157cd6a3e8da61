//! Read-only snapshot of a board for renderers.
use super::board::Board;
use super::card::Card;
use super::layout::Rect;
use super::level::Level;

#[derive(Clone, Debug, PartialEq)]
pub enum CardFace {
    Hidden,
    Revealed(String),
    Matched(String),
}

impl CardFace {
    pub fn symbol(&self) -> Option<&str> {
        match self {
            CardFace::Hidden => None,
            CardFace::Revealed(symbol) | CardFace::Matched(symbol) => Some(symbol),
        }
    }
}

impl From<&Card> for CardFace {
    fn from(card: &Card) -> Self {
        if card.is_matched() {
            CardFace::Matched(card.symbol().to_string())
        } else if card.is_face_up() {
            CardFace::Revealed(card.symbol().to_string())
        } else {
            CardFace::Hidden
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub bounds: Rect,
    pub face: CardFace,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToggleView {
    pub bounds: Rect,
    /// Names the level the button switches to.
    pub target: Level,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoardView {
    pub level: Level,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub score_area_height: f64,
    pub card_area: Rect,
    pub score: u32,
    pub matched_pairs: u32,
    pub locked: bool,
    pub complete: bool,
    pub toggle: ToggleView,
    pub cards: Vec<CardView>,
}

impl Board {
    pub fn view(&self) -> BoardView {
        let layout = self.layout();
        BoardView {
            level: self.level(),
            canvas_width: layout.canvas_width,
            canvas_height: layout.canvas_height,
            score_area_height: layout.score_area_height,
            card_area: layout.card_area(),
            score: self.score(),
            matched_pairs: self.matched_pairs(),
            locked: self.is_locked(),
            complete: self.is_complete(),
            toggle: ToggleView {
                bounds: layout.toggle_button,
                target: self.level().toggled(),
            },
            cards: self
                .cards()
                .iter()
                .map(|card| CardView {
                    bounds: card.bounds(),
                    face: CardFace::from(card),
                })
                .collect(),
        }
    }
}
