use super::layout::Rect;

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    bounds: Rect,
    symbol: String,
    face_up: bool,
    matched: bool,
}

impl Card {
    pub fn new(bounds: Rect, symbol: impl Into<String>) -> Self {
        Self {
            bounds,
            symbol: symbol.into(),
            face_up: false,
            matched: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Matched cards always render face-up.
    pub fn is_revealed(&self) -> bool {
        self.face_up || self.matched
    }

    /// Whether a press may flip this card.
    pub fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.bounds.contains(x, y)
    }

    /// Turns the card over. Matched cards stay put.
    pub fn flip(&mut self) {
        if !self.matched {
            self.face_up = !self.face_up;
        }
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new(Rect::square(0.0, 50.0, 100.0), "🌽")
    }

    #[test]
    fn starts_face_down() {
        let card = card();
        assert!(!card.is_face_up());
        assert!(!card.is_matched());
        assert!(card.is_selectable());
        assert!(!card.is_revealed());
    }

    #[test]
    fn flip_toggles() {
        let mut card = card();
        card.flip();
        assert!(card.is_face_up());
        assert!(!card.is_selectable());
        card.flip();
        assert!(!card.is_face_up());
    }

    #[test]
    fn matched_cards_ignore_flips() {
        let mut card = card();
        card.mark_matched();
        card.flip();
        assert!(card.is_face_up());
        assert!(card.is_matched());
        assert!(card.is_revealed());
        assert!(!card.is_selectable());
    }

    #[test]
    fn hit_test_uses_bounds() {
        let card = card();
        assert!(card.contains(10.0, 60.0));
        assert!(!card.contains(10.0, 40.0));
        assert!(!card.contains(-1.0, -1.0));
    }
}
