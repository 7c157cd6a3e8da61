use std::f64::consts::{FRAC_PI_2, PI};

use gettextrs::gettext;
use pangocairo::pango;

use crate::game::{BoardView, CardFace, CardView, Level, Rect};

const SCORE_BAR_GRAY: f64 = 50.0 / 255.0;
const CARD_REVEALED_GRAY: f64 = 200.0 / 255.0;
const BUTTON_RGB: (f64, f64, f64) = (100.0 / 255.0, 150.0 / 255.0, 200.0 / 255.0);
const WIN_RGB: (f64, f64, f64) = (0.0, 150.0 / 255.0, 0.0);

const SCORE_BAR_RADIUS: f64 = 10.0;
const BUTTON_RADIUS: f64 = 5.0;
const CARD_RADIUS: f64 = 10.0;

const TEXT_FONT: &str = "Cantarell, Noto Sans, sans";
const SYMBOL_FONT: &str = "Noto Color Emoji, Apple Color Emoji, Segoe UI Emoji, sans";

enum Align {
    Left,
    Center,
}

pub fn draw_board(cr: &cairo::Context, view: &BoardView) -> Result<(), cairo::Error> {
    cr.set_antialias(cairo::Antialias::Best);
    cr.set_source_rgb(1.0, 1.0, 1.0);
    cr.paint()?;

    draw_score_bar(cr, view)?;
    draw_toggle_button(cr, view)?;
    for card in &view.cards {
        draw_card(cr, card)?;
    }

    if view.complete {
        let (cx, cy) = view.card_area.center();
        cr.set_source_rgb(WIN_RGB.0, WIN_RGB.1, WIN_RGB.2);
        draw_text(cr, &gettext("You won!"), cx, cy, 40.0, TEXT_FONT, Align::Center);
    }
    Ok(())
}

fn draw_score_bar(cr: &cairo::Context, view: &BoardView) -> Result<(), cairo::Error> {
    let bar = Rect::new(0.0, 0.0, view.canvas_width, view.score_area_height);
    rounded_rect(cr, bar, [SCORE_BAR_RADIUS, SCORE_BAR_RADIUS, 0.0, 0.0]);
    cr.set_source_rgb(SCORE_BAR_GRAY, SCORE_BAR_GRAY, SCORE_BAR_GRAY);
    cr.fill()?;

    cr.set_source_rgb(1.0, 1.0, 1.0);
    draw_text(cr, &score_label(view.score), 20.0, view.score_area_height / 2.0, 24.0, TEXT_FONT, Align::Left);
    Ok(())
}

fn draw_toggle_button(cr: &cairo::Context, view: &BoardView) -> Result<(), cairo::Error> {
    let bounds = view.toggle.bounds;
    rounded_rect(cr, bounds, [BUTTON_RADIUS; 4]);
    cr.set_source_rgb(BUTTON_RGB.0, BUTTON_RGB.1, BUTTON_RGB.2);
    cr.fill_preserve()?;
    cr.set_source_rgb(1.0, 1.0, 1.0);
    cr.set_line_width(1.0);
    cr.stroke()?;

    let (cx, cy) = bounds.center();
    draw_text(cr, &toggle_label(view.toggle.target), cx, cy, 14.0, TEXT_FONT, Align::Center);
    Ok(())
}

fn draw_card(cr: &cairo::Context, card: &CardView) -> Result<(), cairo::Error> {
    rounded_rect(cr, card.bounds, [CARD_RADIUS; 4]);
    let fill = match card.face {
        CardFace::Hidden => 1.0,
        CardFace::Revealed(_) | CardFace::Matched(_) => CARD_REVEALED_GRAY,
    };
    cr.set_source_rgb(fill, fill, fill);
    cr.fill_preserve()?;
    cr.set_source_rgb(0.0, 0.0, 0.0);
    cr.set_line_width(2.0);
    cr.stroke()?;

    if let Some(symbol) = card.face.symbol() {
        let (cx, cy) = card.bounds.center();
        draw_text(cr, symbol, cx, cy, 32.0, SYMBOL_FONT, Align::Center);
    }
    Ok(())
}

fn score_label(score: u32) -> String {
    format!("{} {score}", gettext("Score:"))
}

fn toggle_label(target: Level) -> String {
    match target {
        Level::Standard => gettext("16 Cards"),
        Level::Extended => gettext("20 Cards"),
    }
}

/// Radii run clockwise from the top-left corner.
fn rounded_rect(cr: &cairo::Context, rect: Rect, radii: [f64; 4]) {
    let max = rect.width.min(rect.height) / 2.0;
    let [tl, tr, br, bl] = radii.map(|r| r.clamp(0.0, max));
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);

    cr.new_sub_path();
    cr.arc(x + w - tr, y + tr, tr, -FRAC_PI_2, 0.0);
    cr.arc(x + w - br, y + h - br, br, 0.0, FRAC_PI_2);
    cr.arc(x + bl, y + h - bl, bl, FRAC_PI_2, PI);
    cr.arc(x + tl, y + tl, tl, PI, PI + FRAC_PI_2);
    cr.close_path();
}

/// Uses the current source colour. `x` is the left edge for `Align::Left`.
fn draw_text(cr: &cairo::Context, text: &str, x: f64, y: f64, px: f64, family: &str, align: Align) {
    let layout = pangocairo::functions::create_layout(cr);
    let mut font_desc = pango::FontDescription::new();
    font_desc.set_family(family);
    font_desc.set_absolute_size(px * pango::SCALE as f64);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    let (text_width, text_height) = layout.pixel_size();
    let left = match align {
        Align::Left => x,
        Align::Center => x - text_width as f64 / 2.0,
    };
    cr.move_to(left, y - text_height as f64 / 2.0);
    pangocairo::functions::show_layout(cr, &layout);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_without_catalog_stay_english() {
        assert_eq!(score_label(3), "Score: 3");
        assert_eq!(toggle_label(Level::Standard), "16 Cards");
        assert_eq!(toggle_label(Level::Extended), "20 Cards");
    }
}
