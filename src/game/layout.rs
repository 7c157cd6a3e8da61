//! Fixed board geometry: canvas size, card cells and the level toggle button.
use crate::config::GameConfig;

use super::level::{GRID_COLUMNS, Level};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn square(x: f64, y: f64, size: f64) -> Self {
        Self::new(x, y, size, size)
    }

    /// Strict containment: points on the border belong to no rectangle.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px > self.x && px < self.x + self.width && py > self.y && py < self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub level: Level,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub score_area_height: f64,
    pub card_size: f64,
    pub toggle_button: Rect,
}

impl Layout {
    pub fn new(level: Level, config: &GameConfig) -> Self {
        let card_size = config.canvas_width / GRID_COLUMNS as f64;
        let card_area_height = level.rows() as f64 * card_size;
        let button = config.toggle_button;
        let toggle_button = Rect::new(
            config.canvas_width - button.width - button.margin,
            (config.score_area_height - button.height) / 2.0,
            button.width,
            button.height,
        );

        Self {
            level,
            canvas_width: config.canvas_width,
            canvas_height: config.score_area_height + card_area_height,
            score_area_height: config.score_area_height,
            card_size,
            toggle_button,
        }
    }

    pub fn card_area(&self) -> Rect {
        Rect::new(
            0.0,
            self.score_area_height,
            self.canvas_width,
            self.canvas_height - self.score_area_height,
        )
    }

    pub fn cell(&self, column: u32, row: u32) -> Rect {
        Rect::square(
            column as f64 * self.card_size,
            row as f64 * self.card_size + self.score_area_height,
            self.card_size,
        )
    }

    /// Cells in deal order: columns outer, rows inner.
    pub fn cells(&self) -> impl Iterator<Item = Rect> + '_ {
        let rows = self.level.rows();
        (0..GRID_COLUMNS).flat_map(move |column| (0..rows).map(move |row| self.cell(column, row)))
    }

    /// Board index of the card dealt into `(column, row)`.
    pub fn index_of(&self, column: u32, row: u32) -> Option<usize> {
        let rows = self.level.rows();
        if column >= GRID_COLUMNS || row >= rows {
            return None;
        }
        Some((column * rows + row) as usize)
    }
}
