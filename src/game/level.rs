use serde::{Deserialize, Serialize};

use crate::error::LevelError;

pub const GRID_COLUMNS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    /// 16 cards, 8 symbols, 4 x 4.
    #[default]
    Standard,
    /// 20 cards, 10 symbols, 4 x 5.
    Extended,
}

impl Level {
    pub fn card_count(self) -> u32 {
        match self {
            Level::Standard => 16,
            Level::Extended => 20,
        }
    }

    pub fn rows(self) -> u32 {
        self.card_count() / GRID_COLUMNS
    }

    pub fn unique_symbols(self) -> usize {
        (self.card_count() / 2) as usize
    }

    pub fn toggled(self) -> Self {
        match self {
            Level::Standard => Level::Extended,
            Level::Extended => Level::Standard,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Standard => "16 Cards",
            Level::Extended => "20 Cards",
        }
    }
}

impl TryFrom<u32> for Level {
    type Error = LevelError;

    fn try_from(cards: u32) -> Result<Self, Self::Error> {
        match cards {
            16 => Ok(Level::Standard),
            20 => Ok(Level::Extended),
            _ => Err(LevelError::Unsupported { cards }),
        }
    }
}
