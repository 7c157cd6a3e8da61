pub mod board;
pub mod card;
pub mod input;
pub mod layout;
pub mod level;
pub mod resolver;
pub mod scheduler;
pub mod session;
pub mod shuffle;
pub mod view;

pub use board::{Board, FlipOutcome};
pub use card::Card;
pub use input::{PointerOutcome, on_pointer_down};
pub use layout::{Layout, Rect};
pub use level::Level;
pub use resolver::{Resolution, ScheduledMessage, TurnMessage, TurnPhase};
pub use scheduler::{ManualScheduler, Scheduler};
pub use session::Session;
pub use view::{BoardView, CardFace, CardView, ToggleView};
