pub mod app;
mod render;
mod timer;

pub use app::{run, user_config_path};
