pub mod read_settings;

pub use read_settings::{load_settings, Settings};
