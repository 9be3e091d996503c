// Utilities module

pub mod display;

pub use display::DisplayConfig;
