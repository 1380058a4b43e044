pub mod classifier;
pub mod theme;
