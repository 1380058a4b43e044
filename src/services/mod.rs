pub mod backend;
pub mod classifier;
