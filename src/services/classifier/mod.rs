pub mod client;
pub mod controller;
