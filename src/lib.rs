pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod types;

pub use api::CheckersApp;
pub use error::GameError;
