pub mod game;
pub mod tweet;
