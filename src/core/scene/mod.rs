pub mod input;
pub mod player;
