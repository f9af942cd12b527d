pub mod constants;
pub mod gamestate;
pub mod player;
pub mod shot;
pub mod trajectory;
