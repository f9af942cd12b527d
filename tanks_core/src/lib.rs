//! Core of a two player artillery duel
//!
//! Two tanks stand on either side of a wall and take turns firing shells at
//! each other until one shell lands on the opposing tank.

pub mod common;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;

pub use common::{
    gamestate::{
        play_game, Battlefield, BattlefieldBuilder, BattlefieldBuilderError, Game, MatchSummary,
        ShotReport, TurnState,
    },
    player::PlayerNum,
    shot::{resolve_shot, tank_shot, Launch, Shot, ShotOutcome},
    trajectory::{trajectory, Trajectory},
};
pub use error::GameError;
pub use geometry::{end_trajectory_at_intersection, first_in_box, BoundingBox, Vector2};
pub use input::Prompt;
pub use render::{draw_board, draw_box, show_window, Color, DisplayList, Surface};
