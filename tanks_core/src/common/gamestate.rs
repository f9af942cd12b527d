use std::io::{BufRead, Write};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::GameError,
    geometry::BoundingBox,
    input::Prompt,
    render::{draw_board, Surface},
};

use super::{
    constants::{GRAVITY, OBSTACLE_BOX, TANK1_BOX, TANK2_BOX, TRAJECTORY_SAMPLES},
    player::PlayerNum,
    shot::{tank_shot, Launch, ShotOutcome},
};

/// Fixed layout of a match: where the tanks and the wall stand, and the physics they share
///
/// Only obtainable from [`Default`] or [`BattlefieldBuilder`], so every
/// battlefield has upright boxes, positive finite gravity and at least one sample.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct Battlefield {
    tank1: BoundingBox,
    tank2: BoundingBox,
    obstacle: BoundingBox,
    gravity: f64,
    /// Samples taken along each shot
    samples: usize,
}

impl Default for Battlefield {
    fn default() -> Self {
        Self {
            tank1: TANK1_BOX,
            tank2: TANK2_BOX,
            obstacle: OBSTACLE_BOX,
            gravity: GRAVITY,
            samples: TRAJECTORY_SAMPLES,
        }
    }
}

impl Battlefield {
    pub fn tank1(&self) -> &BoundingBox {
        &self.tank1
    }

    pub fn tank2(&self) -> &BoundingBox {
        &self.tank2
    }

    pub fn obstacle(&self) -> &BoundingBox {
        &self.obstacle
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn samples(&self) -> usize {
        self.samples
    }
}

impl BattlefieldBuilder {
    fn validate(&self) -> Result<(), String> {
        for (name, bbox) in [
            ("tank1", &self.tank1),
            ("tank2", &self.tank2),
            ("obstacle", &self.obstacle),
        ] {
            if let Some(bbox) = bbox {
                if !bbox.is_well_formed() {
                    return Err(format!("{name} box is inverted: {bbox:?}"));
                }
            }
        }

        match (self.gravity, self.samples) {
            (Some(g), _) if !(g > 0.0 && g.is_finite()) => {
                Err(format!("gravity must be positive, got {g}"))
            }
            (_, Some(0)) => Err(String::from("a shot needs at least one sample")),
            _ => Ok(()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the given player to fire
    Turn(PlayerNum),
    GameOver { winner: PlayerNum },
}

/// What happened during one turn
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShotReport {
    /// Counted from 1
    pub turn: usize,
    pub player: PlayerNum,
    pub velocity: f64,
    pub angle: f64,
    pub outcome: ShotOutcome,
    /// Number of samples drawn for the shot
    pub path_len: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub winner: PlayerNum,
    pub turns: usize,
    pub shots: Vec<ShotReport>,
}

/// A match in progress
///
/// Owns the drawing surface and the console for the whole match.
pub struct Game<S, R, W> {
    field: Battlefield,
    surface: S,
    console: Prompt<R, W>,
    state: TurnState,
    shots: Vec<ShotReport>,
}

impl<S: Surface, R: BufRead, W: Write> Game<S, R, W> {
    /// Player 1 always opens
    pub fn new(field: Battlefield, surface: S, console: Prompt<R, W>) -> Self {
        Self {
            field,
            surface,
            console,
            state: TurnState::Turn(PlayerNum::One),
            shots: Vec::new(),
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn shots(&self) -> &[ShotReport] {
        &self.shots
    }

    pub fn into_parts(self) -> (S, Prompt<R, W>) {
        (self.surface, self.console)
    }

    /// Plays the turn of whoever is up
    ///
    /// Redraws the board, asks for velocity and angle, fires from the center
    /// of the player's tank at the opponent's, then hands the turn over on a
    /// miss or ends the match on a hit. Returns `None` once the match is over.
    pub fn one_turn(&mut self) -> Result<Option<ShotReport>, GameError> {
        let player = match self.state {
            TurnState::Turn(player) => player,
            TurnState::GameOver { .. } => return Ok(None),
        };

        draw_board(&mut self.surface, &self.field, player)?;

        let velocity = self
            .console
            .number(&format!("Enter Player {player} velocity > "), None)?;
        let angle = self.console.number("Enter angle > ", None)?;

        let launch = Launch {
            origin: player.own_tank(&self.field).center(),
            velocity,
            angle,
        };
        let shot = tank_shot(
            &mut self.surface,
            player.target_tank(&self.field),
            self.field.obstacle(),
            &launch,
            self.field.gravity(),
            self.field.samples(),
        )?;

        self.state = match shot.outcome {
            ShotOutcome::Miss => {
                self.console.say("You missed")?;
                TurnState::Turn(player.other())
            }
            ShotOutcome::Hit => {
                self.console.say("You won!")?;
                TurnState::GameOver { winner: player }
            }
        };

        let report = ShotReport {
            turn: self.shots.len() + 1,
            player,
            velocity,
            angle,
            outcome: shot.outcome,
            path_len: shot.path.len(),
        };
        info!(
            turn = report.turn,
            %player,
            velocity,
            angle,
            outcome = ?report.outcome,
            "turn resolved"
        );
        self.shots.push(report.clone());

        Ok(Some(report))
    }

    /// Alternates turns until one player hits the other
    pub fn play(&mut self) -> Result<MatchSummary, GameError> {
        loop {
            if let TurnState::GameOver { winner } = self.state {
                info!(%winner, turns = self.shots.len(), "match over");
                return Ok(MatchSummary {
                    winner,
                    turns: self.shots.len(),
                    shots: self.shots.clone(),
                });
            }

            self.one_turn()?;
        }
    }
}

/// Starts a match on `field` and plays it to the end
pub fn play_game<S: Surface, R: BufRead, W: Write>(
    field: Battlefield,
    surface: S,
    console: Prompt<R, W>,
) -> Result<MatchSummary, GameError> {
    Game::new(field, surface, console).play()
}
