//! Drawing of the board and of the shots fired across it
//!
//! Drawing goes through a [`Surface`] owned by whoever runs the game, so the
//! same board code can target the terminal or an in-memory [`DisplayList`].

use std::io;

use crate::{
    common::{
        constants::{FIELD_LIMITS, OBSTACLE_COLOR, TANK1_COLOR, TANK2_COLOR},
        gamestate::Battlefield,
        player::PlayerNum,
    },
    geometry::BoundingBox,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Red,
    Black,
    Yellow,
}

/// A 2D plotting target with fixed axis limits
pub trait Surface {
    /// Remove everything drawn so far
    fn clear(&mut self);
    fn fill_box(&mut self, bbox: &BoundingBox, color: Color);
    /// Connect consecutive `(xs[i], ys[i])` points with straight segments
    fn polyline(&mut self, xs: &[f64], ys: &[f64], color: Color);
    fn set_limits(&mut self, x: (f64, f64), y: (f64, f64));
    fn set_title(&mut self, title: &str);
    /// Flush pending drawing to wherever the surface is displayed
    fn present(&mut self) -> io::Result<()>;
}

/// Fills `bbox` with a solid color
pub fn draw_box<S: Surface + ?Sized>(surface: &mut S, bbox: &BoundingBox, color: Color) {
    surface.fill_box(bbox, color);
}

/// Flushes whatever has been drawn so it becomes visible
pub fn show_window<S: Surface + ?Sized>(surface: &mut S) -> io::Result<()> {
    surface.present()
}

pub fn turn_title(player: PlayerNum) -> String {
    format!("Player {}'s turn: ", player)
}

/// Draws the pre-shot board from scratch and shows it
pub fn draw_board<S: Surface + ?Sized>(
    surface: &mut S,
    field: &Battlefield,
    player: PlayerNum,
) -> io::Result<()> {
    surface.clear();
    draw_box(surface, field.tank1(), TANK1_COLOR);
    draw_box(surface, field.tank2(), TANK2_COLOR);
    draw_box(surface, field.obstacle(), OBSTACLE_COLOR);
    surface.set_title(&turn_title(player));
    surface.set_limits(FIELD_LIMITS, FIELD_LIMITS);
    show_window(surface)
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillBox { bbox: BoundingBox, color: Color },
    Polyline {
        xs: Vec<f64>,
        ys: Vec<f64>,
        color: Color,
    },
}

/// Surface that keeps everything drawn on it as a list of commands
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    pub title: String,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
    pub commands: Vec<DrawCommand>,
    /// Number of times the list was presented
    pub presented: usize,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_limits: FIELD_LIMITS,
            y_limits: FIELD_LIMITS,
            commands: Vec::new(),
            presented: 0,
        }
    }
}

impl DisplayList {
    pub fn polylines(&self) -> impl Iterator<Item = (&[f64], &[f64])> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polyline { xs, ys, .. } => Some((xs.as_slice(), ys.as_slice())),
            DrawCommand::FillBox { .. } => None,
        })
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.title.clear();
        self.commands.clear();
    }

    fn fill_box(&mut self, bbox: &BoundingBox, color: Color) {
        self.commands.push(DrawCommand::FillBox { bbox: *bbox, color });
    }

    fn polyline(&mut self, xs: &[f64], ys: &[f64], color: Color) {
        let len = xs.len().min(ys.len());
        self.commands.push(DrawCommand::Polyline {
            xs: xs[..len].to_vec(),
            ys: ys[..len].to_vec(),
            color,
        });
    }

    fn set_limits(&mut self, x: (f64, f64), y: (f64, f64)) {
        self.x_limits = x;
        self.y_limits = y;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn present(&mut self) -> io::Result<()> {
        self.presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_has_both_tanks_and_the_obstacle() {
        let field = Battlefield::default();
        let mut surface = DisplayList::default();
        draw_board(&mut surface, &field, PlayerNum::Two).unwrap();

        assert_eq!(surface.title, "Player 2's turn: ");
        assert_eq!(surface.x_limits, (0.0, 100.0));
        assert_eq!(surface.y_limits, (0.0, 100.0));
        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::FillBox {
                    bbox: *field.tank1(),
                    color: Color::Blue
                },
                DrawCommand::FillBox {
                    bbox: *field.tank2(),
                    color: Color::Red
                },
                DrawCommand::FillBox {
                    bbox: *field.obstacle(),
                    color: Color::Black
                },
            ]
        );
        assert_eq!(surface.presented, 1);
    }

    #[test]
    fn redrawing_the_board_leaves_no_residue() {
        let field = Battlefield::default();
        let mut surface = DisplayList::default();

        draw_board(&mut surface, &field, PlayerNum::One).unwrap();
        let first = surface.clone();

        surface.polyline(&[1.0, 2.0], &[3.0, 4.0], Color::Yellow);
        draw_board(&mut surface, &field, PlayerNum::One).unwrap();
        draw_board(&mut surface, &field, PlayerNum::One).unwrap();

        assert_eq!(surface.commands, first.commands);
        assert_eq!(surface.title, first.title);
        assert_eq!(surface.polylines().count(), 0);
    }

    #[test]
    fn polyline_drops_unpaired_samples() {
        let mut surface = DisplayList::default();
        surface.polyline(&[1.0, 2.0, 3.0], &[1.0, 2.0], Color::Yellow);
        let (xs, ys) = surface.polylines().next().unwrap();
        assert_eq!(xs.len(), 2);
        assert_eq!(ys.len(), 2);
    }
}
