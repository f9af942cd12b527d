use std::fmt;

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::geometry::BoundingBox;

use super::gamestate::Battlefield;

/// One of the two players, serialized as `1` or `2`
#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PlayerNum {
    One = 1,
    Two = 2,
}

impl PlayerNum {
    /// The player who acts after this one misses
    pub fn other(self) -> Self {
        match self {
            PlayerNum::One => PlayerNum::Two,
            PlayerNum::Two => PlayerNum::One,
        }
    }

    /// Box of the tank this player controls
    pub fn own_tank(self, field: &Battlefield) -> &BoundingBox {
        match self {
            PlayerNum::One => field.tank1(),
            PlayerNum::Two => field.tank2(),
        }
    }

    /// Box this player is aiming at
    pub fn target_tank(self, field: &Battlefield) -> &BoundingBox {
        self.other().own_tank(field)
    }
}

impl fmt::Display for PlayerNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
