use std::{fmt, io};

#[derive(Debug)]
pub enum GameError {
    /// The console ran out of input while a number was being asked for
    InputClosed,
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputClosed => write!(f, "console input closed before a number was entered"),
            Self::Io(err) => write!(f, "console or display failure: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputClosed => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
