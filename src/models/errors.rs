use std::fmt;

/// Game-specific error types
#[derive(Debug)]
pub enum GameError {
    /// A level number outside the supported range (levels start at 1)
    InvalidLevel(u32),
    /// Level generation failed to converge within its retry bound
    GenerationExhausted { stage: GenerationStage },
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Which placement loop ran out of retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Obstacles,
    Zombies,
}

impl GenerationStage {
    pub fn name(&self) -> &'static str {
        match self {
            GenerationStage::Obstacles => "obstacle placement",
            GenerationStage::Zombies => "zombie placement",
        }
    }
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::InvalidLevel(level) => {
                write!(f, "Invalid level {}: levels start at 1", level)
            }
            GameError::GenerationExhausted { stage } => {
                write!(f, "Level generation gave up during {}", stage.name())
            }
            GameError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::IoError(err)
    }
}
