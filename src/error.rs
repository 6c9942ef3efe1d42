// src/error.rs

use thiserror::Error;

use crate::map::GridCoord;

/// Everything that can go wrong while building or draining a level.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid level template: {0}")]
    InvalidTemplate(String),

    #[error("unknown tile kind `{0}`")]
    UnknownTileKind(String),

    #[error("unknown item kind `{0}`")]
    UnknownItemKind(String),

    /// Item placement asked for more chests than there are free occupiable tiles.
    #[error("{requested} items requested but only {available} unoccupied tiles left")]
    OutOfCapacity { requested: usize, available: usize },

    #[error("expected a placed tile at {0}")]
    MissingTile(GridCoord),

    #[error("no active player to receive starting items")]
    NoActivePlayer,

    #[error("inventory is full (capacity {capacity})")]
    InventoryFull { capacity: usize },

    #[error("failed to read level template: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse level template: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GenerationError>;

/// A queued task that failed while the queue was being drained.
///
/// The task has already been removed from the queue; whatever it was going
/// to place is left unplaced.
#[derive(Debug, Error)]
#[error("generation task `{task}` failed: {source}")]
pub struct TaskError {
    pub task: String,
    #[source]
    pub source: GenerationError,
}
