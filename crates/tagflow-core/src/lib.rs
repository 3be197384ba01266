// crates/tagflow-core/src/lib.rs
pub mod config;
pub mod geometry;
pub mod item;
pub mod items;
pub mod scene;

pub use config::*;
pub use geometry::*;
pub use item::*;
pub use items::*;
pub use scene::*;

#[derive(Debug, thiserror::Error)]
pub enum TagflowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene file: {0}")]
    SceneParse(#[from] serde_json::Error),

    #[error("Invalid item {index}: {reason}")]
    InvalidItem { index: usize, reason: String },

    #[error("Unknown alignment: {0}")]
    InvalidAlignment(String),

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
}

pub type Result<T> = std::result::Result<T, TagflowError>;
