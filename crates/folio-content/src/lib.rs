//! Résumé document model and loader for the Folio viewer

pub mod loader;
pub mod model;

use thiserror::Error;

// Re-exports
pub use loader::{load_from_path, load_from_str};
pub use model::{
    Certification, EducationEntry, ExperienceEntry, Link, Profile, Resume,
    Skill, SkillGroup,
};

/// Errors that can occur while loading a résumé document
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("document has no profile name")]
    Empty,
}
