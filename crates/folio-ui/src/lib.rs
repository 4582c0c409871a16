//! User interface components for the Folio résumé viewer
//!
//! This crate provides the egui-based widgets: the carousel, the skills
//! swapper, the application shell, theming, and scroll feedback.

pub mod carousel;
pub mod scroll_feedback;
pub mod shell;
pub mod skills;
pub mod theme;
pub mod widget_utils;

// Re-export commonly used types
pub use carousel::{Carousel, CarouselConfig};
pub use scroll_feedback::BackToTop;
pub use shell::{top_bar, ShellAction};
pub use skills::{SkillsPanel, COACHMARK_STORAGE_KEY};
pub use theme::{apply_theme, Theme};
pub use widget_utils::WidgetId;
