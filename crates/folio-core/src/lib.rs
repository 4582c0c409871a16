//! Core functionality for the Folio résumé viewer
//!
//! This crate provides the interaction state machines: the slide navigator
//! shared by every carousel-like region, gesture classification, scroll
//! feedback state, and the shared viewer preferences.

pub mod navigator;
pub mod scroll;
pub mod sections;
pub mod state;
pub mod theme;
pub mod timing;

// Re-export commonly used types
pub use navigator::{
    Direction, GestureSample, MotionPreference, NavigatorConfig,
    SlideClass, SlideNavigator, WrapMode,
};
pub use scroll::{RevealSet, SmoothScroll};
pub use sections::SectionTracker;
pub use state::{AppSettings, FolioContext};
pub use theme::ThemePreference;
pub use timing::Debouncer;
