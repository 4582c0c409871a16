//! Shared application state

use std::sync::Arc;
use parking_lot::RwLock;

use crate::navigator::MotionPreference;
use crate::sections::SectionTracker;
use crate::scroll::RevealSet;
use crate::theme::ThemePreference;

/// Application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub theme: ThemePreference,
    pub motion: MotionPreference,
    pub show_section_nav: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Light,
            motion: MotionPreference::Animated,
            show_section_nav: true,
        }
    }
}

/// Context shared between the shell and the page body
#[derive(Clone)]
pub struct FolioContext {
    /// Application settings
    pub settings: Arc<RwLock<AppSettings>>,

    /// Active-section tracking for nav highlighting
    pub sections: Arc<RwLock<SectionTracker>>,

    /// Reveal-on-scroll latches, one per section
    pub reveal: Arc<RwLock<RevealSet>>,
}

impl FolioContext {
    pub fn new(settings: AppSettings, section_count: usize) -> Self {
        let mut reveal = RevealSet::new(section_count);
        if settings.motion == MotionPreference::Instant {
            reveal.reveal_all();
        }
        Self {
            settings: Arc::new(RwLock::new(settings)),
            sections: Arc::new(RwLock::new(SectionTracker::new(section_count))),
            reveal: Arc::new(RwLock::new(reveal)),
        }
    }

    pub fn theme(&self) -> ThemePreference {
        self.settings.read().theme
    }

    pub fn toggle_theme(&self) -> ThemePreference {
        let mut settings = self.settings.write();
        settings.theme = settings.theme.toggled();
        settings.theme
    }
}
