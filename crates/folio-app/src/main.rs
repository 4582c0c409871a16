//! Main application entry point

use std::time::Instant;

use anyhow::Result;
use eframe::egui::{self, Context};
use tracing::info;

use folio_content::{Certification, EducationEntry, ExperienceEntry, Profile, Resume};
use folio_core::navigator::NavigatorConfig;
use folio_core::scroll;
use folio_core::theme::THEME_STORAGE_KEY;
use folio_core::{AppSettings, FolioContext, ThemePreference};
use folio_ui::carousel::{Carousel, CarouselConfig};
use folio_ui::{
    apply_theme, scroll_feedback, top_bar, BackToTop, ShellAction, SkillsPanel, Theme,
    COACHMARK_STORAGE_KEY,
};

mod sample;

const SECTION_TITLES: [&str; 5] = [
    "About",
    "Skills",
    "Experience",
    "Certifications",
    "Education",
];

/// Main application state
struct FolioApp {
    /// Context shared with the shell
    folio: FolioContext,

    /// The document being displayed
    resume: Resume,

    /// Experience card carousel (wrapping)
    experience: Carousel,

    /// Certification card carousel (wrapping)
    certifications: Carousel,

    /// Skills swapper panel (clamped)
    skills: SkillsPanel,

    /// Back-to-top button and smooth-scroll driver
    back_to_top: BackToTop,

    /// Scroll geometry from the previous frame
    scroll_offset: f32,
    content_height: f32,

    /// Content-space y of each section, for nav link scrolling
    section_tops: Vec<f32>,

    /// Scroll offset to apply on the next frame
    pending_scroll: Option<f32>,
}

impl FolioApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Theme and coachmark state survive sessions through the opaque
        // key-value store
        let stored = cc.storage.and_then(|s| s.get_string(THEME_STORAGE_KEY));
        let theme = ThemePreference::from_stored(stored.as_deref());
        let coachmark_seen = cc
            .storage
            .and_then(|s| s.get_string(COACHMARK_STORAGE_KEY))
            .as_deref()
            == Some("1");

        let settings = AppSettings {
            theme,
            ..Default::default()
        };
        let motion = settings.motion;
        apply_theme(&cc.egui_ctx, &Theme::from_preference(theme));

        let resume = sample::sample_resume();
        info!(name = %resume.profile.name, "loaded portfolio document");

        let experience = Carousel::new(
            "experience_cards",
            resume.experience.len(),
            resume.initial_experience_index(),
            NavigatorConfig::carousel().with_motion(motion),
            CarouselConfig::default(),
        );
        let certifications = Carousel::new(
            "certification_cards",
            resume.certifications.len(),
            0,
            NavigatorConfig::carousel().with_motion(motion),
            CarouselConfig {
                min_height: 120.0,
                ..Default::default()
            },
        );

        Self {
            folio: FolioContext::new(settings, SECTION_TITLES.len()),
            resume,
            experience,
            certifications,
            skills: SkillsPanel::new(motion, coachmark_seen),
            back_to_top: BackToTop::new(motion),
            scroll_offset: 0.0,
            content_height: 0.0,
            section_tops: vec![0.0; SECTION_TITLES.len()],
            pending_scroll: None,
        }
    }

    fn page_body(&mut self, ui: &mut egui::Ui, now: Instant) {
        let current_offset = self.scroll_offset;
        let viewport = ui.clip_rect();
        // Sections reveal a little before they reach the bottom edge
        let reveal_bottom = viewport.max.y - viewport.height() * 0.10;
        let middle = viewport.center().y;

        let section_count = SECTION_TITLES.len();
        let mut ratios = vec![0.0f32; section_count];
        let mut distances = vec![f32::INFINITY; section_count];
        let mut tops = vec![0.0f32; section_count];

        let revealed: Vec<bool> = {
            let reveal = self.folio.reveal.read();
            (0..section_count).map(|i| reveal.is_revealed(i)).collect()
        };

        let Self {
            folio,
            resume,
            experience,
            certifications,
            skills,
            section_tops,
            ..
        } = self;

        let mut record = |i: usize, rect: egui::Rect| {
            let visible = (rect.max.y.min(reveal_bottom) - rect.min.y.max(viewport.min.y)).max(0.0);
            ratios[i] = if rect.height() > 0.0 {
                visible / rect.height()
            } else {
                0.0
            };
            distances[i] = (rect.min.y - middle).abs();
            tops[i] = current_offset + (rect.min.y - viewport.min.y);
        };

        // About
        let rect = ui
            .scope(|ui| {
                section_heading(ui, SECTION_TITLES[0]);
                if revealed[0] {
                    about_body(ui, &resume.profile, resume);
                } else {
                    ui.add_space(120.0);
                }
            })
            .response
            .rect;
        record(0, rect);
        ui.add_space(28.0);

        // Skills
        let rect = ui
            .scope(|ui| {
                section_heading(ui, SECTION_TITLES[1]);
                if revealed[1] {
                    skills.ui(ui, &resume.skills, true);
                } else {
                    ui.add_space(140.0);
                }
            })
            .response
            .rect;
        record(1, rect);
        ui.add_space(28.0);

        // Experience
        let rect = ui
            .scope(|ui| {
                section_heading(ui, SECTION_TITLES[2]);
                if revealed[2] {
                    experience.ui(ui, |ui, i| experience_card(ui, &resume.experience[i]));
                } else {
                    ui.add_space(200.0);
                }
            })
            .response
            .rect;
        record(2, rect);
        ui.add_space(28.0);

        // Certifications
        let rect = ui
            .scope(|ui| {
                section_heading(ui, SECTION_TITLES[3]);
                if revealed[3] {
                    certifications
                        .ui(ui, |ui, i| certification_card(ui, &resume.certifications[i]));
                } else {
                    ui.add_space(120.0);
                }
            })
            .response
            .rect;
        record(3, rect);
        ui.add_space(28.0);

        // Education
        let rect = ui
            .scope(|ui| {
                section_heading(ui, SECTION_TITLES[4]);
                if revealed[4] {
                    for entry in &resume.education {
                        education_row(ui, entry);
                    }
                } else {
                    ui.add_space(80.0);
                }
            })
            .response
            .rect;
        record(4, rect);
        ui.add_space(48.0);

        drop(record);
        *section_tops = tops;

        {
            let mut tracker = folio.sections.write();
            for (i, ratio) in ratios.iter().enumerate() {
                tracker.set_ratio(i, *ratio);
            }
            if ratios.iter().any(|r| *r > 0.0) {
                tracker.update(now);
            } else {
                tracker.update_from_distances(now, &distances);
            }
        }
        {
            let mut reveal = folio.reveal.write();
            for (i, ratio) in ratios.iter().enumerate() {
                reveal.observe(i, *ratio);
            }
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        let action = top_bar(ctx, &self.folio, &self.resume.profile.name, &SECTION_TITLES);

        let viewport_height = ctx.screen_rect().height();
        scroll_feedback::progress_bar(
            ctx,
            scroll::progress(self.scroll_offset, self.content_height, viewport_height),
        );

        if let Some(offset) = self.back_to_top.ui(ctx, self.scroll_offset, now) {
            self.pending_scroll = Some(offset.max(0.0));
        }

        match action {
            ShellAction::ScrollToSection(i) => {
                if let Some(&top) = self.section_tops.get(i) {
                    let target = (top - 8.0).max(0.0);
                    self.back_to_top.scroll_to(self.scroll_offset, target, now);
                    ctx.request_repaint();
                }
            }
            ShellAction::ThemeToggled(pref) => {
                apply_theme(ctx, &Theme::from_preference(pref));
            }
            ShellAction::None => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut area = egui::ScrollArea::vertical();
            if let Some(target) = self.pending_scroll.take() {
                area = area.vertical_scroll_offset(target);
            }
            let output = area.show(ui, |ui| {
                self.page_body(ui, now);
            });
            self.scroll_offset = output.state.offset.y;
            self.content_height = output.content_size.y;
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(THEME_STORAGE_KEY, self.folio.theme().as_str().to_string());
        if self.skills.coachmark_seen() {
            storage.set_string(COACHMARK_STORAGE_KEY, "1".to_string());
        }
    }
}

fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.heading(title);
    ui.add_space(6.0);
}

fn about_body(ui: &mut egui::Ui, profile: &Profile, resume: &Resume) {
    ui.label(egui::RichText::new(&profile.title).strong());
    if !profile.summary.is_empty() {
        ui.label(&profile.summary);
    }
    ui.horizontal_wrapped(|ui| {
        if !profile.location.is_empty() {
            ui.label(egui::RichText::new(&profile.location).weak());
        }
        if !profile.email.is_empty() {
            ui.label(egui::RichText::new(&profile.email).weak());
        }
        for link in &resume.links {
            ui.hyperlink_to(&link.label, &link.url);
        }
    });
}

fn experience_card(ui: &mut egui::Ui, entry: &ExperienceEntry) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new(&entry.title).strong().size(16.0));
        ui.label(egui::RichText::new(format!("{} · {}", entry.company, entry.period)).weak());
        if !entry.summary.is_empty() {
            ui.add_space(4.0);
            ui.label(&entry.summary);
        }
        for highlight in &entry.highlights {
            ui.label(format!("• {highlight}"));
        }
    });
}

fn certification_card(ui: &mut egui::Ui, cert: &Certification) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(egui::RichText::new(&cert.name).strong());
        let line = if cert.year.is_empty() {
            cert.issuer.clone()
        } else {
            format!("{} · {}", cert.issuer, cert.year)
        };
        ui.label(egui::RichText::new(line).weak());
    });
}

fn education_row(ui: &mut egui::Ui, entry: &EducationEntry) {
    ui.label(egui::RichText::new(&entry.school).strong());
    let line = if entry.period.is_empty() {
        entry.degree.clone()
    } else {
        format!("{} · {}", entry.degree, entry.period)
    };
    ui.label(egui::RichText::new(line).weak());
    ui.add_space(6.0);
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Folio");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(|cc| Box::new(FolioApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
