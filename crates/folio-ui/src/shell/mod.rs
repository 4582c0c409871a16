use std::time::Instant;

use egui::{Align, Context, Layout, TopBottomPanel};

use folio_core::{FolioContext, ThemePreference};

/// What the shell asked the page body to do this frame
pub enum ShellAction {
    None,
    /// A section link was clicked; scroll to that section
    ScrollToSection(usize),
    /// The theme toggle was clicked
    ThemeToggled(ThemePreference),
}

/// Render the top bar: name, section links with active highlighting, and
/// the theme toggle.
pub fn top_bar(
    ctx: &Context,
    folio: &FolioContext,
    name: &str,
    section_titles: &[&str],
) -> ShellAction {
    let mut action = ShellAction::None;

    TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(name).strong().size(16.0));
            ui.separator();

            if folio.settings.read().show_section_nav {
                let active = folio.sections.read().active();
                for (i, title) in section_titles.iter().enumerate() {
                    if ui.selectable_label(active == i, *title).clicked() {
                        folio.sections.write().activate_by_nav(i, Instant::now());
                        action = ShellAction::ScrollToSection(i);
                    }
                }
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let dark = folio.theme().is_dark();
                let (icon, hint) = if dark {
                    ("☀", "Switch to light mode")
                } else {
                    ("🌙", "Switch to dark mode")
                };
                if ui.button(icon).on_hover_text(hint).clicked() {
                    action = ShellAction::ThemeToggled(folio.toggle_theme());
                }
            });
        });
    });

    action
}
