//! Success and error notifications shown beneath the sign-in form.

use egui::{Color32, Frame, Margin, RichText, Ui};
use signin_business::{KeyValueStore, LoginForm};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Renders the success flag (dismissible) and the error flag (not dismissible).
pub fn flags<S: KeyValueStore>(ui: &mut Ui, form: &mut LoginForm<S>) {
    let mut dismissed = false;

    if let Some(message) = form.success_message() {
        ui.add_space(12.0);
        dismissed = flag(ui, COLOR_GREEN, "✓", "Success", message, true);
    }

    if let Some(message) = form.error_message() {
        ui.add_space(12.0);
        flag(ui, COLOR_RED, "!", "Error", message, false);
    }

    if dismissed {
        form.dismiss_success();
    }
}

/// Returns `true` when the dismiss button was clicked.
fn flag(
    ui: &mut Ui,
    fill: Color32,
    icon: &str,
    title: &str,
    description: &str,
    dismissible: bool,
) -> bool {
    let mut dismissed = false;

    Frame::NONE
        .fill(fill)
        .inner_margin(Margin::symmetric(12, 8))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon).strong().color(Color32::WHITE));
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).strong().color(Color32::WHITE));
                    ui.label(RichText::new(description).color(Color32::WHITE));
                });

                if dismissible && ui.small_button("Dismiss").clicked() {
                    dismissed = true;
                }
            });
        });

    dismissed
}
