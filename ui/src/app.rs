use std::time::Duration;

use crate::{state::State, widgets};

/// Key under which the native build keeps remembered credentials in eframe's storage.
pub const STORE_KEY: &str = "signin_store";

/// How often to repaint while a sign-in attempt is outstanding.
const PENDING_REPAINT: Duration = Duration::from_millis(100);

pub struct SigninApp {
    state: State,
}

impl SigninApp {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Restores remembered credentials from the previous run.
    pub fn from_storage(storage: Option<&dyn eframe::Storage>) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let store = storage
            .and_then(|storage| eframe::get_value(storage, STORE_KEY))
            .unwrap_or_default();

        // The browser store reads `localStorage` directly
        #[cfg(target_arch = "wasm32")]
        let store = {
            let _ = storage;
            crate::state::AppStore::default()
        };

        Self::new(State::new(signin_business::AuthConfig::default(), store))
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl Default for SigninApp {
    fn default() -> Self {
        Self::new(State::default())
    }
}

impl eframe::App for SigninApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                widgets::login_form(ui, &mut self.state);
            });
        });

        // Results arrive on a channel; keep polling until they are applied
        if self.state.form.has_pending() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        #[cfg(not(target_arch = "wasm32"))]
        eframe::set_value(storage, STORE_KEY, self.state.form.store());

        #[cfg(target_arch = "wasm32")]
        let _ = storage;
    }
}
