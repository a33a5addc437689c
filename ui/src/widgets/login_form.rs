//! Sign-in form widget.
//!
//! Renders the username and password inputs with their inline validation
//! messages, the "remember me" checkbox and the submit/cancel buttons, followed
//! by the notifications. Pending sign-in results are applied at the start of
//! every frame, and the first frame triggers the automatic sign-in with
//! remembered credentials.

use egui::{Button, Color32, Key, Response, RichText, TextEdit, Ui};
use log::{debug, info};
use signin_business::{KeyValueStore, LoginForm};

use crate::state::State;
use crate::utils::colors::{COLOR_BLUE, COLOR_GREEN, COLOR_RED};
use crate::widgets::fields::FormFields;
use crate::widgets::flags;

/// Widest the form grows.
pub const FORM_WIDTH: f32 = 400.0;

pub const USERNAME_HELPER: &str = "You can use letters, numbers and periods.";
pub const USERNAME_ERROR: &str = "This username is already in use, try another one.";
pub const PASSWORD_HELPER: &str =
    "Use 8 or more characters with a mix of letters, numbers and symbols.";
pub const PASSWORD_ERROR: &str = "Password needs to be more than 7 characters.";
pub const PASSWORD_VALID: &str = "Awesome password!";

/// Displays the sign-in form and its notifications.
pub fn login_form(ui: &mut Ui, state: &mut State) -> Response {
    let State { form, fields } = state;

    form.sync();
    if !form.is_mounted()
        && let Some(remembered) = form.mount()
    {
        fields.fill(&remembered);
    }

    let min_password_len = form.config().min_password_len;
    let mut should_submit = false;

    let response = ui
        .vertical(|ui| {
            ui.set_max_width(FORM_WIDTH);

            ui.heading("Sign in");
            ui.label(RichText::new("* indicates a required field").small().weak());
            ui.add_space(16.0);

            username_field(ui, form, fields);
            ui.add_space(8.0);

            if password_field(ui, form, fields, min_password_len) {
                should_submit = true;
            }
            ui.add_space(8.0);

            ui.label("Remember me");
            let mut remember_me = form.remember_me();
            if ui
                .checkbox(&mut remember_me, "Always sign in on this device")
                .changed()
            {
                form.set_remember_me(remember_me);
            }

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.add(Button::new("Cancel").frame(false)).clicked() {
                    debug!("Sign-in form: cancel pressed");
                }

                let is_submitting = form.is_submitting();
                let sign_in = Button::new(RichText::new("Sign in").color(Color32::WHITE))
                    .fill(COLOR_BLUE);
                if ui.add_enabled(!is_submitting, sign_in).clicked() {
                    should_submit = true;
                }
                if is_submitting {
                    ui.spinner();
                }
            });

            flags::flags(ui, form);
        })
        .response;

    if should_submit && !form.is_submitting() {
        match fields.try_submit(min_password_len) {
            Some(values) => form.submit(values),
            None => info!("Sign-in form: submit blocked by field validation"),
        }
    }

    response
}

/// Returns the label's response so the input can be labelled by it.
fn required_label(ui: &mut Ui, text: &str) -> Response {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        let label = ui.label(text);
        ui.label(RichText::new("*").color(COLOR_RED));
        label
    })
    .inner
}

fn helper_message(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).small().weak());
}

fn error_message(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).small().color(COLOR_RED));
}

fn valid_message(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).small().color(COLOR_GREEN));
}

fn username_field<S: KeyValueStore>(ui: &mut Ui, form: &mut LoginForm<S>, fields: &mut FormFields) {
    let label = required_label(ui, "Username");

    let input = ui
        .add(
            TextEdit::singleline(&mut fields.username.value)
                .id_salt("username")
                .desired_width(f32::INFINITY),
        )
        .labelled_by(label.id);
    if input.changed() {
        fields.username.dirty = true;
        form.set_username(fields.username.value.clone());
    }

    // The only error the field can report is a missing value
    if fields.username_error().is_some() {
        error_message(ui, USERNAME_ERROR);
    } else {
        helper_message(ui, USERNAME_HELPER);
    }
}

/// Returns `true` when Enter was pressed in the input.
fn password_field<S: KeyValueStore>(
    ui: &mut Ui,
    form: &mut LoginForm<S>,
    fields: &mut FormFields,
    min_password_len: usize,
) -> bool {
    let label = required_label(ui, "Password");

    let input = ui
        .add(
            TextEdit::singleline(&mut fields.password.value)
                .id_salt("password")
                .password(true)
                .desired_width(f32::INFINITY),
        )
        .labelled_by(label.id);
    if input.changed() {
        fields.password.dirty = true;
        form.set_password(fields.password.value.clone());
    }

    if fields.password_error(min_password_len).is_some() {
        helper_message(ui, PASSWORD_HELPER);
        error_message(ui, PASSWORD_ERROR);
    } else if fields.password_confirmed(min_password_len) {
        valid_message(ui, PASSWORD_VALID);
    }

    input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}
