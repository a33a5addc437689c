//! Integration tests for the sign-in form widget.
//!
//! The form is rendered with `egui_kittest` and posts to a `wiremock` server.

use egui::Key;
use egui::accesskit::Role;
use egui_kittest::Harness;
use kittest::Queryable;
use signin_business::{
    CredentialStore, Credentials, FAILURE_MESSAGE, MemoryStore, SUCCESS_MESSAGE,
};
use signin_ui::state::State;
use signin_ui::widgets::fields::{DEFAULT_PASSWORD, DEFAULT_USERNAME};
use signin_ui::widgets::login_form::{
    PASSWORD_ERROR, PASSWORD_HELPER, PASSWORD_VALID, USERNAME_ERROR, USERNAME_HELPER,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestCtx, setup_mock_server};

mod common;

/// Typed after the prefilled password, making it long enough to pass validation.
const PASSWORD_SUFFIX: &str = "-extra1";

fn valid_password() -> String {
    format!("{DEFAULT_PASSWORD}{PASSWORD_SUFFIX}")
}

fn click_sign_in(harness: &mut Harness<'_, State>) {
    harness.get_by_role_and_label(Role::Button, "Sign in").click();
    harness.step();
}

/// Focuses the input labelled `label` and types `text` at the end of its value.
fn type_into(harness: &mut Harness<'_, State>, role: Role, label: &str, text: &str) {
    harness.get_by_role_and_label(role, label).focus();
    harness.step();
    harness.get_by_role_and_label(role, label).type_text(text);
    harness.step();
}

fn use_valid_password(harness: &mut Harness<'_, State>) {
    type_into(harness, Role::PasswordInput, "Password", PASSWORD_SUFFIX);
}

#[tokio::test]
async fn test_form_displayed() {
    let mut ctx = TestCtx::with_status(200).await;

    let harness = ctx.harness_mut();
    harness.step();

    assert!(
        harness.query_by_label("* indicates a required field").is_some(),
        "Required-field note should be displayed"
    );
    assert!(
        harness
            .query_by_role_and_label(Role::Label, "Username")
            .is_some(),
        "Username label should be displayed"
    );
    assert!(
        harness
            .query_by_role_and_label(Role::Label, "Password")
            .is_some(),
        "Password label should be displayed"
    );
    assert!(
        harness.query_by_label("Remember me").is_some(),
        "Remember me label should be displayed"
    );
    assert!(
        harness
            .query_by_label("Always sign in on this device")
            .is_some(),
        "Remember me checkbox should be displayed"
    );
    assert!(
        harness
            .query_by_role_and_label(Role::Button, "Sign in")
            .is_some(),
        "Sign in button should be displayed"
    );
    assert!(
        harness.query_by_label("Cancel").is_some(),
        "Cancel button should be displayed"
    );
    assert!(
        harness.query_by_label(USERNAME_HELPER).is_some(),
        "Username helper should be displayed while the field is valid"
    );
    assert!(
        harness.query_by_label(PASSWORD_ERROR).is_none(),
        "Untouched password should not report an error"
    );
}

#[tokio::test]
async fn test_defaults_are_prefilled() {
    let mut ctx = TestCtx::with_status(200).await;

    let harness = ctx.harness_mut();
    harness.step();

    let state = harness.state();
    assert_eq!(state.fields.username.value, DEFAULT_USERNAME);
    assert_eq!(state.fields.password.value, DEFAULT_PASSWORD);
    assert!(!state.form.remember_me());
}

#[tokio::test]
async fn test_successful_sign_in_shows_success_flag() {
    let mut ctx = TestCtx::with_status(200).await;

    {
        let harness = ctx.harness_mut();
        harness.step();
        use_valid_password(harness);
        harness.step();

        click_sign_in(harness);
        assert!(
            harness.state().form.is_submitting(),
            "Submit should be pending until the response arrives"
        );
    }

    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        harness.query_by_label("Success").is_some(),
        "Success flag should be displayed"
    );
    assert!(
        harness.query_by_label(SUCCESS_MESSAGE).is_some(),
        "Success message should be displayed"
    );
    assert!(
        harness.query_by_label(FAILURE_MESSAGE).is_none(),
        "Error flag should not be displayed"
    );
    assert!(!harness.state().form.is_submitting());
}

#[tokio::test]
async fn test_rejected_sign_in_shows_error_flag_without_dismiss() {
    let mut ctx = TestCtx::with_status(400).await;

    {
        let harness = ctx.harness_mut();
        harness.step();
        use_valid_password(harness);
        harness.step();
        click_sign_in(harness);
    }

    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(
        harness.query_by_label("Error").is_some(),
        "Error flag should be displayed"
    );
    assert!(
        harness.query_by_label(FAILURE_MESSAGE).is_some(),
        "Failure message should be displayed"
    );
    assert!(
        harness.query_by_label("Dismiss").is_none(),
        "Error flag cannot be dismissed"
    );
    assert_eq!(harness.state().form.success_message(), None);
}

#[tokio::test]
async fn test_dismiss_clears_success_flag() {
    let mut ctx = TestCtx::with_status(200).await;

    {
        let harness = ctx.harness_mut();
        harness.step();
        use_valid_password(harness);
        harness.step();
        click_sign_in(harness);
    }

    ctx.settle().await;

    let harness = ctx.harness_mut();
    harness.get_by_label("Dismiss").click();
    harness.step();
    harness.step();

    assert_eq!(harness.state().form.success_message(), None);
    assert!(
        harness.query_by_label(SUCCESS_MESSAGE).is_none(),
        "Success flag should be gone after dismissal"
    );
}

#[tokio::test]
async fn test_short_password_blocks_submit() {
    let mock_server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;
    let mut ctx = TestCtx::with_server(mock_server, MemoryStore::new());

    let harness = ctx.harness_mut();
    harness.step();
    harness.get_by_role_and_label(Role::PasswordInput, "Password").focus();
    harness.step();
    harness.key_press(Key::Backspace);
    harness.step();

    assert!(harness.state().fields.password.dirty);
    assert_eq!(harness.state().form.password(), &DEFAULT_PASSWORD[..6]);

    assert!(
        harness.query_by_label(PASSWORD_HELPER).is_some(),
        "Password helper should be displayed on error"
    );
    assert!(
        harness.query_by_label(PASSWORD_ERROR).is_some(),
        "Password error should be displayed"
    );

    click_sign_in(harness);

    assert!(
        !harness.state().form.has_pending(),
        "Invalid form must not be submitted"
    );
    ctx.mock_server().verify().await;
}

#[tokio::test]
async fn test_submit_reports_untouched_errors() {
    let mut ctx = TestCtx::with_status(200).await;

    let harness = ctx.harness_mut();
    harness.step();
    harness.state_mut().fields.username.value.clear();
    harness.step();

    click_sign_in(harness);
    harness.step();

    assert!(harness.state().fields.submit_attempted);
    assert!(
        harness.query_by_label(USERNAME_ERROR).is_some(),
        "Empty username should report its error after submit"
    );
    assert!(
        harness.query_by_label(PASSWORD_ERROR).is_some(),
        "Default 7-character password should report TOO_SHORT after submit"
    );
    assert!(!harness.state().form.has_pending());
}

#[tokio::test]
async fn test_valid_password_is_confirmed() {
    let mut ctx = TestCtx::with_status(200).await;

    let harness = ctx.harness_mut();
    harness.step();
    use_valid_password(harness);
    harness.step();

    assert!(
        harness.query_by_label(PASSWORD_VALID).is_some(),
        "Edited valid password should be confirmed"
    );
    assert!(harness.query_by_label(PASSWORD_ERROR).is_none());
}

#[tokio::test]
async fn test_typing_updates_fields_and_enter_submits() {
    let mock_server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "username": format!("{DEFAULT_USERNAME}.dev"),
            "password": valid_password()
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;
    let mut ctx = TestCtx::with_server(mock_server, MemoryStore::new());

    {
        let harness = ctx.harness_mut();
        harness.step();

        type_into(harness, Role::TextInput, "Username", ".dev");
        type_into(harness, Role::PasswordInput, "Password", PASSWORD_SUFFIX);

        let state = harness.state();
        assert!(state.fields.username.dirty, "Typing should mark username edited");
        assert!(state.fields.password.dirty, "Typing should mark password edited");
        assert_eq!(state.form.username(), format!("{DEFAULT_USERNAME}.dev"));
        assert_eq!(state.form.password(), valid_password());
        assert!(
            harness.query_by_label(PASSWORD_VALID).is_some(),
            "Typed valid password should be confirmed"
        );

        harness.key_press(Key::Enter);
        harness.step();
        assert!(
            harness.state().form.is_submitting(),
            "Enter in the password field should submit"
        );
    }

    ctx.settle().await;

    assert!(
        ctx.harness().query_by_label(SUCCESS_MESSAGE).is_some(),
        "Success flag should be displayed"
    );
    ctx.mock_server().verify().await;
}

#[tokio::test]
async fn test_remember_me_persists_credentials_after_success() {
    let mut ctx = TestCtx::with_status(200).await;

    {
        let harness = ctx.harness_mut();
        harness.step();
        harness.get_by_label("Always sign in on this device").click();
        harness.step();
        assert!(
            harness.state().form.remember_me(),
            "Checkbox should tick remember me"
        );

        use_valid_password(harness);
        harness.step();
        click_sign_in(harness);
    }

    ctx.settle().await;

    assert_eq!(
        ctx.harness().state().form.store().load(),
        Some(Credentials::new(DEFAULT_USERNAME, valid_password()))
    );
}

#[tokio::test]
async fn test_unticking_remember_me_forgets_credentials_after_success() {
    let remembered = Credentials::new("someone", "else-secret");
    let mut ctx =
        TestCtx::with_status_and_store(200, MemoryStore::with_credentials(&remembered)).await;

    // First frame signs in automatically; that attempt leaves the store alone
    ctx.harness_mut().step();
    ctx.settle().await;
    assert_eq!(ctx.harness().state().form.store().load(), Some(remembered));

    {
        let harness = ctx.harness_mut();
        harness.get_by_label("Always sign in on this device").click();
        harness.step();
        assert!(
            !harness.state().form.remember_me(),
            "Checkbox should untick remember me"
        );
        click_sign_in(harness);
    }

    ctx.settle().await;

    assert_eq!(ctx.harness().state().form.store().load(), None);
    assert!(ctx.harness().state().form.store().is_empty());
}

#[tokio::test]
async fn test_remembered_credentials_sign_in_on_mount() {
    let mock_server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "username": "remembered",
            "password": "remembered-secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let remembered = Credentials::new("remembered", "remembered-secret");
    let mut ctx = TestCtx::with_server(mock_server, MemoryStore::with_credentials(&remembered));

    {
        let harness = ctx.harness_mut();
        harness.step();

        let state = harness.state();
        assert_eq!(state.fields.username.value, "remembered");
        assert_eq!(state.fields.password.value, "remembered-secret");
        assert!(state.form.remember_me(), "Remember me should be ticked");
        assert!(state.form.has_pending(), "Automatic sign-in should start");
        assert!(!state.form.is_submitting());
    }

    ctx.settle().await;
    // Further frames must not sign in again
    ctx.harness_mut().step();

    assert!(
        ctx.harness().query_by_label(SUCCESS_MESSAGE).is_some(),
        "Automatic sign-in should show the success flag"
    );
    ctx.mock_server().verify().await;
}
