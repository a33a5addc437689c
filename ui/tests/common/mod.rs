use std::time::Duration;

use egui_kittest::Harness;
use signin_business::MemoryStore;
use signin_ui::state::State;
use signin_ui::widgets::login_form;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Upper bound for a sign-in attempt against the local mock server.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Sign-in form over an empty store, posting to a mock that answers `status`.
    pub async fn with_status(status: u16) -> Self {
        Self::with_status_and_store(status, MemoryStore::new()).await
    }

    pub async fn with_status_and_store(status: u16, store: MemoryStore) -> Self {
        let mock_server = setup_mock_server().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
                "token": "test-token"
            })))
            .mount(&mock_server)
            .await;

        Self::with_server(mock_server, store)
    }

    /// Sign-in form over `store`, posting to an already configured mock server.
    pub fn with_server(mock_server: MockServer, store: MemoryStore) -> Self {
        let state = State::test(&mock_server.uri(), store);
        let harness = Harness::new_ui_state(
            |ui, state| {
                login_form(ui, state);
            },
            state,
        );

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, State> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Waits for outstanding sign-in attempts and renders their outcome.
    pub async fn settle(&mut self) {
        tokio::time::timeout(SETTLE_TIMEOUT, self.harness.state_mut().form.settle())
            .await
            .expect("sign-in attempt should complete");
        self.harness.step();
    }
}

pub async fn setup_mock_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}
