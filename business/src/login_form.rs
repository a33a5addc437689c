//! State behind the sign-in form.
//!
//! [`LoginForm`] holds the credentials being edited, the "remember me" flag and
//! the two message slots shown as notifications. Authentication runs as a
//! background task; its completion is sent back over a channel and applied on
//! the UI thread by [`LoginForm::sync`], which the renderer calls every frame.
//!
//! ## Flow
//!
//! 1. [`LoginForm::mount`] reads remembered credentials once. If both are
//!    present it fills the form, ticks "remember me" and signs in without any
//!    user interaction.
//! 2. [`LoginForm::submit`] signs in with the submitted values.
//! 3. On completion, a success fills the success slot and a failure fills the
//!    error slot. Neither clears the other, so both notifications can show at once.
//! 4. Only a successful *submit* updates the store: credentials are saved when
//!    "remember me" was ticked at submit time, and removed otherwise.
//!
//! In-flight attempts are never cancelled. When several complete, each one is
//! applied in completion order, so the last to finish wins.

use flume::{Receiver, Sender};
use log::{error, info};

use crate::auth::{self, AuthError, AuthOrigin, SUCCESS_MESSAGE, authenticate};
use crate::http::HttpError;
use crate::store::{CredentialStore, KeyValueStore, MemoryStore};
use crate::validation::{self, FieldError};
use crate::{AuthConfig, Credentials, SubmittedValues, task};

/// Result of one attempt, sent from the background task to the UI thread.
#[derive(Debug)]
struct AuthCompletion {
    origin: AuthOrigin,
    credentials: Credentials,
    remember: bool,
    result: Result<serde_json::Value, AuthError>,
}

pub struct LoginForm<S: KeyValueStore = MemoryStore> {
    config: AuthConfig,
    store: S,
    credentials: Credentials,
    remember_me: bool,
    success_message: Option<String>,
    error_message: Option<String>,
    mounted: bool,
    /// Attempts started and not yet applied, from either origin.
    in_flight: usize,
    /// Subset of `in_flight` started by the submit button.
    submitting: usize,
    sender: Sender<AuthCompletion>,
    receiver: Receiver<AuthCompletion>,
}

impl<S: KeyValueStore> LoginForm<S> {
    pub fn new(config: AuthConfig, store: S) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            config,
            store,
            credentials: Credentials::default(),
            remember_me: false,
            success_message: None,
            error_message: None,
            mounted: false,
            in_flight: 0,
            submitting: 0,
            sender,
            receiver,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    pub fn password(&self) -> &str {
        &self.credentials.password
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.credentials.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn set_remember_me(&mut self, remember_me: bool) {
        self.remember_me = remember_me;
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Closes the success notification. The error notification cannot be dismissed.
    pub fn dismiss_success(&mut self) {
        self.success_message = None;
    }

    /// True while a submit started by the user is waiting for its response.
    pub fn is_submitting(&self) -> bool {
        self.submitting > 0
    }

    /// True while any attempt, including the automatic one, is outstanding.
    pub fn has_pending(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Password rule with the configured minimum length.
    pub fn validate_password(&self, value: &str) -> Result<(), FieldError> {
        validation::validate_password(value, self.config.min_password_len)
    }

    /// Runs once, when the form is first shown.
    ///
    /// Returns the remembered credentials if an automatic sign-in was started.
    pub fn mount(&mut self) -> Option<Credentials> {
        if self.mounted {
            return None;
        }
        self.mounted = true;

        let stored = self.store.load()?;
        info!("Found remembered credentials for '{}'", stored.username);

        self.credentials = stored.clone();
        self.remember_me = true;
        self.start(AuthOrigin::Mount, stored.clone(), true);

        Some(stored)
    }

    /// Signs in with the submitted values, falling back to the held credentials.
    pub fn submit(&mut self, values: SubmittedValues) {
        let credentials = values.resolve(&self.credentials);
        info!("Submitting sign-in for '{}'", credentials.username);

        self.submitting += 1;
        let remember = self.remember_me;
        self.start(AuthOrigin::Submit, credentials, remember);
    }

    /// Applies every completed attempt. Returns how many were applied.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.receiver.try_recv() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    /// Waits until no attempt is outstanding, applying completions as they arrive.
    pub async fn settle(&mut self) {
        self.sync();
        while self.in_flight > 0 {
            match self.receiver.recv_async().await {
                Ok(completion) => self.apply(completion),
                Err(_) => break,
            }
        }
    }

    fn start(&mut self, origin: AuthOrigin, credentials: Credentials, remember: bool) {
        self.in_flight += 1;

        let url = self.config.auth_url();
        let sender = self.sender.clone();
        let task_credentials = credentials.clone();

        let spawned = task::spawn(async move {
            let result = authenticate(url.as_str(), &task_credentials).await;
            let _ = sender.send(AuthCompletion {
                origin,
                credentials: task_credentials,
                remember,
                result,
            });
        });

        if let Err(err) = spawned {
            error!("Could not start sign-in attempt: {err}");
            let _ = self.sender.send(AuthCompletion {
                origin,
                credentials,
                remember,
                result: Err(AuthError::Request(HttpError::new(err.to_string()))),
            });
        }
    }

    fn apply(&mut self, completion: AuthCompletion) {
        let AuthCompletion {
            origin,
            credentials,
            remember,
            result,
        } = completion;

        self.in_flight = self.in_flight.saturating_sub(1);
        if origin == AuthOrigin::Submit {
            self.submitting = self.submitting.saturating_sub(1);
        }

        auth::log_outcome(origin, &result);

        match result {
            Ok(_) => {
                self.success_message = Some(SUCCESS_MESSAGE.to_string());

                if origin == AuthOrigin::Submit {
                    if remember {
                        self.store.save(&credentials);
                    } else {
                        self.store.clear();
                    }
                }
            }
            Err(err) => {
                self.error_message = Some(err.user_message().to_string());
            }
        }
    }
}

impl Default for LoginForm<MemoryStore> {
    fn default() -> Self {
        Self::new(AuthConfig::default(), MemoryStore::default())
    }
}
