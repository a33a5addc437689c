//! UI-independent logic of the sign-in form: credential state, persistence of
//! remembered credentials, field validation and the call to the sign-in endpoint.

mod config;
mod credentials;
mod login_form;
mod task;

pub mod auth;
pub mod http;
pub mod store;
pub mod validation;

pub use auth::{AuthError, AuthOrigin, FAILURE_MESSAGE, SUCCESS_MESSAGE, authenticate};
pub use config::{AuthConfig, DEFAULT_AUTH_URL, DEFAULT_MIN_PASSWORD_LEN};
pub use credentials::{Credentials, SubmittedValues};
pub use login_form::LoginForm;
pub use store::{CredentialStore, KeyValueStore, MemoryStore, PASSWORD_KEY, USERNAME_KEY};
pub use validation::{FieldError, validate_password, validate_required};
