//! The (optional) credential of the current user

/// The key under which the credential lives in the browsers local storage
pub const CREDENTIAL_STORAGE_KEY: &str = "token";

/// Who is using the app.
///
/// Only the presence of a credential is checked here, the backend decides whether it is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}
impl Session {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// Empty credentials count as no credential
    pub fn from_credential(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Gates every control that changes data
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value for the `Authorization` header, if we have a credential
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}
