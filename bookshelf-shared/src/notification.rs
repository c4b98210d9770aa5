//! Transient messages ("toasts") shown after user actions

use core::time::Duration;

use crate::{ApiError, FormError};

/// How long a notification stays on screen unless closed earlier
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub status: Status,
    pub title: String,
    pub description: String,
    pub duration: Duration,
    pub closable: bool,
}
impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            title: "Success".to_string(),
            description: description.into(),
            duration: NOTIFICATION_DURATION,
            closable: true,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            title: "Error".to_string(),
            description: description.into(),
            duration: NOTIFICATION_DURATION,
            closable: true,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }
}
impl From<&ApiError> for Notification {
    fn from(value: &ApiError) -> Self {
        Self::error(value.user_message())
    }
}
impl From<&FormError> for Notification {
    fn from(value: &FormError) -> Self {
        Self::error(value.to_string())
    }
}
