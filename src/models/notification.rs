/// Severidad de una notificación (define el estilo del snackbar)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "snackbar-success",
            Severity::Error => "snackbar-error",
        }
    }
}

/// Mensaje transitorio. `auto_hide_ms = None` ⇒ queda hasta cerrarlo a mano.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub auto_hide_ms: Option<u32>,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, auto_hide_ms: Option<u32>) -> Self {
        Self {
            message: message.into(),
            severity,
            auto_hide_ms,
        }
    }

    pub fn success(message: impl Into<String>, auto_hide_ms: u32) -> Self {
        Self::new(message, Severity::Success, Some(auto_hide_ms))
    }

    pub fn error(message: impl Into<String>, auto_hide_ms: u32) -> Self {
        Self::new(message, Severity::Error, Some(auto_hide_ms))
    }

    /// Error que no se oculta solo (fallos de listado)
    pub fn persistent_error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error, None)
    }
}
