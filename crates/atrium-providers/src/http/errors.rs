//! Error reporting and rendering
//!
//! Status codes are chosen from the innermost error, so a handler failure
//! wrapped in `CommandFailed` renders the same as the bare failure.

use atrium_domain::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};

/// Rendered error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: serde_json::Value,
}

/// Resolves errors raised while serving a request
pub trait ErrorsHandlerContract: Send + Sync {
    /// Send the error to the log
    fn report(&self, error: &Error);

    /// Build the response returned to the client
    fn render(&self, error: &Error) -> Response;
}

/// Default handler: logs through `tracing`, renders a JSON error body
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorsHandler {
    debug: bool,
}

impl ErrorsHandler {
    /// Handler hiding server-side error details from clients
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler exposing the full error chain when `debug` is set
    pub fn with_debug(debug: bool) -> Self {
        Self { debug }
    }

    /// Whether details are exposed
    pub fn is_debug(&self) -> bool {
        self.debug
    }
}

/// Status code for an error, decided by its root cause
pub fn status_for(error: &Error) -> u16 {
    match error.root_cause() {
        Error::UnknownCommand { .. } => 404,
        Error::InvalidArgument { .. } => 422,
        Error::InvalidState { .. } => 503,
        _ => 500,
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        404 => "Not Found",
        422 => "Unprocessable Entity",
        503 => "Service Unavailable",
        _ => "Internal Server Error",
    }
}

impl ErrorsHandlerContract for ErrorsHandler {
    fn report(&self, err: &Error) {
        if status_for(err) >= 500 {
            error!(error = %err, "Unhandled error");
        } else {
            warn!(error = %err, "Request rejected");
        }
    }

    fn render(&self, err: &Error) -> Response {
        let status = status_for(err);
        let message = if status < 500 {
            err.root_cause().to_string()
        } else {
            reason(status).to_string()
        };

        let mut body = json!({
            "error": {
                "status": status,
                "message": message,
            }
        });
        if self.debug {
            body["error"]["detail"] = json!(err.to_string());
        }

        Response { status, body }
    }
}
