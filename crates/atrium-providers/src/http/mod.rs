//! HTTP service provider
//!
//! The server loop itself lives outside this crate; what the provider
//! contributes is the shared route table, the error-to-response mapping and
//! the maintenance switch.

pub mod errors;
pub mod maintenance;
pub mod provider;
pub mod router;

pub use errors::{ErrorsHandler, ErrorsHandlerContract, Response};
pub use maintenance::{DownCommand, MaintenanceMode, MaintenancePayload, UpCommand};
pub use provider::HttpServiceProvider;
pub use router::{Method, Route, Router};
