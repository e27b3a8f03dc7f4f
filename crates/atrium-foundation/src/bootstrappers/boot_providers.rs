use atrium_domain::error::Result;

use crate::application::Application;
use crate::bootstrap::Bootstrapper;

/// Calls `register` on every provider, in registration order
#[derive(Debug, Clone, Copy, Default)]
pub struct BootProviders;

impl Bootstrapper for BootProviders {
    fn name(&self) -> &str {
        "boot-providers"
    }

    fn bootstrap(&self, app: &mut Application) -> Result<()> {
        app.boot_providers()
    }
}
