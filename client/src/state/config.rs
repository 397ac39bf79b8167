//! Service configuration fetched from the host at startup.

use crate::net::types::PublicConfig;

/// Shown in place of network-backed widgets until config has loaded.
pub const CONFIG_MISSING_MESSAGE: &str = "Service configuration unavailable. Try again shortly.";

/// Config load state. `config` stays `None` until `/api/config` answers.
#[derive(Clone, Debug, Default)]
pub struct ConfigState {
    pub config: Option<PublicConfig>,
    pub loading: bool,
    pub error: Option<String>,
}
