//! Advisor configuration from the environment

use std::path::PathBuf;
use std::time::Duration;

/// Completion worker used when `ADVISOR_WORKER_URL` is unset
pub const DEFAULT_WORKER_URL: &str = "https://falling-band-37d2.mmakei.workers.dev";

/// Log filter when `RUST_LOG` is unset. Logs share the terminal with the
/// chat, so only warnings and errors show by default.
pub const DEFAULT_LOG_FILTER: &str = "routine_advisor=warn";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Completion worker endpoint
    pub worker_url: String,
    /// File replacing the built-in system prompt
    pub system_prompt_file: Option<PathBuf>,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            worker_url: DEFAULT_WORKER_URL.to_string(),
            system_prompt_file: None,
            request_timeout: None,
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so tests need not touch the process env
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let worker_url = non_empty("ADVISOR_WORKER_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_WORKER_URL.to_string());

        let system_prompt_file = non_empty("ADVISOR_SYSTEM_PROMPT_FILE").map(PathBuf::from);

        let request_timeout = non_empty("ADVISOR_REQUEST_TIMEOUT_SECS").and_then(|raw| {
            match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Ignoring invalid ADVISOR_REQUEST_TIMEOUT_SECS");
                    None
                }
            }
        });

        Self {
            worker_url,
            system_prompt_file,
            request_timeout,
        }
    }
}
