//! Configuration management with environment variable support.
//!
//! This module provides centralized configuration for pagebench, supporting:
//! - Environment variables for all configurable values
//! - Sensible defaults that match the original hardcoded values
//! - Programmatic access to the same defaults the CLI flags use
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `PAGEBENCH_URL` | Default target URL | the demo page |
//! | `PAGEBENCH_RUNS` | Default attempt count | `50` |
//! | `PAGEBENCH_AUDITOR` | Auditor executable | `lighthouse` |
//! | `PAGEBENCH_TIMEOUT` | Per-attempt timeout in seconds (0 = none) | `0` |
//! | `PAGEBENCH_MIN_SUCCESS` | Minimum success ratio before trusting the median | `0.0` |
//! | `PAGEBENCH_SESSION_DIR` | Base directory for saved raw reports | `/tmp/pagebench` |
//!
//! # Example
//!
//! ```bash
//! # Benchmark a different page with a local auditor build
//! export PAGEBENCH_URL="https://example.com/heavy-page.html"
//! export PAGEBENCH_AUDITOR="./node_modules/.bin/lighthouse"
//! ```

use std::env;
use std::sync::OnceLock;

// ============================================================================
// Default Values (matching original hardcoded values)
// ============================================================================

/// Default target URL (the demo page the harness was built around)
pub const DEFAULT_URL: &str = "https://svg-loading-strategies.netlify.app/lazy-embeds.html";

/// Default number of auditor attempts per batch
pub const DEFAULT_RUNS: usize = 50;

/// Default auditor executable
pub const DEFAULT_AUDITOR: &str = "lighthouse";

/// Default per-attempt timeout in seconds (0 disables the timeout)
pub const DEFAULT_TIMEOUT_SECS: u64 = 0;

/// Default minimum success ratio (0.0 = reduce over whatever succeeded)
pub const DEFAULT_MIN_SUCCESS: f64 = 0.0;

/// Default session base directory
pub const DEFAULT_SESSION_DIR: &str = "/tmp/pagebench";

// ============================================================================
// Environment Variable Names
// ============================================================================

/// Environment variable for the default target URL
pub const ENV_URL: &str = "PAGEBENCH_URL";

/// Environment variable for the default attempt count
pub const ENV_RUNS: &str = "PAGEBENCH_RUNS";

/// Environment variable for the auditor executable
pub const ENV_AUDITOR: &str = "PAGEBENCH_AUDITOR";

/// Environment variable for the per-attempt timeout
pub const ENV_TIMEOUT: &str = "PAGEBENCH_TIMEOUT";

/// Environment variable for the minimum success ratio
pub const ENV_MIN_SUCCESS: &str = "PAGEBENCH_MIN_SUCCESS";

/// Environment variable for the session directory
pub const ENV_SESSION_DIR: &str = "PAGEBENCH_SESSION_DIR";

// ============================================================================
// Configuration Getters (with caching)
// ============================================================================

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration (initialized from environment on first access)
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Centralized configuration for pagebench
#[derive(Debug, Clone)]
pub struct Config {
    /// Auditor invocation settings
    pub auditor: AuditorSettings,
    /// Session configuration
    pub session: SessionSettings,
    /// Default values for CLI arguments
    pub defaults: DefaultSettings,
}

/// Auditor-related settings
#[derive(Debug, Clone)]
pub struct AuditorSettings {
    /// Executable to invoke for each audit
    pub program: String,
    /// Per-attempt timeout in seconds (0 = no timeout)
    pub timeout_secs: u64,
}

/// Session-related settings
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Base directory for session storage
    pub base_dir: String,
}

/// Default values for CLI arguments
#[derive(Debug, Clone)]
pub struct DefaultSettings {
    /// Default target URL
    pub url: String,
    /// Default attempt count per batch
    pub runs: usize,
    /// Default minimum success ratio
    pub min_success: f64,
}

impl Config {
    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            auditor: AuditorSettings::from_env(),
            session: SessionSettings::from_env(),
            defaults: DefaultSettings::from_env(),
        }
    }

    /// Create configuration with all defaults (ignoring environment)
    pub fn defaults() -> Self {
        Self {
            auditor: AuditorSettings::defaults(),
            session: SessionSettings::defaults(),
            defaults: DefaultSettings::defaults(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl AuditorSettings {
    /// Create auditor settings from environment variables
    pub fn from_env() -> Self {
        Self {
            program: env::var(ENV_AUDITOR).unwrap_or_else(|_| DEFAULT_AUDITOR.to_string()),
            timeout_secs: env::var(ENV_TIMEOUT)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Create auditor settings with defaults
    pub fn defaults() -> Self {
        Self {
            program: DEFAULT_AUDITOR.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SessionSettings {
    /// Create session settings from environment variables
    pub fn from_env() -> Self {
        Self {
            base_dir: env::var(ENV_SESSION_DIR).unwrap_or_else(|_| DEFAULT_SESSION_DIR.to_string()),
        }
    }

    /// Create session settings with defaults
    pub fn defaults() -> Self {
        Self {
            base_dir: DEFAULT_SESSION_DIR.to_string(),
        }
    }
}

impl DefaultSettings {
    /// Create default settings from environment variables
    pub fn from_env() -> Self {
        Self {
            url: env::var(ENV_URL).unwrap_or_else(|_| DEFAULT_URL.to_string()),
            runs: env::var(ENV_RUNS)
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&n| n >= 1)
                .unwrap_or(DEFAULT_RUNS),
            min_success: env::var(ENV_MIN_SUCCESS)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MIN_SUCCESS),
        }
    }

    /// Create default settings with hardcoded defaults
    pub fn defaults() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            runs: DEFAULT_RUNS,
            min_success: DEFAULT_MIN_SUCCESS,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Get the session base directory (convenience function)
pub fn session_base_dir() -> String {
    get().session.base_dir.clone()
}

/// Get the auditor executable (convenience function)
pub fn auditor_program() -> String {
    get().auditor.program.clone()
}

/// Get the default target URL (convenience function)
pub fn default_url() -> String {
    get().defaults.url.clone()
}

/// Get the default attempt count (convenience function)
pub fn default_runs() -> usize {
    get().defaults.runs
}
