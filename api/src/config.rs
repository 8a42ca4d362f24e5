//! Runtime configuration for the client, read from environment variables.

use std::env;
use std::path::PathBuf;

/// Settings that vary per install or per developer machine.
#[derive(Clone, PartialEq, Debug)]
pub struct AppConfig {
    /// Directory the native key-value storage writes into.
    pub data_dir: PathBuf,

    /// When true, the simulated backend latencies collapse to zero.
    /// Useful while iterating on the auth screens.
    pub fast_auth: bool,
}

impl AppConfig {
    /// Creates an AppConfig instance from environment variables,
    /// with conservative in-code defaults.
    ///
    /// # Environment Variables:
    /// - `SUPERNOVA_DATA_DIR`: where snapshots are stored on native
    ///   targets. Defaults to `./supernova-data`.
    /// - `SUPERNOVA_FAST_AUTH`: "true" or "1" skips the mock network
    ///   delays. Defaults to false, keeping the demo timings.
    pub fn from_env() -> Self {
        /// In-code default for the storage directory.
        const DATA_DIR: &str = "supernova-data";

        let data_dir = env::var("SUPERNOVA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DATA_DIR));

        let fast_auth = match env::var("SUPERNOVA_FAST_AUTH") {
            Ok(val) => val.eq_ignore_ascii_case("true") || val == "1",
            Err(_) => false,
        };

        Self {
            data_dir,
            fast_auth,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
