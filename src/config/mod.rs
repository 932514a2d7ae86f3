//! Command-line settings.
//!
//! Settings merge field-by-field across tiers:
//! 1. **Defaults** - built in
//! 2. **Project** - `$CWD/tal/config.yaml`
//! 3. **User** - `~/.tal/config.yaml`
//! 4. **Environment** - see below
//!
//! ## Environment Variables
//! - `TAL_SETTINGS` - Explicit settings file (replaces project and user tiers)
//! - `TAL_CONFIG_PATH` - Device configuration root
//! - `TAL_DEVICE_DIR` - Device descriptor sub-directory
//! - `TAL_STRATEGIES_DIR` - On-disk page strategies
//! - `TAL_USER_DIR` - User settings dir (default: `~/.tal`)
//! - `TAL_PROJECT_DIR` - Project settings dir (default: `./tal`)

mod loader;
mod merge;
mod types;

pub use loader::{ConfigLoader, ConfigPaths, ConfigTier, SETTINGS_FILE};
pub use merge::{merge_into, merge_tiers};
pub use types::*;
