//! Settings persistence for the wisereply reply engine.
//!
//! One credential and one ordered example list, stored and loaded as a single
//! snapshot. Validation is deliberately absent here — the reply pipeline
//! decides what counts as usable.
//!
//! ```rust
//! use wsettings::{Example, Settings};
//!
//! let settings = Settings::new()
//!     .with_api_key("sk-ant-demo")
//!     .push_example(Example::new("a post", "a reply"));
//!
//! assert!(settings.has_api_key());
//! assert_eq!(settings.examples.len(), 1);
//! ```

mod error;
mod filesystem;
mod store;
mod types;

pub use error::{SettingsError, SettingsErrorKind};
pub use filesystem::FilesystemSettingsStore;
pub use store::{InMemorySettingsStore, SettingsFuture, SettingsStore};
pub use types::{Example, MAX_EXAMPLES, MIN_USABLE_EXAMPLES, Settings};
