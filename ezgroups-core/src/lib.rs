//! ezgroups-core: EzBake group-name constants and helpers.
//!
//! # Module Organization
//!
//! - [`constants`]: Canonical group-name constants (`ROOT`, `APP_GROUP`, ...)
//! - [`names`]: Deprecated legacy names forwarding to [`constants`]
//! - [`group_name`]: Composing and parsing fully qualified group names
//! - [`config`]: `ezgroups.toml` loading
//! - [`report`]: Plain and JSON output
//! - [`error`]: Typed error handling
//!
//! # Quick Start
//!
//! ```
//! use ezgroups_core::prelude::*;
//!
//! let audits = GroupName::special_app_group("billing", SpecialGroup::Audit)?;
//! assert_eq!(audits.to_string(), "root.app.billing.ezbAudits");
//! assert_eq!(audits.app_name(), Some("billing"));
//! # Ok::<(), GroupsError>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod group_name;
pub mod logging;
pub mod names;
pub mod prelude;
pub mod report;

// Error types
pub use error::{GroupsError, GroupsResult, IoResultExt};

// Constants
pub use constants::{lookup, NamedConstant};

// Legacy aliases
pub use names::{resolve_legacy, verify_aliases, LegacyAlias, LEGACY_ALIASES};

// Group names
pub use group_name::{GroupName, SpecialGroup};

// Configuration
pub use config::{load_config, GroupsConfig, OutputConfig, CONFIG_FILE};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{
    app_layout, print_aliases_json, print_aliases_plain, print_app_layout_json,
    print_app_layout_plain, print_constants_json, print_constants_plain, AppLayout,
};

#[cfg(test)]
mod tests;
