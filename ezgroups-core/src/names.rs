//! Legacy group-name constants.
//!
//! Older callers know these names under the old `EzGroupNamesConstants`
//! naming. Each one is a deprecated `const` whose initializer *is* the
//! canonical constant in [`crate::constants`], so the two cannot drift
//! apart. If a canonical constant is renamed or removed, this module
//! stops compiling.
//!
//! ```
//! #[allow(deprecated)]
//! let root = ezgroups_core::names::ROOT;
//! assert_eq!(root, ezgroups_core::constants::ROOT);
//! ```
//!
//! New code should not use them:
//!
//! ```compile_fail
//! #![deny(deprecated)]
//! let _ = ezgroups_core::names::AUDIT_GROUP;
//! ```
//!
//! A forwarding declaration compiles only while its canonical target
//! exists:
//!
//! ```
//! #[deprecated(note = "use constants::ROOT")]
//! pub const ROOT: &str = ezgroups_core::constants::ROOT;
//! ```
//!
//! Renaming or removing the target turns the same declaration into a
//! build error, never an empty value:
//!
//! ```compile_fail
//! #[deprecated(note = "use constants::ROOT")]
//! pub const ROOT: &str = ezgroups_core::constants::GROUPS_ROOT;
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::constants::{self, const_str_eq};
use crate::error::{GroupsError, GroupsResult};

#[deprecated(note = "use constants::ROOT")]
pub const ROOT: &str = constants::ROOT;
#[deprecated(note = "use constants::APP_GROUP")]
pub const APP_GROUP: &str = constants::APP_GROUP;
#[deprecated(note = "use constants::APP_ACCESS_GROUP")]
pub const APP_ACCESS_GROUP: &str = constants::APP_ACCESS_GROUP;
#[deprecated(note = "use constants::AUDIT_GROUP")]
pub const AUDIT_GROUP: &str = constants::AUDIT_GROUP;
#[deprecated(note = "use constants::METRICS_GROUP")]
pub const METRICS_GROUP: &str = constants::METRICS_GROUP;
#[deprecated(note = "use constants::DIAGNOSTICS_GROUP")]
pub const DIAGNOSTICS_GROUP: &str = constants::DIAGNOSTICS_GROUP;
#[deprecated(note = "use constants::GROUP_NAME_SEP")]
pub const GROUP_NAME_SEP: &str = constants::GROUP_NAME_SEP;

#[allow(deprecated)]
const _: () = {
    assert!(const_str_eq(ROOT, constants::ROOT), "names::ROOT drifted");
    assert!(const_str_eq(APP_GROUP, constants::APP_GROUP), "names::APP_GROUP drifted");
    assert!(
        const_str_eq(APP_ACCESS_GROUP, constants::APP_ACCESS_GROUP),
        "names::APP_ACCESS_GROUP drifted"
    );
    assert!(const_str_eq(AUDIT_GROUP, constants::AUDIT_GROUP), "names::AUDIT_GROUP drifted");
    assert!(
        const_str_eq(METRICS_GROUP, constants::METRICS_GROUP),
        "names::METRICS_GROUP drifted"
    );
    assert!(
        const_str_eq(DIAGNOSTICS_GROUP, constants::DIAGNOSTICS_GROUP),
        "names::DIAGNOSTICS_GROUP drifted"
    );
    assert!(
        const_str_eq(GROUP_NAME_SEP, constants::GROUP_NAME_SEP),
        "names::GROUP_NAME_SEP drifted"
    );
};

/// One forwarding declaration: legacy name, canonical name, and both values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegacyAlias {
    pub legacy_name: &'static str,
    pub canonical_name: &'static str,
    pub legacy_value: &'static str,
    pub canonical_value: &'static str,
}

impl LegacyAlias {
    /// Whether the alias still resolves to the canonical value.
    pub fn is_consistent(&self) -> bool {
        self.legacy_value == self.canonical_value
    }
}

macro_rules! alias {
    ($name:ident) => {
        LegacyAlias {
            legacy_name: concat!("names::", stringify!($name)),
            canonical_name: concat!("constants::", stringify!($name)),
            legacy_value: $name,
            canonical_value: constants::$name,
        }
    };
}

/// Every legacy alias, in the same order as [`constants::ALL`].
#[allow(deprecated)]
pub const LEGACY_ALIASES: [LegacyAlias; 7] = [
    alias!(ROOT),
    alias!(APP_GROUP),
    alias!(APP_ACCESS_GROUP),
    alias!(AUDIT_GROUP),
    alias!(METRICS_GROUP),
    alias!(DIAGNOSTICS_GROUP),
    alias!(GROUP_NAME_SEP),
];

/// Resolves a value by its legacy name.
///
/// Accepts either the bare name (`"ROOT"`) or the qualified form
/// (`"names::ROOT"`).
pub fn resolve_legacy(name: &str) -> Option<&'static str> {
    let bare = name.strip_prefix("names::").unwrap_or(name);
    LEGACY_ALIASES
        .iter()
        .find(|a| a.legacy_name.strip_prefix("names::") == Some(bare))
        .map(|a| a.legacy_value)
}

/// Checks every alias against its canonical constant.
///
/// Returns the number of aliases checked. The `const` assertions above
/// already make a mismatch a build error, so this is for callers that
/// want the check on record at startup.
pub fn verify_aliases() -> GroupsResult<usize> {
    check_aliases(&LEGACY_ALIASES)
}

pub(crate) fn check_aliases(aliases: &[LegacyAlias]) -> GroupsResult<usize> {
    for alias in aliases {
        debug!(legacy = alias.legacy_name, value = alias.legacy_value, "checking alias");
        if !alias.is_consistent() {
            warn!(
                legacy = alias.legacy_name,
                canonical = alias.canonical_name,
                "alias mismatch"
            );
            return Err(GroupsError::AliasMismatch {
                legacy: alias.legacy_name,
                canonical: alias.canonical_name,
                legacy_value: alias.legacy_value,
                canonical_value: alias.canonical_value,
            });
        }
    }
    info!(count = aliases.len(), "legacy aliases verified");
    Ok(aliases.len())
}
