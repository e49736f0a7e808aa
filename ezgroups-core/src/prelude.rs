//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use ezgroups_core::prelude::*;
//! ```

pub use crate::constants::{
    APP_ACCESS_GROUP, APP_GROUP, AUDIT_GROUP, DIAGNOSTICS_GROUP, GROUP_NAME_SEP, METRICS_GROUP,
    ROOT,
};
pub use crate::error::{GroupsError, GroupsResult};
pub use crate::group_name::{GroupName, SpecialGroup};
pub use crate::names::verify_aliases;
