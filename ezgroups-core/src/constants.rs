//! Canonical group-name constants.
//!
//! These are the authoritative values. The deprecated names in
//! [`crate::names`] forward to them.

use serde::Serialize;

/// Name of the root group every other group hangs under.
pub const ROOT: &str = "root";

/// Parent segment for application groups (`root.app.<app>`).
pub const APP_GROUP: &str = "app";

/// Parent segment for application access groups (`root.appaccess.<app>`).
pub const APP_ACCESS_GROUP: &str = "appaccess";

/// Special per-app group holding audit readers.
pub const AUDIT_GROUP: &str = "ezbAudits";

/// Special per-app group holding metrics readers.
pub const METRICS_GROUP: &str = "ezbMetrics";

/// Special per-app group holding diagnostics readers.
pub const DIAGNOSTICS_GROUP: &str = "ezbDiagnostics";

/// Separator between segments of a fully qualified group name.
pub const GROUP_NAME_SEP: &str = ".";

/// A `(name, value)` pair for one canonical constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedConstant {
    pub name: &'static str,
    pub value: &'static str,
}

/// All canonical constants in declaration order.
pub const ALL: [NamedConstant; 7] = [
    NamedConstant { name: "ROOT", value: ROOT },
    NamedConstant { name: "APP_GROUP", value: APP_GROUP },
    NamedConstant { name: "APP_ACCESS_GROUP", value: APP_ACCESS_GROUP },
    NamedConstant { name: "AUDIT_GROUP", value: AUDIT_GROUP },
    NamedConstant { name: "METRICS_GROUP", value: METRICS_GROUP },
    NamedConstant { name: "DIAGNOSTICS_GROUP", value: DIAGNOSTICS_GROUP },
    NamedConstant { name: "GROUP_NAME_SEP", value: GROUP_NAME_SEP },
];

/// Resolves a canonical constant by its name.
pub fn lookup(name: &str) -> Option<&'static str> {
    ALL.iter().find(|c| c.name == name).map(|c| c.value)
}

/// Every constant that names a group segment (everything but the separator).
pub fn group_segments() -> impl Iterator<Item = NamedConstant> {
    ALL.into_iter().filter(|c| c.name != "GROUP_NAME_SEP")
}

/// Byte-wise string equality usable in `const` context.
pub(crate) const fn const_str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// A segment is usable if it is non-empty and never contains the separator.
const fn is_valid_segment(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let sep = GROUP_NAME_SEP.as_bytes()[0];
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == sep {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(GROUP_NAME_SEP.len() == 1, "GROUP_NAME_SEP must be a single byte");
const _: () = assert!(is_valid_segment(ROOT), "ROOT is not a valid segment");
const _: () = assert!(is_valid_segment(APP_GROUP), "APP_GROUP is not a valid segment");
const _: () = assert!(
    is_valid_segment(APP_ACCESS_GROUP),
    "APP_ACCESS_GROUP is not a valid segment"
);
const _: () = assert!(is_valid_segment(AUDIT_GROUP), "AUDIT_GROUP is not a valid segment");
const _: () = assert!(is_valid_segment(METRICS_GROUP), "METRICS_GROUP is not a valid segment");
const _: () = assert!(
    is_valid_segment(DIAGNOSTICS_GROUP),
    "DIAGNOSTICS_GROUP is not a valid segment"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_values() {
        assert_eq!(ROOT, "root");
        assert_eq!(APP_GROUP, "app");
        assert_eq!(APP_ACCESS_GROUP, "appaccess");
        assert_eq!(AUDIT_GROUP, "ezbAudits");
        assert_eq!(METRICS_GROUP, "ezbMetrics");
        assert_eq!(DIAGNOSTICS_GROUP, "ezbDiagnostics");
        assert_eq!(GROUP_NAME_SEP, ".");
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        assert_eq!(lookup("AUDIT_GROUP"), Some("ezbAudits"));
        assert_eq!(lookup("GROUP_NAME_SEP"), Some("."));
        assert_eq!(lookup("audit_group"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_registry_names_are_unique() {
        let mut names: Vec<_> = ALL.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_group_segments_excludes_separator() {
        let segs: Vec<_> = group_segments().map(|c| c.name).collect();
        assert_eq!(segs.len(), 6);
        assert!(!segs.contains(&"GROUP_NAME_SEP"));
        for c in group_segments() {
            assert!(!c.value.contains(GROUP_NAME_SEP), "{} contains separator", c.name);
        }
    }

    #[test]
    fn test_const_str_eq() {
        assert!(const_str_eq("ezbMetrics", "ezbMetrics"));
        assert!(!const_str_eq("ezbMetrics", "ezbmetrics"));
        assert!(!const_str_eq("app", "appaccess"));
        assert!(const_str_eq("", ""));
    }
}
