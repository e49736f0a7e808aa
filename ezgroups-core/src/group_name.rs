//! Fully qualified group names.
//!
//! A group name is a non-empty list of segments joined by
//! [`GROUP_NAME_SEP`], e.g. `root.app.billing.ezbAudits`. Application
//! groups live under `root.app`, access groups under `root.appaccess`,
//! and each application owns three special child groups for audit,
//! metrics, and diagnostics readers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::debug;

use crate::constants::{
    APP_ACCESS_GROUP, APP_GROUP, AUDIT_GROUP, DIAGNOSTICS_GROUP, GROUP_NAME_SEP, METRICS_GROUP,
    ROOT,
};
use crate::error::{GroupsError, GroupsResult};

/// Pre-compiled regex for a single valid segment.
fn segment_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // SAFETY: This regex pattern is hardcoded and covered by unit tests.
    REGEX.get_or_init(|| Regex::new(r"^[^\s\p{Cc}]+$").expect("Hardcoded regex pattern is valid"))
}

fn validate_segment(full: &str, segment: &str) -> GroupsResult<()> {
    if segment.is_empty() {
        return Err(GroupsError::invalid_name(full, "empty segment"));
    }
    if segment.contains(GROUP_NAME_SEP) {
        return Err(GroupsError::invalid_name(
            full,
            format!("segment '{}' contains separator '{}'", segment, GROUP_NAME_SEP),
        ));
    }
    if !segment_regex().is_match(segment) {
        return Err(GroupsError::invalid_name(
            full,
            format!("segment '{}' contains whitespace or control characters", segment),
        ));
    }
    Ok(())
}

/// The special per-application groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialGroup {
    Audit,
    Metrics,
    Diagnostics,
}

impl SpecialGroup {
    pub const ALL: [SpecialGroup; 3] = [Self::Audit, Self::Metrics, Self::Diagnostics];

    /// The group segment this kind maps to.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Audit => AUDIT_GROUP,
            Self::Metrics => METRICS_GROUP,
            Self::Diagnostics => DIAGNOSTICS_GROUP,
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.segment() == segment)
    }
}

impl fmt::Display for SpecialGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// A validated, fully qualified group name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupName {
    segments: Vec<String>,
}

impl GroupName {
    /// The root group.
    pub fn root() -> Self {
        Self {
            segments: vec![ROOT.to_string()],
        }
    }

    /// Parses a separator-joined name, validating every segment.
    pub fn parse(name: &str) -> GroupsResult<Self> {
        if name.is_empty() {
            return Err(GroupsError::invalid_name(name, "name is empty"));
        }
        let segments: Vec<String> = name.split(GROUP_NAME_SEP).map(str::to_string).collect();
        for segment in &segments {
            if let Err(e) = validate_segment(name, segment) {
                debug!(name = %name, error = %e, "rejected group name");
                return Err(e);
            }
        }
        Ok(Self { segments })
    }

    /// Builds a name from already-split segments.
    pub fn from_segments<I, S>(segments: I) -> GroupsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        let full = segments.join(GROUP_NAME_SEP);
        if segments.is_empty() {
            return Err(GroupsError::invalid_name(full, "name is empty"));
        }
        for segment in &segments {
            validate_segment(&full, segment)?;
        }
        Ok(Self { segments })
    }

    /// Returns a new name with `segment` appended.
    pub fn child(&self, segment: &str) -> GroupsResult<Self> {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        validate_segment(&segments.join(GROUP_NAME_SEP), segment)?;
        Ok(Self { segments })
    }

    /// The enclosing group, or `None` for a single-segment name.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a `GroupName` has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The last segment.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Whether the first segment is [`ROOT`].
    pub fn is_rooted(&self) -> bool {
        self.segments.first().map(String::as_str) == Some(ROOT)
    }

    /// `root.app.<app>`
    pub fn app_group(app: &str) -> GroupsResult<Self> {
        Self::root().child(APP_GROUP)?.child(app)
    }

    /// `root.appaccess.<app>`
    pub fn app_access_group(app: &str) -> GroupsResult<Self> {
        Self::root().child(APP_ACCESS_GROUP)?.child(app)
    }

    /// `root.app.<app>.<special>`
    pub fn special_app_group(app: &str, kind: SpecialGroup) -> GroupsResult<Self> {
        Self::app_group(app)?.child(kind.segment())
    }

    /// The application this name belongs to, if it sits under
    /// `root.app` or `root.appaccess`.
    pub fn app_name(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [root, parent, app, ..]
                if root == ROOT && (parent == APP_GROUP || parent == APP_ACCESS_GROUP) =>
            {
                Some(app.as_str())
            }
            _ => None,
        }
    }

    /// The special group kind, if this is `root.app.<app>.<special>`.
    pub fn special_kind(&self) -> Option<SpecialGroup> {
        match self.segments.as_slice() {
            [root, parent, _, leaf] if root == ROOT && parent == APP_GROUP => {
                SpecialGroup::from_segment(leaf)
            }
            _ => None,
        }
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(GROUP_NAME_SEP))
    }
}

impl FromStr for GroupName {
    type Err = GroupsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GroupName {
    type Error = GroupsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<GroupName> for String {
    fn from(name: GroupName) -> Self {
        name.to_string()
    }
}
