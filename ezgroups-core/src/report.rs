//! Output formatting - plaintext and JSON.

use serde::Serialize;
use serde_json::json;

use crate::constants::NamedConstant;
use crate::error::GroupsResult;
use crate::group_name::{GroupName, SpecialGroup};
use crate::names::LegacyAlias;

/// The groups one application owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppLayout {
    pub app: String,
    pub app_group: GroupName,
    pub app_access_group: GroupName,
    pub audit_group: GroupName,
    pub metrics_group: GroupName,
    pub diagnostics_group: GroupName,
}

/// Builds the group layout for `app`, validating the name once.
pub fn app_layout(app: &str) -> GroupsResult<AppLayout> {
    Ok(AppLayout {
        app: app.to_string(),
        app_group: GroupName::app_group(app)?,
        app_access_group: GroupName::app_access_group(app)?,
        audit_group: GroupName::special_app_group(app, SpecialGroup::Audit)?,
        metrics_group: GroupName::special_app_group(app, SpecialGroup::Metrics)?,
        diagnostics_group: GroupName::special_app_group(app, SpecialGroup::Diagnostics)?,
    })
}

/// Prints serializable output, falling back to a debug dump if
/// serialization fails.
fn print_pretty<T: Serialize + std::fmt::Debug>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::warn!(error = %e, "JSON serialization failed");
            println!("{:?}", value);
        }
    }
}

/// Prints the canonical constants in plain text format.
pub fn print_constants_plain(constants: &[NamedConstant]) {
    println!("GROUP CONSTANTS ({}):", constants.len());
    for c in constants {
        println!("- {:<18} = {:?}", c.name, c.value);
    }
}

/// Prints the canonical constants in JSON format.
pub fn print_constants_json(constants: &[NamedConstant]) {
    print_pretty(&json!({ "constants": constants }));
}

/// Prints the legacy alias table in plain text format.
pub fn print_aliases_plain(aliases: &[LegacyAlias]) {
    println!("LEGACY ALIASES ({}, deprecated):", aliases.len());
    for a in aliases {
        let mark = if a.is_consistent() { "ok" } else { "MISMATCH" };
        println!(
            "- {:<25} -> {:<29} = {:?} [{}]",
            a.legacy_name, a.canonical_name, a.legacy_value, mark
        );
    }
}

/// Prints the legacy alias table in JSON format.
pub fn print_aliases_json(aliases: &[LegacyAlias]) {
    print_pretty(&json!({ "aliases": aliases }));
}

/// Prints application layouts in plain text format.
pub fn print_app_layout_plain(layouts: &[AppLayout]) {
    if layouts.is_empty() {
        println!("No applications given.");
        return;
    }
    for l in layouts {
        println!("APP {}:", l.app);
        println!("  app:         {}", l.app_group);
        println!("  access:      {}", l.app_access_group);
        println!("  audit:       {}", l.audit_group);
        println!("  metrics:     {}", l.metrics_group);
        println!("  diagnostics: {}", l.diagnostics_group);
    }
}

/// Prints application layouts in JSON format.
pub fn print_app_layout_json(layouts: &[AppLayout]) {
    print_pretty(&json!({ "apps": layouts }));
}
