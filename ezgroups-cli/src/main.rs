//! ezgroups CLI - inspect EzBake group-name constants.
//!
//! Features:
//! - Canonical constant table (default)
//! - Deprecated legacy alias table and consistency check
//! - Per-application group layout
//! - Group name parsing

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use std::path::Path;

use ezgroups_core::{
    app_layout, constants, init_structured_logging, load_config, print_aliases_json,
    print_aliases_plain, print_app_layout_json, print_app_layout_plain, print_constants_json,
    print_constants_plain, verify_aliases, AppLayout, GroupName, LEGACY_ALIASES,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect EzBake group-name constants and legacy aliases")]
#[command(group(
    ArgGroup::new("mode")
        .args(["check", "parse", "aliases", "apps"])
        .multiple(false)
))]
pub struct Cli {
    /// Directory containing an optional ezgroups.toml
    #[arg(default_value = ".")]
    path: String,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Print the deprecated legacy alias table
    #[arg(long)]
    aliases: bool,

    /// Verify every legacy alias matches its canonical constant
    #[arg(long)]
    check: bool,

    /// Print the group layout for an application (repeatable, adds to config `apps`)
    #[arg(long = "app", value_name = "NAME")]
    apps: Vec<String>,

    /// Parse a fully qualified group name and describe it
    #[arg(long, value_name = "NAME")]
    parse: Option<String>,
}

/// Exit code used when the process panics.
const PANIC_EXIT_CODE: i32 = 2;

fn panic_report(detail: &dyn std::fmt::Display) -> [String; 2] {
    [
        format!("[PANIC] ezgroups internal error: {}", detail),
        format!("[PANIC] The process will exit with code {}.", PANIC_EXIT_CODE),
    ]
}

fn describe_group(name: &GroupName, json: bool) -> Result<()> {
    let kind = name.special_kind();
    if json {
        let out = serde_json::json!({
            "name": name,
            "segments": name.segments(),
            "rooted": name.is_rooted(),
            "app": name.app_name(),
            "special": kind,
            "parent": name.parent(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("GROUP {}:", name);
        println!("  segments: {}", name.segments().join(", "));
        println!("  rooted:   {}", name.is_rooted());
        println!("  app:      {}", name.app_name().unwrap_or("-"));
        println!("  special:  {}", kind.map(|k| k.to_string()).unwrap_or_else(|| "-".to_string()));
        if let Some(parent) = name.parent() {
            println!("  parent:   {}", parent);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        for line in panic_report(info) {
            eprintln!("{}", line);
        }
        std::process::exit(PANIC_EXIT_CODE);
    }));

    // Initialize structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    let cli = Cli::parse();

    let config = load_config(Path::new(&cli.path))
        .with_context(|| format!("Failed to load config from: {}", cli.path))?
        .unwrap_or_default();
    let json = cli.json || config.wants_json();

    if cli.check {
        let count = verify_aliases().context("Legacy alias check failed")?;
        if json {
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "verified": count }))?);
        } else {
            println!("All {} legacy aliases match their canonical constants.", count);
        }
        return Ok(());
    }

    if let Some(raw) = &cli.parse {
        let name = GroupName::parse(raw).with_context(|| format!("Cannot parse '{}'", raw))?;
        return describe_group(&name, json);
    }

    if cli.aliases {
        if json {
            print_aliases_json(&LEGACY_ALIASES);
        } else {
            print_aliases_plain(&LEGACY_ALIASES);
        }
        return Ok(());
    }

    let mut apps = config.apps.unwrap_or_default();
    apps.extend(cli.apps);
    if !apps.is_empty() {
        let layouts = apps
            .iter()
            .map(|app| app_layout(app).with_context(|| format!("Invalid application name '{}'", app)))
            .collect::<Result<Vec<AppLayout>>>()?;
        if json {
            print_app_layout_json(&layouts);
        } else {
            print_app_layout_plain(&layouts);
        }
        return Ok(());
    }

    if json {
        print_constants_json(&constants::ALL);
    } else {
        print_constants_plain(&constants::ALL);
    }

    Ok(())
}
