//! Crate-level test suite for ezgroups-core.

use crate::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn write_file(file: &Path, content: &str) {
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(file, content).unwrap();
}

fn setup_temp_dir() -> PathBuf {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir()
        .join("ezgroups_tests")
        .join(format!("{}_{}", timestamp, id));

    if dir.exists() {
        fs::remove_dir_all(&dir).ok();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[allow(deprecated)]
fn test_every_legacy_name_matches_canonical() {
    let pairs = [
        (names::ROOT, constants::ROOT),
        (names::APP_GROUP, constants::APP_GROUP),
        (names::APP_ACCESS_GROUP, constants::APP_ACCESS_GROUP),
        (names::AUDIT_GROUP, constants::AUDIT_GROUP),
        (names::METRICS_GROUP, constants::METRICS_GROUP),
        (names::DIAGNOSTICS_GROUP, constants::DIAGNOSTICS_GROUP),
        (names::GROUP_NAME_SEP, constants::GROUP_NAME_SEP),
    ];
    for (legacy, canonical) in pairs {
        assert_eq!(legacy, canonical);
    }
}

#[test]
fn test_lookup_and_resolve_legacy_agree() {
    for c in constants::ALL {
        assert_eq!(lookup(c.name), Some(c.value));
        assert_eq!(resolve_legacy(c.name), Some(c.value), "{}", c.name);
    }
    assert_eq!(lookup("GROUPS_ROOT"), None);
    assert_eq!(resolve_legacy("GROUPS_ROOT"), None);
}

#[test]
fn test_reads_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| LEGACY_ALIASES.iter().all(LegacyAlias::is_consistent)))
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}

#[test]
fn test_group_names_built_from_constants() {
    let name = GroupName::app_group("billing").unwrap();
    let expected = [constants::ROOT, constants::APP_GROUP, "billing"].join(constants::GROUP_NAME_SEP);
    assert_eq!(name.to_string(), expected);
    assert_eq!(GroupName::parse(&expected).unwrap(), name);
}

#[test]
fn test_special_groups_round_trip_through_parse() {
    for kind in SpecialGroup::ALL {
        let built = GroupName::special_app_group("search", kind).unwrap();
        let parsed: GroupName = built.to_string().parse().unwrap();
        assert_eq!(parsed.special_kind(), Some(kind));
        assert_eq!(parsed.app_name(), Some("search"));
    }
}

#[test]
fn test_load_config_missing_file() {
    let dir = setup_temp_dir();
    assert!(load_config(&dir).unwrap().is_none());
}

#[test]
fn test_load_config_valid_file() {
    let dir = setup_temp_dir();
    write_file(
        &dir.join(CONFIG_FILE),
        "apps = [\"billing\"]\n\n[output]\nformat = \"json\"\n",
    );
    let cfg = load_config(&dir).unwrap().unwrap();
    assert_eq!(cfg.apps, Some(vec!["billing".to_string()]));
    assert!(cfg.wants_json());
}

#[test]
fn test_load_config_invalid_toml() {
    let dir = setup_temp_dir();
    write_file(&dir.join(CONFIG_FILE), "apps = [unterminated");
    let err = load_config(&dir).unwrap_err();
    assert!(matches!(err, GroupsError::Config { .. }), "got {:?}", err);
    assert_eq!(err.path(), Some(&dir.join(CONFIG_FILE)));
    assert!(err.is_recoverable());
    assert!(err.to_string().contains(CONFIG_FILE));
}

#[test]
fn test_app_layout_for_configured_apps() {
    let layouts: Vec<_> = ["a", "b"].iter().map(|app| app_layout(app).unwrap()).collect();
    assert_eq!(layouts[1].app_access_group.to_string(), "root.appaccess.b");
    assert!(layouts.iter().all(|l| l.audit_group.parent().as_ref() == Some(&l.app_group)));
}
