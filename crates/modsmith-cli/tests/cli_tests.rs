//! End-to-end tests for the `modsmith` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A binary invocation isolated from the developer's config and env.
fn modsmith(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("modsmith").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("MODSMITH_DEFAULTS__AUTHOR")
        .env_remove("MODSMITH_DEFAULTS__TEMPLATE");
    cmd
}

/// Scaffold "My Mod" into `dir` and return the project root.
fn new_project(dir: &TempDir) -> PathBuf {
    modsmith(dir.path())
        .arg("new")
        .arg("My Mod")
        .arg("--no-git")
        .arg("--game-dir")
        .arg(dir.path())
        .arg("-o")
        .arg(dir.path())
        .assert()
        .success();
    dir.path().join("MyMod")
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_describes_tool() {
    let home = TempDir::new().unwrap();
    modsmith(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Necesse"))
        .stdout(predicate::str::contains("add"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    modsmith(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_exits_two() {
    let home = TempDir::new().unwrap();
    modsmith(home.path()).arg("frobnicate").assert().code(2);
}

#[test]
fn standard_no_color_value_is_accepted() {
    let home = TempDir::new().unwrap();
    let out = modsmith(home.path()).arg("list").output().unwrap();
    assert!(out.status.success());
    assert!(!String::from_utf8_lossy(&out.stdout).contains('\u{1b}'));
}

#[test]
fn falsey_no_color_is_accepted() {
    let home = TempDir::new().unwrap();
    modsmith(home.path())
        .env("NO_COLOR", "0")
        .arg("list")
        .assert()
        .success();
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_shows_all_templates() {
    let home = TempDir::new().unwrap();
    modsmith(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("basic"))
        .stdout(predicate::str::contains("item"))
        .stdout(predicate::str::contains("qol"))
        .stdout(predicate::str::contains("empty"));
}

#[test]
fn list_json_is_parseable() {
    let home = TempDir::new().unwrap();
    let out = modsmith(home.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(4));
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_creates_project() {
    let dir = TempDir::new().unwrap();
    let root = new_project(&dir);

    let build = fs::read_to_string(root.join("build.gradle")).unwrap();
    assert!(build.contains("project.ext.modID = \"mymod\""));
    assert!(root.join("settings.gradle").is_file());
    assert!(root.join("src/main/java/mymod/MymodMod.java").is_file());
    assert!(root.join("src/main/resources/locale/en.lang").is_file());
    assert!(!root.join(".git").exists());
}

#[test]
fn new_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    modsmith(dir.path())
        .args(["new", "My Mod", "--no-git", "--dry-run", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("build.gradle"));
    assert!(!dir.path().join("MyMod").exists());
}

#[test]
fn new_rejects_invalid_mod_id() {
    let dir = TempDir::new().unwrap();
    modsmith(dir.path())
        .args(["new", "My Mod", "--mod-id", "My-Mod", "--no-git", "-o"])
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("My-Mod"));
    assert!(!dir.path().join("MyMod").exists());
}

#[test]
fn new_warns_about_missing_game_archive() {
    let dir = TempDir::new().unwrap();
    modsmith(dir.path())
        .args(["new", "Other Mod", "--no-git", "--game-dir"])
        .arg(dir.path().join("nowhere"))
        .arg("-o")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Necesse.jar"));
}

#[test]
fn new_json_report() {
    let dir = TempDir::new().unwrap();
    let out = modsmith(dir.path())
        .args(["--output-format", "json", "new", "My Mod", "--no-git", "-o"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["mod_id"], "mymod");
    assert_eq!(value["dry_run"], false);
    assert!(value["files"].as_array().is_some_and(|f| !f.is_empty()));
}

#[test]
fn config_env_overrides_default_author() {
    let dir = TempDir::new().unwrap();
    modsmith(dir.path())
        .env("MODSMITH_DEFAULTS__AUTHOR", "Ada")
        .args(["new", "My Mod", "--no-git", "-o"])
        .arg(dir.path())
        .assert()
        .success();
    let build = fs::read_to_string(dir.path().join("MyMod/build.gradle")).unwrap();
    assert!(build.contains("Ada"));
}

// ── add ───────────────────────────────────────────────────────────────────────

#[test]
fn add_item_to_project() {
    let dir = TempDir::new().unwrap();
    let root = new_project(&dir);

    modsmith(dir.path())
        .args(["add", "item", "--name", "Fire Sword", "--type", "weapon", "--dir"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("ItemRegistry.registerItem(\"firesword\""));

    assert!(root.join("src/main/java/mymod/items/FireSword.java").is_file());
    let locale = fs::read_to_string(root.join("src/main/resources/locale/en.lang")).unwrap();
    assert!(locale.contains("item.firesword=Fire Sword"));
}

#[test]
fn add_from_nested_directory_finds_root() {
    let dir = TempDir::new().unwrap();
    let root = new_project(&dir);
    let nested = root.join("src/main/java/mymod");

    modsmith(dir.path())
        .args(["add", "buff", "--name", "Swift", "--duration", "5", "--dir"])
        .arg(&nested)
        .assert()
        .success();

    assert!(root.join("src/main/java/mymod/buffs/SwiftBuff.java").is_file());
}

#[test]
fn add_twice_keeps_single_locale_entry() {
    let dir = TempDir::new().unwrap();
    let root = new_project(&dir);

    for _ in 0..2 {
        modsmith(dir.path())
            .args(["add", "mob", "--name", "Cave Bat", "--dir"])
            .arg(&root)
            .assert()
            .success();
    }

    let locale = fs::read_to_string(root.join("src/main/resources/locale/en.lang")).unwrap();
    assert_eq!(locale.matches("mob.cavebat=").count(), 1);
}

#[test]
fn add_outside_project_exits_not_found() {
    let dir = TempDir::new().unwrap();
    let empty = dir.path().join("empty");
    fs::create_dir_all(&empty).unwrap();

    modsmith(dir.path())
        .args(["add", "item", "--name", "Thing", "--dir"])
        .arg(&empty)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("modsmith new"));
}

#[test]
fn add_rejects_path_like_name() {
    let dir = TempDir::new().unwrap();
    let root = new_project(&dir);

    modsmith(dir.path())
        .args(["add", "buff", "--name", "../../../pwned", "--dir"])
        .arg(&root)
        .assert()
        .code(2);

    assert!(!root.join("src/main/pwnedBuff.java").exists());
}

#[test]
fn new_rejects_path_like_name() {
    let dir = TempDir::new().unwrap();
    modsmith(dir.path())
        .args(["new", "../Escape", "--mod-id", "escape", "--no-git", "-o"])
        .arg(dir.path())
        .assert()
        .code(2);
    assert!(!dir.path().parent().unwrap().join("Escape").exists());
}

// ── misc commands ─────────────────────────────────────────────────────────────

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    modsmith(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modsmith"));
}

#[test]
fn config_get_reads_defaults() {
    let home = TempDir::new().unwrap();
    modsmith(home.path())
        .args(["config", "get", "defaults.template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("basic"));
}

#[test]
fn config_file_values_apply() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[defaults]\nauthor = \"Grace\"\n").unwrap();

    modsmith(dir.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "defaults.author"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grace"));
}

#[test]
fn missing_explicit_config_exits_four() {
    let dir = TempDir::new().unwrap();
    modsmith(dir.path())
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("list")
        .assert()
        .code(4);
}

#[test]
fn init_local_writes_config() {
    let dir = TempDir::new().unwrap();
    modsmith(dir.path())
        .current_dir(dir.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("modsmith.toml")).unwrap();
    assert!(text.contains("[defaults]"));
}
