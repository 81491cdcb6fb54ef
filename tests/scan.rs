use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn command(temp: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dua").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", temp.child("config").path())
        .env_remove("DUA_FILES")
        .env_remove("DUA_TOP")
        .env_remove("DUA_STRICT")
        .env_remove("DUA_LOG");
    cmd
}

fn top_file_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .skip_while(|line| *line != "Top files:")
        .skip(1)
        .map(str::to_string)
        .collect()
}

#[test]
fn scan_prints_totals_table() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("tree");
    root.child("a.txt").write_str("1234567890").unwrap();
    root.child("sub/b.txt").write_str("12345").unwrap();

    let expected =
        format!("Path:   {}\nSize:   15 bytes\nFiles:  2\nDirs:   2\n", root.path().display());

    command(&temp)
        .arg("scan")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(expected))
        .stderr(predicate::str::is_empty());
}

#[test]
fn scan_files_flag_lists_largest_entries() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("tree");
    root.child("a").write_str(&"x".repeat(10)).unwrap();
    root.child("b").write_str("x").unwrap();
    root.child("c").write_str(&"x".repeat(7)).unwrap();
    root.child("d").write_str("xxx").unwrap();

    let assert = command(&temp)
        .arg("scan")
        .arg("--files")
        .arg("-n")
        .arg("2")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Size:   21 bytes"))
        .stdout(predicate::str::contains("Files:  4"));

    let lines = top_file_lines(&assert.get_output().stdout);
    assert_eq!(lines.len(), 2, "unexpected top files: {lines:?}");
    assert!(lines[0].ends_with(&root.child("a").path().display().to_string()));
    assert!(lines[1].ends_with(&root.child("c").path().display().to_string()));
}

#[test]
fn scan_without_files_flag_omits_top_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("tree");
    root.child("a").write_str("data").unwrap();

    command(&temp)
        .arg("scan")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Top files").not());
}

#[test]
fn scan_missing_path_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    command(&temp)
        .arg("scan")
        .arg(temp.child("nope").path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: path not found"));
}

#[test]
fn scan_requires_a_path() {
    let temp = assert_fs::TempDir::new().unwrap();

    command(&temp).arg("scan").assert().failure();
}

#[test]
fn scan_json_renders_report() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("tree");
    root.child("one").write_str("1").unwrap();
    root.child("two").write_str("22").unwrap();

    let assert = command(&temp)
        .arg("scan")
        .arg("--json")
        .arg("--files")
        .arg("--top")
        .arg("0")
        .arg(root.path())
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["total_size"], 3);
    assert_eq!(value["total_files"], 2);
    assert_eq!(value["total_dirs"], 1);
    assert_eq!(value["top_files"][0]["size"], 2);
    assert_eq!(value["top_files"][1]["size"], 1);
    assert!(value["generated_at"].is_string());
}

#[test]
fn scan_relative_path_is_reported_as_given() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("tree");
    root.child("f").write_str("abc").unwrap();

    command(&temp)
        .current_dir(root.path())
        .arg("scan")
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Path:   .\n"))
        .stdout(predicate::str::contains("Size:   3 bytes"));
}

#[test]
fn scan_reads_top_from_environment() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("tree");
    for (name, size) in [("a", 5), ("b", 4), ("c", 3), ("d", 2)] {
        root.child(name).write_str(&"x".repeat(size)).unwrap();
    }

    let assert = command(&temp)
        .env("DUA_TOP", "3")
        .env("DUA_FILES", "true")
        .arg("scan")
        .arg(root.path())
        .assert()
        .success();

    assert_eq!(top_file_lines(&assert.get_output().stdout).len(), 3);
}

#[test]
fn scan_flag_overrides_config_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("config/dua/dua.toml").write_str("files = true\ntop = 1\n").unwrap();
    let root = temp.child("tree");
    for (name, size) in [("a", 5), ("b", 4), ("c", 3)] {
        root.child(name).write_str(&"x".repeat(size)).unwrap();
    }

    let from_file = command(&temp).arg("scan").arg(root.path()).assert().success();
    assert_eq!(top_file_lines(&from_file.get_output().stdout).len(), 1);

    let from_flag =
        command(&temp).arg("scan").arg("-n").arg("-1").arg(root.path()).assert().success();
    assert_eq!(top_file_lines(&from_flag.get_output().stdout).len(), 3);
}

#[test]
fn scan_rejects_malformed_config() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("config/dua/dua.toml").write_str("top = [").unwrap();
    let root = temp.child("tree");
    root.create_dir_all().unwrap();

    command(&temp)
        .arg("scan")
        .arg(root.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));
}

#[cfg(unix)]
#[test]
fn scan_warns_on_unreadable_directory_and_strict_fails() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("tree");
    root.child("ok.txt").write_str("abc").unwrap();
    let locked = root.child("locked");
    locked.child("inner.txt").write_str("hidden").unwrap();
    fs::set_permissions(locked.path(), fs::Permissions::from_mode(0o000)).unwrap();

    let readable_anyway = fs::read_dir(locked.path()).is_ok();
    if !readable_anyway {
        command(&temp)
            .arg("scan")
            .arg(root.path())
            .assert()
            .success()
            .stderr(predicate::str::starts_with("warn: "))
            .stderr(predicate::str::contains("locked"))
            .stdout(predicate::str::contains("Files:  1"));

        command(&temp)
            .arg("scan")
            .arg("--strict")
            .arg(root.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error: failed to read"));
    }

    fs::set_permissions(locked.path(), fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn version_flag_works() {
    let temp = assert_fs::TempDir::new().unwrap();

    command(&temp).arg("--version").assert().success();
}
