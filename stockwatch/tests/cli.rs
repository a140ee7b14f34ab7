use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stockwatch() -> Command {
    Command::cargo_bin("stockwatch").unwrap()
}

#[test]
fn missing_config_is_created_and_process_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.ini");

    stockwatch()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("已创建默认配置文件"))
        .stdout(predicate::str::contains("请编辑后重新运行程序"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("codes = sh601318,sz000001,sh600036,sz000858"));
    assert!(written.contains("refresh_interval = 5"));
}

#[test]
fn default_config_path_is_relative_to_working_dir() {
    let dir = TempDir::new().unwrap();

    stockwatch()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("config.ini"));

    assert!(dir.path().join("config.ini").is_file());
}

#[test]
fn empty_code_list_exits_without_polling() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.ini");
    std::fs::write(&path, "[Stocks]\ncodes = , ,\n\n[Settings]\nrefresh_interval = 5\n").unwrap();

    stockwatch()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("配置文件中未找到有效的股票代码"))
        .stdout(predicate::str::contains("\x1b[2J").not());
}

#[test]
fn zero_refresh_interval_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.ini");
    std::fs::write(&path, "[Stocks]\ncodes = sh601318\n\n[Settings]\nrefresh_interval = 0\n").unwrap();

    stockwatch()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("refresh_interval"));
}
