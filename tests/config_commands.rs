use assert_cmd::Command;
use predicates::prelude::predicate;

mod common;

#[test]
fn config_defaults_to_the_local_scope() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let dir_absolute_path = dir.path().canonicalize()?.display().to_string();

    let mut sut = Command::cargo_bin("cask")?;
    sut.current_dir(dir.path()).arg("config");

    sut.assert()
        .success()
        .stdout(predicate::str::contains(dir_absolute_path))
        .stdout(predicate::str::ends_with(".cask/config"));

    Ok(())
}

#[test]
fn config_global_scope_lives_in_the_home_directory() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let home = assert_fs::TempDir::new()?;

    let mut sut = Command::cargo_bin("cask")?;
    sut.current_dir(dir.path())
        .env("HOME", home.path())
        .arg("config")
        .arg("--global");

    sut.assert()
        .success()
        .stdout(predicate::str::ends_with(".caskconfig"));

    Ok(())
}

#[test]
fn config_system_scope_is_fixed() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;

    let mut sut = Command::cargo_bin("cask")?;
    sut.current_dir(dir.path()).arg("config").arg("--system");

    sut.assert().success().stdout("/etc/caskconfig");

    Ok(())
}
