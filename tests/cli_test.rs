//! Integration tests for the envprofile binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command with no ambient mode signal or profile file.
fn envprofile() -> Command {
    let mut cmd = Command::new(cargo_bin("envprofile"));
    cmd.env_remove("NODE_ENV")
        .env_remove("ENVPROFILE_MODE")
        .env_remove("ENVPROFILE_PROFILES")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    envprofile()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("environment-specific"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    envprofile()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_shows_development_profile() -> Result<(), Box<dyn std::error::Error>> {
    envprofile()
        .assert()
        .success()
        .stdout(predicate::str::contains("apiUrl: http://localhost:3000"))
        .stderr(predicate::str::contains("# mode: development (default)"));
    Ok(())
}

#[test]
fn cli_url_production() -> Result<(), Box<dyn std::error::Error>> {
    envprofile()
        .arg("url")
        .env("NODE_ENV", "production")
        .assert()
        .success()
        .stdout("https://your-production-server.com\n");
    Ok(())
}

#[test]
fn cli_url_development() -> Result<(), Box<dyn std::error::Error>> {
    envprofile()
        .arg("url")
        .env("NODE_ENV", "development")
        .assert()
        .success()
        .stdout("http://localhost:3000\n");
    Ok(())
}

#[test]
fn cli_url_wrong_case_is_development() -> Result<(), Box<dyn std::error::Error>> {
    envprofile()
        .arg("url")
        .env("NODE_ENV", "PRODUCTION")
        .assert()
        .success()
        .stdout("http://localhost:3000\n")
        .stderr(predicate::str::contains("\"PRODUCTION\""));
    Ok(())
}

#[test]
fn cli_quiet_suppresses_warning() -> Result<(), Box<dyn std::error::Error>> {
    envprofile()
        .args(["url", "--quiet"])
        .env("NODE_ENV", "staging")
        .assert()
        .success()
        .stdout("http://localhost:3000\n")
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_mode_flag_overrides_env() -> Result<(), Box<dyn std::error::Error>> {
    envprofile()
        .args(["--mode", "production", "url"])
        .env("NODE_ENV", "development")
        .assert()
        .success()
        .stdout("https://your-production-server.com\n");
    Ok(())
}

#[test]
fn cli_mode_env_var_selects_production() -> Result<(), Box<dyn std::error::Error>> {
    envprofile()
        .arg("url")
        .env("ENVPROFILE_MODE", "production")
        .assert()
        .success()
        .stdout("https://your-production-server.com\n");
    Ok(())
}

#[test]
fn cli_mode_flag_beats_mode_env_var() -> Result<(), Box<dyn std::error::Error>> {
    envprofile()
        .args(["url", "--mode", "development"])
        .env("ENVPROFILE_MODE", "production")
        .assert()
        .success()
        .stdout("http://localhost:3000\n");
    Ok(())
}

#[test]
fn cli_show_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = envprofile()
        .args(["show", "--json"])
        .env("NODE_ENV", "production")
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        value,
        serde_json::json!({ "apiUrl": "https://your-production-server.com" })
    );
    Ok(())
}

#[test]
fn cli_mode_reports_source() -> Result<(), Box<dyn std::error::Error>> {
    envprofile()
        .arg("mode")
        .env("NODE_ENV", "production")
        .assert()
        .success()
        .stdout("production\n")
        .stderr(predicate::str::contains("NODE_ENV environment variable"));
    Ok(())
}

#[test]
fn cli_env_file_supplies_mode() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let env_path = temp.path().join(".env");
    fs::write(&env_path, "# deployment\nNODE_ENV=production\n")?;

    envprofile()
        .args(["mode", "--json", "--env-file"])
        .arg(&env_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"production\""))
        .stdout(predicate::str::contains("env file"));
    Ok(())
}

#[test]
fn cli_env_var_beats_env_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let env_path = temp.path().join(".env");
    fs::write(&env_path, "NODE_ENV=production\n")?;

    envprofile()
        .arg("url")
        .arg("--env-file")
        .arg(&env_path)
        .env("NODE_ENV", "development")
        .assert()
        .success()
        .stdout("http://localhost:3000\n");
    Ok(())
}

#[test]
fn cli_missing_env_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    envprofile()
        .args(["url", "--env-file", "/nonexistent/.env"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Env file not found"));
    Ok(())
}

#[test]
fn cli_profiles_file_supplies_urls() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let profiles = temp.path().join("profiles.yml");
    fs::write(
        &profiles,
        "development:\n  api_url: http://127.0.0.1:8080\nproduction:\n  api_url: https://api.example.com\n",
    )?;

    envprofile()
        .arg("url")
        .arg("--profiles")
        .arg(&profiles)
        .env("NODE_ENV", "production")
        .assert()
        .success()
        .stdout("https://api.example.com\n");
    Ok(())
}

#[test]
fn cli_profiles_from_env_var() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let profiles = temp.path().join("profiles.yml");
    fs::write(
        &profiles,
        "development:\n  api_url: http://127.0.0.1:8080\nproduction:\n  api_url: https://api.example.com\n",
    )?;

    envprofile()
        .arg("url")
        .env("ENVPROFILE_PROFILES", &profiles)
        .assert()
        .success()
        .stdout("http://127.0.0.1:8080\n");
    Ok(())
}

#[test]
fn cli_invalid_profiles_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let profiles = temp.path().join("profiles.yml");
    fs::write(&profiles, "development:\n  api_url: \"\"\nproduction:\n  api_url: https://a\n")?;

    envprofile()
        .arg("show")
        .arg("--profiles")
        .arg(&profiles)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid profile"));
    Ok(())
}
