//! Integration tests that run the CLI binary.

fn bin() -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_plant", "-", "doctor"));
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("PLANT_DOCTOR_URL");
    cmd.env_remove("PLANT_DOCTOR_TIMEOUT_SECS");
    cmd
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty());
    assert!(
        stdout.contains("plant-doctor") || stdout.contains("analyze"),
        "expected usage text in output"
    );
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("plant-doctor"));
}

#[test]
fn cli_config_shows_default_endpoint() {
    // Run from temp dir so dotenv() won't load .env from project root
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("config")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("http://localhost:9087"),
        "expected default backend URL, got: {}",
        stdout
    );
}

#[test]
fn cli_rejects_invalid_timeout() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("config")
        .env("PLANT_DOCTOR_TIMEOUT_SECS", "zero")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        !output.status.success(),
        "expected failure for malformed timeout"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("PLANT_DOCTOR_TIMEOUT_SECS"),
        "expected timeout error message, got: {}",
        stderr
    );
}

#[test]
fn cli_analyze_missing_file_fails() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("analyze")
        .arg("no-such-leaf.png")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");

    assert!(!output.status.success());
}
