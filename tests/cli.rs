use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary with an empty config home so user settings don't leak in.
fn huewheel_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("huewheel").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn huewheel_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    huewheel_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hue/saturation color wheel picker"));
}

#[test]
fn pick_inside_wheel_reports_color() {
    let temp = TempDir::new().unwrap();
    // Default marker half-size is 12, so the wheel center is at (412, 412)
    huewheel_cmd(&temp)
        .args(["pick", "612", "412"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hue=0.0 saturation=0.406"));
}

#[test]
fn pick_outside_wheel_is_clamped() {
    let temp = TempDir::new().unwrap();
    huewheel_cmd(&temp)
        .args(["pick", "412", "-200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hue=270.0 saturation=0.961"));
}

#[test]
fn locate_places_blue_on_the_rim() {
    let temp = TempDir::new().unwrap();
    huewheel_cmd(&temp)
        .args(["locate", "blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("offset:"))
        .stdout(predicate::str::contains("(Blue)"));
}

#[test]
fn locate_rejects_unknown_colors() {
    let temp = TempDir::new().unwrap();
    huewheel_cmd(&temp)
        .args(["locate", "chartreuse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color 'chartreuse'"));
}

#[test]
fn replay_reports_each_release() {
    let temp = TempDir::new().unwrap();
    let events = temp.path().join("events.txt");
    std::fs::write(
        &events,
        "# drag to the right, then tap the center\npress 412 412\nmove 512 412\nrelease 612 412\ncancel\nrelease 412 412\n",
    )
    .unwrap();

    huewheel_cmd(&temp)
        .arg("replay")
        .arg(&events)
        .assert()
        .success()
        .stdout(predicate::str::contains("hue=0.0 saturation=0.406"))
        .stdout(predicate::str::contains("#ffffff hue=0.0 saturation=0.000"));
}

#[test]
fn replay_rejects_unknown_phase() {
    let temp = TempDir::new().unwrap();
    huewheel_cmd(&temp)
        .arg("replay")
        .write_stdin("hover 1 2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid event on line 1"));
}

#[test]
fn render_writes_png() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("wheel.png");

    huewheel_cmd(&temp)
        .args(["render", "--color", "#ff8000", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn config_file_changes_wheel_layout() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[selector]\nhalf_width = 0\nhalf_height = 0\n").unwrap();

    // Without the inset the wheel center sits at (400, 400)
    huewheel_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .args(["pick", "600", "400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hue=0.0 saturation=0.406"));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();

    huewheel_cmd(&temp)
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(temp.path().join("huewheel").join("config.toml").exists());

    huewheel_cmd(&temp)
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
