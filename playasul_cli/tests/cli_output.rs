use std::{env, fs, process::Command};

const URL: &str = "https://example.com/audio.mp3";

fn norm_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "")
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_playasul_cli"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn generate_prints_session_json() {
    let out = run(&["generate", "--url", URL, "--seed", "123456"]);
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["seed"], 123456);
    assert!(v["sessionId"].is_string());
    assert!(v["beatmap"]["notes"].is_array());
    assert_eq!(v["beatmap"]["energyEnvelope"].as_array().unwrap().len(), 32);
    assert_eq!(v["presets"].as_array().unwrap().len(), 3);
}

#[test]
fn generate_same_seed_same_beatmap() {
    let a = run(&["generate", "--url", URL, "--seed", "42"]);
    let b = run(&["generate", "--url", URL, "--seed", "42"]);
    let a: serde_json::Value = serde_json::from_slice(&a.stdout).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&b.stdout).unwrap();
    assert_eq!(a["beatmap"], b["beatmap"]);
    // Fresh session every time.
    assert_ne!(a["sessionId"], b["sessionId"]);
}

#[test]
fn generate_writes_output_file() {
    let dir = env::temp_dir().join(format!("playasul_cli_generate_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let output_path = dir.join("session.json");

    let out = run(&[
        "generate",
        "--url",
        URL,
        "--seed",
        "7",
        "-o",
        output_path.to_str().unwrap(),
    ]);
    assert!(out.status.success());

    let json = fs::read_to_string(&output_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(v.get("beatmap").is_some());
    assert!(v.get("audioUrl").is_some());
}

#[test]
fn invalid_url_reports_validation_error() {
    let out = run(&["generate", "--url", "ftp://example.com/a.mp3"]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));

    let stderr = norm_newlines(&String::from_utf8_lossy(&out.stderr));
    assert!(stderr.contains("Error: session creation failed: ftp://example.com/a.mp3"));
    assert!(stderr.contains("Caused by:"));
    assert!(stderr.contains("invalid input: url must be a valid http(s) URL"));
}

#[test]
fn judge_prints_classification() {
    let out = run(&["judge", "120"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["judgement"], "late");
    assert_eq!(v["points"], 70);

    let out = run(&["judge", "-91"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["judgement"], "miss");
    assert_eq!(v["points"], 0);
}

#[test]
fn replay_demo_reports_identical_beatmap() {
    let out = run(&["replay-demo", "--url", URL, "--seed", "99"]);
    assert!(out.status.success());
    let stdout = norm_newlines(&String::from_utf8_lossy(&out.stdout));
    assert!(stdout.contains("identical beatmap: true"));
}

#[test]
fn perfect_autoplay_scores_full_accuracy() {
    let out = run(&["autoplay", "--url", URL, "--seed", "123456"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["accuracy"], 1.0);
    assert_eq!(v["missCount"], 0);
    assert_eq!(v["hitCount"], v["totalNotes"]);
    assert_eq!(v["bestCombo"], v["totalNotes"]);
}

#[test]
fn late_autoplay_with_skips() {
    let out = run(&[
        "autoplay",
        "--url",
        URL,
        "--seed",
        "123456",
        "--offset-ms",
        "120",
        "--skip-every",
        "4",
    ]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(v["missCount"].as_u64().unwrap() > 0);
    assert!(v["lateCount"].as_u64().unwrap() > 0);
    let total = v["totalNotes"].as_u64().unwrap();
    let judged = v["hitCount"].as_u64().unwrap()
        + v["lateCount"].as_u64().unwrap()
        + v["missCount"].as_u64().unwrap();
    assert_eq!(judged, total);
}

#[test]
fn bad_config_file_is_reported() {
    let path = env::temp_dir().join(format!("playasul_cli_bad_config_{}.json", std::process::id()));
    fs::write(&path, r#"{ "beatmap_timeout_ms": 0 }"#).unwrap();

    let out = run(&["--config", path.to_str().unwrap(), "judge", "0"]);
    assert!(!out.status.success());
    let stderr = norm_newlines(&String::from_utf8_lossy(&out.stderr));
    assert!(stderr.contains("failed to load config"));
    assert!(stderr.contains("beatmap_timeout_ms must be > 0"));
}

#[test]
fn help_mentions_subcommands() {
    let out = run(&["--help"]);
    assert!(out.status.success());
    let stdout = norm_newlines(&String::from_utf8_lossy(&out.stdout));
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("autoplay"));
}
