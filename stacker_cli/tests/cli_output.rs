use std::{
    env,
    fs,
    path::PathBuf,
    process::{Command, Output},
};

fn norm_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "")
}

fn temp_store(tag: &str) -> PathBuf {
    let path = env::temp_dir().join(format!(
        "stacker_cli_{}_{}.json",
        tag,
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    path
}

fn stacker(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_stacker");
    Command::new(exe).args(args).output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    norm_newlines(&String::from_utf8_lossy(&output.stdout))
}

fn stderr_of(output: &Output) -> String {
    norm_newlines(&String::from_utf8_lossy(&output.stderr))
}

#[test]
fn winning_round_prints_events_and_stats() {
    let store = temp_store("win");
    let store_arg = store.to_str().unwrap();

    let mut args = vec!["play", "--name", "Ada", "--difficulty", "easy", "--store", store_arg];
    args.extend(["200"; 8]);
    let output = stacker(&args);

    assert!(output.status.success(), "{}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("player Ada (new)"));
    assert!(stdout.contains("round Easy started at 4800ms"));
    assert!(stdout.contains("row 0 stopped at 200: +50 (next speed 4200ms)"));
    assert!(stdout.contains("won Easy (+400)"));
    assert!(stdout.contains("Game Score: 1086"));
    assert!(stdout.contains("Total Score: 1086"));
    assert!(store.exists());

    let _ = fs::remove_file(&store);
}

#[test]
fn losing_round_reports_leftover_stops() {
    let store = temp_store("lose");
    let store_arg = store.to_str().unwrap();

    let output = stacker(&[
        "play", "--name", "Ada", "-d", "hard", "--store", store_arg, "100", "-20", "100", "100",
    ]);

    assert!(output.status.success(), "{}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("lost Hard at row 1"));
    assert!(stdout.contains("ignored 2 stops after the round ended"));
    assert!(stdout.contains("Total Score: 75"));

    let _ = fs::remove_file(&store);
}

#[test]
fn unfinished_round_is_reported() {
    let store = temp_store("unfinished");
    let output = stacker(&[
        "play", "--name", "Ada", "--store", store.to_str().unwrap(), "10", "20",
    ]);

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("round unfinished at row 2"));

    let _ = fs::remove_file(&store);
}

#[test]
fn stats_accumulate_across_invocations() {
    let store = temp_store("accumulate");
    let store_arg = store.to_str().unwrap();

    for _ in 0..2 {
        let output = stacker(&["play", "-n", "Grace", "-d", "normal", "--store", store_arg, "0", "300"]);
        assert!(output.status.success());
    }

    let output = stacker(&["stats", "--name", "Grace", "--store", store_arg, "--json"]);
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(v["name"], "Grace");
    assert_eq!(v["session_score"], 60);
    assert_eq!(v["lifetime_score"], 120);
    let normal = v["per_level"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["level"] == "Normal")
        .unwrap();
    assert_eq!(normal["losses"], 2);
    assert_eq!(normal["wins"], 0);

    // The store keeps the legacy field names.
    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store).unwrap()).unwrap();
    let record: serde_json::Value =
        serde_json::from_str(on_disk["Grace"].as_str().unwrap()).unwrap();
    assert_eq!(record["CombinedScore"], 120);
    assert_eq!(record["GameStats"]["Normal"], serde_json::json!([0, 2]));

    let _ = fs::remove_file(&store);
}

#[test]
fn stats_for_unknown_player_is_fresh_and_not_saved() {
    let store = temp_store("unknown");
    let output = stacker(&["stats", "--name", "Nobody", "--store", store.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Nobody's Stats"));
    assert!(stdout.contains("Total Score: 0"));
    assert!(!store.exists());
}

#[test]
fn blank_name_is_rejected() {
    let store = temp_store("blank");
    let output = stacker(&["play", "--name", "  ", "--store", store.to_str().unwrap(), "10"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = stderr_of(&output);
    assert!(stderr.contains("Error: cannot resolve player"));
    assert!(stderr.contains("Caused by:"));
    assert!(stderr.contains("player name must not be blank"));
    assert!(!store.exists());
}

#[test]
fn unknown_difficulty_is_a_usage_error() {
    let output = stacker(&["play", "--name", "Ada", "--difficulty", "medium", "10"]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("unknown difficulty level"));
}

#[test]
fn config_file_changes_marker_width() {
    let store = temp_store("config");
    let config = env::temp_dir().join(format!("stacker_cli_config_{}.json", std::process::id()));
    fs::write(&config, r#"{ "marker_width": 5 }"#).unwrap();

    let output = stacker(&[
        "play",
        "--name",
        "Ada",
        "--store",
        store.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "100",
        "104",
    ]);

    assert!(output.status.success());
    // Window around 100 with width 5 is (94, 104).
    assert!(stdout_of(&output).contains("lost Easy at row 1"));

    let _ = fs::remove_file(&store);
    let _ = fs::remove_file(&config);
}

#[test]
fn help_mentions_subcommands() {
    let output = stacker(&["--help"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);

    // clap help wording may change; only check the subcommands are listed.
    assert!(stdout.contains("play"));
    assert!(stdout.contains("stats"));
}
