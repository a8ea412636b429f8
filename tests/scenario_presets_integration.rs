use std::process::Command;

#[test]
fn scenario_files_run_via_cli_and_produce_distinct_red_hours() {
    let normal = run_and_parse_red_hours(&["--config", "scenarios/normal_day.toml"]);
    let hot = run_and_parse_red_hours(&["--config", "scenarios/hot_day.toml"]);
    let football = run_and_parse_red_hours(&["--config", "scenarios/football_day.toml"]);
    let combined = run_and_parse_red_hours(&["--config", "scenarios/combined_day.toml"]);

    assert_eq!(normal, 6, "normal day red hours");
    assert_eq!(hot, 7, "hot day red hours");
    assert_eq!(football, 6, "football day red hours");
    assert_eq!(combined, 7, "combined day red hours");
}

#[test]
fn presets_match_scenario_files() {
    for name in ["normal_day", "hot_day", "football_day", "combined_day"] {
        let from_preset = run_and_parse_red_hours(&["--preset", name]);
        let path = format!("scenarios/{name}.toml");
        let from_file = run_and_parse_red_hours(&["--config", &path]);
        assert_eq!(from_preset, from_file, "{name}");
    }
}

#[test]
fn recommendations_follow_the_configured_context() {
    let stdout = run_ok(&[
        "--preset",
        "normal_day",
        "--hour",
        "20",
        "--date",
        "2024-01-15",
        "--actions",
        "2",
    ]);
    assert!(stdout.contains("--- Recommended Actions (20:00, 2024-01-15, Red) ---"));
    let listed = stdout
        .lines()
        .skip_while(|l| !l.starts_with("--- Recommended Actions"))
        .skip(1)
        .filter(|l| l.starts_with("- "))
        .count();
    assert_eq!(listed, 2);
}

#[test]
fn telemetry_out_writes_csv() {
    let path = std::env::temp_dir().join(format!("peakflow-sim-{}.csv", std::process::id()));
    let path_str = path.to_string_lossy().to_string();
    run_ok(&["--preset", "hot_day", "--telemetry-out", &path_str]);

    let csv = std::fs::read_to_string(&path).expect("CSV file should exist");
    let _ = std::fs::remove_file(&path);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some(
            "hour,demand,demand_flex,tank_level,tank_level_flex,\
             stress_index,stress_index_flex,color,color_flex"
        )
    );
    assert_eq!(lines.count(), 24);
}

#[test]
fn invalid_arguments_exit_with_code_1() {
    for args in [
        &["--preset", "rainy_day"][..],
        &["--hour", "24"][..],
        &["--participation", "1.5"][..],
        &["--date", "15/01/2024"][..],
        &["--bogus"][..],
    ] {
        let output = Command::new(env!("CARGO_BIN_EXE_peakflow-sim"))
            .args(args)
            .output()
            .expect("peakflow-sim process should run");
        assert_eq!(output.status.code(), Some(1), "args {args:?}");
        assert!(!output.stderr.is_empty(), "args {args:?} should explain the error");
    }
}

fn run_ok(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_peakflow-sim"))
        .args(args)
        .output()
        .expect("peakflow-sim process should run");

    assert!(
        output.status.success(),
        "run failed for {args:?}: stderr={} ",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout should be valid UTF-8")
}

fn run_and_parse_red_hours(args: &[&str]) -> usize {
    let stdout = run_ok(args);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Red hours:"))
        .and_then(|rest| rest.trim().parse().ok())
        .unwrap_or_else(|| panic!("missing \"Red hours:\" line in output:\n{stdout}"))
}
