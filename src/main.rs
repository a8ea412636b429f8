//! PeakFlow simulator entry point: CLI wiring and config-driven runs.

use std::path::Path;
use std::process;

use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

use peakflow_sim::actions::{self, format_suggested_time};
use peakflow_sim::config::ScenarioConfig;
use peakflow_sim::io::export::export_csv;
use peakflow_sim::savings::savings_per_event;
use peakflow_sim::sim::{Engine, Scenario, SimulationResult, TrafficLight};

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    scenario: Option<Scenario>,
    participation: Option<f64>,
    shift: Option<f64>,
    hour: Option<u32>,
    date: Option<NaiveDate>,
    actions: Option<usize>,
    telemetry_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("peakflow-sim: district water demand-response simulator");
    eprintln!();
    eprintln!("Usage: peakflow-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load run configuration from a TOML file");
    eprintln!(
        "  --preset <name>          Use a built-in preset ({})",
        ScenarioConfig::PRESETS.join(", ")
    );
    eprintln!("  --scenario <name>        Override the day scenario");
    eprintln!("  --participation <f64>    Override the participation rate (0.0-1.0)");
    eprintln!("  --shift <f64>            Override the shift fraction (0.0-1.0)");
    eprintln!("  --hour <0-23>            Hour to recommend actions for");
    eprintln!("  --date <YYYY-MM-DD>      Date to recommend actions for (default: today)");
    eprintln!("  --actions <n>            Number of actions to recommend");
    eprintln!("  --telemetry-out <path>   Export the hourly timeline to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server after simulation");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the normal_day preset is used.");
}

/// Returns the value following flag `args[*i]`, or exits with an error.
fn flag_value<'a>(args: &'a [String], i: &mut usize, what: &str) -> &'a str {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(v) => v.as_str(),
        None => {
            eprintln!("error: {flag} requires {what}");
            process::exit(1);
        }
    }
}

/// Parses the value following a flag, or exits with an error.
fn parse_flag<T: std::str::FromStr>(args: &[String], i: &mut usize, what: &str) -> T {
    let flag = args[*i].clone();
    let raw = flag_value(args, i, what);
    raw.parse::<T>().unwrap_or_else(|_| {
        eprintln!("error: {flag} value \"{raw}\" is not {what}");
        process::exit(1);
    })
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        scenario: None,
        participation: None,
        shift: None,
        hour: None,
        date: None,
        actions: None,
        telemetry_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                cli.config_path = Some(flag_value(&args, &mut i, "a path argument").to_string());
            }
            "--preset" => {
                cli.preset = Some(flag_value(&args, &mut i, "a name argument").to_string());
            }
            "--scenario" => {
                let raw = flag_value(&args, &mut i, "a scenario name");
                match raw.parse::<Scenario>() {
                    Ok(s) => cli.scenario = Some(s),
                    Err(e) => {
                        eprintln!("error: {e}");
                        process::exit(1);
                    }
                }
            }
            "--participation" => {
                cli.participation = Some(parse_flag(&args, &mut i, "a valid f64"));
            }
            "--shift" => {
                cli.shift = Some(parse_flag(&args, &mut i, "a valid f64"));
            }
            "--hour" => {
                cli.hour = Some(parse_flag(&args, &mut i, "an hour (0-23)"));
            }
            "--date" => {
                let raw = flag_value(&args, &mut i, "a YYYY-MM-DD date");
                match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                    Ok(d) => cli.date = Some(d),
                    Err(_) => {
                        eprintln!("error: --date value \"{raw}\" is not a YYYY-MM-DD date");
                        process::exit(1);
                    }
                }
            }
            "--actions" => {
                cli.actions = Some(parse_flag(&args, &mut i, "a valid count"));
            }
            "--telemetry-out" => {
                cli.telemetry_out = Some(flag_value(&args, &mut i, "a path argument").to_string());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                cli.port = parse_flag(&args, &mut i, "a valid u16");
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Loads the configuration and applies CLI overrides.
fn load_config(cli: &CliArgs) -> ScenarioConfig {
    // --config takes priority, then --preset, then the normal_day default
    let loaded = if let Some(ref path) = cli.config_path {
        ScenarioConfig::from_toml_file(Path::new(path))
    } else if let Some(ref name) = cli.preset {
        ScenarioConfig::from_preset(name)
    } else {
        Ok(ScenarioConfig::default())
    };
    let mut cfg = loaded.unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    if let Some(scenario) = cli.scenario {
        cfg.simulation.scenario = scenario;
    }
    if let Some(p) = cli.participation {
        cfg.simulation.participation_rate = p;
    }
    if let Some(s) = cli.shift {
        cfg.simulation.shift_fraction = s;
    }
    if let Some(hour) = cli.hour {
        cfg.selector.hour = hour;
    }
    if cli.date.is_some() {
        cfg.selector.date = cli.date;
    }
    if let Some(n) = cli.actions {
        cfg.selector.count = n;
    }

    cfg
}

/// Prints the recommended actions for the configured hour.
///
/// The grid status is the shifted classification of that hour.
fn print_actions(cfg: &ScenarioConfig, result: &SimulationResult) {
    let hour = cfg.selector.hour;
    let date = cfg.selector.date_or_today();
    let status = usize::try_from(hour)
        .ok()
        .and_then(|h| result.hourly.get(h))
        .map_or(TrafficLight::Green, |r| r.color_flex);

    let selected = match actions::select_actions(hour, status, date, cfg.selector.count) {
        Ok(selected) => selected,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    println!("\n--- Recommended Actions ({hour}:00, {date}, {status}) ---");
    if selected.is_empty() {
        println!("No actions needed.");
    }
    for a in selected {
        println!(
            "- {}: {} [{}, {} pts, saves €{:.3}]",
            a.title,
            a.description,
            format_suggested_time(a.suggested_time.start, hour, date),
            a.points,
            savings_per_event(a),
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = parse_args();
    let cfg = load_config(&cli);

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let engine = Engine::new(cfg.district.clone(), cfg.simulation.strategy);
    let result = engine.run(cfg.simulation.to_config());

    for r in &result.hourly {
        println!("{r}");
    }

    println!("\n{}", result.stats);

    print_actions(&cfg, &result);

    if let Some(ref path) = cli.telemetry_out {
        if let Err(e) = export_csv(&result.hourly, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Timeline written to {path}");
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(peakflow_sim::api::AppState::from_config(&cfg));
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(peakflow_sim::api::serve(state, addr)) {
            eprintln!("error: API server failed: {e}");
            process::exit(1);
        }
    }
}
