use serial_test::serial;
use std::io::Write;
use twentyone_cli::run;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn clear_env() {
    for v in [
        "TWENTYONE_CONFIG",
        "TWENTYONE_SEED",
        "TWENTYONE_BALANCE",
        "TWENTYONE_BET_STEP",
        "TWENTYONE_RESTART_DELAY_MS",
    ] {
        // SAFETY: env mutation is confined to #[serial] tests
        unsafe { std::env::remove_var(v) };
    }
}

#[test]
#[serial]
fn deal_prints_both_hands() {
    clear_env();
    let (code, out, err) = run_args(&["twentyone", "deal", "--seed", "1"]);
    assert_eq!(code, 0);
    assert!(out.contains("Dealer: ["));
    assert!(out.contains("Player: ["));
    assert!(out.contains("Balance: 1000"));
    assert!(err.is_empty());
}

#[test]
#[serial]
fn deal_is_reproducible_from_the_command_line() {
    clear_env();
    let (_, a, _) = run_args(&["twentyone", "deal", "--seed", "2024"]);
    let (_, b, _) = run_args(&["twentyone", "deal", "--seed", "2024"]);
    assert_eq!(a, b);
}

#[test]
#[serial]
fn deal_reads_balance_and_seed_from_the_environment() {
    clear_env();
    // SAFETY: env mutation is confined to #[serial] tests
    unsafe {
        std::env::set_var("TWENTYONE_BALANCE", "250");
        std::env::set_var("TWENTYONE_SEED", "2024");
    }
    let (code, out, _) = run_args(&["twentyone", "deal"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("Seed: 2024"));
    assert!(out.contains("Balance: 250"));

    let (_, flagged, _) = run_args(&["twentyone", "deal", "--seed", "5"]);
    assert!(flagged.starts_with("Seed: 5"));
    clear_env();
}

#[test]
#[serial]
fn deal_with_invalid_config_exits_with_error() {
    clear_env();
    // SAFETY: env mutation is confined to #[serial] tests
    unsafe { std::env::set_var("TWENTYONE_BALANCE", "0") };
    let (code, out, err) = run_args(&["twentyone", "deal", "--seed", "1"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert_eq!(err.matches("Invalid configuration").count(), 1);
    clear_env();
}

#[test]
fn bad_seed_is_a_usage_error() {
    let (code, out, err) = run_args(&["twentyone", "deal", "--seed", "soon"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("--seed"));
}

#[test]
#[serial]
fn cfg_reads_the_config_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "starting_balance = 250\nrestart_delay_ms = 0").unwrap();
    // SAFETY: env mutation is confined to #[serial] tests
    unsafe { std::env::set_var("TWENTYONE_CONFIG", file.path()) };

    let (code, out, _) = run_args(&["twentyone", "cfg"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["starting_balance"]["value"], 250);
    assert_eq!(json["starting_balance"]["source"], "file");
    assert_eq!(json["restart_delay_ms"]["value"], 0);
    assert_eq!(json["bet_step"]["source"], "default");
    clear_env();
}

#[test]
#[serial]
fn cfg_with_missing_file_exits_with_error() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    // SAFETY: env mutation is confined to #[serial] tests
    unsafe { std::env::set_var("TWENTYONE_CONFIG", dir.path().join("absent.toml")) };

    let (code, out, err) = run_args(&["twentyone", "cfg"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert_eq!(err.matches("Invalid configuration").count(), 1);
    clear_env();
}
