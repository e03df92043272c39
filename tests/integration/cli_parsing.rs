//! Command-line parsing for every subcommand

use clap::Parser;
use tiered_fee_calculator::cli::{Cli, Commands};
use tiered_fee_calculator::report::{DisplayUnit, OutputFormat};
use tiered_fee_calculator::FeeTier;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["tiered-fee-calculator"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn parse_err(args: &[&str]) -> bool {
    let mut argv = vec!["tiered-fee-calculator"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).is_err()
}

#[test]
fn test_quote_defaults() {
    let cli = parse(&["quote", "--amount-sats", "1000000"]);
    let Commands::Quote(command) = cli.command else {
        panic!("expected quote command");
    };

    assert_eq!(command.tier, FeeTier::Priority);
    assert_eq!(command.format, OutputFormat::Console);
    assert_eq!(command.unit, DisplayUnit::Sats);
    assert!(!command.snapshot.offline);

    let request = command.request().unwrap();
    assert_eq!(request.amount_sats, 1_000_000);
    assert_eq!(request.congestion_override, None);
}

#[test]
fn test_quote_with_btc_amount_and_alias_tier() {
    let cli = parse(&[
        "quote",
        "--btc",
        "0.1",
        "--tier",
        "economyFee",
        "--offline",
        "--format",
        "json",
    ]);
    let Commands::Quote(command) = cli.command else {
        panic!("expected quote command");
    };

    assert_eq!(command.tier, FeeTier::Economy);
    assert_eq!(command.format, OutputFormat::Json);
    assert!(command.snapshot.offline);
    assert_eq!(command.request().unwrap().amount_sats, 10_000_000);
}

#[test]
fn test_quote_rejects_bad_btc_amount() {
    let cli = parse(&["quote", "--btc", "0.000000001"]);
    let Commands::Quote(command) = cli.command else {
        panic!("expected quote command");
    };
    assert!(command.request().is_err());
}

#[test]
fn test_quote_simulation_flags() {
    let cli = parse(&["quote", "--amount-sats", "50000", "--slider", "25"]);
    let Commands::Quote(command) = cli.command else {
        panic!("expected quote command");
    };
    assert_eq!(command.request().unwrap().congestion_override, Some(26.0));

    let cli = parse(&["quote", "--amount-sats", "50000", "--simulate-rate", "12.5"]);
    let Commands::Quote(command) = cli.command else {
        panic!("expected quote command");
    };
    assert_eq!(command.request().unwrap().congestion_override, Some(12.5));
}

#[test]
fn test_conflicting_arguments_rejected() {
    // Amount is required, exactly once
    assert!(parse_err(&["quote"]));
    assert!(parse_err(&["quote", "--amount-sats", "1000000", "--btc", "0.01"]));
    assert!(parse_err(&[
        "quote",
        "--amount-sats",
        "1000000",
        "--slider",
        "10",
        "--simulate-rate",
        "5"
    ]));
    assert!(parse_err(&[
        "quote",
        "--amount-sats",
        "1000000",
        "--usd-price",
        "60000",
        "--fetch-price"
    ]));
    assert!(parse_err(&["quote", "--amount-sats", "1000000", "--tier", "turbo"]));
}

#[test]
fn test_table_command() {
    let cli = parse(&["table", "--amount-sats", "2500000", "--offline", "--unit", "btc"]);
    let Commands::Table(command) = cli.command else {
        panic!("expected table command");
    };
    assert_eq!(command.amount.to_sats().unwrap(), 2_500_000);
    assert_eq!(command.unit, DisplayUnit::Btc);
    assert!(command.snapshot.offline);
}

#[test]
fn test_scale_conversions() {
    let Commands::Scale(command) = parse(&["scale", "--position", "60"]).command else {
        panic!("expected scale command");
    };
    assert_eq!(command.convert().unwrap(), (60, 105));

    let Commands::Scale(command) = parse(&["scale", "--rate", "2"]).command else {
        panic!("expected scale command");
    };
    assert_eq!(command.convert().unwrap(), (1, 2));

    let Commands::Scale(command) = parse(&["scale", "--rate", "9999"]).command else {
        panic!("expected scale command");
    };
    assert_eq!(command.convert().unwrap(), (100, 2000));
}

#[test]
fn test_scale_requires_exactly_one_side() {
    assert!(parse_err(&["scale"]));
    assert!(parse_err(&["scale", "--rate", "5", "--position", "10"]));
}

#[test]
fn test_watch_command() {
    let cli = parse(&[
        "watch",
        "--amount-sats",
        "750000",
        "--tier",
        "standard",
        "--interval-seconds",
        "30",
        "--iterations",
        "2",
    ]);
    let Commands::Watch(command) = cli.command else {
        panic!("expected watch command");
    };
    assert_eq!(command.tier, FeeTier::Standard);
    assert_eq!(command.interval_seconds, Some(30));
    assert_eq!(command.iterations, Some(2));

    assert!(parse_err(&["watch", "--amount-sats", "750000", "--interval-seconds", "0"]));
}

#[test]
fn test_global_config_flag() {
    let cli = parse(&["rates", "--config", "/tmp/fees.toml"]);
    assert!(matches!(cli.command, Commands::Rates(_)));
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/fees.toml"))
    );

    let cli = parse(&["--config", "/tmp/fees.toml", "config"]);
    assert!(matches!(cli.command, Commands::Config));
}
