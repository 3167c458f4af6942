//! Unit tests for CLI commands

use crate::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_generate_command_parses() {
    let cli = Cli::try_parse_from([
        "modelgen",
        "generate",
        "--model",
        "model.yaml",
        "--output",
        "out",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            model,
            settings,
            output,
            dry_run,
            force,
        } => {
            assert_eq!(model.to_string_lossy(), "model.yaml");
            assert!(settings.is_none());
            assert_eq!(output.to_string_lossy(), "out");
            assert!(!dry_run);
            assert!(!force);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_generate_command_with_flags() {
    let cli = Cli::try_parse_from([
        "modelgen",
        "generate",
        "--model",
        "model.json",
        "--settings",
        "modelgen.toml",
        "--output",
        "out",
        "--dry-run",
        "--force",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            settings,
            dry_run,
            force,
            ..
        } => {
            assert_eq!(settings.unwrap().to_string_lossy(), "modelgen.toml");
            assert!(dry_run);
            assert!(force);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_clean_command_parses() {
    let cli = Cli::try_parse_from(["modelgen", "clean", "--output", "out"]).unwrap();

    match cli.command {
        Commands::Clean { output } => {
            assert_eq!(output.to_string_lossy(), "out");
        }
        _ => panic!("Expected Clean command"),
    }
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec![
            "modelgen", "generate", "--model", "m.yaml", "--output", "out",
        ],
        vec!["modelgen", "clean", "--output", "out"],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(&args);
        assert!(cli.is_ok(), "Failed to parse command: {:?}", args);
    }
}
