use anyhow::Result;
use bike_quiz::config::{Config, RuntimeConfig};
use bike_quiz::quiz::commands;
use bike_quiz::{LogSink, init_tracing, load_env};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bike-quiz")]
#[command(about = "Which part of the bicycle are you?")]
struct Cli {
    /// Config file (defaults to BIKE_QUIZ_CONFIG or bike_quiz.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all questions and their options
    Questions,
    /// Print the six bike-part categories
    Categories,
    /// Take the quiz interactively
    Play {
        /// Save the result as text; `--export=PATH` picks a file or directory
        #[arg(long, num_args = 0..=1, require_equals = true, value_name = "PATH")]
        export: Option<Option<PathBuf>>,
    },
    /// Score answers given on the command line, one per question in order
    Score {
        /// A-F, 1-6, or a part name; '-' skips a question
        #[arg(required = true, num_args = 1..)]
        answers: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Save the result as text; `--export=PATH` picks a file or directory
        #[arg(long, num_args = 0..=1, require_equals = true, value_name = "PATH")]
        export: Option<Option<PathBuf>>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    load_env();
    init_tracing(&RuntimeConfig::load_from_env(), LogSink::Stderr);
    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Questions => commands::print_questions(&mut out)?,
        Commands::Categories => commands::print_categories(&mut out)?,
        Commands::Play { export } => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let export = export.as_ref().map(|p| p.as_deref());
            commands::run_play(&mut input, &mut out, export, &config)?;
        }
        Commands::Score {
            answers,
            json,
            export,
        } => {
            let export = export.as_ref().map(|p| p.as_deref());
            commands::run_score(&mut out, &answers, json, export, &config)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_export_flag_does_not_swallow_answers() {
        let cli = Cli::try_parse_from(["bike-quiz", "score", "--export", "a", "b"]).unwrap();
        match cli.command {
            Commands::Score {
                answers, export, ..
            } => {
                assert_eq!(answers, vec!["a".to_string(), "b".to_string()]);
                assert_eq!(export, Some(None));
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn export_path_needs_equals() {
        let cli =
            Cli::try_parse_from(["bike-quiz", "score", "c", "--export=out/result.txt"]).unwrap();
        match cli.command {
            Commands::Score {
                answers, export, ..
            } => {
                assert_eq!(answers, vec!["c".to_string()]);
                assert_eq!(export, Some(Some(PathBuf::from("out/result.txt"))));
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn play_export_flag_alone() {
        let cli = Cli::try_parse_from(["bike-quiz", "play", "--export"]).unwrap();
        assert!(matches!(cli.command, Commands::Play { export: Some(None) }));
    }
}
