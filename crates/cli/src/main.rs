//! Developer CLI for the rank progression engine.
//!
//! Run with: `ranked <command>`. Content is read from `--data-dir`,
//! `RANKED_DATA_DIR`, or the platform data directory, falling back to the
//! built-in catalogs.

mod commands;
mod config;
mod dirs;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Award, Catalog, Context, Leaderboard, Login, Multipliers, Rank};
use config::CliConfig;
use output::OutputFormat;

/// Rank progression and XP award calculator
#[derive(Parser)]
#[command(name = "ranked")]
#[command(about = "Rank progression and XP award tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding progression.toml and *.ron catalogs
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format (overrides RANKED_OUTPUT)
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show rank, grade and progress for an XP total
    Rank(Rank),

    /// Calculate the XP award for a match
    Award(Award),

    /// Show the login streak bonus for a streak length
    Login(Login),

    /// List multipliers the user is currently eligible for
    Multipliers(Multipliers),

    /// List triggers, tasks or badges
    Catalog(Catalog),

    /// Order players by XP and show their ranks
    Leaderboard(Leaderboard),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RANKED_DATA_DIR and RANKED_OUTPUT)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = CliConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(format) = cli.output {
        config.output = format;
    }

    let ctx = Context::load(&config)?;

    match cli.command {
        Command::Rank(cmd) => cmd.execute(&ctx),
        Command::Award(cmd) => cmd.execute(&ctx),
        Command::Login(cmd) => cmd.execute(&ctx),
        Command::Multipliers(cmd) => cmd.execute(&ctx),
        Command::Catalog(cmd) => cmd.execute(&ctx),
        Command::Leaderboard(cmd) => cmd.execute(&ctx),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use ranked_core::MatchOutcome;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_award_flags() {
        let cli = Cli::try_parse_from([
            "ranked",
            "award",
            "--outcome",
            "win",
            "--win-streak",
            "5",
            "--daily-bonus",
            "--extra",
            "underdog_win",
            "--extra",
            "consistent_player",
            "-o",
            "json",
        ])
        .unwrap();

        assert!(matches!(cli.output, Some(OutputFormat::Json)));
        let Command::Award(award) = cli.command else {
            panic!("expected award");
        };
        assert_eq!(award.outcome, MatchOutcome::Win);
        assert_eq!(award.win_streak, 5);
        assert!(award.daily_bonus);
        assert_eq!(award.extra, ["underdog_win", "consistent_player"]);
    }

    #[test]
    fn outcome_is_case_insensitive() {
        let cli = Cli::try_parse_from(["ranked", "award", "--outcome", "DRAW"]).unwrap();
        let Command::Award(award) = cli.command else {
            panic!("expected award");
        };
        assert_eq!(award.outcome, MatchOutcome::Draw);
    }

    #[test]
    fn rejects_unknown_outcome() {
        assert!(Cli::try_parse_from(["ranked", "award", "--outcome", "forfeit"]).is_err());
    }

    #[test]
    fn global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["ranked", "rank", "1000", "--data-dir", "/srv/ranked"])
            .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/ranked")));
    }

    #[test]
    fn leaderboard_entries_parse() {
        let cli =
            Cli::try_parse_from(["ranked", "leaderboard", "alice=127500", "bob=3000"]).unwrap();
        let Command::Leaderboard(board) = cli.command else {
            panic!("expected leaderboard");
        };
        assert_eq!(board.entries.len(), 2);
        assert_eq!(board.entries[0].user_id, "alice");
        assert_eq!(board.entries[0].xp, 127_500);

        assert!(Cli::try_parse_from(["ranked", "leaderboard", "carol"]).is_err());
        assert!(Cli::try_parse_from(["ranked", "leaderboard", "=10"]).is_err());
    }
}
