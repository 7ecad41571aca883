//! Show rank, grade and progress for an XP total

use anyhow::Result;
use clap::Parser;
use console::style;
use ranked_core::{PrestigeDecoration, ProgressSnapshot, RankState, Xp, format_xp};
use serde::Serialize;

use super::Context;
use crate::output::{OutputFormat, print_json};

#[derive(Parser)]
pub struct Rank {
    /// Total XP
    #[arg(value_name = "XP")]
    pub(crate) xp: Xp,

    /// Prestige level shown on the profile frame
    #[arg(short, long, default_value_t = 0)]
    pub(crate) prestige: u8,
}

#[derive(Serialize)]
struct RankReport {
    xp: Xp,
    display_name: String,
    state: RankState,
    xp_to_next_rank: Xp,
    color: &'static str,
    metallic: [&'static str; 5],
    decoration: PrestigeDecoration,
}

impl Rank {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let config = &ctx.content.config;
        let snapshot = ProgressSnapshot::new(config, self.xp, self.prestige);
        let state = config.rank_state(snapshot.xp);

        let report = RankReport {
            xp: snapshot.xp,
            display_name: state.display_name(),
            state,
            xp_to_next_rank: config.xp_to_next_rank(snapshot.xp),
            color: state.rank_id.definition().color,
            metallic: snapshot.frame.metallic(),
            decoration: snapshot.frame.decoration(),
        };

        match ctx.output {
            OutputFormat::Json => print_json(&report),
            OutputFormat::Text => {
                print_report(&report);
                Ok(())
            }
        }
    }
}

fn print_report(report: &RankReport) {
    println!(
        "{} {}",
        style(&report.display_name).bold().cyan(),
        style(format!("({} XP)", format_xp(report.xp))).dim()
    );

    if report.state.is_max() {
        println!("  {}", style("Top of the ladder").bold().yellow());
    } else {
        println!("  Progress:      {:.1}%", report.state.progress_percent);
        println!("  Next grade in: {} XP", report.state.xp_to_next_grade);
        println!("  Next rank in:  {} XP", report.xp_to_next_rank);
    }

    println!("  Color:         {}", report.color);
    println!("  Metallic:      {}", report.metallic.join(" "));
    if report.decoration != PrestigeDecoration::None {
        println!("  Decoration:    {}", report.decoration);
    }
}
