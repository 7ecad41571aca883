//! Calculate the XP award for a match, optionally applying it to a total

use anyhow::Result;
use clap::Parser;
use console::style;
use ranked_core::{
    MatchOutcome, ProgressSnapshot, RankUpdate, UserTriggerState, Xp, XpCalculation,
};
use serde::Serialize;

use super::Context;
use crate::output::{OutputFormat, print_json};

#[derive(Parser)]
pub struct Award {
    /// Match result: win, loss or draw
    #[arg(long, value_name = "OUTCOME")]
    pub(crate) outcome: MatchOutcome,

    /// Consecutive wins before this match
    #[arg(long, default_value_t = 0)]
    pub(crate) win_streak: u32,

    /// First-win-of-day bonus is still available
    #[arg(long)]
    pub(crate) daily_bonus: bool,

    /// Extra trigger id to apply (repeatable)
    #[arg(long, value_name = "TRIGGER")]
    pub(crate) extra: Vec<String>,

    /// Current XP total; when given, the award is applied and the rank change shown
    #[arg(long, value_name = "XP")]
    pub(crate) xp: Option<Xp>,

    /// Prestige level carried on the profile frame
    #[arg(long, default_value_t = 0)]
    pub(crate) prestige: u8,
}

#[derive(Serialize)]
struct AwardReport {
    calculation: XpCalculation,
    #[serde(skip_serializing_if = "Option::is_none")]
    update: Option<RankUpdate>,
}

impl Award {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let state = UserTriggerState::new(self.win_streak, 0, self.daily_bonus);
        let calculation = ctx
            .engine()
            .calculate_match_xp(&state, self.outcome, self.extra.as_slice());

        for id in &self.extra {
            if !calculation.was_applied(id) {
                tracing::warn!("extra trigger '{}' was not applied", id);
            }
        }

        let config = &ctx.content.config;
        let update = self.xp.map(|xp| {
            let current = ProgressSnapshot::new(config, xp, self.prestige);
            let delta = i64::try_from(calculation.total_xp).unwrap_or(i64::MAX);
            config.apply_xp_change(&current, delta)
        });

        let report = AwardReport {
            calculation,
            update,
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

fn print_report(report: &AwardReport) {
    println!("{}", style("XP Award").bold().green());
    for line in report.calculation.breakdown_lines() {
        println!("  {line}");
    }
    println!(
        "  {} {}",
        style("Triggers:").dim(),
        report.calculation.applied_trigger_ids.join(", ")
    );

    let Some(update) = &report.update else {
        return;
    };

    println!();
    println!(
        "{} {} -> {} XP",
        style("Progress:").bold().cyan(),
        update.previous.xp,
        update.snapshot.xp
    );
    println!("  Now: {}", update.state.display_name());
    if update.rank_changed {
        println!(
            "  {} {} -> {}",
            style("Rank up!").bold().yellow(),
            update.previous.rank_id.definition().name,
            update.snapshot.rank_id.definition().name
        );
    } else if update.grade_changed {
        println!("  {}", style("Grade up!").bold().yellow());
    }
}
