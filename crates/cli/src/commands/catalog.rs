//! List triggers, tasks or badges from the loaded content

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use ranked_content::{BadgeTier, TaskCategory};
use ranked_core::{TriggerActivation, TriggerEffect, TriggerKind};

use super::Context;
use crate::output::{OutputFormat, print_json};

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum CatalogKind {
    Triggers,
    Tasks,
    Badges,
}

#[derive(Parser)]
pub struct Catalog {
    /// Which catalog to list
    #[arg(value_enum)]
    pub(crate) what: CatalogKind,

    /// Only triggers of this kind (additive, multiplicative)
    #[arg(long)]
    pub(crate) kind: Option<TriggerKind>,

    /// Only triggers with this activation (instant, overtime)
    #[arg(long)]
    pub(crate) activation: Option<TriggerActivation>,

    /// Only tasks in this category (daily, streak, weekly, special)
    #[arg(long)]
    pub(crate) category: Option<TaskCategory>,

    /// Only badges of this tier (bronze, silver, gold, platinum)
    #[arg(long)]
    pub(crate) tier: Option<BadgeTier>,
}

impl Catalog {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        match self.what {
            CatalogKind::Triggers => self.triggers(ctx),
            CatalogKind::Tasks => self.tasks(ctx),
            CatalogKind::Badges => self.badges(ctx),
        }
    }

    fn triggers(&self, ctx: &Context) -> Result<()> {
        let triggers: Vec<_> = ctx
            .content
            .triggers
            .iter()
            .filter(|t| self.kind.is_none_or(|kind| t.kind() == kind))
            .filter(|t| self.activation.is_none_or(|a| t.activation == a))
            .collect();

        if ctx.output == OutputFormat::Json {
            return print_json(&triggers);
        }

        for trigger in triggers {
            let effect = match trigger.effect {
                TriggerEffect::Additive(xp) => format!("+{xp} XP"),
                TriggerEffect::Multiplicative(factor) => format!("x{factor}"),
            };
            println!(
                "{:<18} {:<10} {:<8} {}",
                style(&trigger.id).cyan(),
                effect,
                trigger.activation,
                trigger.name
            );
        }
        Ok(())
    }

    fn tasks(&self, ctx: &Context) -> Result<()> {
        let tasks: Vec<_> = ctx
            .content
            .tasks
            .iter()
            .filter(|t| self.category.is_none_or(|c| t.category() == c))
            .collect();

        if ctx.output == OutputFormat::Json {
            return print_json(&tasks);
        }

        for task in tasks {
            println!(
                "{:<16} {:>6} XP  {} - {}",
                style(&task.id).cyan(),
                task.xp_reward,
                style(&task.name).bold(),
                task.description
            );
        }
        Ok(())
    }

    fn badges(&self, ctx: &Context) -> Result<()> {
        let badges: Vec<_> = ctx
            .content
            .badges
            .iter()
            .filter(|b| self.tier.is_none_or(|tier| b.tier == tier))
            .collect();

        if ctx.output == OutputFormat::Json {
            return print_json(&badges);
        }

        for badge in badges {
            println!(
                "{:<18} {:<9} {} - {}",
                style(&badge.id).cyan(),
                badge.tier,
                style(&badge.name).bold(),
                badge.criteria
            );
        }
        Ok(())
    }
}
