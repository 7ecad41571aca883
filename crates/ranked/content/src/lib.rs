//! Data-driven progression content and loaders.
//!
//! This crate houses the built-in task and badge catalogs and provides
//! loaders for RON/TOML data files:
//! - Trigger catalog (`triggers.ron`)
//! - Task catalog (`tasks.ron`)
//! - Badge catalog (`badges.ron`)
//! - Progression ladder (`progression.toml`)
//!
//! Every file is optional. A missing file falls back to the built-in content
//! shipped with `ranked-core` and this crate.

pub mod badges;
pub mod tasks;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use badges::{BadgeCatalog, BadgeDefinition, BadgeTier, builtin_badges};
pub use tasks::{TaskCatalog, TaskCategory, TaskDefinition, UserTask, builtin_tasks};

#[cfg(feature = "loaders")]
pub use loaders::{
    BadgeLoader, ConfigLoader, Content, ContentFactory, LoadResult, TaskLoader, TriggerLoader,
};
