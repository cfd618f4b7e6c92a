//! Command-line surface of the `lostfound` binary.

mod commands;
mod render;

pub use commands::run;

use campus_lostfound::item::ItemKind;
use campus_lostfound::search::{CategoryFilter, SortKey, ALL_CATEGORIES};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Campus lost & found board - post and browse lost and found items
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the item slot (default: ~/.lostfound/data)
    #[arg(long, env = "LOSTFOUND_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable JSON log format
    #[arg(long, env = "LOSTFOUND_LOG_JSON", default_value = "false", global = true)]
    pub log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "LOSTFOUND_LOG_ROTATION", default_value = "daily", global = true)]
    pub log_rotation: String,

    /// Custom log directory (default: ~/.lostfound/logs)
    #[arg(long, env = "LOSTFOUND_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Post a lost or found item
    Post(PostArgs),
    /// List lost items
    Lost(ListArgs),
    /// List found items
    Found(ListArgs),
    /// Print the categories an item can belong to
    Categories,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct PostArgs {
    /// Whether the item was lost or found
    #[arg(long = "type", value_name = "lost|found")]
    pub kind: ItemKind,

    #[arg(long)]
    pub title: String,

    /// One of the names printed by `lostfound categories`
    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub description: String,

    /// Where the item was lost or found
    #[arg(long)]
    pub location: String,

    /// Contact email shown on the posting
    #[arg(long)]
    pub email: String,

    /// Optional contact phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Photo of the item (png, jpg, gif, webp, bmp or svg)
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Print the stored item as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ListArgs {
    /// Only items whose title, description or location contain this text
    #[arg(long, short, default_value = "")]
    pub search: String,

    /// Only items in this category
    #[arg(long, short, default_value = ALL_CATEGORIES)]
    pub category: CategoryFilter,

    /// Sort by date, title, category or location
    #[arg(long, default_value = "date")]
    pub sort: SortKey,

    /// Print matching items as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
