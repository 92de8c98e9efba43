//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::RenderStyle;

/// Balanced binary search trees: build, traverse, and rebalance on the command line
#[derive(Parser, Debug)]
#[command(name = "rsbst")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging. Multiple -d options increase verbosity (max 3)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the balancing demo: build, traverse, unbalance, rebalance
    Demo {
        /// Number of random values for the initial tree
        #[arg(short, long)]
        count: Option<usize>,

        /// Inclusive upper bound for the random values (lower bound is 1)
        #[arg(short, long)]
        max_value: Option<u64>,

        /// Number of values above the bound inserted to unbalance the tree
        #[arg(short, long)]
        extra_count: Option<usize>,

        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Rendering style for the final tree
        #[arg(long, value_enum)]
        style: Option<RenderStyle>,
    },

    /// Build a balanced tree from the given values and print it
    Show {
        /// Values to build the tree from (duplicates are dropped)
        values: Vec<i64>,

        /// Rendering style
        #[arg(long, value_enum)]
        style: Option<RenderStyle>,

        /// Also print the values in one traversal order
        #[arg(short, long, value_enum)]
        order: Option<TraversalOrder>,

        /// Also print size, height, and balance
        #[arg(long)]
        stats: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version and configuration status
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}

/// Traversal orders selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree (ascending)
    Inorder,
    /// Node first, then left and right subtrees
    Preorder,
    /// Left and right subtrees first, node last
    Postorder,
    /// Level by level, left to right
    LevelOrder,
}
