//! Command implementations: dispatch from parsed arguments to the library

use std::fmt::Display;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, TraversalOrder};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{self, RenderStyle, Settings};
use crate::demo::{self, DemoReport, Snapshot, Traversals};
use crate::tree::Tree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo {
            count,
            max_value,
            extra_count,
            seed,
            style,
        }) => run_demo(*count, *max_value, *extra_count, *seed, *style),
        Some(Commands::Show {
            values,
            style,
            order,
            stats,
        }) => show_tree(values, *style, *order, *stats),
        Some(Commands::Config { command }) => run_config(command),
        Some(Commands::Info) => show_info(),
        Some(Commands::Completion { shell }) => generate_completion(*shell),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

#[instrument(level = "debug", skip_all)]
fn run_demo(
    count: Option<usize>,
    max_value: Option<u64>,
    extra_count: Option<usize>,
    seed: Option<u64>,
    style: Option<RenderStyle>,
) -> CliResult<()> {
    let settings = Settings::load()?;
    let style = style.unwrap_or(settings.style);

    let mut demo_settings = settings.demo;
    if let Some(count) = count {
        demo_settings.count = count;
    }
    if let Some(max_value) = max_value {
        demo_settings.max_value = max_value;
    }
    if let Some(extra_count) = extra_count {
        demo_settings.extra_count = extra_count;
    }
    if let Some(seed) = seed {
        demo_settings.seed = Some(seed);
    }

    if demo_settings.count == 0 {
        return Err(CliError::InvalidArgs("count must be at least 1".into()));
    }
    if demo_settings.max_value == 0 {
        return Err(CliError::InvalidArgs("max-value must be at least 1".into()));
    }
    debug!(?demo_settings, "effective demo settings");

    let report = demo::run(&demo_settings);
    print_report(&report, style);
    Ok(())
}

fn print_report(report: &DemoReport, style: RenderStyle) {
    output::header("Initial balanced tree");
    output::detail(&format!(
        "values: {}",
        report.initial_values.iter().join(" ")
    ));
    print_snapshot(&report.after_build);
    print_traversals(&report.initial_traversals);

    output::header("After inserting values beyond the bound");
    if !report.extra_values.is_empty() {
        output::detail(&format!(
            "inserted: {}",
            report.extra_values.iter().join(" ")
        ));
    }
    print_snapshot(&report.after_insert);

    output::header("After rebalancing");
    print_snapshot(&report.after_rebalance);
    print_traversals(&report.final_traversals);

    output::header("Final tree");
    render_tree(&report.final_tree, style);
}

fn print_snapshot(snapshot: &Snapshot) {
    output::detail(&format!(
        "size: {}  height: {}  balanced: {}",
        snapshot.len, snapshot.height, snapshot.balanced
    ));
}

fn print_traversals(traversals: &Traversals) {
    output::detail(&format!(
        "level order: {}",
        traversals.level_order.iter().join(" ")
    ));
    output::detail(&format!(
        "preorder:    {}",
        traversals.preorder.iter().join(" ")
    ));
    output::detail(&format!(
        "postorder:   {}",
        traversals.postorder.iter().join(" ")
    ));
    output::detail(&format!(
        "inorder:     {}",
        traversals.inorder.iter().join(" ")
    ));
}

fn render_tree<T: Display>(tree: &Tree<T>, style: RenderStyle) {
    match style {
        RenderStyle::Diagram => print!("{}", tree.diagram()),
        RenderStyle::Outline => print!("{}", tree.outline()),
    }
}

#[instrument(level = "debug", skip_all)]
fn show_tree(
    values: &[i64],
    style: Option<RenderStyle>,
    order: Option<TraversalOrder>,
    stats: bool,
) -> CliResult<()> {
    if values.is_empty() {
        return Err(CliError::InvalidArgs(
            "show needs at least one value".into(),
        ));
    }
    let settings = Settings::load()?;
    let style = style.unwrap_or(settings.style);

    let tree: Tree<i64> = values.iter().copied().collect();
    debug!(len = tree.len(), height = tree.height(), "built tree from arguments");

    render_tree(&tree, style);

    if let Some(order) = order {
        let sequence = match order {
            TraversalOrder::Inorder => tree.inorder(),
            TraversalOrder::Preorder => tree.preorder(),
            TraversalOrder::Postorder => tree.postorder(),
            TraversalOrder::LevelOrder => tree.level_order(),
        };
        output::info(&sequence.iter().join(" "));
    }

    if stats {
        output::detail(&format!("size: {}", tree.len()));
        output::detail(&format!("height: {}", tree.height()));
        output::detail(&format!("balanced: {}", tree.is_balanced()));
    }

    Ok(())
}

fn run_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init { global } => config_init(*global),
        ConfigCommands::Path => {
            match config::global_config_path() {
                Some(path) => output::info(&format!("global: {}", path.display())),
                None => output::warning("global: no config directory on this platform"),
            }
            output::info(&format!(
                "local:  {}",
                config::local_config_path(Path::new(".")).display()
            ));
            Ok(())
        }
    }
}

fn config_init(global: bool) -> CliResult<()> {
    let path = if global {
        let dir = config::global_config_dir().ok_or_else(|| {
            CliError::Message("no config directory on this platform".into())
        })?;
        std::fs::create_dir_all(&dir)?;
        dir.join("rsbst.toml")
    } else {
        config::local_config_path(Path::new("."))
    };

    if path.exists() {
        output::warning(&format!("{} already exists, not overwriting", path.display()));
        return Ok(());
    }

    std::fs::write(&path, Settings::template())?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}

fn show_info() -> CliResult<()> {
    output::header(&format!("rsbst {}", env!("CARGO_PKG_VERSION")));

    match config::global_config_path() {
        Some(path) => {
            let marker = if path.exists() { "" } else { " (not present)" };
            output::detail(&format!("global config: {}{}", path.display(), marker));
        }
        None => output::detail("global config: unavailable on this platform"),
    }
    let local = config::local_config_path(Path::new("."));
    let marker = if local.exists() { "" } else { " (not present)" };
    output::detail(&format!("local config:  {}{}", local.display(), marker));

    let settings = Settings::load()?;
    output::detail(&format!("render style:  {}", settings.style));
    output::detail(&format!(
        "demo defaults: count={} max-value={} extra-count={}",
        settings.demo.count, settings.demo.max_value, settings.demo.extra_count
    ));
    Ok(())
}

fn generate_completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
