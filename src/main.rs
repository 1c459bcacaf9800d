//! CLI entry point for modtree

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use termcolor::{ColorChoice, StandardStream};
use tracing::{info, warn};

use modtree::logging::install_logging;
use modtree::{
    Entry, Error, GoParser, ModuleReport, OutputConfig, TreeFormatter, TreeWalker, WalkerConfig,
    absolutize, locate_module, write_json_line,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "modtree")]
#[command(about = "Show the Go source tree of the module that owns each path")]
#[command(version)]
struct Args {
    /// Paths to inspect
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Descend only N levels below each path (0 or less = no limit)
    #[arg(
        short = 'd',
        long = "depth",
        default_value = "0",
        allow_negative_numbers = true
    )]
    depth: i64,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print one JSON object per path instead of a tree
    #[arg(long = "json")]
    json: bool,

    /// Log more detail to stderr (repeat for more)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    if !install_logging(args.verbose) {
        warn!("Failed to install tracing subscriber, one is already set");
    }

    if let Err(e) = run(&args) {
        eprintln!("modtree: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> modtree::Result<()> {
    let walker = TreeWalker::new(WalkerConfig {
        max_depth: usize::try_from(args.depth).ok().filter(|&n| n > 0),
        ..Default::default()
    });
    let parser = GoParser;

    let use_color = !args.json && should_use_color(args.color);
    let formatter = TreeFormatter::new(OutputConfig { use_color });
    let mut stdout = StandardStream::stdout(if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    });

    for arg in &args.paths {
        let abs = absolutize(arg)?;

        let Some(module) = locate_module(&abs)? else {
            info!(path = %abs.display(), "no module found");
            let written = if args.json {
                write_json_line(&mut stdout, &ModuleReport::missing(&abs))
            } else {
                formatter.write_no_module(&mut stdout, &abs)
            };
            written.map_err(Error::Output)?;
            continue;
        };

        let mut root = Entry::root(&abs)?;
        if !args.json {
            formatter
                .write_header(&mut stdout, arg, &module)
                .map_err(Error::Output)?;
        }

        modtree::tree::build(&mut root, &walker, &parser)?;
        info!(path = %abs.display(), module = %module, files = root.file_count(), "built tree");

        let written = if args.json {
            write_json_line(&mut stdout, &ModuleReport::found(arg, &module, &root))
        } else {
            formatter.write_tree(&mut stdout, &root)
        };
        written.map_err(Error::Output)?;
    }

    stdout.flush().map_err(Error::Output)
}
