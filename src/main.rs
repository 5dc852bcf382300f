// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton CLI entrypoint.
//!
//! Reads a node/edge graph as JSON (or a plain-text outline) from a file or
//! stdin, lays it out and prints the positioned graph as JSON on stdout.

use std::io::Read;
use std::path::PathBuf;

use serde::Serialize;
use triton::format::outline;
use triton::layout::{self, ConfigError, Discipline, LayoutConfig};
use triton::model::Graph;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} layout <flowchart|mindmap|tree|all> [--input <file>] [--config <file>] [--pretty] [-v]\n  {program} outline <flowchart|mindmap|tree|all> [--input <file>] [--config <file>] [--pretty] [-v]\n  {program} schema [--pretty]\n\n`layout` reads a graph as JSON: {{\"nodes\": [{{\"id\", \"text\"}}], \"edges\": [{{\"from\", \"to\"}}]}}.\n`outline` reads plain text, one node per line (indentation nests tree nodes).\nInput is read from stdin unless --input is given.\n--config points at a JSON file overriding layout spacing (see LayoutConfig).\n-v/--verbose logs layout decisions to stderr."
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    One(Discipline),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Command {
    #[default]
    Schema,
    Layout(Target),
    Outline(Target),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Command,
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    pretty: bool,
    verbose: bool,
}

fn parse_target(raw: Option<String>) -> Result<Target, ()> {
    match raw.as_deref() {
        Some("all") => Ok(Target::All),
        Some(tag) => tag.parse::<Discipline>().map(Target::One).map_err(|_| ()),
        None => Err(()),
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    options.command = match args.next().as_deref() {
        Some("layout") => Command::Layout(parse_target(args.next())?),
        Some("outline") => Command::Outline(parse_target(args.next())?),
        Some("schema") => Command::Schema,
        _ => return Err(()),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--pretty" => {
                if options.pretty {
                    return Err(());
                }
                options.pretty = true;
            }
            "-v" | "--verbose" => {
                if options.verbose {
                    return Err(());
                }
                options.verbose = true;
            }
            _ => return Err(()),
        }
    }

    if options.command == Command::Schema && (options.input.is_some() || options.config.is_some())
    {
        return Err(());
    }

    Ok(options)
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid graph JSON: {0}")]
    Graph(#[source] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|source| CliError::ReadInput { path: path.display().to_string(), source }),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|source| CliError::ReadInput { path: "stdin".to_owned(), source })?;
            Ok(raw)
        }
    }
}

fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let rendered =
        if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
    rendered.map_err(CliError::Output)
}

fn outline_graph(discipline: Discipline, input: &str) -> Graph {
    match discipline {
        Discipline::Flowchart => outline::flowchart_from_text(input),
        Discipline::Mindmap => outline::mindmap_from_text(input),
        Discipline::Tree => outline::tree_from_text(input),
    }
}

fn run(options: &CliOptions) -> Result<String, CliError> {
    let config = match &options.config {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };

    match options.command {
        Command::Schema => render_json(&schemars::schema_for!(Graph), options.pretty),
        Command::Layout(target) => {
            let raw = read_input(options.input.as_ref())?;
            let graph: Graph = serde_json::from_str(&raw).map_err(CliError::Graph)?;
            match target {
                Target::One(discipline) => render_json(
                    &layout::calculate_layout(&graph, discipline, &config),
                    options.pretty,
                ),
                Target::All => {
                    render_json(&layout::layout_variants(&graph, &config), options.pretty)
                }
            }
        }
        Command::Outline(target) => {
            let raw = read_input(options.input.as_ref())?;
            match target {
                Target::One(discipline) => {
                    let graph = outline_graph(discipline, &raw);
                    render_json(
                        &layout::calculate_layout(&graph, discipline, &config),
                        options.pretty,
                    )
                }
                Target::All => {
                    let variants = outline::variants_from_text(&raw);
                    render_json(&layout::layout_each_variant(&variants, &config), options.pretty)
                }
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "triton".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    init_tracing(options.verbose);

    match run(&options) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("triton: {err}");
            std::process::exit(1);
        }
    }
}
