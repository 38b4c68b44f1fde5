use clap::value_parser;
use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use untext::encoding::Layers;
use untext::language::Module;
use untext::loading;
use untext::projection::{self, Projection, Settings};
use untext::rendering::{self, Identity, Terminal};

mod problem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Outline,
    Html,
    Json,
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let matches = Command::new("untext")
        .version(VERSION)
        .propagate_version(true)
        .about("Structural projection of Python syntax trees.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("check")
                .about("Load the given syntax tree and verify that it can be projected")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The JSON file containing the syntax tree, as produced by a Python parser."),
                ),
        )
        .subcommand(
            Command::new("project")
                .about("Project the given syntax tree and print the presentation tree")
                .arg(
                    Arg::new("layers")
                        .short('l')
                        .long("layers")
                        .value_parser(value_parser!(u8).range(1..=4))
                        .default_value("2")
                        .help("Number of string-literal interpretations literal text must survive on its way to the display."),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_parser(["outline", "html", "json"])
                        .default_value("outline")
                        .help("How to print the presentation tree."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The JSON file containing the syntax tree, as produced by a Python parser."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let Some(filename) = submatches.get_one::<String>("filename") else {
                return;
            };
            let filename = Path::new(filename);
            debug!(?filename);

            let content = read(filename);
            let module = decode(filename, &content);
            let projection = project(filename, &module, &Settings::default());

            info!("{} projects cleanly", filename.display());
            eprintln!(
                "{}: {} ({} nodes)",
                "ok".bright_green(),
                filename.display(),
                projection.len()
            );
        }
        Some(("project", submatches)) => {
            let Some(filename) = submatches.get_one::<String>("filename") else {
                return;
            };
            let filename = Path::new(filename);

            let count = submatches
                .get_one::<u8>("layers")
                .copied()
                .unwrap_or(2);
            let layers = match Layers::new(count) {
                Ok(layers) => layers,
                Err(error) => {
                    eprintln!("{}: {}", "error".bright_red(), error);
                    std::process::exit(2);
                }
            };

            let output = match submatches
                .get_one::<String>("format")
                .map(String::as_str)
            {
                Some("html") => Output::Html,
                Some("json") => Output::Json,
                _ => Output::Outline,
            };
            let raw_output = submatches.get_flag("raw-control-chars");
            debug!(?filename, count, ?output, raw_output);

            let content = read(filename);
            let module = decode(filename, &content);
            let projection = project(filename, &module, &Settings { layers });

            let result = match output {
                Output::Outline => {
                    if raw_output || std::io::stdout().is_terminal() {
                        rendering::outline(projection.root(), &Terminal)
                    } else {
                        rendering::outline(projection.root(), &Identity)
                    }
                }
                Output::Html => {
                    let title = filename.to_string_lossy();
                    match rendering::page(projection.root(), &title) {
                        Ok(page) => page,
                        Err(error) => {
                            eprintln!("{}: {}", "error".bright_red(), error);
                            std::process::exit(1);
                        }
                    }
                }
                Output::Json => match serde_json::to_string_pretty(projection.root()) {
                    Ok(json) => json + "\n",
                    Err(error) => {
                        eprintln!("{}: {}", "error".bright_red(), error);
                        std::process::exit(1);
                    }
                },
            };

            print!("{}", result);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: untext [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn read(filename: &Path) -> String {
    match loading::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn decode(filename: &Path, content: &str) -> Module {
    match loading::parse(filename, content) {
        Ok(module) => module,
        Err(error) => {
            eprintln!("{}", problem::full_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn project<'i>(filename: &Path, module: &'i Module, settings: &Settings) -> Projection<'i> {
    match projection::project_module(module, settings) {
        Ok(projection) => projection,
        Err(error) => {
            if error.is_unsupported() {
                eprintln!("{}", problem::concise_projection_error(&error, filename));
            } else {
                eprintln!("{}", problem::full_projection_error(&error, filename));
            }
            std::process::exit(1);
        }
    }
}
