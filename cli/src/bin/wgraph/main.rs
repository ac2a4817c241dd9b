mod commands;
mod settings;

use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::debug;
use settings::Settings;
use simplelog::{LevelFilter, SimpleLogger, TermLogger};
use std::path::PathBuf;

fn init_logging(debug: bool) {
    let log_filter = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_config = simplelog::ConfigBuilder::new().build();

    if let Err(e) = TermLogger::init(
        log_filter,
        log_config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error, can't initialize the terminal log output: {}.\nWill degrade to a more simple logger", e);
        if let Err(e_simple) = SimpleLogger::init(log_filter, log_config) {
            eprintln!("Simple logging failed too: {}", e_simple);
        }
    }
}

fn parse_number(matches: &ArgMatches, name: &str) -> Result<Option<u32>> {
    match matches.value_of(name) {
        Some(v) => {
            let n = v
                .parse::<u32>()
                .with_context(|| format!("invalid value '{}' for --{}", v, name))?;
            Ok(Some(n))
        }
        None => Ok(None),
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config_file = matches.value_of("config").map(PathBuf::from);
    let mut settings = Settings::with_file(config_file.as_deref())?;
    if matches.is_present("debug") {
        settings.logging.debug = true;
    }
    init_logging(settings.logging.debug);
    debug!("using settings {:?}", settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        ("demo", Some(_)) => commands::demo(&mut out),
        ("path", Some(sub)) => {
            if let Some(source) = parse_number(sub, "source")? {
                settings.query.source = source;
            }
            if let Some(target) = parse_number(sub, "target")? {
                settings.query.target = target;
            }
            if let Some(queue) = sub.value_of("queue") {
                settings.query.queue = queue.to_string();
            }
            commands::path(&mut out, &settings.query)
        }
        ("stress", Some(sub)) => {
            if let Some(iterations) = parse_number(sub, "iterations")? {
                settings.stress.iterations = iterations;
            }
            commands::stress(&settings.stress)
        }
        _ => Ok(()),
    }
}

fn main() {
    let matches = App::new("wgraph")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Command line interface to the weighted graph store and shortest path solver.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .help("Enables debug output")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .help("TOML settings file overriding the defaults")
                .takes_value(true),
        )
        .subcommand(
            SubCommand::with_name("demo")
                .about("Prints the example graph and its shortest path from 0 to 5"),
        )
        .subcommand(
            SubCommand::with_name("path")
                .about("Queries a shortest path in the example graph")
                .arg(
                    Arg::with_name("source")
                        .long("source")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("target")
                        .long("target")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("queue")
                        .long("queue")
                        .help("Node selection strategy")
                        .possible_values(&["heap", "linear"])
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("stress")
                .about("Adds and removes nodes in a loop and checks the graph size stays constant")
                .arg(
                    Arg::with_name("iterations")
                        .long("iterations")
                        .takes_value(true),
                ),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}
