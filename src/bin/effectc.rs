//! Command-line interface for the Effect compiler
//!
//! Usage:
//!   effectc compile `<path>` [--format `<format>`] [--config `<file>`]  - Compile and print an artifact
//!   effectc check `<path>` [--config `<file>`]                         - Compile and report success
//!   effectc list-formats                                               - List available output formats

use clap::{Arg, Command};
use effect::effect::formats::{FormatRegistry, JsonFormatter};
use effect::Compiler;
use effect_config::{EffectConfig, Loader};
use std::fs;

fn main() {
    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .help("TOML file layered over the built-in defaults");
    let path_arg = Arg::new("path")
        .help("Path to the effect file")
        .required(true)
        .index(1);

    let matches = Command::new("effectc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile and inspect Effect material files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compile")
                .about("Compile an effect and print one of its artifacts")
                .arg(path_arg.clone())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (default from config, see list-formats)"),
                )
                .arg(config_arg.clone()),
        )
        .subcommand(
            Command::new("check")
                .about("Compile an effect and report errors only")
                .arg(path_arg)
                .arg(config_arg),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("compile", compile_matches)) => {
            let config = load_config(compile_matches.get_one::<String>("config"));
            let path = required(compile_matches.get_one::<String>("path"));
            let format = compile_matches
                .get_one::<String>("format")
                .cloned()
                .unwrap_or_else(|| config.output.format.clone());
            handle_compile_command(&config, path, &format);
        }
        Some(("check", check_matches)) => {
            let config = load_config(check_matches.get_one::<String>("config"));
            let path = required(check_matches.get_one::<String>("path"));
            handle_check_command(&config, path);
        }
        Some(("list-formats", _)) => {
            init_logging(&load_config(None));
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

fn required(value: Option<&String>) -> &str {
    match value {
        Some(value) => value,
        None => {
            eprintln!("Error: missing required argument");
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&String>) -> EffectConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn init_logging(config: &EffectConfig) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();
}

fn read_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}

/// Handle the compile command
fn handle_compile_command(config: &EffectConfig, path: &str, format: &str) {
    init_logging(config);

    let mut registry = FormatRegistry::with_defaults();
    if !config.output.pretty {
        registry.register(JsonFormatter::compact());
    }
    if !registry.has(format) {
        eprintln!("Format '{}' not found", format);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    }

    let source = read_source(path);
    let compilation = Compiler::from_config(config)
        .compile_artifacts(&source)
        .unwrap_or_else(|e| {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        });

    match registry.serialize(&compilation, format) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the check command
fn handle_check_command(config: &EffectConfig, path: &str) {
    init_logging(config);

    let source = read_source(path);
    match Compiler::from_config(config).compile(&source) {
        Ok(effect) => println!(
            "ok: {} ({} techniques)",
            effect.name,
            effect.techniques.len()
        ),
        Err(e) => {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
