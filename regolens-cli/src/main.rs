//! Command-line interface for regolens
//! This binary is the I/O-owning collaborator around the analysis libraries:
//! it reads policy files, invokes the engine, and prints results. File read
//! failures stop here and never reach the engine.
//!
//! Usage:
//!   regolens `<path>` [--mode `<mode>`] [--format `<format>`]   - Analyze a policy file
//!   regolens --list-formats                                    - List output formats

use clap::{Arg, ArgAction, Command};
use regolens_analysis::completion::snippets_for_package;
use regolens_analysis::lint_with_options;
use regolens_babel::formats::treeviz::to_treeviz_str_with_params;
use regolens_babel::FormatRegistry;
use regolens_config::{Loader, RegolensConfig};
use regolens_parser::policy::{parse_policy, PolicyDocument};
use std::collections::HashMap;
use std::fs;

fn main() {
    let matches = Command::new("regolens")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for linting, visualizing and converting Rego-style policy files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the policy file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .help("What to run: 'lint', 'viz', 'convert' or 'snippets'")
                .default_value("lint"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: treeviz for viz, configured default for convert)"),
        )
        .arg(
            Arg::new("config-file")
                .long("config-file")
                .short('c')
                .help("Optional regolens TOML configuration file"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats();
        return;
    }

    let config = load_config(matches.get_one::<String>("config-file"));
    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");

    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading policy file '{}': {}", path, e);
        std::process::exit(1);
    });

    let mode = matches.get_one::<String>("mode").expect("mode has a default");
    let format = matches.get_one::<String>("format").map(String::as_str);

    match mode.as_str() {
        "lint" => handle_lint(&content, &config),
        "viz" => handle_serialize(&content, format.unwrap_or("treeviz"), &config),
        "convert" => handle_serialize(
            &content,
            format.unwrap_or(&config.convert.default_format),
            &config,
        ),
        "snippets" => handle_snippets(&content),
        other => {
            eprintln!("Unknown mode '{}'.", other);
            eprintln!("Available modes: lint, viz, convert, snippets");
            std::process::exit(1);
        }
    }
}

fn load_config(config_file: Option<&String>) -> RegolensConfig {
    let mut loader = Loader::new();
    if let Some(path) = config_file {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the lint mode: one line per finding, document-level findings last
/// in their check's slot and without a line number.
fn handle_lint(content: &str, config: &RegolensConfig) {
    let document = PolicyDocument::new(content);
    let diagnostics = lint_with_options(&document, &config.lint.lint_options());

    if diagnostics.is_empty() {
        println!("No linting issues found.");
        return;
    }

    println!("Linting Issues:");
    for diagnostic in diagnostics {
        match diagnostic.line {
            Some(line) => println!("Line {}: {}", line, diagnostic.message),
            None => println!("Policy: {}", diagnostic.message),
        }
    }
}

/// Handle the viz and convert modes through the format registry.
fn handle_serialize(content: &str, format: &str, config: &RegolensConfig) {
    let policy = parse_policy(content);

    let output = if format == "treeviz" {
        let mut params = HashMap::new();
        if !config.viz.color_groups {
            params.insert("color-groups".to_string(), "false".to_string());
        }
        to_treeviz_str_with_params(&policy, &params)
    } else {
        let registry = FormatRegistry::with_defaults();
        registry.serialize(&policy, format).unwrap_or_else(|e| {
            eprintln!("Serialization error: {}", e);
            eprintln!("\nAvailable formats:");
            for name in registry.list_formats() {
                eprintln!("  {}", name);
            }
            std::process::exit(1);
        })
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the snippets mode: print the catalog entries matching the file's
/// package declaration.
fn handle_snippets(content: &str) {
    let policy = parse_policy(content);
    let package = policy.package.as_deref().unwrap_or("");
    let candidates = snippets_for_package(package);

    if candidates.is_empty() {
        println!("No snippets available for package '{}'.", package);
        return;
    }

    for candidate in candidates {
        println!("{}", candidate.label);
        println!("{}", candidate.body);
        println!();
    }
}

/// Handle the list-formats command
fn handle_list_formats() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", format.name());
            println!("    {}", format.description());
            println!();
        }
    }
}
