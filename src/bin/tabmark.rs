//! Command-line interface for tabmark
//!
//! Usage:
//!   tabmark render `<path>`                      - Print the canonical rendering
//!   tabmark inspect `<path>` [--format `<format>`] - Print the document in an inspection format
//!   tabmark check `<path>`                       - Report warnings and exceptions
//!   tabmark list-formats                       - List the available formats
//!
//! `--config <file>` layers a TOML file over the built-in defaults. Logging goes to
//! stderr and is controlled by `RUST_LOG`.

use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

use tabmark::tabmark::{
    parse_with, Document, Error, FormatRegistry, Loader, Profile, Renderer, Result, TabmarkConfig,
};

fn main() {
    env_logger::init();

    let matches = Command::new("tabmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for checking, rendering and inspecting tabmark files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the default configuration"),
        )
        .subcommand(
            Command::new("render")
                .about("Parse a file and print its canonical rendering")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed document in an inspection format")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats)")
                        .default_value("treeviz"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report warnings and exceptions; fails when exceptions are present")
                .arg(path_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the tabmark file")
        .required(true)
        .index(1)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches.get_one::<String>("config"))?;
    let registry = FormatRegistry::with_renderer(Renderer::new(config.rendering.indentation.clone()));

    match matches.subcommand() {
        Some(("render", sub)) => {
            let doc = parse_file(sub, &config)?;
            print!("{}", registry.serialize(&doc, "tabmark")?);
        }
        Some(("inspect", sub)) => {
            let doc = parse_file(sub, &config)?;
            let format = sub
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or("treeviz");
            print!("{}", registry.serialize(&doc, format)?);
        }
        Some(("check", sub)) => {
            let doc = parse_file(sub, &config)?;
            if !handle_check(&doc, &Profile::from(&config)) {
                std::process::exit(1);
            }
        }
        Some(("list-formats", _)) => handle_list_formats(&registry),
        _ => unreachable!(),
    }
    Ok(())
}

fn load_config(path: Option<&String>) -> Result<TabmarkConfig> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    Ok(loader.build()?)
}

fn parse_file(matches: &ArgMatches, config: &TabmarkConfig) -> Result<Document> {
    let path = matches
        .get_one::<String>("path")
        .map(PathBuf::from)
        .unwrap_or_default();
    let source = std::fs::read_to_string(&path).map_err(|err| Error::io(&path, err))?;
    log::debug!("parsing {} ({} bytes)", path.display(), source.len());
    Ok(parse_with(&source, &Profile::from(config)))
}

/// Print diagnostics. Returns false when the document holds exceptions.
fn handle_check(doc: &Document, profile: &Profile) -> bool {
    let metadata = doc.context_metadata_with(profile);
    if !metadata.is_empty() {
        let keys: Vec<&str> = metadata.iter().map(|(key, _)| key.as_str()).collect();
        println!("{} metadata: {}", profile.context_keyword(), keys.join(", "));
    }
    for warning in &doc.warnings {
        println!("{}", warning);
    }
    let exceptions = doc.exceptions();
    for exception in &exceptions {
        println!("{}", exception);
    }
    println!(
        "{} warning(s), {} exception(s)",
        doc.warnings.len(),
        exceptions.len()
    );
    exceptions.is_empty()
}

fn handle_list_formats(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
    }
}
