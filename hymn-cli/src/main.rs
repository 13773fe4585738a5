// Command-line interface for hymn lyrics databases
//
// This binary reads a hymnal XML export and renders songs through the formats
// registered in hymn-babel: preview text for the terminal and slide decks on disk.
//
// Usage:
//  hymn list <hymnal.xml> [--search TEXT]                      - List songs as "number - title"
//  hymn preview <hymnal.xml> <number> [--format NAME]          - Print the copy text for a song
//  hymn export <hymnal.xml> <number> [--format NAME] [-o PATH] - Write an export file (FreeShow by default)
//  hymn sections <hymnal.xml> <number>                         - Print the section order of a song
//  hymn --list-formats                                         - List available formats
//
// Extra Parameters:
//
// Settings can be overridden per invocation with --extra-<name> <value>.
// Recognized names: symbol, symbol-location, lines-per-slide.
// Example:
//  hymn export hymnal.xml 123 --extra-symbol-location both --extra-lines-per-slide 4

use clap::{Arg, ArgAction, Command, ValueHint};
use hymn_babel::{FormatRegistry, FormatSettings, Hymnal, OrderItem, Song, SymbolLocation};
use hymn_config::{SettingsStore, Source, ValueKind};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_EXPORT_FORMAT: &str = "FreeShow";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (no value, recorded as `None`)
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, Option<String>>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with("--")
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), Some(args[i + 1].clone()));
                i += 2;
            } else {
                extra_params.insert(key.to_string(), None);
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn hymnal_arg() -> Arg {
    Arg::new("hymnal")
        .help("Path to the hymnal XML export")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn number_arg() -> Arg {
    Arg::new("number")
        .help("Song number")
        .required(true)
        .index(2)
        .value_parser(clap::value_parser!(i32))
}

fn build_cli() -> Command {
    Command::new("hymn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse, preview and export songs from a hymnal database")
        .long_about(
            "hymn reads a hymnal XML export and renders its songs.\n\n\
            Commands:\n  \
            - list:     Songs in the hymnal, optionally filtered\n  \
            - preview:  Plain text of a song in playback order\n  \
            - export:   Slide-deck file for presentation software\n  \
            - sections: The order sequence of a song\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> <value> to override a setting for one run:\n  \
            symbol, symbol-location (none|start|end|both), lines-per-slide.\n\n\
            Examples:\n  \
            hymn list hymnal.xml --search vision\n  \
            hymn preview hymnal.xml 123\n  \
            hymn export hymnal.xml 123 -o song.show\n  \
            hymn export hymnal.xml 123 --extra-symbol-location end",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a hymn.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("list")
                .about("List songs as 'number - title'")
                .arg(hymnal_arg())
                .arg(
                    Arg::new("search")
                        .long("search")
                        .short('s')
                        .value_name("TEXT")
                        .help("Only songs whose number or title contains TEXT"),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Print the copy text for a song")
                .arg(hymnal_arg())
                .arg(number_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Format name (defaults to [preview] format from the config)")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export a song to a file")
                .long_about(
                    "Export a song through a file-exporting format.\n\n\
                    Settings are re-read from the configuration files right before\n\
                    the export runs. Without -o the file is written to the current\n\
                    directory as '<number> - <title><extension>'.\n\n\
                    Examples:\n  \
                    hymn export hymnal.xml 123                    # FreeShow .show file\n  \
                    hymn export hymnal.xml 123 -o out/song.show   # Explicit path",
                )
                .arg(hymnal_arg())
                .arg(number_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Format name (defaults to FreeShow)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("sections")
                .about("Print the section order of a song")
                .arg(hymnal_arg())
                .arg(number_arg()),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);
    let matches = build_cli().get_matches_from(&cleaned_args);

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let overrides = config_overrides(&mut extra_params).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });
    for key in extra_params.keys() {
        tracing::warn!("ignoring unknown parameter --extra-{key}");
    }
    let mut store = open_settings(matches.get_one::<String>("config"), overrides);
    let registry = FormatRegistry::default();

    match matches.subcommand() {
        Some(("list", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("hymnal")
                .expect("hymnal is required");
            let search = sub_matches.get_one::<String>("search").map(|s| s.as_str());
            handle_list_command(path, search);
        }
        Some(("preview", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("hymnal")
                .expect("hymnal is required");
            let number = *sub_matches
                .get_one::<i32>("number")
                .expect("number is required");
            let format = sub_matches
                .get_one::<String>("format")
                .cloned()
                .unwrap_or_else(|| store.config().preview.format.clone());
            handle_preview_command(&registry, path, number, &format, &store.settings());
        }
        Some(("export", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("hymnal")
                .expect("hymnal is required");
            let number = *sub_matches
                .get_one::<i32>("number")
                .expect("number is required");
            let format = sub_matches
                .get_one::<String>("format")
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_EXPORT_FORMAT);
            let output = sub_matches.get_one::<String>("output").map(PathBuf::from);
            handle_export_command(&registry, &mut store, path, number, format, output);
        }
        Some(("sections", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("hymnal")
                .expect("hymnal is required");
            let number = *sub_matches
                .get_one::<i32>("number")
                .expect("number is required");
            handle_sections_command(path, number);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_hymnal(path: &str) -> Hymnal {
    Hymnal::load(path).unwrap_or_else(|e| {
        eprintln!("Error reading hymnal '{path}': {e}");
        std::process::exit(1);
    })
}

fn load_song(path: &str, number: i32) -> (Song, Vec<OrderItem>) {
    let hymnal = load_hymnal(path);
    let song = hymnal.find_song(number).cloned().unwrap_or_else(|| {
        eprintln!("Error: Song {number} not found in '{path}'");
        std::process::exit(1);
    });
    let order = hymnal.ordered_sections(song.song_id);
    (song, order)
}

/// Handle the list command
fn handle_list_command(path: &str, search: Option<&str>) {
    let hymnal = load_hymnal(path);
    let songs = match search {
        Some(query) => hymnal.search(query),
        None => hymnal.songs(),
    };
    for song in songs {
        println!("{} - {}", song.number, song.title);
    }
}

/// Handle the preview command
fn handle_preview_command(
    registry: &FormatRegistry,
    path: &str,
    number: i32,
    format: &str,
    settings: &FormatSettings,
) {
    let (song, order) = load_song(path, number);
    let text = registry
        .copy_text(format, Some(&song), &order, settings)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
    println!("{text}");
}

/// Handle the export command
fn handle_export_command(
    registry: &FormatRegistry,
    store: &mut SettingsStore,
    path: &str,
    number: i32,
    format: &str,
    output: Option<PathBuf>,
) {
    let fmt = registry.get(format).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    if !fmt.supports_export() {
        eprintln!("Error: {} format does not support file export.", fmt.name());
        std::process::exit(1);
    }

    let (song, order) = load_song(path, number);
    let output = output.unwrap_or_else(|| PathBuf::from(fmt.suggested_file_name(&song)));

    // Pick up edits made to the config files since startup.
    let settings = store.reload().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    });

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error starting runtime: {e}");
            std::process::exit(1);
        });
    let written = runtime
        .block_on(hymn_babel::publish::export_to_file(
            fmt, &song, &order, &settings, &output,
        ))
        .unwrap_or_else(|e| {
            eprintln!("Export error: {e}");
            std::process::exit(1);
        });

    println!("{}", written.display());
}

/// Handle the sections command
fn handle_sections_command(path: &str, number: i32) {
    let (_, order) = load_song(path, number);
    for item in &order {
        println!(
            "{}\t{}\t{}",
            item.entry.order, item.section.name, item.section.section_id
        );
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let mut capabilities = Vec::new();
        if format.supports_copy() {
            capabilities.push("copy".to_string());
        }
        if format.supports_export() {
            capabilities.push(format!("export {}", format.file_extensions().join(" ")));
        }
        println!("  {name:<14} {} [{}]", format.description(), capabilities.join(", "));
    }
}

fn open_settings(explicit_path: Option<&String>, overrides: Vec<(String, ValueKind)>) -> SettingsStore {
    let mut sources = vec![Source::OptionalFile(PathBuf::from("hymn.toml"))];
    if let Some(path) = explicit_path {
        sources.push(Source::File(PathBuf::from(path)));
    }

    SettingsStore::open(sources, overrides).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Turn recognized `--extra-*` parameters into config overrides.
fn config_overrides(
    extra_params: &mut HashMap<String, Option<String>>,
) -> Result<Vec<(String, ValueKind)>, String> {
    let mut overrides = Vec::new();
    if let Some(raw) = extra_params.remove("symbol") {
        let symbol = require_value("symbol", raw)?;
        overrides.push(("last_section.symbol".to_string(), ValueKind::from(symbol)));
    }
    if let Some(raw) = take_override(extra_params, &["symbol-location", "location"]) {
        let raw = require_value("symbol-location", raw)?;
        if SymbolLocation::parse(&raw).is_none() {
            return Err(format!(
                "Invalid symbol location '{raw}' for --extra-symbol-location (expected none, start, end or both)"
            ));
        }
        overrides.push((
            "last_section.location".to_string(),
            ValueKind::from(raw.trim().to_ascii_lowercase()),
        ));
    }
    if let Some(raw) = take_override(extra_params, &["lines-per-slide", "lines"]) {
        let raw = require_value("lines-per-slide", raw)?;
        let lines = parse_count_arg("lines-per-slide", &raw)?;
        overrides.push(("slides.lines_per_slide".to_string(), ValueKind::from(lines)));
    }
    Ok(overrides)
}

fn take_override(
    map: &mut HashMap<String, Option<String>>,
    keys: &[&str],
) -> Option<Option<String>> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn require_value(flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("--extra-{flag} requires a value"))
}

fn parse_count_arg(flag: &str, raw: &str) -> Result<i64, String> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 0 => Ok(value),
        _ => Err(format!("Invalid count '{raw}' for --extra-{flag}")),
    }
}
