use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree from src/main.rs
// Build scripts can't access src/ modules, so the definition is repeated here
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
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Format name")
        .value_parser(["Plain Text", "FreeShow", "ProPresenter"])
        .value_hint(ValueHint::Other)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("hymn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse, preview and export songs from a hymnal database")
        .arg_required_else_help(true)
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
                .arg(Arg::new("search").long("search").short('s').value_name("TEXT")),
        )
        .subcommand(
            Command::new("preview")
                .about("Print the copy text for a song")
                .arg(hymnal_arg())
                .arg(number_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Export a song to a file")
                .arg(hymnal_arg())
                .arg(number_arg())
                .arg(format_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("sections")
                .about("Print the section order of a song")
                .arg(hymnal_arg())
                .arg(number_arg()),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "hymn", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "hymn", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "hymn", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
