use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the subcommands from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const FORMATS: &[&str] = &["html", "svg", "imperative", "json"];
const SOURCE_FORMATS: &[&str] = &["html", "svg", "imperative"];
const INSPECT_VIEWS: &[&str] = &["tree", "json"];
const NAMESPACES: &[&str] = &["html", "svg"];

fn input_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("imperative")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate HTML and SVG to builder code and back")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an imperative.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats")
                .arg(input_arg("input"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_parser(clap::builder::PossibleValuesParser::new(SOURCE_FORMATS)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate markup to builder code")
                .arg(input_arg("input"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_parser(clap::builder::PossibleValuesParser::new(NAMESPACES)),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Dump the parsed element tree")
                .arg(input_arg("path"))
                .arg(
                    Arg::new("view")
                        .index(2)
                        .value_parser(clap::builder::PossibleValuesParser::new(INSPECT_VIEWS)),
                ),
        )
        .subcommand(
            Command::new("tags")
                .about("List the known tag names")
                .arg(
                    Arg::new("namespace")
                        .index(1)
                        .value_parser(clap::builder::PossibleValuesParser::new(NAMESPACES)),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "imperative", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "imperative", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "imperative", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
