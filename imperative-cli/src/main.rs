// Command-line interface for imperative markup
//
// This binary translates HTML and SVG into builder code (HTML.div(...), SVG.circle(...)) and
// reads builder code back into markup. All conversions go through the imperative-markup
// FormatRegistry; this crate only wires files, configuration and flags to it.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// falling back to `convert.default_from`, while being overwrittable by an explicit --from flag.
// Usage:
//  imperative <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  imperative convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  imperative translate <input> [--from html|svg] [--output <file>]      - Shorthand for --to imperative
//  imperative inspect <path> [tree|json]                                 - Dump the parsed tree
//  imperative tags [html|svg]                                            - List known tag names
//  imperative --list-formats                                             - List available formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// `indent` and `strict` override the configuration; anything else is passed to the target format.
// Example:
//  imperative translate page.html --extra-indent 2

mod inspect;

use clap::{Arg, ArgAction, Command, ValueHint};
use imperative_config::{ImperativeConfig, Loader};
use imperative_markup::formats::imperative::parse_indent;
use imperative_markup::formats::{HtmlFormat, ImperativeFormat, JsonFormat, SvgFormat};
use imperative_markup::{
    Builder, Diagnostic, DiagnosticSink, ElementFactory, Format, FormatError, FormatRegistry,
    Fragment, Reader,
};
use std::collections::HashMap;
use std::fs;
use std::rc::Rc;

/// Builder warnings go straight to stderr; the CLI installs no logger.
struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, diagnostic: Diagnostic) {
        eprintln!("Warning: {diagnostic}");
    }
}

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // Check if the next arg is a value or another flag/end
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with("--"));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("imperative")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate HTML and SVG to builder code and back")
        .long_about(
            "imperative turns markup into the builder calls that would construct it,\n\
            and reads those calls back into markup.\n\n\
            Commands:\n  \
            - convert:   Transform between formats (html, svg, imperative, json)\n  \
            - translate: Markup to builder code\n  \
            - inspect:   View the parsed element tree\n  \
            - tags:      List the known HTML or SVG tag names\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            imperative translate page.html                  # Builder code on stdout\n  \
            imperative translate page.html --extra-indent 2 # Indent with two spaces\n  \
            imperative page.js --to html                    # Builder code back to HTML\n  \
            imperative inspect icon.svg json                # Tree as JSON",
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
                .help("Path to an imperative.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats (default command)")
                .long_about(
                    "Convert between markup and builder code.\n\n\
                    Supported formats:\n  \
                    - html:       HTML markup (.html, .htm)\n  \
                    - svg:        SVG content (.svg)\n  \
                    - imperative: Builder code (.js, .mjs)\n  \
                    - json:       Element tree dump (output only)\n\n\
                    The source format is auto-detected from the file extension, falling back\n\
                    to `convert.default_from` from the configuration.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    imperative convert page.html --to imperative     # Builder code (stdout)\n  \
                    imperative convert page.js --to html -o out.html # Back to HTML\n  \
                    imperative page.html --to json                   # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate HTML or SVG to builder code")
                .long_about(
                    "Shorthand for `convert --to imperative`.\n\n\
                    Indentation comes from `translate.indent` in the configuration and can be\n\
                    overridden with --extra-indent <tab|N|string>.\n\n\
                    Examples:\n  \
                    imperative translate page.html\n  \
                    imperative translate icon.svg --extra-indent 4",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source markup (auto-detected from file extension if not specified)")
                        .value_parser(["html", "svg"]),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Dump the parsed element tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .help("Output view. Defaults to 'tree'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            inspect::AVAILABLE_VIEWS,
                        ))
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("tags")
                .about("List the known tag names")
                .arg(
                    Arg::new("namespace")
                        .help("Tag table to list. Defaults to 'html'")
                        .required(false)
                        .value_parser(["html", "svg"])
                        .index(1),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is not a flag or a subcommand is the convert input
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !["convert", "translate", "inspect", "tags", "help"]
                    .contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    let registry = registry_from_config(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let to = required(sub_matches, "to");
            let from = source_format(&registry, &config, input, sub_matches);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, &config, input, &from, to, output, &extra_params);
        }
        Some(("translate", sub_matches)) => {
            let input = required(sub_matches, "input");
            let from = source_format(&registry, &config, input, sub_matches);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(
                &registry,
                &config,
                input,
                &from,
                "imperative",
                output,
                &extra_params,
            );
        }
        Some(("inspect", sub_matches)) => {
            let path = required(sub_matches, "path");
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or("tree");
            let from = source_format(&registry, &config, path, sub_matches);
            handle_inspect_command(&registry, &config, path, &from, view);
        }
        Some(("tags", sub_matches)) => {
            let namespace = sub_matches
                .get_one::<String>("namespace")
                .map(|s| s.as_str())
                .unwrap_or("html");
            handle_tags_command(namespace);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required<'m>(matches: &'m clap::ArgMatches, name: &str) -> &'m str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_else(|| {
            eprintln!("Error: missing required argument '{name}'");
            std::process::exit(1);
        })
}

/// `--from` when given, otherwise the format registered for the file extension, otherwise
/// the configured default.
fn source_format(
    registry: &FormatRegistry,
    config: &ImperativeConfig,
    input: &str,
    matches: &clap::ArgMatches,
) -> String {
    let explicit = matches
        .try_get_one::<String>("from")
        .ok()
        .flatten()
        .cloned();
    explicit
        .or_else(|| registry.detect_format_from_filename(input))
        .unwrap_or_else(|| config.convert.default_from.clone())
}

fn handle_convert_command(
    registry: &FormatRegistry,
    config: &ImperativeConfig,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) {
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let doc = read_input(registry, config, input, from);

    let result = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{result}"),
    }
}

fn handle_inspect_command(
    registry: &FormatRegistry,
    config: &ImperativeConfig,
    path: &str,
    from: &str,
    view: &str,
) {
    let doc = read_input(registry, config, path, from);
    match view {
        "json" => {
            let json = registry.serialize(&doc, "json").unwrap_or_else(|e| {
                eprintln!("Serialization error: {e}");
                std::process::exit(1);
            });
            println!("{json}");
        }
        _ => print!("{}", inspect::render_tree(&doc)),
    }
}

fn handle_tags_command(namespace: &str) {
    let factory = match namespace {
        "svg" => ElementFactory::svg(),
        _ => ElementFactory::html(),
    };
    for tag in factory.known_tags() {
        println!("{tag}");
    }
}

fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "in/out",
            (true, false) => "in",
            (false, true) => "out",
            (false, false) => "-",
        };
        println!("  {name:<12} {direction:<7} {}", format.description());
    }
}

fn read_input(
    registry: &FormatRegistry,
    config: &ImperativeConfig,
    path: &str,
    from: &str,
) -> Fragment {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    parse_source(registry, config, &source, from).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

/// Builder code is read with a stderr sink so builder warnings reach the user; other
/// formats go through the registry.
fn parse_source(
    registry: &FormatRegistry,
    config: &ImperativeConfig,
    source: &str,
    from: &str,
) -> Result<Fragment, FormatError> {
    if from != "imperative" {
        return registry.parse(source, from);
    }
    let builder = Builder::with_sink(Rc::new(StderrSink));
    let (html, svg) = if config.build.strict {
        (ElementFactory::strict_html(), ElementFactory::strict_svg())
    } else {
        (ElementFactory::html(), ElementFactory::svg())
    };
    let reader = Reader::with_factories(
        html.with_builder(builder.clone()),
        svg.with_builder(builder),
    );
    Ok(reader.read(source)?)
}

fn registry_from_config(config: &ImperativeConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(HtmlFormat);
    registry.register(SvgFormat);
    registry.register(ImperativeFormat::new(config.into()));
    registry.register(JsonFormat);
    registry
}

fn load_cli_config(explicit_path: Option<&str>) -> ImperativeConfig {
    let loader = Loader::new().with_optional_file("imperative.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(
    config: &mut ImperativeConfig,
    extra_params: &mut HashMap<String, String>,
) {
    if let Some(raw) = extra_params.remove("indent") {
        config.translate.indent = parse_indent(&raw);
    }
    if let Some(raw) = extra_params.remove("strict") {
        config.build.strict = parse_bool_arg("strict", &raw);
    }
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
