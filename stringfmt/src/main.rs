//! # stringfmt
//!
//! A CLI front end for stringfmtlib: format integers, padded fields, and
//! optional values from the shell.
//!
//! ## Usage
//!
//! ```bash
//! # Hex with prefix and bytewise padding
//! stringfmt int 15 --radix hex --prefix --bytewise     # 0x0F
//!
//! # Center in a 7-wide field
//! stringfmt pad 23 --width 7 --align center            # "   23  "
//!
//! # Optional-value presentation
//! stringfmt opt --style descriptive                    # Optional(nil)
//! stringfmt opt 23 --style descriptive                 # Optional(23)
//!
//! # Plural buckets
//! stringfmt plural 2 --zero none --one one --many many # many
//!
//! # JSON output
//! stringfmt int 15 --radix hex --output json           # {"formatted":"F"}
//! ```
//!
//! All formatting logic lives in stringfmtlib; this binary only parses
//! arguments and prints the result.

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use serde::Serialize;
use stringfmtlib::{
    select_plural, Alignment, IntegerFormatter, OptionalFormatter, OptionalStyle, Radix,
    StringFormatter,
};

/// Wrapper for `--output json`
#[derive(Debug, Serialize)]
struct Formatted {
    formatted: String,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("stringfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Format integers, padded fields, and optional values")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .subcommand(
            Command::new("int")
                .about("Format an integer under radix/sign/padding rules")
                .arg(
                    Arg::new("value")
                        .required(true)
                        .allow_negative_numbers(true)
                        .help("Integer to format"),
                )
                .arg(
                    Arg::new("radix")
                        .short('r')
                        .long("radix")
                        .default_value("decimal")
                        .help("Radix: binary, octal, decimal, or hex"),
                )
                .arg(
                    Arg::new("prefix")
                        .short('p')
                        .long("prefix")
                        .action(ArgAction::SetTrue)
                        .help("Prepend the radix prefix (0b, 0o, 0x)"),
                )
                .arg(
                    Arg::new("bytewise")
                        .short('b')
                        .long("bytewise")
                        .action(ArgAction::SetTrue)
                        .help("Pad to one byte's worth of digits"),
                )
                .arg(
                    Arg::new("min-digits")
                        .short('m')
                        .long("min-digits")
                        .default_value("0")
                        .help("Minimum digit count (zero-padded)"),
                )
                .arg(
                    Arg::new("plus")
                        .long("plus")
                        .action(ArgAction::SetTrue)
                        .help("Show + on non-negative decimal values"),
                ),
        )
        .subcommand(
            Command::new("pad")
                .about("Pad text to a minimum width")
                .arg(Arg::new("text").required(true).help("Text to pad"))
                .arg(
                    Arg::new("width")
                        .short('w')
                        .long("width")
                        .required(true)
                        .help("Minimum field width"),
                )
                .arg(
                    Arg::new("align")
                        .short('a')
                        .long("align")
                        .default_value("right")
                        .help("Alignment: left, right, or center"),
                )
                .arg(
                    Arg::new("fill")
                        .short('f')
                        .long("fill")
                        .default_value(" ")
                        .help("Padding character"),
                ),
        )
        .subcommand(
            Command::new("opt")
                .about("Present an optional value (omit VALUE for the absent case)")
                .arg(Arg::new("value").help("Value, if present"))
                .arg(
                    Arg::new("style")
                        .short('s')
                        .long("style")
                        .default_value("stripped")
                        .help("Style: descriptive, stripped, or system"),
                )
                .arg(
                    Arg::new("absent")
                        .long("absent")
                        .default_value("nil")
                        .help("Text for the absent case"),
                ),
        )
        .subcommand(
            Command::new("plural")
                .about("Select a noun form by count")
                .arg(
                    Arg::new("count")
                        .required(true)
                        .allow_negative_numbers(true)
                        .help("Count to bucket"),
                )
                .arg(
                    Arg::new("zero")
                        .long("zero")
                        .required(true)
                        .help("Form for zero"),
                )
                .arg(
                    Arg::new("one")
                        .long("one")
                        .required(true)
                        .help("Form for exactly one"),
                )
                .arg(
                    Arg::new("many")
                        .long("many")
                        .required(true)
                        .help("Form for everything else"),
                ),
        )
}

/// Handler for the int subcommand
fn int_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let value: i128 = matches
        .get_one::<String>("value")
        .expect("required arg")
        .parse()
        .context("value must be an integer")?;
    let radix = Radix::from_str(matches.get_one::<String>("radix").expect("defaulted"))
        .map_err(|e| anyhow!(e))?;
    let min_digits: usize = matches
        .get_one::<String>("min-digits")
        .expect("defaulted")
        .parse()
        .context("min-digits must be a non-negative integer")?;

    let formatter = IntegerFormatter::format(radix)
        .uses_prefix(matches.get_flag("prefix"))
        .explicit_positive_sign(matches.get_flag("plus"))
        .bytewise(matches.get_flag("bytewise"))
        .min_digits(min_digits);

    Ok(formatter.string_from(value))
}

/// Handler for the pad subcommand
fn pad_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let text = matches.get_one::<String>("text").expect("required arg");
    let width: usize = matches
        .get_one::<String>("width")
        .expect("required arg")
        .parse()
        .context("width must be a non-negative integer")?;
    let alignment = Alignment::from_str(matches.get_one::<String>("align").expect("defaulted"))
        .map_err(|e| anyhow!(e))?;
    let fill = matches.get_one::<String>("fill").expect("defaulted");
    let mut fill_chars = fill.chars();
    let padding_character = match (fill_chars.next(), fill_chars.next()) {
        (Some(c), None) => c,
        _ => return Err(anyhow!("fill must be a single character")),
    };

    let formatter = StringFormatter::format()
        .alignment(alignment)
        .padding_character(padding_character)
        .width(width);

    Ok(formatter.pad(text))
}

/// Handler for the opt subcommand
fn opt_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let style = OptionalStyle::from_str(matches.get_one::<String>("style").expect("defaulted"))
        .map_err(|e| anyhow!(e))?;
    let absent = matches.get_one::<String>("absent").expect("defaulted");
    let formatter = OptionalFormatter::format(style).absent_text(absent.as_str());

    Ok(formatter.string_from(matches.get_one::<String>("value")))
}

/// Handler for the plural subcommand
fn plural_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let count: i64 = matches
        .get_one::<String>("count")
        .expect("required arg")
        .parse()
        .context("count must be an integer")?;

    Ok(select_plural(
        count,
        matches.get_one::<String>("zero").expect("required arg"),
        matches.get_one::<String>("one").expect("required arg"),
        matches.get_one::<String>("many").expect("required arg"),
    )
    .to_string())
}

/// Dispatch to the matched subcommand and apply the output mode
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let (name, sub) = matches.subcommand().expect("subcommand required");
    let formatted = match name {
        "int" => int_handler(sub)?,
        "pad" => pad_handler(sub)?,
        "opt" => opt_handler(sub)?,
        "plural" => plural_handler(sub)?,
        _ => unreachable!("unknown subcommand"),
    };

    let output = sub.get_one::<String>("output").expect("defaulted");
    if output == "json" {
        Ok(serde_json::to_string(&Formatted { formatted })?)
    } else {
        Ok(formatted)
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let error_style = Style::new().red().bold();
            eprintln!("{} {}", error_style.apply_to("Error:"), err);
            ExitCode::FAILURE
        }
    }
}
