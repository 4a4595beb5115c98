//! Command dispatch: routes CLI tokens to analysis or bit-field decoding.
//!
//! Tokens after the command name are either `key=value` option
//! assignments (applied before the command runs) or positional arguments.
//! An unrecognized command name is retried as arguments to `n`, so bare
//! numbers work without naming a command.

use tracing::debug;

use bitprobe_core::{analyze, bitfield, check_arity, Options, ProbeError, Report};

use crate::table::{Align, Table};
use crate::CliError;

/// The command table: name and help line, in help order.
pub const COMMANDS: [(&str, &str); 5] = [
    ("help", "Help."),
    ("one", "Info about one number: bitprobe one <number>"),
    ("two", "Info about 2 numbers: bitprobe two <a> <b>"),
    ("n", "Info about one or two numbers: bitprobe n <a> [<b>]"),
    ("bf", "Decode into named bit-fields: bitprobe bf <name:width,...> <number>"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Help,
    One,
    Two,
    N,
    Bf,
}

impl Command {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "help" => Some(Command::Help),
            "one" => Some(Command::One),
            "two" => Some(Command::Two),
            "n" => Some(Command::N),
            "bf" => Some(Command::Bf),
            _ => None,
        }
    }
}

/// Run one invocation over raw CLI tokens, returning what to print.
pub fn run(tokens: &[String]) -> Result<String, CliError> {
    let (first, rest) = match tokens.split_first() {
        Some(split) => split,
        None => return Ok(help_text()),
    };

    let mut opts = Options::default();
    let mut args = Vec::new();
    for token in rest {
        match token.split_once('=') {
            Some((key, value)) => opts.assign(key, value)?,
            None => args.push(token.clone()),
        }
    }

    match Command::from_name(first) {
        Some(command) => {
            debug!(?command, ?args, "dispatching");
            Ok(execute(command, &args, &opts)?)
        }
        None => {
            // bare numeric tokens route to `n`
            let mut n_args = vec![first.clone()];
            n_args.extend(args);
            debug!(?n_args, "implicit dispatch to n");
            execute(Command::N, &n_args, &opts).map_err(|source| CliError::ImplicitDispatch {
                attempted: format!("bitprobe n {}", n_args.join(" ")),
                commands: COMMANDS.map(|(name, _)| name).to_vec(),
                source,
            })
        }
    }
}

fn execute(command: Command, args: &[String], opts: &Options) -> Result<String, ProbeError> {
    match command {
        Command::Help => Ok(help_text()),
        Command::One => {
            check_arity(args, 1)?;
            Ok(render_report(&analyze::analyze_one(&args[0], opts)?, opts))
        }
        Command::Two => {
            check_arity(args, 2)?;
            Ok(render_report(
                &analyze::analyze_two(&args[0], &args[1], opts)?,
                opts,
            ))
        }
        Command::N => match args.len() {
            1 => execute(Command::One, args, opts),
            2 => execute(Command::Two, args, opts),
            n => Err(ProbeError::UnsupportedArity {
                command: "n".to_string(),
                actual: n,
            }),
        },
        Command::Bf => {
            check_arity(args, 2)?;
            let report = bitfield::decode(&args[0], &args[1], opts)?;
            Ok(render_bitfield(&report, opts))
        }
    }
}

fn render_report(report: &Report, opts: &Options) -> String {
    let headers = ["", "Dec", "Hex", "Bin"].map(String::from).to_vec();
    let mut table = Table::new(headers, opts.style, Align::Right);
    for row in report.rows() {
        table.push_row(row.to_vec());
    }
    table.render()
}

fn render_bitfield(report: &bitfield::BitfieldReport, opts: &Options) -> String {
    let mut table = Table::new(report.headers(), opts.style, Align::Center);
    for row in report.rows() {
        table.push_row(row);
    }
    table.render()
}

fn help_text() -> String {
    let mut out = String::from("Available commands:\n");
    for (name, help) in COMMANDS {
        out.push_str(&format!("\t{}: {}\n", name, help));
    }
    out.push_str("\nAvailable options (space-separated list of <option>=<value>):\n");
    out.push_str(Options::info());
    out
}
