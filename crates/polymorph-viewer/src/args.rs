//! Command-line overrides for the morph configuration.

use std::str::FromStr;

use polymorph::MorphConfig;

pub const USAGE: &str =
    "usage: polymorph-viewer [--radius R] [--segments N] [--cycle SECONDS] [--speed X]";

/// What the command line asked for.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Run the viewer with this configuration.
    Run(MorphConfig),
    /// Print [`USAGE`] and exit.
    Help,
}

/// Parse `--flag value` pairs on top of the default configuration.
///
/// Values are only parsed here; [`polymorph::Morpher::new`] validates them.
pub fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut config = MorphConfig::default();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--radius" => config.radius = parse_value(&flag, args.next())?,
            "--segments" => config.segments = parse_value(&flag, args.next())?,
            "--cycle" => config.cycle_duration = parse_value(&flag, args.next())?,
            "--speed" => config.speed = parse_value(&flag, args.next())?,
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(format!("unknown argument {other:?}\n{USAGE}")),
        }
    }

    Ok(Command::Run(config))
}

fn parse_value<T>(flag: &str, value: Option<String>) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse()
        .map_err(|e| format!("invalid value {value:?} for {flag}: {e}"))
}
