use std::{env, fmt, time::Duration};

use log::LevelFilter;

use crate::{Error, Result};

/// Default 2-opt budget in seconds, just under the five-hour contest limit.
const DEFAULT_TIME_LIMIT_SECS: u64 = 17_940;

/// Runtime options for solver behavior.
#[derive(Clone, Debug)]
pub struct SolverOptions {
    /// Wall-clock budget in seconds for the 2-opt improvement loop.
    pub time_limit: u64,
    /// Pipeline stage to run: `trivial`, `greedy`, or `two-opt`.
    pub mode: SolverMode,
    /// Output rendering: index order or reordered coordinate lines.
    pub emit: OutputFormat,
    /// Structured logging level.
    pub log_level: LogLevel,
    /// Logging output format.
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    pub log_timestamp: bool,
    /// Optional input file path for points. Empty means stdin.
    pub input: String,
    /// Optional output file path for the solution. Empty means stdout.
    pub output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverMode {
    /// Identity visiting order, no optimization.
    Trivial,
    /// Nearest-neighbor construction only.
    Greedy,
    /// Nearest-neighbor construction refined by 2-opt local search.
    TwoOpt,
}

impl SolverMode {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "trivial" => Ok(Self::Trivial),
            "greedy" => Ok(Self::Greedy),
            "two-opt" | "2-opt" => Ok(Self::TwoOpt),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --mode: {value} (expected trivial, greedy, or two-opt)"
            ))),
        }
    }
}

impl fmt::Display for SolverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Trivial => "trivial",
            Self::Greedy => "greedy",
            Self::TwoOpt => "two-opt",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    /// `<length> <optimal-flag>` line followed by the index order.
    Indices,
    /// One `x y` line per point, in visiting order.
    Points,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "indices" => Ok(Self::Indices),
            "points" => Ok(Self::Points),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --emit: {value} (expected indices or points)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Indices => "indices",
            Self::Points => "points",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            "off" => Ok(Self::Off),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --log-level: {value} (expected error, warn, info, debug, trace, or off)"
            ))),
        }
    }

    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::Off => "off",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(Error::invalid_input(format!(
                "Invalid value for --log-format: {value} (expected compact or pretty)"
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Compact => "compact",
            Self::Pretty => "pretty",
        };
        write!(f, "{name}")
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT_SECS,
            mode: SolverMode::TwoOpt,
            emit: OutputFormat::Indices,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            input: String::new(),
            output: String::new(),
        }
    }
}

impl SolverOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit)
    }

    fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };
            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = split_arg(raw_name, &mut args);

            match name.as_str() {
                "time-limit" => {
                    options.time_limit = parse_value::<u64>(&name, value)?;
                }
                "mode" => {
                    options.mode = SolverMode::parse(&require_value(&name, value)?)?;
                }
                "emit" => {
                    options.emit = OutputFormat::parse(&require_value(&name, value)?)?;
                }
                "log-level" => {
                    options.log_level = LogLevel::parse(&require_value(&name, value)?)?;
                }
                "log-format" => {
                    options.log_format = LogFormat::parse(&require_value(&name, value)?)?;
                }
                "log-timestamp" => {
                    options.log_timestamp = match value {
                        Some(v) => parse_bool(&name, &v)?,
                        None => true,
                    };
                }
                "no-log-timestamp" => {
                    if value.is_some() {
                        return Err(Error::invalid_input(format!(
                            "Flag --{name} does not take a value"
                        )));
                    }
                    options.log_timestamp = false;
                }
                "input" => {
                    options.input = require_value(&name, value)?;
                }
                "output" => {
                    options.output = require_value(&name, value)?;
                }
                _ => {
                    return Err(Error::invalid_input(format!(
                        "Unknown option: --{name}\n\n{}",
                        Self::usage()
                    )));
                }
            }
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  tsp-ls [options] < points.txt\n\n",
            "Options:\n",
            "  --time-limit <seconds>           2-opt wall-clock budget (default 17940)\n",
            "  --mode <trivial|greedy|two-opt>  Pipeline stage to run (default two-opt)\n",
            "  --emit <indices|points>          Output format (default indices)\n",
            "  --input <path>                   Read points from a file instead of stdin\n",
            "  --output <path>                  Write the solution to a file instead of stdout\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --help\n",
            "\n",
            "Input: first token is the point count, then one `x y` pair per point.\n",
            "Output: a `<length> <optimal-flag>` line, then the visiting order.\n",
        )
    }
}

impl fmt::Display for SolverOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "time_limit_s={} mode={} emit={} log_level={} log_format={} log_timestamp={} input={} output={}",
            self.time_limit,
            self.mode,
            self.emit,
            self.log_level,
            self.log_format,
            self.log_timestamp,
            path_or_dash(&self.input),
            path_or_dash(&self.output),
        )
    }
}

fn path_or_dash(path: &str) -> &str {
    if path.is_empty() { "-" } else { path }
}

fn require_value(name: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::invalid_input(format!("Missing value for --{name}")))
}

fn parse_value<T>(name: &str, value: Option<String>) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let raw = require_value(name, value)?;
    raw.parse::<T>()
        .map_err(|e| Error::invalid_input(format!("Invalid value for --{name}: {raw} ({e})")))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "off" | "OFF" => Ok(false),
        _ => Err(Error::invalid_input(format!(
            "Invalid boolean for --{name}: {value} (expected true/false)"
        ))),
    }
}

fn split_arg(
    raw_name: &str,
    args: &mut std::iter::Peekable<impl Iterator<Item = String>>,
) -> (String, Option<String>) {
    if let Some((k, v)) = raw_name.split_once('=') {
        return (k.to_string(), Some(v.to_string()));
    }

    let value = match args.peek() {
        Some(next) if !next.starts_with("--") => args.next(),
        _ => None,
    };

    (raw_name.to_string(), value)
}
