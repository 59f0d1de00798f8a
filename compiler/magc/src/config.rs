//! Command-line configuration.
//!
//! Parsed by hand: `magpie <command> [options] [inputs...]`. Options may
//! appear anywhere after the command.

use mag_diagnostic::emitter::ColorMode;
use mag_eval::ErrorPolicy;

use crate::Error;

/// Which host runs receive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HostKind {
    /// stdout for program output, stderr for runtime errors.
    #[default]
    Console,
    /// Discard output and runtime errors (`--quiet`). The exit code still
    /// reflects failures.
    Quiet,
    /// Send both channels to `tracing` (`--trace-output`).
    Tracing,
}

/// How syntax diagnostics are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Settings shared by all commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub error_policy: ErrorPolicy,
    pub host: HostKind,
    pub color: ColorMode,
    pub format: OutputFormat,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run one or more files.
    Run { files: Vec<String> },
    /// Run a source snippet given on the command line.
    Eval { source: String },
    /// Lex and parse files without running them.
    Check { files: Vec<String> },
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cli {
    pub command: Command,
    pub config: RunConfig,
}

/// Parse command-line arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<Cli, Error> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Cli {
            command: Command::Help,
            config: RunConfig::default(),
        });
    };

    let mut config = RunConfig::default();
    let mut inputs = Vec::new();
    for arg in rest {
        if let Some(value) = arg.strip_prefix("--on-error=") {
            config.error_policy = ErrorPolicy::parse(value).ok_or_else(|| {
                Error::Usage(format!(
                    "invalid value `{value}` for --on-error (expected abort or continue)"
                ))
            })?;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            config.color = ColorMode::parse(value).ok_or_else(|| {
                Error::Usage(format!(
                    "invalid value `{value}` for --color (expected auto, always or never)"
                ))
            })?;
        } else if let Some(value) = arg.strip_prefix("--format=") {
            config.format = OutputFormat::parse(value).ok_or_else(|| {
                Error::Usage(format!(
                    "invalid value `{value}` for --format (expected text or json)"
                ))
            })?;
        } else if arg == "--quiet" || arg == "-q" {
            config.host = HostKind::Quiet;
        } else if arg == "--trace-output" {
            config.host = HostKind::Tracing;
        } else if arg.starts_with("--") {
            return Err(Error::Usage(format!("unknown option `{arg}`")));
        } else {
            inputs.push(arg.clone());
        }
    }

    let command = match command.as_str() {
        "run" => {
            if inputs.is_empty() {
                return Err(Error::Usage("usage: magpie run <file>...".to_string()));
            }
            Command::Run { files: inputs }
        }
        "check" => {
            if inputs.is_empty() {
                return Err(Error::Usage("usage: magpie check <file>...".to_string()));
            }
            Command::Check { files: inputs }
        }
        "eval" => {
            let [source] = <[String; 1]>::try_from(inputs).map_err(|_| {
                Error::Usage("usage: magpie eval '<source>'".to_string())
            })?;
            Command::Eval { source }
        }
        "help" | "--help" | "-h" => Command::Help,
        "version" | "--version" | "-V" => Command::Version,
        other => return Err(Error::Usage(format!("unknown command `{other}`"))),
    };

    Ok(Cli { command, config })
}
