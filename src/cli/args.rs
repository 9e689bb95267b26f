//! Command-line argument parsing.
//!
//! With no arguments the dashboard starts. Otherwise the first argument
//! names a subcommand that calls one backend helper and prints the result.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

pub const USAGE: &str = "\
Usage: socialdash [COMMAND]

With no command, opens the dashboard.

Commands:
  generate <prompt> [--type T] [--platform P] [--audience A] [--gemini]
  variations <theme> [--count N] [--type T] [--concurrent LIMIT]
  translate <text> --to LANG [--from LANG]
  detect <text>
  batch-translate <text>... --to LANG [--from LANG]
  infer <model> <prompt>
  use-suggestion <id>
  post-from-suggestion <id> --platforms 1,2 [--at RFC3339]

Options:
  -h, --help     Show this help
  -V, --version  Show version";

/// Number of variations when `--count` is not given.
pub const DEFAULT_VARIATION_COUNT: usize = 3;

/// Content type sent with variations when `--type` is not given.
pub const DEFAULT_CONTENT_KIND: &str = "content";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    /// Open the dashboard (default)
    RunTui,
    Generate {
        prompt: String,
        kind: Option<String>,
        platform: Option<String>,
        audience: Option<String>,
        use_gemini: bool,
    },
    Variations {
        theme: String,
        count: usize,
        kind: Option<String>,
        /// Fan out with this many requests in flight instead of one at a time
        concurrency: Option<usize>,
    },
    Translate {
        text: String,
        target: String,
        source: Option<String>,
    },
    Detect {
        text: String,
    },
    BatchTranslate {
        texts: Vec<String>,
        target: String,
        source: Option<String>,
    },
    Infer {
        model: String,
        prompt: String,
    },
    UseSuggestion {
        id: i64,
    },
    PostFromSuggestion {
        id: i64,
        platforms: Vec<i64>,
        scheduled_at: Option<DateTime<Utc>>,
    },
    /// Arguments could not be parsed
    Invalid(String),
}

/// Parse command-line arguments (program name first).
///
/// # Examples
///
/// ```
/// use socialdash::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["socialdash".to_string(), "detect".to_string(), "hola".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Detect { text: "hola".to_string() });
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let args: Vec<String> = args.skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        return CliCommand::RunTui;
    };

    let parsed = match command.as_str() {
        "--version" | "-V" => Ok(CliCommand::Version),
        "--help" | "-h" | "help" => Ok(CliCommand::Help),
        "generate" => parse_generate(rest),
        "variations" => parse_variations(rest),
        "translate" => parse_translate(rest),
        "detect" => parse_detect(rest),
        "batch-translate" => parse_batch_translate(rest),
        "infer" => parse_infer(rest),
        "use-suggestion" => parse_use_suggestion(rest),
        "post-from-suggestion" => parse_post_from_suggestion(rest),
        other => Err(format!("unknown command: {}", other)),
    };

    parsed.unwrap_or_else(CliCommand::Invalid)
}

// ============================================================================
// Subcommands
// ============================================================================

fn parse_generate(args: &[String]) -> Result<CliCommand, String> {
    let mut parsed = ParsedArgs::parse(args, &["--gemini"])?;
    let prompt = parsed.joined_positionals("prompt")?;
    Ok(CliCommand::Generate {
        prompt,
        kind: parsed.take("--type"),
        platform: parsed.take("--platform"),
        audience: parsed.take("--audience"),
        use_gemini: parsed.switch("--gemini"),
    })
}

fn parse_variations(args: &[String]) -> Result<CliCommand, String> {
    let mut parsed = ParsedArgs::parse(args, &[])?;
    let theme = parsed.joined_positionals("theme")?;
    let count = match parsed.take("--count") {
        Some(raw) => parse_number(&raw, "--count")?,
        None => DEFAULT_VARIATION_COUNT,
    };
    let concurrency = parsed
        .take("--concurrent")
        .map(|raw| parse_number(&raw, "--concurrent"))
        .transpose()?;
    Ok(CliCommand::Variations {
        theme,
        count,
        kind: parsed.take("--type"),
        concurrency,
    })
}

fn parse_translate(args: &[String]) -> Result<CliCommand, String> {
    let mut parsed = ParsedArgs::parse(args, &[])?;
    let text = parsed.joined_positionals("text")?;
    let target = parsed.require("--to")?;
    Ok(CliCommand::Translate {
        text,
        target,
        source: parsed.take("--from"),
    })
}

fn parse_detect(args: &[String]) -> Result<CliCommand, String> {
    let parsed = ParsedArgs::parse(args, &[])?;
    Ok(CliCommand::Detect {
        text: parsed.joined_positionals("text")?,
    })
}

fn parse_batch_translate(args: &[String]) -> Result<CliCommand, String> {
    let mut parsed = ParsedArgs::parse(args, &[])?;
    if parsed.positionals.is_empty() {
        return Err("batch-translate needs at least one text".to_string());
    }
    let target = parsed.require("--to")?;
    Ok(CliCommand::BatchTranslate {
        texts: std::mem::take(&mut parsed.positionals),
        target,
        source: parsed.take("--from"),
    })
}

fn parse_infer(args: &[String]) -> Result<CliCommand, String> {
    let parsed = ParsedArgs::parse(args, &[])?;
    let Some((model, prompt)) = parsed.positionals.split_first() else {
        return Err("infer needs <model> <prompt>".to_string());
    };
    if prompt.is_empty() {
        return Err("infer needs <model> <prompt>".to_string());
    }
    Ok(CliCommand::Infer {
        model: model.clone(),
        prompt: prompt.join(" "),
    })
}

fn parse_use_suggestion(args: &[String]) -> Result<CliCommand, String> {
    let parsed = ParsedArgs::parse(args, &[])?;
    Ok(CliCommand::UseSuggestion {
        id: parsed.single_id()?,
    })
}

fn parse_post_from_suggestion(args: &[String]) -> Result<CliCommand, String> {
    let mut parsed = ParsedArgs::parse(args, &[])?;
    let id = parsed.single_id()?;
    let platforms = parsed
        .require("--platforms")?
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| parse_number::<i64>(part.trim(), "--platforms"))
        .collect::<Result<Vec<_>, _>>()?;
    let scheduled_at = parsed
        .take("--at")
        .map(|raw| {
            DateTime::parse_from_rfc3339(&raw)
                .map(|at| at.with_timezone(&Utc))
                .map_err(|_| format!("--at is not an RFC 3339 timestamp: {}", raw))
        })
        .transpose()?;
    Ok(CliCommand::PostFromSuggestion {
        id,
        platforms,
        scheduled_at,
    })
}

// ============================================================================
// Helpers
// ============================================================================

/// Positionals plus `--flag value` options.
struct ParsedArgs {
    positionals: Vec<String>,
    options: HashMap<String, String>,
    switches: Vec<String>,
}

impl ParsedArgs {
    /// Flags listed in `switches` take no value.
    fn parse(args: &[String], switches: &[&str]) -> Result<Self, String> {
        let mut parsed = Self {
            positionals: Vec::new(),
            options: HashMap::new(),
            switches: Vec::new(),
        };
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if switches.contains(&arg.as_str()) {
                parsed.switches.push(arg.clone());
            } else if arg.starts_with("--") {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{} needs a value", arg))?;
                parsed.options.insert(arg.clone(), value.clone());
            } else {
                parsed.positionals.push(arg.clone());
            }
        }
        Ok(parsed)
    }

    fn take(&mut self, flag: &str) -> Option<String> {
        self.options.remove(flag)
    }

    fn require(&mut self, flag: &str) -> Result<String, String> {
        self.take(flag).ok_or_else(|| format!("missing required {}", flag))
    }

    fn switch(&self, flag: &str) -> bool {
        self.switches.iter().any(|s| s == flag)
    }

    fn joined_positionals(&self, name: &str) -> Result<String, String> {
        if self.positionals.is_empty() {
            return Err(format!("missing <{}>", name));
        }
        Ok(self.positionals.join(" "))
    }

    fn single_id(&self) -> Result<i64, String> {
        match self.positionals.as_slice() {
            [id] => parse_number(id, "<id>"),
            _ => Err("expected a single <id>".to_string()),
        }
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("{} is not a valid number: {}", name, raw))
}
