//! Command-line front-end
//!
//! `gh-decode` reads one response document (a file or stdin) and prints the
//! decoded result as JSON. It is a thin shell over [`Decoder`] and the rule
//! registry, mostly useful for checking how a captured response decodes.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use decode_common::{json_output, text_table};

use crate::dates::parse_date_with_format;
use crate::decoder::Decoder;
use crate::naming::FieldNamingPolicy;
use crate::registry::registry;
use crate::schema::{
    Discussion, Gist, Issue, Job, Organization, PullRequest, Repository, SchemaEntity, Team, Tree,
    User, UserFeed,
};

#[derive(Parser, Debug)]
#[command(name = "gh-decode")]
#[command(about = "Decode GitHub v2 API responses into typed entities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print single-line JSON instead of pretty output
    #[arg(long, global = true, env = "GH_DECODE_COMPACT")]
    pub compact: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a response into a typed entity
    Decode {
        /// Entity type the response holds
        #[arg(long, value_enum)]
        kind: EntityKind,
        /// The response is an array of entities
        #[arg(long)]
        list: bool,
        /// Response file (stdin when omitted)
        #[arg(long, env = "GH_DECODE_INPUT")]
        input: Option<PathBuf>,
    },
    /// Decode a response as a raw object or array
    Raw {
        /// Only print this field (camelCase or wire name)
        #[arg(long)]
        field: Option<String>,
        /// Response file (stdin when omitted)
        #[arg(long, env = "GH_DECODE_INPUT")]
        input: Option<PathBuf>,
    },
    /// Run a date string through the fallback formats
    Date {
        /// Date string as sent by the API
        value: String,
    },
    /// Resolve a polymorphic field value
    Resolve {
        /// Wire field name (pull_request, member, target)
        field: String,
        /// JSON value found at the field
        json: String,
    },
    /// Print the decoding rules
    Rules,
}

/// Entity types the CLI can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Issue,
    PullRequest,
    Repository,
    User,
    Organization,
    Team,
    Gist,
    Tree,
    Discussion,
    Job,
    Feed,
}

/// Execute a parsed command, writing results to `out`
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let compact = cli.compact;

    let rendered = match cli.command {
        Commands::Decode { kind, list, input } => {
            let decoder = Decoder::new();
            decoder.register_observer(log_decoded);
            let reader = open_input(input.as_deref())?;
            decode_kind(&decoder, kind, reader, list, compact)?
        }
        Commands::Raw { field, input } => {
            let reader = open_input(input.as_deref())?;
            let raw = decode_raw(reader, field.as_deref())?;
            json_output(&raw, compact)?
        }
        Commands::Date { value } => match parse_date_with_format(&value) {
            Some((date, format)) => {
                let date = date.to_string();
                text_table(&[
                    ("input", value.as_str()),
                    ("format", format.name()),
                    ("value", date.as_str()),
                ])
            }
            None => text_table(&[
                ("input", value.as_str()),
                ("format", "none"),
                ("value", "absent"),
            ]),
        },
        Commands::Resolve { field, json } => {
            let Some(rule) = registry().field_rule(&field) else {
                let known: Vec<_> = registry().fields().iter().map(|r| r.field).collect();
                bail!(
                    "unknown polymorphic field `{}` (known: {})",
                    field,
                    known.join(", ")
                );
            };
            let raw: Value =
                serde_json::from_str(&json).context("field value is not valid JSON")?;
            let resolution = (rule.resolve)(raw)?;
            json_output(&resolution, compact)?
        }
        Commands::Rules => json_output(registry(), compact)?,
    };

    writeln!(out, "{}", rendered)?;
    Ok(())
}

fn log_decoded(entities: &[&dyn SchemaEntity]) -> Result<()> {
    let kind = entities.first().map(|e| e.entity_kind()).unwrap_or("none");
    info!(count = entities.len(), kind, "decoded entity list");
    Ok(())
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin())),
    }
}

fn decode_kind(
    decoder: &Decoder,
    kind: EntityKind,
    reader: impl Read,
    list: bool,
    compact: bool,
) -> Result<String> {
    match kind {
        EntityKind::Issue => decode_as::<Issue>(decoder, reader, list, compact),
        EntityKind::PullRequest => decode_as::<PullRequest>(decoder, reader, list, compact),
        EntityKind::Repository => decode_as::<Repository>(decoder, reader, list, compact),
        EntityKind::User => decode_as::<User>(decoder, reader, list, compact),
        EntityKind::Organization => decode_as::<Organization>(decoder, reader, list, compact),
        EntityKind::Team => decode_as::<Team>(decoder, reader, list, compact),
        EntityKind::Gist => decode_as::<Gist>(decoder, reader, list, compact),
        EntityKind::Tree => decode_as::<Tree>(decoder, reader, list, compact),
        EntityKind::Discussion => decode_as::<Discussion>(decoder, reader, list, compact),
        EntityKind::Job => decode_as::<Job>(decoder, reader, list, compact),
        EntityKind::Feed => decode_as::<UserFeed>(decoder, reader, list, compact),
    }
}

fn decode_as<T>(decoder: &Decoder, reader: impl Read, list: bool, compact: bool) -> Result<String>
where
    T: DeserializeOwned + Serialize + SchemaEntity,
{
    if list {
        let entities: Vec<T> = decoder.decode_list(reader)?;
        json_output(&entities, compact)
    } else {
        let entity: T = decoder.decode(reader)?;
        json_output(&entity, compact)
    }
}

/// Raw object or array, optionally narrowed to one field
fn decode_raw(mut reader: impl Read, field: Option<&str>) -> Result<Value> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    drop(reader);

    let decoder = Decoder::new();
    let policy = FieldNamingPolicy::default();
    let is_array = bytes
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'[');

    if is_array {
        let array = decoder.decode_raw_array(bytes.as_slice())?;
        Ok(match field {
            Some(name) => Value::Array(
                array
                    .iter()
                    .map(|item| {
                        item.as_object()
                            .and_then(|object| policy.lookup(object, name))
                            .cloned()
                            .unwrap_or(Value::Null)
                    })
                    .collect(),
            ),
            None => Value::Array(array),
        })
    } else {
        let object = decoder.decode_raw_object(bytes.as_slice())?;
        Ok(match field {
            Some(name) => policy.lookup(&object, name).cloned().unwrap_or(Value::Null),
            None => Value::Object(object),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn temp_json(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_decode_command() {
        let cli = Cli::try_parse_from([
            "gh-decode",
            "decode",
            "--kind",
            "pull-request",
            "--list",
            "--compact",
        ])
        .unwrap();
        assert!(cli.compact);
        match cli.command {
            Commands::Decode { kind, list, .. } => {
                assert_eq!(kind, EntityKind::PullRequest);
                assert!(list);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_decode_file() {
        let file = temp_json(r#"{"number": 9, "state": "open", "created_at": "2020-01-02T03:04:05"}"#);
        let path = file.path().to_str().unwrap();
        let output = run_args(&["gh-decode", "decode", "--kind", "issue", "--input", path, "--compact"])
            .unwrap();
        assert!(output.contains(r#""number":9"#));
        assert!(output.contains(r#""created_at":"2020-01-02T03:04:05""#));
    }

    #[test]
    fn test_decode_error_surfaces() {
        let file = temp_json("[]");
        let path = file.path().to_str().unwrap();
        let err = run_args(&["gh-decode", "decode", "--kind", "issue", "--input", path]).unwrap_err();
        assert!(err.to_string().contains("unexpected structural kind"));
    }

    #[test]
    fn test_raw_field_by_domain_name() {
        let file = temp_json(r#"[{"created_at": "a"}, {"created_at": "b"}, 3]"#);
        let path = file.path().to_str().unwrap();
        let output = run_args(&[
            "gh-decode", "raw", "--field", "createdAt", "--input", path, "--compact",
        ])
        .unwrap();
        assert_eq!(output.trim(), r#"["a","b",null]"#);
    }

    #[test]
    fn test_date_command() {
        let output = run_args(&["gh-decode", "date", "Thu Jan 02 03:04:05 UTC 2020"]).unwrap();
        assert!(output.contains("verbose-utc"));

        let output = run_args(&["gh-decode", "date", "not-a-date"]).unwrap();
        assert!(output.contains("absent"));
    }

    #[test]
    fn test_resolve_command() {
        let output =
            run_args(&["gh-decode", "resolve", "pull_request", "17", "--compact"]).unwrap();
        assert_eq!(
            output.trim(),
            r#"{"field":"pull_request","variant":"number","identity":"17"}"#
        );

        let err = run_args(&["gh-decode", "resolve", "assignee", "\"x\""]).unwrap_err();
        assert!(err.to_string().contains("unknown polymorphic field"));
    }

    #[test]
    fn test_rules_command() {
        let output = run_args(&["gh-decode", "rules", "--compact"]).unwrap();
        assert!(output.contains("verbose-utc"));
        assert!(output.contains("PullRequestReviewCommentEvent"));
    }
}
