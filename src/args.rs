use mfl::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Detail,
    Paid,
    Unpaid,
    Monthwise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Text,
}

#[derive(Debug)]
pub struct Args {
    pub report: ReportKind,
    pub students_path: PathBuf,
    pub payments_path: PathBuf,
    pub fees_path: PathBuf,
    pub class_filter: Option<String>,
    pub month_filter: Option<String>,
    pub student: Option<u32>,
    pub format: OutputFormat,
}

/// Parses the input arguments: a report kind, the three snapshot files,
/// then optional `--class`, `--month`, `--student`, and `--format` flags.
pub fn parse_args() -> Result<Args> {
    let mut raw = env::args().skip(1);

    let report = match raw.next().as_deref() {
        Some("detail") => ReportKind::Detail,
        Some("paid") => ReportKind::Paid,
        Some("unpaid") => ReportKind::Unpaid,
        Some("monthwise") => ReportKind::Monthwise,
        Some(other) => Err(InputArgsError::Parse(format!(
            "Unknown report kind: {other:?} (expected detail, paid, unpaid, or monthwise)"
        )))?,
        None => Err(InputArgsError::Parse(
            "First argument must be the report kind.".to_string(),
        ))?,
    };

    let students_path = next_path(&mut raw, "students file")?;
    let payments_path = next_path(&mut raw, "payments file")?;
    let fees_path = next_path(&mut raw, "fee schedule file")?;

    let mut args = Args {
        report,
        students_path,
        payments_path,
        fees_path,
        class_filter: None,
        month_filter: None,
        student: None,
        format: OutputFormat::Text,
    };

    while let Some(flag) = raw.next() {
        match flag.as_str() {
            "--class" => args.class_filter = Some(flag_value(&mut raw, "--class")?),
            "--month" => args.month_filter = Some(flag_value(&mut raw, "--month")?),
            "--student" => {
                let value = flag_value(&mut raw, "--student")?;

                let id = value.parse().map_err(|_| {
                    InputArgsError::Parse(format!("--student expects a numeric id, got {value:?}"))
                })?;

                args.student = Some(id);
            }
            "--format" => {
                args.format = match flag_value(&mut raw, "--format")?.as_str() {
                    "csv" => OutputFormat::Csv,
                    "text" => OutputFormat::Text,
                    other => Err(InputArgsError::Parse(format!(
                        "Unknown output format: {other:?}"
                    )))?,
                };
            }
            other => Err(InputArgsError::Parse(format!("Unknown flag: {other:?}")))?,
        }
    }

    if args.report == ReportKind::Detail && args.student.is_none() {
        Err(InputArgsError::Parse(
            "The detail report requires --student <id>.".to_string(),
        ))?
    }

    return Ok(args);
}

fn next_path(raw: &mut impl Iterator<Item = String>, what: &str) -> Result<PathBuf> {
    let filename = raw
        .next()
        .ok_or_else(|| InputArgsError::Parse(format!("Missing argument: {what}.")))?;

    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(path)
}

fn flag_value(raw: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    return raw
        .next()
        .ok_or_else(|| InputArgsError::Parse(format!("{flag} expects a value.")).into());
}
