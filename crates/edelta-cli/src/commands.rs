use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;

use edelta_core::{diff_dyn_with, AnyEntity, Delta, EmptyPolicy, FieldKind};
use edelta_entities::EntityKind;

use crate::cli::*;
use crate::config::{CliConfig, OutputFormat};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &config),
        Command::Fields(args) => cmd_fields(args, &config),
    }
}

/// Machine-readable outcome of a diff.
#[derive(Debug, PartialEq, Serialize)]
pub struct DiffReport {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incomparable: Option<Incomparable>,
    pub delta: Option<serde_json::Value>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Incomparable {
    pub base: String,
    pub new: String,
}

impl DiffReport {
    pub fn from_delta(delta: Delta<Box<dyn AnyEntity>>) -> anyhow::Result<Self> {
        Ok(match delta {
            Delta::Unchanged => Self {
                changed: false,
                incomparable: None,
                delta: None,
            },
            Delta::Changed(entity) => Self {
                changed: true,
                incomparable: None,
                delta: Some(entity.to_json()?),
            },
            Delta::Incomparable { base, new } => Self {
                changed: true,
                incomparable: Some(Incomparable {
                    base: base.to_string(),
                    new: new.to_string(),
                }),
                delta: None,
            },
        })
    }
}

fn cmd_diff(args: DiffArgs, config: &CliConfig) -> anyhow::Result<()> {
    let kind = resolve_kind(args.kind.as_deref(), config)?;
    let new_kind = match args.new_kind.as_deref() {
        Some(name) => name.parse()?,
        None => kind,
    };

    let base = load_entity(&args.base, kind)?;
    let new = load_entity(&args.new, new_kind)?;
    let policy = EmptyPolicy::new(
        config.policy.nil_is_empty_base || args.nil_is_empty_base,
        config.policy.nil_is_empty_new || args.nil_is_empty_new,
    );

    let report = DiffReport::from_delta(diff_dyn_with(base.as_ref(), new.as_ref(), policy))?;
    match config.format {
        OutputFormat::Json => println!("{}", to_json(&report, config.pretty)?),
        OutputFormat::Text => print_report(&report, config.pretty)?,
    }
    Ok(())
}

fn cmd_fields(args: FieldsArgs, config: &CliConfig) -> anyhow::Result<()> {
    let kind: EntityKind = args.kind.parse()?;
    match config.format {
        OutputFormat::Json => println!("{}", to_json(&kind.fields(), config.pretty)?),
        OutputFormat::Text => {
            println!("Fields of {}:", kind.to_string().bold());
            for field in kind.fields() {
                let kind_label = match field.kind {
                    FieldKind::Leaf => "leaf".normal(),
                    FieldKind::Record => "record".cyan(),
                    FieldKind::Comparable => "comparable".yellow(),
                };
                let nullable = if field.nullable { " (nullable)".dimmed() } else { "".normal() };
                println!("  {:<16} {}{}", field.name, kind_label, nullable);
            }
        }
    }
    Ok(())
}

fn resolve_kind(arg: Option<&str>, config: &CliConfig) -> anyhow::Result<EntityKind> {
    let name = arg
        .or(config.default_kind.as_deref())
        .context("no entity type given; pass --kind or set default_kind in edelta.toml")?;
    Ok(name.parse()?)
}

fn load_entity(path: &Path, kind: EntityKind) -> anyhow::Result<Box<dyn AnyEntity>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    kind.decode(value)
        .with_context(|| format!("decoding {} as {kind}", path.display()))
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn print_report(report: &DiffReport, pretty: bool) -> anyhow::Result<()> {
    if let Some(incomparable) = &report.incomparable {
        println!(
            "{} {} vs {}: full replacement required",
            "✗ Incomparable".red().bold(),
            incomparable.base.yellow(),
            incomparable.new.yellow()
        );
        return Ok(());
    }
    match &report.delta {
        Some(delta) => {
            println!("{} Partial update:", "✓".green().bold());
            println!("{}", to_json(delta, pretty)?);
        }
        None => println!("No changes."),
    }
    Ok(())
}
