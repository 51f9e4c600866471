//! Subcommand implementations.

use anyhow::{Context, Result, bail};
use clue_content::{
    ClueStep, ContentFactory, Finding, RequirementRegistry, VariationTable, embedded,
};
use clue_core::{ClueError, ItemId, PlayerItems, ValidationConfig, ValidationLevel, VariationOracle};
use item_requirements::ItemRequirement;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ClientConfig;

/// Registry and clue steps loaded for one invocation.
pub struct Content {
    pub registry: RequirementRegistry,
    pub variations: VariationTable,
    pub clues: Vec<ClueStep>,
}

impl Content {
    pub fn load(config: &ClientConfig) -> Result<Self> {
        match &config.data_dir {
            Some(dir) => {
                let factory = ContentFactory::new(dir);
                let registry = factory
                    .build_registry(config.validation_config())
                    .with_context(|| {
                        format!("building registry from {}", factory.data_dir().display())
                    })?;
                Ok(Self {
                    registry,
                    variations: factory.load_variations()?,
                    clues: factory.load_clues()?,
                })
            }
            None => {
                let validation = match config.validation_config() {
                    Some(validation) => validation,
                    None => embedded::config()?.validation,
                };
                Ok(Self {
                    registry: embedded::standard_registry_with(&validation)?,
                    variations: embedded::variations()?,
                    clues: embedded::clues()?,
                })
            }
        }
    }
}

#[derive(Serialize)]
struct GroupSummary<'a> {
    key: &'a str,
    name: String,
    kind: &'static str,
    items: Vec<u32>,
}

fn summarize<'a>(key: &'a str, requirement: &ItemRequirement) -> GroupSummary<'a> {
    let kind = match requirement {
        ItemRequirement::Single(_) => "single",
        ItemRequirement::Any(_) => "any",
        ItemRequirement::All(_) => "all",
    };
    GroupSummary {
        key,
        name: requirement.collective_name(),
        kind,
        items: requirement.item_ids().into_iter().map(ItemId::get).collect(),
    }
}

/// Lists every group with its member count.
pub fn groups(content: &Content, json: bool) -> Result<()> {
    let summaries: Vec<GroupSummary<'_>> = content
        .registry
        .iter()
        .map(|group| summarize(&group.key, &group.requirement))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for summary in &summaries {
        println!(
            "{:<42} {:<4} {:>3} items  {}",
            summary.key,
            summary.kind,
            summary.items.len(),
            summary.name
        );
    }
    Ok(())
}

/// Prints the members of one group.
pub fn show(content: &Content, key: &str, json: bool) -> Result<()> {
    let requirement = content.registry.require(key)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summarize(key, requirement))?);
        return Ok(());
    }

    println!("{} ({})", requirement.collective_name(), key);
    match requirement {
        ItemRequirement::All(set) => {
            for slot in set.requirements() {
                let ids: Vec<String> = slot.item_ids().iter().map(ToString::to_string).collect();
                println!("  {}: {}", display_slot(slot), ids.join(", "));
            }
        }
        _ => {
            let ids: Vec<String> = requirement
                .item_ids()
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("  {}", ids.join(", "));
        }
    }
    Ok(())
}

fn display_slot(slot: &ItemRequirement) -> String {
    let name = slot.collective_name();
    if name.is_empty() { "(slot)".to_owned() } else { name }
}

#[derive(Serialize)]
struct CheckReport<'a> {
    held: Vec<HeldItem<'a>>,
    satisfied_groups: Vec<&'a str>,
    steps: Vec<StepReport<'a>>,
}

#[derive(Serialize)]
struct HeldItem<'a> {
    id: u32,
    /// Name of the variation group the item belongs to, if any.
    variant_of: Option<&'a str>,
}

impl<'a> HeldItem<'a> {
    fn describe(variations: &'a VariationTable, id: ItemId) -> Self {
        Self {
            id: id.get(),
            variant_of: variations
                .canonical(id)
                .and_then(|base| variations.name(base)),
        }
    }
}

#[derive(Serialize)]
struct StepReport<'a> {
    text: &'a str,
    kind: String,
    complete: bool,
    missing: Vec<String>,
}

/// Reports which groups and clue steps the given items satisfy.
pub fn check(content: &Content, items: &[u32], json: bool) -> Result<()> {
    let held = PlayerItems::from_ids(items.iter().copied().map(ItemId));

    let mut steps = Vec::with_capacity(content.clues.len());
    for step in &content.clues {
        let progress = step.evaluate(&content.registry, &held)?;
        steps.push(StepReport {
            text: &step.text,
            kind: step.kind.tag().to_string(),
            complete: progress.is_complete(),
            missing: step.missing_names(&content.registry, &held)?,
        });
    }
    let report = CheckReport {
        held: items
            .iter()
            .map(|id| HeldItem::describe(&content.variations, ItemId(*id)))
            .collect(),
        satisfied_groups: content.registry.satisfied_groups(&held),
        steps,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Held items:");
    for item in &report.held {
        match item.variant_of {
            Some(name) => println!("  {} ({name})", item.id),
            None => println!("  {}", item.id),
        }
    }

    println!("Satisfied groups:");
    if report.satisfied_groups.is_empty() {
        println!("  (none)");
    }
    for key in &report.satisfied_groups {
        println!("  {key}");
    }

    println!("Clue steps:");
    for step in &report.steps {
        let mark = if step.complete { "ok" } else { "--" };
        println!("  [{mark}] {} ({})", step.text, step.kind);
        for name in &step.missing {
            println!("         missing: {name}");
        }
    }
    Ok(())
}

/// Prints every finding in the content and fails if any is denied.
pub fn validate(config: &ClientConfig) -> Result<()> {
    let (findings, content_validation) = match &config.data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            (factory.validate()?, factory.load_config()?.validation)
        }
        None => (
            RequirementRegistry::validate(&embedded::groups()?, &embedded::variations()?),
            embedded::config()?.validation,
        ),
    };
    let validation: ValidationConfig = config.validation_config().unwrap_or(content_validation);

    if findings.is_empty() {
        info!(target: "clue_client", "Content is clean");
        println!("No findings.");
        return Ok(());
    }

    let mut denied = 0usize;
    for finding in &findings {
        let level = finding.level(&validation);
        if level == ValidationLevel::Deny {
            denied += 1;
        }
        let error = finding.clone().into_error();
        println!(
            "[{level}] {} ({}): {finding}",
            error.error_code(),
            error.severity().as_str()
        );
    }

    warn!(
        target: "clue_client",
        findings = findings.len(),
        groups = finding_groups(&findings),
        denied,
        "Content validation reported findings"
    );

    if denied > 0 {
        bail!("{denied} of {} findings are denied", findings.len());
    }
    Ok(())
}

/// Number of distinct groups with at least one finding.
fn finding_groups(findings: &[Finding]) -> usize {
    let mut groups: Vec<&str> = findings.iter().map(Finding::group).collect();
    groups.sort_unstable();
    groups.dedup();
    groups.len()
}
