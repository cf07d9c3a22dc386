//! Fields command handler.
//!
//! Implements the `fields` subcommand: lists every scored metadata key so
//! data producers know what to supply.

use crate::pipeline::{write_output, OutputTarget};
use crate::quality::{fields_in, FieldCategory, TOTAL_POSSIBLE_POINTS};
use crate::reports::ReportFormat;
use anyhow::{Context, Result};
use serde_json::json;
use unicode_width::UnicodeWidthStr;

/// Run the fields command.
pub fn run_fields(format: ReportFormat, target: &OutputTarget) -> Result<()> {
    let text = match format {
        ReportFormat::Json => format_fields_json()?,
        _ => format_fields_table(),
    };
    write_output(&text, target, true)
}

fn format_fields_json() -> Result<String> {
    let categories: Vec<_> = FieldCategory::ALL
        .iter()
        .map(|category| {
            let fields: Vec<_> = fields_in(*category)
                .map(|spec| {
                    json!({
                        "key": spec.key,
                        "label": spec.label,
                        "points": spec.points,
                        "group": spec.group,
                    })
                })
                .collect();
            json!({
                "category": category.name(),
                "title": category.title(),
                "possiblePoints": category.possible_points(),
                "fields": fields,
            })
        })
        .collect();
    let output = json!({
        "totalPossiblePoints": TOTAL_POSSIBLE_POINTS,
        "categories": categories,
    });
    let mut text = serde_json::to_string_pretty(&output).context("serializing field table")?;
    text.push('\n');
    Ok(text)
}

fn format_fields_table() -> String {
    let key_width = FieldCategory::ALL
        .iter()
        .flat_map(|c| fields_in(*c))
        .map(|spec| spec.key.width())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for category in FieldCategory::ALL {
        lines.push(format!(
            "{} ({} points)",
            category.title(),
            category.possible_points()
        ));
        for spec in fields_in(category) {
            let group = spec
                .group
                .map(|g| format!("  [either-or: {g}]"))
                .unwrap_or_default();
            lines.push(format!(
                "  {:<key_width$}  {:>2}  {}{}",
                spec.key, spec.points, spec.label, group
            ));
        }
        lines.push(String::new());
    }
    lines.push(format!("Total possible points: {TOTAL_POSSIBLE_POINTS}"));
    lines.join("\n") + "\n"
}
