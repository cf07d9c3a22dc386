//! Report section builders.
//!
//! Each builder turns a [`ScoredProduct`] into one [`Section`] without
//! touching any output format. [`build_sections`] composes them in the
//! fixed report order.

use chrono::{DateTime, Utc};

use super::escape::single_line;
use super::layout::{Block, Column, Section, SectionKind, Table};
use super::types::ReportOptions;
use crate::model::{value_to_string, Product};
use crate::quality::{
    categorize, format_field_name, format_field_value, key_findings, recommendations,
    CategorizedFields, FieldCategory, TransparencyScore, TransparencyScorer,
};

const INTRODUCTION: &str = "This report assesses how completely the product's published \
    information discloses its origin, environmental performance, materials, certifications \
    and supply chain. Each disclosed field earns a fixed number of points out of 100.";

/// A product together with everything derived from it for one report
#[derive(Debug, Clone)]
pub struct ScoredProduct<'a> {
    pub product: &'a Product,
    pub score: TransparencyScore,
    pub fields: CategorizedFields<'a>,
    pub generated_at: DateTime<Utc>,
}

impl<'a> ScoredProduct<'a> {
    /// Score and categorize `product`
    #[must_use]
    pub fn new(product: &'a Product, generated_at: DateTime<Utc>) -> Self {
        let score = TransparencyScorer::new().score_product(product);
        Self::with_score(product, score, generated_at)
    }

    /// Use a score computed elsewhere
    #[must_use]
    pub fn with_score(
        product: &'a Product,
        score: TransparencyScore,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            product,
            score,
            fields: categorize(&product.metadata),
            generated_at,
        }
    }
}

fn or_unspecified(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        "Not specified".to_string()
    } else {
        single_line(value)
    }
}

/// Title page: report title, product, company and generation date.
#[must_use]
pub fn cover(scored: &ScoredProduct<'_>, title: &str) -> Section {
    let product = scored.product;
    let mut section = Section::new(SectionKind::Cover);
    section
        .push(Block::Title(title.to_string()))
        .push(Block::Spacer)
        .push(Block::Field {
            label: "Product".to_string(),
            value: or_unspecified(&product.name),
        })
        .push(Block::Field {
            label: "Company".to_string(),
            value: or_unspecified(&product.company_id),
        });
    if let Some(id) = product.id.as_deref() {
        section.push(Block::Field {
            label: "Product ID".to_string(),
            value: or_unspecified(id),
        });
    }
    section
        .push(Block::Field {
            label: "Generated".to_string(),
            value: scored
                .generated_at
                .format("%B %-d, %Y %H:%M UTC")
                .to_string(),
        })
        .push(Block::Spacer)
        .push(Block::Paragraph(INTRODUCTION.to_string()))
        .push(Block::PageBreak);
    section
}

/// Overall score, tier description and the key-finding table.
#[must_use]
pub fn summary(scored: &ScoredProduct<'_>) -> Section {
    let score = &scored.score;
    let mut findings = Table::new(vec![
        Column::new("Area", 0.5),
        Column::new("Status", 0.25),
        Column::new("Impact", 0.25),
    ]);
    for finding in key_findings(&scored.product.metadata) {
        findings.push_row(vec![
            finding.label.to_string(),
            finding.status_label().to_string(),
            finding.impact.label().to_string(),
        ]);
    }

    let mut section = Section::new(SectionKind::Summary);
    section
        .push(Block::Heading("Transparency Summary".to_string()))
        .push(Block::Highlight {
            label: "Transparency Score".to_string(),
            value: format!("{}/100", score.score),
        })
        .push(Block::Field {
            label: "Assessment".to_string(),
            value: score.description.clone(),
        })
        .push(Block::Field {
            label: "Points Earned".to_string(),
            value: format!("{} of {}", score.earned_points, score.possible_points),
        })
        .push(Block::Subheading("Key Findings".to_string()))
        .push(Block::Table(findings));
    section
}

/// One data table per category that has at least one disclosed field.
#[must_use]
pub fn category_tables(scored: &ScoredProduct<'_>) -> Vec<Section> {
    scored
        .fields
        .populated()
        .map(|category| category_table(category, &scored.fields))
        .collect()
}

fn category_table(category: FieldCategory, fields: &CategorizedFields<'_>) -> Section {
    let mut table = Table::new(vec![Column::new("Field", 0.35), Column::new("Value", 0.65)]);
    for (key, value) in fields.get(category) {
        table.push_row(vec![
            format_field_name(key),
            single_line(&format_field_value(value)),
        ]);
    }

    let mut section = Section::new(SectionKind::Category(category));
    section
        .push(Block::Heading(category.title().to_string()))
        .push(Block::Table(table));
    section
}

/// Numbered questionnaire answers; `None` when there are no questions.
#[must_use]
pub fn questions(scored: &ScoredProduct<'_>) -> Option<Section> {
    let questions = &scored.product.questions;
    if questions.is_empty() {
        return None;
    }

    let mut section = Section::new(SectionKind::Questions);
    section.push(Block::Heading("Questions & Answers".to_string()));
    for (idx, qa) in questions.iter().enumerate() {
        let body = qa
            .answer_text()
            .map(|answer| format!("Answer: {}", single_line(answer)))
            .unwrap_or_default();
        section.push(Block::Item {
            title: format!("{}. {}", idx + 1, single_line(&qa.text)),
            body,
        });
    }
    Some(section)
}

/// Earned, possible and percentage per category plus a total row.
#[must_use]
pub fn score_breakdown(scored: &ScoredProduct<'_>) -> Section {
    let score = &scored.score;
    let mut table = Table::new(vec![
        Column::new("Category", 0.4),
        Column::new("Earned", 0.2).right(),
        Column::new("Possible", 0.2).right(),
        Column::new("Percentage", 0.2).right(),
    ]);
    for category in &score.breakdown {
        table.push_row(vec![
            category.category.title().to_string(),
            category.earned.to_string(),
            category.possible.to_string(),
            format!("{}%", category.percentage()),
        ]);
    }
    table.push_row(vec![
        "Total".to_string(),
        score.earned_points.to_string(),
        score.possible_points.to_string(),
        format!("{}%", score.score),
    ]);
    table.total_row = true;

    let mut section = Section::new(SectionKind::Breakdown);
    section
        .push(Block::Heading("Score Breakdown".to_string()))
        .push(Block::Table(table));
    section
}

/// Improvement suggestions for missing key disclosures.
#[must_use]
pub fn recommendation_list(scored: &ScoredProduct<'_>) -> Section {
    let mut section = Section::new(SectionKind::Recommendations);
    section.push(Block::Heading("Recommendations".to_string()));

    let recs = recommendations(&scored.product.metadata);
    if recs.is_empty() {
        section.push(Block::Paragraph(
            "All key disclosures are present. No improvement actions are suggested.".to_string(),
        ));
    }
    for (idx, rec) in recs.iter().enumerate() {
        section.push(Block::Item {
            title: format!("{}. {}", idx + 1, rec.title),
            body: rec.message.to_string(),
        });
    }
    section
}

/// Every metadata entry, verbatim, on a fresh page.
#[must_use]
pub fn appendix(scored: &ScoredProduct<'_>) -> Section {
    let metadata = &scored.product.metadata;
    let mut section = Section::new(SectionKind::Appendix);
    section
        .push(Block::PageBreak)
        .push(Block::Heading("Appendix: Raw Metadata".to_string()));

    if metadata.is_empty() {
        section.push(Block::Paragraph("No metadata was supplied.".to_string()));
        return section;
    }

    let lines = metadata
        .iter()
        .flat_map(|(key, value)| {
            let entry = format!("{key}: {}", value_to_string(value));
            entry.lines().map(str::to_string).collect::<Vec<_>>()
        })
        .collect();
    section.push(Block::Code(lines));
    section
}

/// All sections of a report in their fixed order.
#[must_use]
pub fn build_sections(scored: &ScoredProduct<'_>, options: &ReportOptions) -> Vec<Section> {
    let mut sections = vec![cover(scored, &options.title), summary(scored)];
    sections.extend(category_tables(scored));
    if options.include_questions {
        sections.extend(questions(scored));
    }
    sections.push(score_breakdown(scored));
    sections.push(recommendation_list(scored));
    if options.include_appendix {
        sections.push(appendix(scored));
    }
    sections
}
