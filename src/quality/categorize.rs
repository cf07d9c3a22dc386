//! Partition of present metadata entries into disclosure categories.

use serde_json::Value;

use super::fields::{category_of, FieldCategory};
use crate::model::Metadata;

/// Present metadata entries grouped by category, each in the mapping's order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedFields<'a> {
    pub basic: Vec<(&'a str, &'a Value)>,
    pub sustainability: Vec<(&'a str, &'a Value)>,
    pub materials: Vec<(&'a str, &'a Value)>,
    pub certifications: Vec<(&'a str, &'a Value)>,
    pub additional: Vec<(&'a str, &'a Value)>,
}

impl<'a> CategorizedFields<'a> {
    /// Entries of one category
    #[must_use]
    pub fn get(&self, category: FieldCategory) -> &[(&'a str, &'a Value)] {
        match category {
            FieldCategory::Basic => &self.basic,
            FieldCategory::Sustainability => &self.sustainability,
            FieldCategory::Materials => &self.materials,
            FieldCategory::Certifications => &self.certifications,
            FieldCategory::Additional => &self.additional,
        }
    }

    fn get_mut(&mut self, category: FieldCategory) -> &mut Vec<(&'a str, &'a Value)> {
        match category {
            FieldCategory::Basic => &mut self.basic,
            FieldCategory::Sustainability => &mut self.sustainability,
            FieldCategory::Materials => &mut self.materials,
            FieldCategory::Certifications => &mut self.certifications,
            FieldCategory::Additional => &mut self.additional,
        }
    }

    /// Categories that hold at least one entry, in report order
    pub fn populated(&self) -> impl Iterator<Item = FieldCategory> + '_ {
        FieldCategory::ALL
            .into_iter()
            .filter(|category| !self.get(*category).is_empty())
    }

    /// Total number of categorized entries
    #[must_use]
    pub fn len(&self) -> usize {
        FieldCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split the present entries of `metadata` into their categories.
///
/// Absent values (see [`crate::model::is_present_value`]) are skipped.
#[must_use]
pub fn categorize(metadata: &Metadata) -> CategorizedFields<'_> {
    let mut fields = CategorizedFields::default();
    for (key, value) in metadata.present_entries() {
        fields.get_mut(category_of(key)).push((key, value));
    }
    fields
}
