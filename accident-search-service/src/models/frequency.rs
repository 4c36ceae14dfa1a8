use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use utoipa::openapi::{ObjectBuilder, RefOr, Schema, SchemaType};
use utoipa::ToSchema;

/// Occurrence count per distinct column value.
///
/// Entries are ordered by descending count, ties by ascending label. The
/// order is kept when serialised as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    /// Count each value yielded by `values`.
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for value in values {
            *counts.entry(value).or_default() += 1;
        }

        let mut entries: Vec<(String, u64)> = counts
            .into_iter()
            .map(|(label, count)| (label.to_string(), count))
            .collect();
        // Stable sort keeps the label order among equal counts.
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        Self { entries }
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

/// Documented as a JSON object mapping each label to its count.
impl<'s> ToSchema<'s> for FrequencyTable {
    fn schema() -> (&'s str, RefOr<Schema>) {
        (
            "FrequencyTable",
            ObjectBuilder::new()
                .description(Some("Occurrences per distinct value, highest count first"))
                .additional_properties(Some(
                    ObjectBuilder::new().schema_type(SchemaType::Integer),
                ))
                .into(),
        )
    }
}
