//! Name search over the breed collection
//!
//! Pure functions: the collection is only read, never reordered or mutated.

use crate::model::BreedRecord;

/// Trim surrounding whitespace and lower-case
#[inline]
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Records whose lower-cased name contains the normalized query
///
/// An empty (or whitespace-only) query keeps every record. Input order is
/// preserved.
#[must_use]
pub fn filter_breeds<'a, I>(records: I, query: &str) -> Vec<&'a BreedRecord>
where
    I: IntoIterator<Item = &'a BreedRecord>,
{
    let query = normalize_query(query);
    if query.is_empty() {
        return records.into_iter().collect();
    }

    records
        .into_iter()
        .filter(|breed| breed.name.to_lowercase().contains(&query))
        .collect()
}
