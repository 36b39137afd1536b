//! Classify-and-respond over a validated response table.

use rand::Rng;

use crate::error::TableError;
use crate::table::{Category, ResponseTable};

/// Matches user input against the table and selects a canned reply.
///
/// Pure apart from the caller-supplied random source: the same input and
/// RNG state always yield the same reply.
pub struct ResponseEngine {
    table: ResponseTable,
}

impl ResponseEngine {
    /// Create an engine over a table, validating it first.
    pub fn new(table: ResponseTable) -> Result<Self, TableError> {
        table.validate()?;
        Ok(Self { table })
    }

    /// Create an engine over the stock tables.
    pub fn with_builtin() -> Self {
        // The builtin table is covered by tests; validation cannot fail.
        Self {
            table: ResponseTable::builtin(),
        }
    }

    /// The table this engine matches against.
    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    /// Find the first category whose pattern occurs in the input.
    ///
    /// The input is lowercased, then categories are scanned in declared
    /// order and each category's patterns in declared order; the first
    /// substring containment wins and scanning stops immediately. No
    /// scoring, no longest-match preference, no word boundaries.
    pub fn classify(&self, input: &str) -> Option<&Category> {
        let lowered = input.to_lowercase();
        for category in &self.table.categories {
            for pattern in &category.patterns {
                if lowered.contains(pattern.as_str()) {
                    tracing::debug!(
                        category = %category.name,
                        pattern = %pattern,
                        "input matched"
                    );
                    return Some(category);
                }
            }
        }
        None
    }

    /// Classify the input and pick a reply uniformly at random from the
    /// matched category's pool, or from the default pool when nothing
    /// matches. Always returns a reply.
    pub fn respond<R: Rng>(&self, input: &str, rng: &mut R) -> String {
        let pool = match self.classify(input) {
            Some(category) => &category.responses,
            None => {
                tracing::debug!("no category matched, using default pool");
                &self.table.default_responses
            }
        };
        // Validation guarantees every pool is non-empty.
        pool[rng.gen_range(0..pool.len())].clone()
    }
}

// =============================================================================
// Tests
// =============================================================================
