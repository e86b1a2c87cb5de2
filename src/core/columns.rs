//! Column identification policy
//!
//! Input spreadsheets drift in their duration/manpower header spellings
//! ("Total time", "Total Time (h:mm:ss)", ...), so those columns are located
//! by an explicit, ordered rule table rather than exact names: a rule
//! matches the first column whose header contains all of its tokens,
//! case-insensitively. The hierarchy columns (`Equipment Code`, `Type`,
//! `Module`, `Components`) are matched by name (case-insensitive) since the
//! cascade depends on them being unambiguous.

/// Canonical name of the join key column.
pub const EQUIPMENT_CODE: &str = "Equipment Code";
/// Canonical name of the equipment type column (joined from metadata).
pub const EQUIPMENT_TYPE: &str = "Type";
/// Canonical name of the module column.
pub const MODULE: &str = "Module";
/// Canonical name of the component column.
pub const COMPONENTS: &str = "Components";

/// A loose header-matching rule: all tokens must appear in the header,
/// case-insensitively. The first matching column wins.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule {
    /// Human-readable label used in messages and report headers.
    pub label: &'static str,
    pub tokens: &'static [&'static str],
}

impl ColumnRule {
    pub fn matches(&self, header: &str) -> bool {
        let lowered = header.to_lowercase();
        self.tokens.iter().all(|t| lowered.contains(t))
    }

    /// Index of the first matching column, if any.
    pub fn find(&self, headers: &[String]) -> Option<usize> {
        headers.iter().position(|h| self.matches(h))
    }
}

/// Total duration per record.
pub const TOTAL_TIME: ColumnRule = ColumnRule {
    label: "total time",
    tokens: &["total", "time"],
};

/// Preparation/finalization duration.
pub const PREP_TIME: ColumnRule = ColumnRule {
    label: "preparation time",
    tokens: &["preparation"],
};

/// Activity duration.
pub const ACTIVITY_TIME: ColumnRule = ColumnRule {
    label: "activity time",
    tokens: &["activity"],
};

/// Crew size per record.
pub const MANPOWER: ColumnRule = ColumnRule {
    label: "manpower",
    tokens: &["man", "power"],
};
