//! Column label canonicalization.
//!
//! Matching in the resolver is plain substring containment, so labels are
//! first brought to a deterministic shape: trimmed, lowercased, spaces
//! replaced with underscores. The transform is total and order-preserving;
//! duplicate outputs are permitted here and only rejected later, at the
//! table-normalization boundary.

use tabproj_core::ColumnLabel;

/// Canonicalize a single raw column label
pub fn normalize_label(raw: &str) -> ColumnLabel {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Canonicalize a label sequence, one output per input, order preserved
pub fn normalize_labels(raw: &[ColumnLabel]) -> Vec<ColumnLabel> {
    raw.iter().map(|label| normalize_label(label)).collect()
}
