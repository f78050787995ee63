//! Heuristic column-to-role resolution.
//!
//! The resolver is a pure function over an ordered, immutable rule table:
//! one rule per role, each with a keyword precedence list. A later keyword is
//! tried only when every earlier keyword matched nothing, and within a
//! keyword the first containing column (in original column order) wins.
//!
//! This is a best-effort heuristic, not a schema contract: a role with no
//! matching column is simply absent from the result, and consumers branch on
//! that absence.

use tabproj_core::{ColumnLabel, ColumnRoleMap, Role};

/// One entry of the resolution rule table
#[derive(Clone, Copy, Debug)]
pub struct RoleRule {
    /// Role this rule resolves
    pub role: Role,
    /// Keyword precedence list, matched by substring containment
    pub keywords: &'static [&'static str],
    /// Fall back to the table's first column when no keyword matches
    pub first_column_fallback: bool,
}

/// The resolution rules, evaluated in this order.
///
/// `end` prefers an explicit `end_date` column; only when none exists does
/// it retry with the looser `end` keyword.
pub const RULES: [RoleRule; 6] = [
    RoleRule {
        role: Role::Activity,
        keywords: &["activity"],
        first_column_fallback: true,
    },
    RoleRule {
        role: Role::Status,
        keywords: &["status"],
        first_column_fallback: false,
    },
    RoleRule {
        role: Role::Start,
        keywords: &["start"],
        first_column_fallback: false,
    },
    RoleRule {
        role: Role::End,
        keywords: &["end_date", "end"],
        first_column_fallback: false,
    },
    RoleRule {
        role: Role::PlannedEnd,
        keywords: &["planned"],
        first_column_fallback: false,
    },
    RoleRule {
        role: Role::Owner,
        keywords: &["owner"],
        first_column_fallback: false,
    },
];

/// Resolve roles over already-normalized labels.
///
/// Total and deterministic; never fails. With an empty label sequence every
/// role is absent, the activity fallback included.
pub fn resolve_roles(labels: &[ColumnLabel]) -> ColumnRoleMap {
    let mut roles = ColumnRoleMap::new();
    for rule in &RULES {
        let mut resolved = rule
            .keywords
            .iter()
            .find_map(|keyword| labels.iter().find(|label| label.contains(keyword)));
        if resolved.is_none() && rule.first_column_fallback {
            resolved = labels.first();
        }
        if let Some(label) = resolved {
            roles.assign(rule.role, label.clone());
        }
    }
    roles
}
