//! Fail-soft recurrence string parsing.
//!
//! Nothing in here returns an error. A clause that cannot be read is
//! logged at `warn` and skipped; sibling clauses are still processed.

use std::fmt;

use gridflex_core::constants::NO_SCHEDULE_SENTINEL;

use super::clause::Clause;
use crate::slot::SlotSelection;

const CLAUSE_SEPARATOR: char = ';';
const FIELD_COUNT: usize = 5;
const WILDCARD: &str = "*";

/// Why a clause contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than five whitespace-separated fields.
    TooFewFields(usize),
    /// A minutes, hours or days field is the bare `*` wildcard.
    Wildcard(&'static str),
    /// The first element of a list is not an integer.
    NotANumber(&'static str),
    /// Every element of a list was out of range.
    Empty(&'static str),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewFields(n) => write!(f, "expected {FIELD_COUNT} fields, found {n}"),
            Self::Wildcard(field) => write!(f, "{field} field is a wildcard"),
            Self::NotANumber(field) => write!(f, "{field} field does not start with a number"),
            Self::Empty(field) => write!(f, "{field} field has no value in range"),
        }
    }
}

/// ## Summary
/// Returns `true` for the empty string and the "no schedule" sentinel.
#[must_use]
pub fn is_unscheduled(recurrence: &str) -> bool {
    let trimmed = recurrence.trim();
    trimmed.is_empty() || trimmed == NO_SCHEDULE_SENTINEL
}

/// ## Summary
/// Splits a recurrence string into its readable clauses.
///
/// Clauses with fewer than five fields, a wildcard in the minutes, hours or
/// days position, or a non-numeric first list element are skipped. Later
/// list elements that are not numbers or fall outside their range
/// (minutes 0..=59, hours 0..=23, days 0..=6) are dropped on their own.
#[must_use]
pub fn parse_clauses(recurrence: &str) -> Vec<Clause> {
    if is_unscheduled(recurrence) {
        return Vec::new();
    }

    recurrence
        .split(CLAUSE_SEPARATOR)
        .filter_map(|raw| match parse_clause(raw) {
            Ok(clause) => Some(clause),
            Err(reason) => {
                tracing::warn!(clause = raw, reason = %reason, "Skipping recurrence clause");
                None
            }
        })
        .collect()
}

/// ## Summary
/// Decodes a recurrence string into the slots it selects.
///
/// The result is the union of every readable clause's
/// day × hour × minute cross product. Empty input and the sentinel decode
/// to an empty selection.
#[must_use]
pub fn cron_to_slots(recurrence: &str) -> SlotSelection {
    let mut selection = SlotSelection::new();
    for clause in parse_clauses(recurrence) {
        selection.extend(clause.slots());
    }
    tracing::trace!(slots = selection.len(), "Decoded recurrence");
    selection
}

fn parse_clause(raw: &str) -> Result<Clause, SkipReason> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() < FIELD_COUNT {
        return Err(SkipReason::TooFewFields(fields.len()));
    }
    if fields.len() > FIELD_COUNT {
        tracing::debug!(clause = raw, "Ignoring fields past the fifth");
    }

    let (minutes, hours, days) = (fields[0], fields[1], fields[4]);
    for (name, field) in [("minutes", minutes), ("hours", hours), ("days", days)] {
        if field == WILDCARD {
            return Err(SkipReason::Wildcard(name));
        }
    }

    Ok(Clause::new(
        parse_list("minutes", minutes, 59)?,
        parse_list("hours", hours, 23)?,
        parse_list("days", days, 6)?,
    ))
}

fn parse_list(name: &'static str, field: &str, max: u8) -> Result<Vec<u8>, SkipReason> {
    let mut items = field.split(',');
    let first = items.next().unwrap_or_default();
    if first.trim().parse::<i64>().is_err() {
        return Err(SkipReason::NotANumber(name));
    }

    let values: Vec<u8> = std::iter::once(first)
        .chain(items)
        .filter_map(|item| {
            let value = item
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|n| u8::try_from(n).ok())
                .filter(|&n| n <= max);
            if value.is_none() {
                tracing::warn!(field = name, value = item, "Dropping unreadable list element");
            }
            value
        })
        .collect();

    if values.is_empty() {
        return Err(SkipReason::Empty(name));
    }
    Ok(values)
}
