//! Publication ordering contract.
//!
//! An archive configures how the publications beneath it are ordered for
//! display. The same contract is applied in two places: repositories turn
//! it into an ORDER BY fragment, and view assembly sorts already-fetched
//! rows in memory. Both paths must agree, including NULL-date placement
//! (PostgreSQL defaults: ASC puts NULLs last, DESC puts NULLs first).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

/// Archive-level publication sort order.
///
/// Stored in the database as one of the four `name()` strings, or NULL for
/// "no sort applied". Unknown stored values degrade to no sort on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Manual order (`sort_position` ascending).
    Order,
    /// Title ascending, lexicographic.
    Title,
    /// Date ascending, NULL dates last.
    DateAsc,
    /// Date descending, NULL dates first.
    DateDesc,
}

impl SortOrder {
    /// Parse an optional stored value. Unset and unrecognised values both
    /// mean "no sort applied".
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value {
            Some("order") => Some(Self::Order),
            Some("title") => Some(Self::Title),
            Some("date-asc") => Some(Self::DateAsc),
            Some("date-desc") => Some(Self::DateDesc),
            _ => None,
        }
    }

    /// Parse a value that must be one of the four known names.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        Self::parse(Some(name)).ok_or_else(|| {
            CoreError::Validation(format!(
                "Unknown sort order '{name}'. Must be one of: order, title, date-asc, date-desc"
            ))
        })
    }

    /// Database name value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Title => "title",
            Self::DateAsc => "date-asc",
            Self::DateDesc => "date-desc",
        }
    }

    /// Human-readable label for the admin dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Self::Order => "Order",
            Self::Title => "Title",
            Self::DateAsc => "Date Ascending",
            Self::DateDesc => "Date Descending",
        }
    }

    /// The `(name, label)` pairs offered by the sort order dropdown.
    pub fn options() -> [(&'static str, &'static str); 4] {
        [
            (Self::Order.name(), Self::Order.label()),
            (Self::Title.name(), Self::Title.label()),
            (Self::DateAsc.name(), Self::DateAsc.label()),
            (Self::DateDesc.name(), Self::DateDesc.label()),
        ]
    }

    /// ORDER BY fragment for publication queries.
    ///
    /// `None` orders by id only, which is storage (insertion) order. The id
    /// tiebreaker on every variant keeps equal keys in storage order, the
    /// same guarantee [`sort_publications`] gets from a stable sort.
    ///
    /// Columns are table-qualified so the fragment works in joined queries.
    pub fn order_by(order: Option<Self>) -> &'static str {
        match order {
            Some(Self::Order) => "publications.sort_position ASC, publications.id ASC",
            Some(Self::Title) => "publications.title ASC, publications.id ASC",
            Some(Self::DateAsc) => "publications.date ASC NULLS LAST, publications.id ASC",
            Some(Self::DateDesc) => "publications.date DESC NULLS FIRST, publications.id ASC",
            None => "publications.id ASC",
        }
    }
}

// ---------------------------------------------------------------------------
// In-memory sorting
// ---------------------------------------------------------------------------

/// Sort keys a publication exposes for in-memory ordering.
pub trait SortKeys {
    /// Manual-order position within the owning category.
    fn position(&self) -> i32;
    /// Display title.
    fn title(&self) -> &str;
    /// Publication date, if set.
    fn date(&self) -> Option<Date>;
}

/// Sort publications in place per the archive's configured order.
///
/// `None` is the identity transform: the slice is left untouched. The sort
/// is stable, so ties keep their original (storage) order. NULL dates never
/// cause a failure; they collate last for `DateAsc` and first for
/// `DateDesc`, matching the database ordering.
pub fn sort_publications<T: SortKeys>(order: Option<SortOrder>, items: &mut [T]) {
    let Some(order) = order else {
        return;
    };

    match order {
        SortOrder::Order => items.sort_by_key(|p| p.position()),
        SortOrder::Title => items.sort_by(|a, b| a.title().cmp(b.title())),
        SortOrder::DateAsc => items.sort_by(|a, b| cmp_date_nulls_last(a.date(), b.date())),
        SortOrder::DateDesc => items.sort_by(|a, b| cmp_date_nulls_last(b.date(), a.date())),
    }
}

/// Compare optional dates with NULLs collating last.
///
/// Reversing the arguments yields descending order with NULLs first, which
/// is exactly PostgreSQL's `DESC` default.
fn cmp_date_nulls_last(a: Option<Date>, b: Option<Date>) -> std::cmp::Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
