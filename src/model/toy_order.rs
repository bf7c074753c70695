//! Toy order domain types and derived-field helpers.

use crate::error::toy_order::ToyOrderError;

/// Due date stamped on every newly created order. Not user-settable.
pub static DEFAULT_DUE_DATE: &str = "2024-12-24";

/// Sentinel `assigned_elf` value requesting auto-assignment.
pub static AUTO_ASSIGN: &str = "auto";

/// Assignee recorded when auto-assignment finds no elf to take the order.
pub static UNASSIGNED: &str = "Unassigned";

/// The four production stages of a toy order, in kanban column order.
///
/// There is no enforced transition graph: any status may change to any other
/// status directly, and `ReadyToDeliver` is not terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToyStatus {
    /// Order accepted, work not started.
    ToDo,
    /// An elf is actively building the toy.
    InProgress,
    /// Build finished, awaiting inspection.
    QualityCheck,
    /// Passed inspection; counts toward the elf's completed total.
    ReadyToDeliver,
}

impl ToyStatus {
    /// All statuses in kanban column order (left to right).
    pub const ALL: [ToyStatus; 4] = [
        ToyStatus::ToDo,
        ToyStatus::InProgress,
        ToyStatus::QualityCheck,
        ToyStatus::ReadyToDeliver,
    ];

    /// The wire representation stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToyStatus::ToDo => "To Do",
            ToyStatus::InProgress => "In Progress",
            ToyStatus::QualityCheck => "Quality Check",
            ToyStatus::ReadyToDeliver => "Ready to Deliver",
        }
    }

    /// Wire names of all statuses, in column order.
    pub fn names() -> [&'static str; 4] {
        [
            ToyStatus::ToDo.as_str(),
            ToyStatus::InProgress.as_str(),
            ToyStatus::QualityCheck.as_str(),
            ToyStatus::ReadyToDeliver.as_str(),
        ]
    }

    /// Parses a wire status name, rejecting anything outside the four
    /// recognized values.
    pub fn from_name(name: &str) -> Result<Self, ToyOrderError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == name)
            .ok_or(ToyOrderError::InvalidStatus)
    }
}

/// Optional predicates for listing toy orders; present fields combine
/// with logical AND.
#[derive(Clone, Debug, Default)]
pub struct ToyOrderFilter {
    /// Restrict to orders in this status.
    pub status: Option<String>,
    /// Restrict to orders assigned to this elf name.
    pub assigned_elf: Option<String>,
}

/// Caller-supplied fields for creating a toy order.
///
/// `status`, `due_date` and `id` are never taken from input: new orders
/// always start in `To Do` with the fixed due date and a generated id.
#[derive(Clone, Debug)]
pub struct NewToyOrder {
    /// Name of the child the toy is for.
    pub child_name: String,
    /// The child's age in years.
    pub age: i32,
    /// Where the toy will be delivered.
    pub location: String,
    /// The requested toy.
    pub toy: String,
    /// Toy category, matched against elf specialties during auto-assignment.
    pub category: String,
    /// Elf name, or empty / `"auto"` to request auto-assignment.
    pub assigned_elf: String,
    /// Free-form letter text; defaults to empty when omitted.
    pub notes: Option<String>,
    /// Nice list score in [0, 100].
    pub nice_list_score: i32,
}

/// Human-readable banding of a nice list score, used by the dashboard for
/// visual labeling only; it has no workflow effect.
pub fn score_label(score: i32) -> &'static str {
    if score >= 90 {
        "Excellent"
    } else if score >= 75 {
        "Good"
    } else if score >= 60 {
        "Fair"
    } else if score >= 45 {
        "Poor"
    } else {
        "Very Poor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod status_tests {
        use super::*;

        /// Expect all four wire names to round-trip through from_name
        #[test]
        fn test_from_name_recognizes_all_statuses() {
            for status in ToyStatus::ALL {
                assert_eq!(ToyStatus::from_name(status.as_str()).unwrap(), status);
            }
        }

        /// Expect InvalidStatus for anything outside the four stages
        #[test]
        fn test_from_name_rejects_unknown_status() {
            let result = ToyStatus::from_name("Not A Status");

            assert!(result.is_err());
        }

        /// Expect status names in kanban column order
        #[test]
        fn test_names_in_column_order() {
            assert_eq!(
                ToyStatus::names(),
                ["To Do", "In Progress", "Quality Check", "Ready to Deliver"]
            );
        }
    }

    mod score_label_tests {
        use super::*;

        /// Expect each band boundary to map to its label
        #[test]
        fn test_score_label_bands() {
            assert_eq!(score_label(100), "Excellent");
            assert_eq!(score_label(90), "Excellent");
            assert_eq!(score_label(89), "Good");
            assert_eq!(score_label(75), "Good");
            assert_eq!(score_label(74), "Fair");
            assert_eq!(score_label(60), "Fair");
            assert_eq!(score_label(59), "Poor");
            assert_eq!(score_label(45), "Poor");
            assert_eq!(score_label(44), "Very Poor");
            assert_eq!(score_label(0), "Very Poor");
        }
    }
}
