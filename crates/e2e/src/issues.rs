//! Known console defects
//!
//! Assertions that fail because of a tracked console bug are tagged with the
//! issue instead of being skipped: the driver wraps them so a failure is
//! reported as an *expected failure* in the results, keeping the defect
//! visible in every run until it is actually fixed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownIssue {
    /// Tracker reference, e.g. `console-home#324`.
    pub id: &'static str,
    pub summary: &'static str,
}

/// Severity values are wrongly reset to 1 when a severity is disabled.
pub const SEVERITY_VALUE_RESET: KnownIssue = KnownIssue {
    id: "console-home#324",
    summary: "value wrongly reset to 1 if a severity is disabled",
};

/// A spurious `workload` label appears in the filter-by capsule group.
pub const SPURIOUS_WORKLOAD_FILTER: KnownIssue = KnownIssue {
    id: "console-home#260",
    summary: "label 'workload' is wrongly added to the filter-by field",
};

/// The change log omits field-level details for a modification.
pub const CHANGE_LOG_MISSING_DETAILS: KnownIssue = KnownIssue {
    id: "console-frontend#501",
    summary: "monitor change log is missing modification details",
};

/// The middle health bar recalculates twice and transiently shows unknown.
pub const HEALTH_RECALCULATES_TWICE: KnownIssue = KnownIssue {
    id: "console-home#353",
    summary: "health bar recalculates twice after an edit",
};

/// Middle health bar shows unknown segments where health data is missing.
pub const HEALTH_DATA_GAPS: KnownIssue = KnownIssue {
    id: "console-home#354",
    summary: "unknown health in middle health bar due to missing data",
};

/// The two bottom timelines are not refreshed while in edit mode.
pub const CONTEXT_TIMELINE_STALE_IN_EDIT: KnownIssue = KnownIssue {
    id: "console-home#328",
    summary: "bottom health timelines not updated in edit mode",
};

/// Precedence between simultaneously enabled critical and warning rules is
/// undefined; the product decision is still open.
pub const MULTI_SEVERITY_PRECEDENCE: KnownIssue = KnownIssue {
    id: "console-home#320",
    summary: "no defined precedence between enabled critical and warning",
};

/// The group-by dropdown takes very long to populate in edit mode.
pub const GROUP_BY_DROPDOWN_SLOW: KnownIssue = KnownIssue {
    id: "console-home#322",
    summary: "group-by dropdown populates very slowly in edit mode",
};

/// The group-by dropdown sometimes offers stale label data.
pub const GROUP_BY_DROPDOWN_STALE: KnownIssue = KnownIssue {
    id: "console-home#323",
    summary: "group-by dropdown sometimes lists incorrect labels",
};
