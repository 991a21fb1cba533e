//! Monitor change-log assertions
//!
//! The change log is an ordered audit trail, newest entry at index 0. An
//! entry is either "Created" (no change fields) or "Modified" with one row
//! per changed field.

use crate::session::Session;
use crate::step::Assertion;

const LOG: &str = "side rc-monitor-change-log";

pub fn validate_count(s: &mut Session, count: usize) {
    s.log("validate history log count");
    s.assert(Assertion::on(format!("{LOG} .circle")).count_eq(count));
}

pub fn validate_created_is_index(s: &mut Session, index: usize) {
    s.assert(
        Assertion::on(format!("{LOG} .log-type[data-index=\"{index}\"] .value")).contains("Created"),
    );
    // A created entry carries no change fields.
    s.assert(Assertion::on(format!("{LOG} .change-field[data-index=\"{index}\"]")).count_eq(0));
}

pub fn validate_modified_is_index(s: &mut Session, index: usize) {
    s.assert(
        Assertion::on(format!("{LOG} .log-type[data-index=\"{index}\"] .value"))
            .contains("Modified"),
    );
}

pub fn validate_change_count_for_index(s: &mut Session, index: usize, count: usize) {
    s.assert(Assertion::on(format!("{LOG} .change-field[data-index=\"{index}\"]")).count_eq(count));
}

/// Assert the entry at `index` records `field` changing to `value`. The
/// field name and its new value are siblings within one change-field row.
pub fn validate_contain_change(s: &mut Session, index: usize, field: &str, value: &str) {
    s.assert(
        Assertion::on(format!(
            "{LOG} .change-field[data-index=\"{index}\"]:has(.field:has-text(\"{field}\")) .value"
        ))
        .contains(value),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::UiStep;
    use console_common::Env;

    #[test]
    fn created_entry_has_no_change_fields() {
        let mut s = Session::new(Env::local());
        validate_created_is_index(&mut s, 0);

        let asserts: Vec<_> = s
            .recorded()
            .iter()
            .filter_map(|r| match &r.step {
                UiStep::Assert(a) => Some(a.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(asserts.len(), 2);
        assert_eq!(asserts[0].contains_text.as_deref(), Some("Created"));
        assert_eq!(asserts[1].count.map(|c| c.n), Some(0));
    }

    #[test]
    fn change_lookup_pairs_field_with_value() {
        let mut s = Session::new(Env::local());
        validate_contain_change(&mut s, 0, "group by", "instance");
        match &s.recorded()[0].step {
            UiStep::Assert(a) => {
                assert!(a.selector.contains("data-index=\"0\""));
                assert!(a.selector.contains("has-text(\"group by\")"));
                assert_eq!(a.contains_text.as_deref(), Some("instance"));
            }
            other => panic!("unexpected step: {other:?}"),
        }
    }
}
