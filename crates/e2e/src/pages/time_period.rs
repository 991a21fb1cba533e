//! Graph time-period selector

use crate::session::Session;
use crate::step::Assertion;

const SELECT: &str = ".time-period-select";

/// The four fixed periods the console offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePeriod {
    LastHour,
    LastFourHours,
    LastDay,
    LastWeek,
}

impl TimePeriod {
    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::LastHour => "last hr",
            TimePeriod::LastFourHours => "last 4 hrs",
            TimePeriod::LastDay => "last day",
            TimePeriod::LastWeek => "last week",
        }
    }
}

pub fn select(s: &mut Session, period: TimePeriod) {
    // Guard against the option list changing shape under the suite.
    s.assert(Assertion::on(SELECT).within("option").count_eq(4));
    s.select_label(SELECT, period.label());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::UiStep;
    use console_common::Env;

    #[test]
    fn select_guards_option_count_first() {
        let mut s = Session::new(Env::local());
        select(&mut s, TimePeriod::LastFourHours);

        match &s.recorded()[0].step {
            UiStep::Assert(a) => assert_eq!(a.count.map(|c| c.n), Some(4)),
            other => panic!("unexpected step: {other:?}"),
        }
        match &s.recorded()[1].step {
            UiStep::SelectLabel { label, .. } => assert_eq!(label, "last 4 hrs"),
            other => panic!("unexpected step: {other:?}"),
        }
    }
}
