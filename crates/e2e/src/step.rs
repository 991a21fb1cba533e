//! Typed UI steps
//!
//! Every page-object operation decomposes into these primitives. A recorded
//! step sequence is rendered to a Playwright script by the driver; keeping
//! the steps as data lets scenario structure be unit-tested without a
//! browser.

use serde::{Deserialize, Serialize};

/// Default bound for a locate/assert wait. Individual call sites override
/// this up to 60s to absorb slow console refreshes.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// A single browser-driving command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiStep {
    /// Navigate to a path relative to the console base URL.
    Visit { path: String },

    /// Click an element.
    Click {
        selector: String,
        #[serde(default)]
        timeout_ms: Option<u64>,
    },

    /// Click the element under `selector` containing the given text.
    ClickText {
        selector: String,
        text: String,
        #[serde(default)]
        timeout_ms: Option<u64>,
    },

    /// Fill an input field.
    Fill {
        selector: String,
        value: String,
        #[serde(default)]
        clear_first: bool,
    },

    /// Select an option by its value attribute.
    Select { selector: String, value: String },

    /// Select an option by its display text.
    SelectLabel { selector: String, label: String },

    /// Drive a fa-toggle switch to the requested state, clicking only when
    /// the current state differs, then assert the resulting state.
    SetToggle { selector: String, on: bool },

    /// Wait for an element to reach a state.
    WaitFor {
        selector: String,
        timeout_ms: u64,
        #[serde(default)]
        state: WaitState,
    },

    /// Fixed delay (use sparingly; these paper over console settling).
    Sleep { ms: u64 },

    /// Assert on an element.
    Assert(Assertion),

    /// Assert on the current location.
    AssertPath {
        path: String,
        #[serde(rename = "match")]
        match_mode: PathMatch,
        timeout_ms: u64,
    },

    /// Replace `window.open` with a recorder before navigation.
    StubWindowOpen,

    /// Assert a stubbed `window.open` was called with exactly this URL.
    AssertWindowOpen { url: String },

    /// Log a message into the scenario transcript.
    Log { message: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitState {
    #[default]
    Visible,
    Hidden,
    Attached,
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMatch {
    Equals,
    Includes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountOp {
    Eq,
    Gt,
    Gte,
    Lte,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountIs {
    pub op: CountOp,
    pub n: usize,
}

/// One element assertion. Unset fields are not checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assertion {
    pub selector: String,

    /// Narrow to the nth match before asserting.
    #[serde(default)]
    pub nth: Option<usize>,

    /// Inner selector resolved relative to the (narrowed) outer match.
    #[serde(default)]
    pub within: Option<String>,

    /// Narrow to the last match before asserting. Applies to the inner
    /// selector when `within` is set.
    #[serde(default)]
    pub last: bool,

    #[serde(default)]
    pub visible: Option<bool>,

    /// `(attribute name, expected presence)`.
    #[serde(default)]
    pub attr: Option<(String, bool)>,

    #[serde(default)]
    pub text: Option<String>,

    /// Some matched element contains this text.
    #[serde(default)]
    pub contains_text: Option<String>,

    /// No matched element contains this text.
    #[serde(default)]
    pub not_contains_text: Option<String>,

    /// Input value.
    #[serde(default)]
    pub value: Option<String>,

    /// Display text of the selected `<option>`.
    #[serde(default)]
    pub selected_label: Option<String>,

    /// CSS class the match must carry; when the locator is not narrowed to
    /// a single element, every match must carry it.
    #[serde(default)]
    pub class: Option<String>,

    #[serde(default)]
    pub count: Option<CountIs>,

    /// Element text parsed as a number must be at least this.
    #[serde(default)]
    pub number_gte: Option<f64>,

    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Assertion {
    pub fn on(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            nth: None,
            within: None,
            last: false,
            visible: None,
            attr: None,
            text: None,
            contains_text: None,
            not_contains_text: None,
            value: None,
            selected_label: None,
            class: None,
            count: None,
            number_gte: None,
            timeout_ms: None,
        }
    }

    pub fn nth(mut self, index: usize) -> Self {
        self.nth = Some(index);
        self
    }

    pub fn within(mut self, selector: impl Into<String>) -> Self {
        self.within = Some(selector.into());
        self
    }

    pub fn last(mut self) -> Self {
        self.last = true;
        self
    }

    pub fn visible(mut self) -> Self {
        self.visible = Some(true);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = Some(false);
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>) -> Self {
        self.attr = Some((name.into(), true));
        self
    }

    pub fn without_attr(mut self, name: impl Into<String>) -> Self {
        self.attr = Some((name.into(), false));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn contains(mut self, text: impl Into<String>) -> Self {
        self.contains_text = Some(text.into());
        self
    }

    pub fn not_contains(mut self, text: impl Into<String>) -> Self {
        self.not_contains_text = Some(text.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn selected_label(mut self, label: impl Into<String>) -> Self {
        self.selected_label = Some(label.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn count_eq(mut self, n: usize) -> Self {
        self.count = Some(CountIs { op: CountOp::Eq, n });
        self
    }

    pub fn count_gt(mut self, n: usize) -> Self {
        self.count = Some(CountIs { op: CountOp::Gt, n });
        self
    }

    pub fn count_gte(mut self, n: usize) -> Self {
        self.count = Some(CountIs {
            op: CountOp::Gte,
            n,
        });
        self
    }

    pub fn count_lte(mut self, n: usize) -> Self {
        self.count = Some(CountIs {
            op: CountOp::Lte,
            n,
        });
        self
    }

    pub fn number_gte(mut self, n: f64) -> Self {
        self.number_gte = Some(n);
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

impl UiStep {
    /// Short display name used in logs and failure reports.
    pub fn name(&self) -> String {
        match self {
            UiStep::Visit { path } => format!("visit:{path}"),
            UiStep::Click { selector, .. } => format!("click:{selector}"),
            UiStep::ClickText { selector, text, .. } => format!("click:{selector}:{text}"),
            UiStep::Fill { selector, .. } => format!("fill:{selector}"),
            UiStep::Select { selector, .. } => format!("select:{selector}"),
            UiStep::SelectLabel { selector, .. } => format!("select:{selector}"),
            UiStep::SetToggle { selector, on } => format!("toggle:{selector}:{on}"),
            UiStep::WaitFor { selector, .. } => format!("wait:{selector}"),
            UiStep::Sleep { ms } => format!("sleep:{ms}ms"),
            UiStep::Assert(a) => format!("assert:{}", a.selector),
            UiStep::AssertPath { path, .. } => format!("assert-path:{path}"),
            UiStep::StubWindowOpen => "stub:window.open".to_string(),
            UiStep::AssertWindowOpen { .. } => "assert:window.open".to_string(),
            UiStep::Log { message } => {
                let head: String = message.chars().take(30).collect();
                format!("log:{head}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_builder_sets_fields() {
        let a = Assertion::on(".monitor-list .health-bar")
            .nth(1)
            .class("health-critical-bar")
            .timeout_ms(10_000);
        assert_eq!(a.selector, ".monitor-list .health-bar");
        assert_eq!(a.nth, Some(1));
        assert_eq!(a.class.as_deref(), Some("health-critical-bar"));
        assert_eq!(a.timeout_ms, Some(10_000));
    }

    #[test]
    fn step_serializes_with_action_tag() {
        let step = UiStep::Visit {
            path: "/clusters".to_string(),
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["action"], "visit");
        assert_eq!(json["path"], "/clusters");
    }

    #[test]
    fn step_names_are_stable() {
        let step = UiStep::Click {
            selector: ".form-container".to_string(),
            timeout_ms: None,
        };
        assert_eq!(step.name(), "click:.form-container");
    }

    #[test]
    fn log_names_truncate_on_char_boundaries() {
        // 41 bytes, 21 chars; a byte-based cut at 30 lands mid-codepoint.
        let step = UiStep::Log {
            message: format!("a{}", "é".repeat(20)),
        };
        assert_eq!(step.name(), format!("log:a{}", "é".repeat(20)));

        let step = UiStep::Log {
            message: "é".repeat(40),
        };
        assert_eq!(step.name(), format!("log:{}", "é".repeat(30)));
    }
}
