//! Monitor lifecycle actions
//!
//! The monitor form moves through viewing --edit--> editing --save-->
//! viewing, with remove as the terminal transition. `edit_monitor` encodes
//! the state machine directly: the EDIT control must be present before the
//! click and gone after it. Nothing is retried; a failed pre- or
//! post-condition fails the scenario immediately.

use crate::session::Session;
use crate::step::Assertion;

const FORM: &str = ".form-container";

pub fn create_monitor(s: &mut Session) {
    s.click_text("body", "CREATE MONITOR");
}

pub fn save_monitor(s: &mut Session) {
    s.click_text("body", "SAVE CHANGES");
}

pub fn edit_monitor(s: &mut Session) {
    s.assert(Assertion::on(FORM).contains("EDIT").visible());
    s.click_text(FORM, "EDIT");
    s.assert(Assertion::on(FORM).not_contains("EDIT"));
}

pub fn remove_monitor(s: &mut Session) {
    s.click_text(FORM, "REMOVE MONITOR");
}
