//! Page-object helpers
//!
//! Each module wraps one logical area of the console UI with
//! intention-revealing operations that record primitive steps into a
//! [`Session`](crate::session::Session). Selectors are private module
//! details; the lookup strategy of a helper can change without touching a
//! scenario.

pub mod action;
pub mod cluster;
pub mod form;
pub mod health;
pub mod history;
pub mod navigation;
pub mod time_period;
pub mod util;
pub mod workload;
