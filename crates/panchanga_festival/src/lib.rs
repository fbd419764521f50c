//! Festival resolution over panchanga day descriptors.
//!
//! A [`FestivalRule`] ties a festival to a tithi within a purnimanta
//! month, or to a solar sankranti. [`resolve_festivals`] evaluates a
//! rule set against a window of [`DayDescriptor`]s and reports each
//! occurrence with its civil date and the skipped/extended flags for
//! tithis that miss or straddle sunrises.
//!
//! [`DayDescriptor`]: panchanga_core::DayDescriptor

pub mod catalog;
pub mod error;
pub mod resolve;
pub mod rules;

pub use catalog::{FESTIVALS, rule_by_id};
pub use error::FestivalError;
pub use resolve::{resolve, resolve_festivals, resolve_lunar};
pub use rules::{FestivalOccurrence, FestivalRule, Observance, RuleKind};
