//! Age calculation with Bangladesh-specific extras: alternate calendars,
//! zodiac, legal rights by age and the EPI vaccination schedule.
//!
//! [`AgeReport::compute`] is the single entry point most callers need; the
//! modules underneath are usable on their own.

pub mod age;
pub mod calendar;
pub mod error;
pub mod legal;
pub mod locale;
pub mod report;
pub mod svg;
pub mod text;
pub mod vaccination;
pub mod zodiac;

pub use age::{AgeBreakdown, age_on, compute_age};
pub use error::AgeError;
pub use locale::{Locale, format_date, format_number};
pub use report::{AgeReport, AgeRequest};
