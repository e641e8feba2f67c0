//! Supporting utilities used by models.
//!
//! These modules are not specific to any one model and are public because
//! they're useful on their own. Their APIs are not stable.

pub mod constraint;
pub mod search;
pub mod units;
