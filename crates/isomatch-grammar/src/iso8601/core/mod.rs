//! Component record types produced by a successful match.

mod components;
mod sign;

pub use components::{
    DateComponents, DateForm, DateNotation, DatetimeComponents, TimeComponents, TzComponents,
    TzOffset,
};
pub use sign::TzSign;
