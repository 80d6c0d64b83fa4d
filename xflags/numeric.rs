//! Numeric types used in game analysis

pub mod nimber;
