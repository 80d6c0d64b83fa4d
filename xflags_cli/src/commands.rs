mod common;

pub mod simulate;
pub mod strategy;
pub mod table;
