//! Command handlers.

pub mod load;
pub mod serve;
