//! Library components of the invitation batch tool.

pub mod logging;
pub mod pipeline;
pub mod report;
pub mod types;
