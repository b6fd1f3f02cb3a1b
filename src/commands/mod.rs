//! CLI commands for titlecheck

pub mod build;
pub mod check;
pub mod dispatch;
pub mod duplicates;
pub mod info;
