//! CLI commands for shoprec

pub mod catalog;
pub mod dispatch;
pub mod format;
pub mod interactions;
pub mod recommend;
