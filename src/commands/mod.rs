//! CLI commands for casebook

pub mod check;
pub mod diagnose;
pub mod dispatch;
pub mod domain;
pub mod evaluate;
pub mod format;
pub mod history;
pub mod init;
pub mod reference;
pub mod retain;
