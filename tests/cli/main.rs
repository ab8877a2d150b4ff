//! CLI integration tests that run against an on-disk store

mod check;
mod diagnose;
mod domain;
mod history;
mod init;
mod reference;
mod retain;
mod support;
