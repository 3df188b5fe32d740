//! goupdate - Go module dependency updater library
//!
//! This library provides the building blocks of the `goupdate` binary:
//! - go.mod location and require block parsing
//! - sequential `go get -u` / `go mod tidy` orchestration
//! - configuration, filtering and report output

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod toolchain;
pub mod update;
