//! debver-merge - Debian package version constraint merging library
//!
//! This library provides the core functionality for merging dependency files:
//! - Debian version parsing and policy ordering
//! - Version constraints as interval sets with implication checks
//! - Accumulation that keeps the most restrictive constraint per package
//! - A file-level driver and report formatting

pub mod cli;
pub mod domain;
pub mod error;
pub mod merge;
pub mod orchestrator;
pub mod output;
pub mod parser;
