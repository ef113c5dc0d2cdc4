//! Linkmap - a mindmap builder for Jira issue links.
//!
//! This crate provides both a CLI application and a library for turning a
//! Jira CSV export into a directed, edge-labeled graph of inter-issue
//! relationships, rendered either as a Graphviz DOT document or as an
//! interactive HTML page.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod app;
pub mod domain;
pub mod error;
pub mod graph;
pub mod mindmap;
pub mod render;

// Public CLI module (needed by binary)
pub mod cli;

// Output formatting
pub mod output;

// Native file-picker wrapper
pub mod picker;
