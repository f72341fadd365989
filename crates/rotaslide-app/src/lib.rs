//! Shared library module for the rotaslide terminal app.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod app;
pub mod cli;
pub mod input;
pub mod render;
pub mod worker;
