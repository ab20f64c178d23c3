//! Core library for the sk-restore tool.
//!
//! Restores the Semantic Kernel "concepts" sample programs onto disk. A
//! [`manifest::Manifest`] maps project names to C# source text; the
//! [`materializer::Materializer`] writes each entry to
//! `<root>/<ProjectName>/Program.cs` and reports what it wrote.
//!
//! The samples shipped with the tool are embedded at compile time in
//! [`templates::embedded`]. [`check`] compares files already on disk against a
//! manifest without touching them.

pub mod check;
pub mod entry;
pub mod error;
pub mod manifest;
pub mod materializer;
pub mod templates;
