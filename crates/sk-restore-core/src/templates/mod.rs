//! Sample programs shipped with sk-restore.
//!
//! Each sample is embedded into the binary at compile time via [`include_str!`] in the
//! [`embedded`] module. The text is written to disk unchanged; there is no rendering step.
//!
//! ## Adding a new sample
//!
//! 1. Place the program under `templates/concepts/<ProjectName>/Program.cs`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Register it in [`embedded::CONCEPTS`]

pub mod embedded;
