//! Compile-time embedded sample programs.
//!
//! The `include_str!` paths are relative to this source file
//! (`crates/sk-restore-core/src/templates/embedded.rs`). Do NOT move files under
//! `templates/` without updating the paths here.

// -------------------------------------------------------
// Concept samples
// -------------------------------------------------------

pub const CHAT_COMPLETION: &str =
    include_str!("../../../../templates/concepts/ChatCompletion/Program.cs");

/// Built-in catalog, in restore order: `(project name, source text)`.
pub const CONCEPTS: &[(&str, &str)] = &[("ChatCompletion", CHAT_COMPLETION)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_completion_embedded() {
        assert!(CHAT_COMPLETION.starts_with("#pragma warning disable SKEXP0001"));
        assert!(CHAT_COMPLETION.contains("namespace Concepts.ChatCompletion;"));
        // Non-ASCII payload survives embedding.
        assert!(CHAT_COMPLETION.contains("ChatCompletion 核心概念"));
    }

    #[test]
    fn test_string_escapes_kept_as_source() {
        // The C# literal must keep its `\n` escape, not a raw line break.
        assert!(CHAT_COMPLETION.contains(r#"Console.WriteLine("\n按任意键退出...");"#));
    }

    #[test]
    fn test_catalog_names_unique() {
        let mut names: Vec<_> = CONCEPTS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CONCEPTS.len());
    }
}
