/// Code-preview rendering for duel matches.
///
/// Each candidate is shown inside a small generated snippet so the judge
/// sees the name in context instead of in isolation. Templates use the
/// `$name` variable wherever the candidate should appear; the built-in
/// default renders it in two slots, a return type and a field type.
use std::path::Path;

use crate::bail;

pub const NAME_VAR: &str = "$name";

pub const DEFAULT_TEMPLATE: &str = "\
fn winning_player() -> $name<Player> { /* ... */ }

struct Profile {
    nickname: $name<String>,
    score: u32,
}
";

/// Substitute the candidate into every `$name` slot of the template.
pub fn render(template: &str, candidate: &str) -> String {
    template.replace(NAME_VAR, candidate)
}

/// Load a template from a file, checking it references `$name` at all.
pub fn load_template(path: &Path) -> String {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| bail(format!("Failed to read template {}: {e}", path.display())));

    if !content.contains(NAME_VAR) {
        bail(format!(
            "Template {} must contain the {NAME_VAR} variable",
            path.display(),
        ));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_has_two_slots() {
        assert_eq!(DEFAULT_TEMPLATE.matches(NAME_VAR).count(), 2);
    }

    #[test]
    fn test_render_fills_every_slot() {
        let rendered = render(DEFAULT_TEMPLATE, "Maybe");
        assert!(!rendered.contains(NAME_VAR));
        assert!(rendered.contains("Maybe<Player>"));
        assert!(rendered.contains("Maybe<String>"));
    }

    #[test]
    fn test_render_leaves_other_text_alone() {
        let rendered = render("type $name = ();", "Known");
        assert_eq!(rendered, "type Known = ();");
    }
}
