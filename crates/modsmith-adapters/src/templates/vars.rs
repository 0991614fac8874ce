//! `{{NAME}}` placeholder substitution.
//!
//! Template texts are plain constants containing `{{KEY}}` markers. Every
//! marker must be bound; a leftover marker is a rendering bug and is
//! reported instead of being written to disk.

use std::collections::BTreeMap;

use modsmith_core::error::{ModsmithError, ModsmithResult};

#[derive(Debug, Clone, Default)]
pub struct RenderVars {
    values: BTreeMap<&'static str, String>,
}

impl RenderVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// Single left-to-right pass; substituted values are never rescanned.
    pub fn render(&self, template: &str) -> ModsmithResult<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else { break };
            let name = &after[..end];
            let value = self.values.get(name).ok_or_else(|| ModsmithError::Internal {
                message: format!("unbound template placeholder '{name}'"),
            })?;
            out.push_str(&rest[..start]);
            out.push_str(value);
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Escape a value for a double-quoted Groovy string.
pub fn groovy_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
}

/// Escape a value for a single-quoted Groovy string.
pub fn groovy_single(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Escape a value for a Java string literal.
pub fn java_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_all_occurrences() {
        let vars = RenderVars::new().set("ID", "mymod");
        assert_eq!(
            vars.render("package {{ID}}; // {{ID}}").unwrap(),
            "package mymod; // mymod"
        );
    }

    #[test]
    fn leaves_gradle_interpolation_alone() {
        let vars = RenderVars::new();
        let text = r#"def jarName = "${project.ext.modID}""#;
        assert_eq!(vars.render(text).unwrap(), text);
    }

    #[test]
    fn unbound_placeholder_is_an_error() {
        let err = RenderVars::new().render("hello {{WHO}}").unwrap_err();
        assert!(err.to_string().contains("WHO"));
    }

    #[test]
    fn groovy_escaping() {
        assert_eq!(groovy_string(r#"say "hi" $x"#), r#"say \"hi\" \$x"#);
        assert_eq!(groovy_single("Bob's"), r"Bob\'s");
        assert_eq!(java_string(r#"a "b""#), r#"a \"b\""#);
    }
}
