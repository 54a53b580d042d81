//! Minimal `{{placeholder}}` template expansion
//!
//! The writer templates are handlebars files owned by the downstream
//! rendering stage; the preset only needs plain placeholder substitution to
//! splice URL formats into partials and to build issue/user links.

/// Replace every `{{key}}` occurrence in `template` with its value.
///
/// Unknown placeholders are left untouched so handlebars expressions meant
/// for the downstream renderer survive expansion.
pub fn expand_template(template: &str, context: &[(&str, &str)]) -> String {
    let mut expanded = template.to_string();
    for (key, value) in context {
        expanded = expanded.replace(&format!("{{{{{key}}}}}"), value);
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_single_key() {
        let out = expand_template("{{host}}/issues", &[("host", "https://github.com")]);
        assert_eq!(out, "https://github.com/issues");
    }

    #[test]
    fn test_expand_repeated_key() {
        let out = expand_template("{{id}}-{{id}}", &[("id", "7")]);
        assert_eq!(out, "7-7");
    }

    #[test]
    fn test_unknown_placeholder_survives() {
        let out = expand_template("{{host}}/{{this.issue}}", &[("host", "h")]);
        assert_eq!(out, "h/{{this.issue}}");
    }
}
