//! Placeholder substitution shared by target paths, the SQL statement and the
//! `init` config template.
//!
//! Placeholders look like `{{ .name }}`; the leading dot and the inner
//! whitespace are optional. Substituted values are never re-scanned.

use std::collections::HashMap;

use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Placeholder name -> replacement text
pub type Bindings<'a> = HashMap<&'a str, String>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("no value bound for placeholder '{name}'")]
    Unbound { name: String },

    #[error("unclosed placeholder starting at byte {offset}")]
    Unclosed { offset: usize },
}

/// Render `template`, replacing every placeholder with its binding.
pub fn render(template: &str, bindings: &Bindings<'_>) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut consumed = 0;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let end = after_open.find(CLOSE).ok_or(TemplateError::Unclosed {
            offset: consumed + start,
        })?;

        let name = placeholder_name(&after_open[..end]);
        let value = bindings.get(name).ok_or_else(|| TemplateError::Unbound {
            name: name.to_string(),
        })?;
        out.push_str(value);

        let advance = start + OPEN.len() + end + CLOSE.len();
        consumed += advance;
        rest = &rest[advance..];
    }

    out.push_str(rest);
    Ok(out)
}

fn placeholder_name(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix('.').unwrap_or(trimmed).trim()
}
