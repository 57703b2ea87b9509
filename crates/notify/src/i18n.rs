//! Localization seam for notification copy.
//!
//! String-catalog lookup is owned by the surrounding application; this
//! module only renders templates. Substitution uses `%(key)s` placeholders
//! so catalog entries and the built-in templates share one format. Any
//! placeholder without a matching argument is left in place — a missing or
//! broken catalog entry degrades to the raw template instead of failing a
//! dispatch.

/// Render a message template, substituting `%(key)s` placeholders.
pub fn translate(template: &str, args: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (key, value) in args {
        rendered = rendered.replace(&format!("%({key})s"), value);
    }
    rendered
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
