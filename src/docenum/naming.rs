//! Name derivation for the generated surface.
//!
//! Every generated name is a pure function of the alias or of a value token:
//!
//! | Source | Derived | Example |
//! |--------|---------|---------|
//! | alias | backing field | `status` → `_status` |
//! | alias | ordered-values constant | `status` → `STATUS` |
//! | alias | mapping accessor | `status` → `statuses` |
//! | alias | setter / predicate | `status=`, `status?` |
//! | value | bang-setter / predicate / scope | `banned!`, `banned?`, `banned` |
//!
//! Valid identifiers:
//! - ASCII letters, digits and underscores (`_`)
//! - Must start with a letter or an underscore

use crate::error::DeclarationError;

pub const DEFAULT_FIELD_PREFIX: &str = "_";

/// Validates that `name` can be used as a method or scope name.
///
/// # Examples
/// ```
/// use docenum::naming::validate_identifier;
///
/// assert!(validate_identifier("status").is_ok());
/// assert!(validate_identifier("awaiting_approval").is_ok());
/// assert!(validate_identifier("_hidden").is_ok());
///
/// assert!(validate_identifier("").is_err());
/// assert!(validate_identifier("7up").is_err());
/// assert!(validate_identifier("on hold").is_err());
/// ```
pub fn validate_identifier(name: &str) -> Result<(), DeclarationError> {
    let invalid = |reason: &str| DeclarationError::InvalidIdentifier {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(invalid("identifier cannot be empty"));
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(invalid("must start with a letter or '_'"));
    }

    if let Some(ch) = chars.find(|ch| !is_identifier_char(*ch)) {
        return Err(invalid(&format!("invalid character '{}'", ch)));
    }

    Ok(())
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Backing field name. An empty prefix falls back to [`DEFAULT_FIELD_PREFIX`]
/// so the field never shadows the alias.
pub fn field_name(prefix: &str, alias: &str) -> String {
    let prefix = if prefix.is_empty() {
        DEFAULT_FIELD_PREFIX
    } else {
        prefix
    };
    format!("{}{}", prefix, alias)
}

pub fn constant_name(alias: &str) -> String {
    alias.to_ascii_uppercase()
}

pub fn mapping_name(alias: &str) -> String {
    pluralize(alias)
}

pub fn setter_name(alias: &str) -> String {
    format!("{}=", alias)
}

pub fn predicate_name(name: &str) -> String {
    format!("{}?", name)
}

pub fn bang_name(value: &str) -> String {
    format!("{}!", value)
}

/// English pluralization for snake_case identifiers. Only the last word is
/// inflected.
///
/// Words already ending in a plain `s` are taken as plural (`roles` stays
/// `roles`), while `-us`/`-ss` endings take `-es` (`status` → `statuses`).
pub fn pluralize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();

    if lower.ends_with("us")
        || lower.ends_with("ss")
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{}es", word);
    }

    if lower.ends_with('s') {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix(&['y', 'Y'][..]) {
        let before = stem.chars().last().map(|c| c.to_ascii_lowercase());
        if matches!(before, Some(c) if c.is_ascii_alphabetic() && !"aeiou".contains(c)) {
            return format!("{}ies", stem);
        }
    }

    format!("{}s", word)
}
