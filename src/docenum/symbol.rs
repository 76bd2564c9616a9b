//! Symbolic tokens.
//!
//! A [`Symbol`] is the stored representation of an enum value. Declared values
//! are symbols, but so is anything assigned through the unchecked setters, which
//! is why a symbol carries no proof of membership. Membership is checked by the
//! validators (see [`crate::validation`]).

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Build a `Vec<Symbol>` from string literals.
pub fn symbols<I, S>(names: I) -> Vec<Symbol>
where
    I: IntoIterator<Item = S>,
    S: Into<Symbol>,
{
    names.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_with_str() {
        let sym = Symbol::from("banned");
        assert_eq!(sym, "banned");
        assert_eq!(sym.as_str(), "banned");
        assert_eq!(sym.to_string(), "banned");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Symbol::from("admin")).unwrap();
        assert_eq!(json, "\"admin\"");
    }

    #[test]
    fn symbols_helper_preserves_order() {
        let syms = symbols(["a", "b", "c"]);
        assert_eq!(syms, vec![Symbol::from("a"), "b".into(), "c".into()]);
    }
}
