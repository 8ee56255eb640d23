//! Kebab-case identifier normalization.
//!
//! Hyphens are dropped and the ASCII letter after each hyphen is upper-cased.
//! The first character is then forced to the requested case. Everything else,
//! including non-ASCII text, passes through untouched.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
pub enum Case {
    /// `prop-type` → `propType`
    Camel,
    /// `prop-type` → `PropType`
    #[default]
    Pascal,
}

pub fn normalize(ident: &str, case: Case) -> String {
    let mut out = String::with_capacity(ident.len());
    let mut after_hyphen = false;
    for c in ident.chars() {
        if c == '-' {
            after_hyphen = true;
            continue;
        }
        if after_hyphen {
            out.push(c.to_ascii_uppercase());
            after_hyphen = false;
        } else {
            out.push(c);
        }
    }
    let mut chars = out.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let first = match case {
                Case::Camel => first.to_ascii_lowercase(),
                Case::Pascal => first.to_ascii_uppercase(),
            };
            std::iter::once(first).chain(chars).collect()
        }
    }
}

/// Property names always use the camel convention.
pub fn property_name(ident: &str) -> String {
    normalize(ident, Case::Camel)
}
