//! TypeScript declaration output for a resolved [`TypeModel`].
//!
//! Purely textual: every decision (names, types, required-ness) was already
//! made during extraction.
use std::fmt::Write as _;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::model::{Class, Enum, TypeModel};

static PLAIN_IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

const INDENT: &str = "  ";

#[derive(Debug, Clone, Serialize)]
pub struct CodegenOptions {
    pub module_name: String,
    /// also emit `const <Enum>Values: readonly [...]` per enum
    pub enum_constants: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self { module_name: "swagger-defs".into(), enum_constants: false }
    }
}

pub struct Codegen {
    options: CodegenOptions,
    out: String,
}

impl Codegen {
    pub fn new() -> Self {
        Self::with_options(CodegenOptions::default())
    }
    pub fn with_options(options: CodegenOptions) -> Self {
        Self { options, out: String::new() }
    }

    /// Append one `declare module` block for `model`.
    pub fn emit(&mut self, model: &TypeModel) {
        let mut blocks: Vec<String> = Vec::new();
        for e in &model.enums {
            blocks.push(self.enum_block(e));
        }
        for c in &model.classes {
            blocks.push(interface_block(c));
        }
        let _ = writeln!(self.out, "declare module {} {{", quote(&self.options.module_name));
        self.out.push_str(&blocks.join("\n"));
        self.out.push_str("}\n");
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn enum_block(&self, e: &Enum) -> String {
        let mut s = String::new();
        if e.values.is_empty() {
            let _ = writeln!(s, "{INDENT}type {} = never", e.name);
        } else {
            let _ = writeln!(s, "{INDENT}type {} =", e.name);
            for value in &e.values {
                let _ = writeln!(s, "{INDENT}{INDENT}| {}", quote(value));
            }
        }
        if self.options.enum_constants {
            let values = e.values.iter().map(|v| quote(v)).collect::<Vec<_>>().join(", ");
            let _ = writeln!(s, "{INDENT}const {}Values: readonly [{values}]", e.name);
        }
        s
    }
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

fn interface_block(c: &Class) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "{INDENT}interface {} {{", c.name);
    for p in &c.properties {
        let optional = if p.required { "" } else { "?" };
        let _ = writeln!(s, "{INDENT}{INDENT}{}{optional}: {}", property_key(&p.name), p.type_name);
    }
    let _ = writeln!(s, "{INDENT}}}");
    s
}

fn property_key(name: &str) -> String {
    if PLAIN_IDENT.is_match(name) { name.to_string() } else { quote(name) }
}

// JSON string syntax is valid TypeScript string literal syntax.
fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

/// Convenience: render one model with the given options.
pub fn render(model: &TypeModel, options: &CodegenOptions) -> String {
    let mut cg = Codegen::with_options(options.clone());
    cg.emit(model);
    cg.into_string()
}
