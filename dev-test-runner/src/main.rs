//! Runs every document under `fixtures/` through load → extract → codegen.
//!
//! - `fixtures/pass/<name>.{yaml,json}` must resolve; when `<name>.d.ts` sits next
//!   to it the rendered output must match byte for byte.
//! - `fixtures/fail/<name>.{yaml,json}` must be rejected, and the error message
//!   must contain the text of the `<name>.error` sidecar.
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use swagger_typedefs::{extract, load, Codegen, ExtractOptions};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures")));

    let mut failures = 0usize;
    for path in documents(&root.join("pass"))? {
        match check_pass(&path) {
            Ok(()) => eprintln!("✅ {}", path.display()),
            Err(error) => {
                failures += 1;
                eprintln!("❌ {}: {error:#}", path.display());
            }
        }
    }
    for path in documents(&root.join("fail"))? {
        match check_fail(&path) {
            Ok(reason) => eprintln!("✅ {} rejected: {reason}", path.display()),
            Err(error) => {
                failures += 1;
                eprintln!("❌ {}: {error:#}", path.display());
            }
        }
    }

    if failures > 0 {
        bail!("{failures} fixture(s) failed");
    }
    log::info!("all fixtures passed");
    Ok(())
}

fn documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for ext in ["yaml", "yml", "json"] {
        let pattern = format!("{}/*.{ext}", dir.display());
        for entry in glob::glob(&pattern)? {
            out.push(entry?);
        }
    }
    out.sort();
    Ok(out)
}

fn render(path: &Path) -> Result<String> {
    let doc = load::load_document(path)?;
    let model = extract(&doc, &ExtractOptions::default())?;
    let mut cg = Codegen::new();
    cg.emit(&model);
    Ok(cg.into_string())
}

fn check_pass(path: &Path) -> Result<()> {
    let actual = render(path)?;
    let expected_path = path.with_extension("d.ts");
    if !expected_path.exists() {
        log::debug!("{}: no expected output, resolve only", path.display());
        return Ok(());
    }
    let expected = std::fs::read_to_string(&expected_path)
        .with_context(|| format!("failed to read {}", expected_path.display()))?;
    if actual != expected {
        bail!("output differs\n--- expected\n{expected}\n--- actual\n{actual}");
    }
    Ok(())
}

fn check_fail(path: &Path) -> Result<String> {
    let expected_path = path.with_extension("error");
    let expected = std::fs::read_to_string(&expected_path)
        .with_context(|| format!("missing expected error {}", expected_path.display()))?;
    check_error(path, expected.trim())
}

fn check_error(path: &Path, expected: &str) -> Result<String> {
    match render(path) {
        Ok(_) => bail!("expected a failure, document resolved"),
        Err(error) => {
            let actual = error.to_string();
            if !actual.contains(expected) {
                bail!("wrong failure\n--- expected\n{expected}\n--- actual\n{actual}");
            }
            Ok(actual)
        }
    }
}
