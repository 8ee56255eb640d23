//! CLI: load → extract → (typescript | model)
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;

use crate::codegen::{Codegen, CodegenOptions};
use crate::extract::{extract, ExtractOptions};
use crate::model::TypeModel;
use crate::naming::Case;
use crate::schema::SchemaDocument;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate TypeScript declarations from the `definitions` of a Swagger document (YAML or JSON)
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit a `declare module` block of interfaces and enum types
    Typescript(TypescriptOut),
    /// print the resolved type model as JSON
    Model(ModelOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., default_value = "swagger.json")]
    input: Vec<String>,

    /// JSON Pointer selecting the node that holds `definitions` (e.g. /spec)
    #[arg(long)]
    json_pointer: Option<String>,

    /// jq pre-process filter for each document
    #[arg(long)]
    jq_expr: Option<String>,

    /// casing of generated enum type names
    #[arg(long, value_enum, default_value_t = Case::Pascal)]
    type_case: Case,
}

#[derive(clap::Parser, Debug)]
struct TypescriptOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// name of the declared module
    #[arg(long, default_value = "swagger-defs")]
    module_name: String,

    /// also emit an ordered `<Enum>Values` constant per enum
    #[arg(long, default_value_t = false)]
    enum_constants: bool,

    /// output .d.ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct ModelOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn extract_options(&self) -> ExtractOptions {
        ExtractOptions { type_case: self.type_case, ..ExtractOptions::default() }
    }

    /// Resolve every input into one type model per document, in input order.
    /// Inputs are independent, so they are processed in parallel.
    fn load_models(&self) -> Result<Vec<TypeModel>> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .map_err(|error| anyhow!("failed to resolve input file paths: {error}"))?;
        let options = self.extract_options();
        let per_file = source_paths
            .par_iter()
            .map(|path| self.load_file(path, &options))
            .collect::<Result<Vec<_>>>()?;
        Ok(per_file.into_iter().flatten().collect())
    }

    fn load_file(&self, source_path: &Path, options: &ExtractOptions) -> Result<Vec<TypeModel>> {
        let source_path_str = source_path.to_string_lossy().to_string();
        log::debug!("loading {source_path_str}");
        let value = crate::load::load_value(source_path)?;
        let value = match self.json_pointer.as_deref() {
            None => value,
            Some(pointer) => value
                .pointer(pointer)
                .cloned()
                .ok_or_else(|| anyhow!("JSON pointer {pointer} matched nothing in {source_path_str}"))?,
        };
        let values = match self.jq_expr.as_ref() {
            None => vec![value],
            Some(jq_expr) => crate::jq_exec::run_jaq(jq_expr, &value).with_context(|| {
                format!("Failed to apply jq expression to source file ({source_path_str})")
            })?,
        };
        values
            .into_iter()
            .map(|value| {
                let doc = SchemaDocument::from_value(value).map_err(|error| {
                    anyhow!("Failed to read definitions ({source_path_str}) at {}: {}", error.path(), error.inner())
                })?;
                log::debug!("{source_path_str}: {} definitions", doc.definitions.len());
                extract(&doc, options)
                    .with_context(|| format!("Failed to resolve definitions ({source_path_str})"))
            })
            .collect()
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Typescript(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                log::info!("Attempting to generate the type definitions...");
                let models = target.input_settings.load_models()?;
                let mut cg = Codegen::with_options(CodegenOptions {
                    module_name: target.module_name.clone(),
                    enum_constants: target.enum_constants,
                });
                for model in &models {
                    cg.emit(model);
                }
                write_output(target.out.as_deref(), &cg.into_string())?;
                log::info!("Successfully generated type definitions.");
                Ok(())
            }
            Command::Model(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                let models = target.input_settings.load_models()?;
                let src = match models.as_slice() {
                    [single] => serde_json::to_string_pretty(single)?,
                    many => serde_json::to_string_pretty(many)?,
                };
                write_output(target.out.as_deref(), &src)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&Path>, src: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src).with_context(|| format!("failed to write {}", out.display()))?;
            log::info!("wrote {}", out.display());
        }
        None => write_text(&mut std::io::stdout().lock(), src)?,
    }
    Ok(())
}

/// Write `src` and end with exactly one newline.
fn write_text(w: &mut impl std::io::Write, src: &str) -> Result<()> {
    w.write_all(src.as_bytes())?;
    if !src.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched = glob::glob(pattern)?
                .collect::<Result<Vec<_>, _>>()?;
            if matched.is_empty() {
                bail!("glob pattern matched no files: {pattern}");
            }
            matched.sort();
            out.append(&mut matched);
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
