//! p5doc — generate Vim help files from the JSDoc comments of a bundled `p5.d.ts`.
//!
//! The bundle inlines one declaration file per sub-module behind
//! `// Inlined from: ./src/<category>/<sub>.d.ts` markers. Every documented
//! function or method is grouped by category and written as
//! `doc/p5-<category>.txt`, plus a `doc/p5-modules.txt` index.
//!
//! - `p5doc` reads `assets/types/p5.d.ts` and writes into `doc/`
//! - `p5doc -i - -o out < p5.d.ts` reads the bundle from stdin

mod logger;
mod model;
mod parser;
mod render;
mod text;
mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(
    name = "p5doc",
    version,
    about = "Generate Vim help files from the JSDoc comments of a bundled p5.d.ts"
)]
struct Cli {
    /// Bundled declaration file, or `-` for stdin
    #[arg(short = 'i', long, default_value = "assets/types/p5.d.ts")]
    input: String,

    /// Output directory
    #[arg(short = 'o', long, default_value = "doc")]
    output: PathBuf,

    /// Output format: vimdoc (default), json
    #[arg(short = 'f', long, default_value = "vimdoc")]
    format: String,

    /// Help-tag namespace, also used as the output file prefix
    #[arg(long, default_value = "p5")]
    namespace: String,

    /// Library name shown in headers
    #[arg(long, default_value = "p5.js")]
    library: String,

    /// Library version stamped into every file
    #[arg(long, default_value = "1.7.7")]
    lib_version: String,

    /// Fixed "Last Updated" text instead of the current UTC time
    #[arg(long)]
    timestamp: Option<String>,

    /// Only write these modules (repeatable)
    #[arg(short = 'm', long = "module")]
    modules: Vec<String>,

    /// Do not write the modules index
    #[arg(long)]
    no_index: bool,

    /// Debug logging
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Errors only
    #[arg(short = 'q', long)]
    quiet: bool,
}

/// Pipeline configuration for [`generate`].
struct Config {
    project: render::Project,
    format: String,
    meta: model::Metadata,
    modules: Vec<String>,
    write_index: bool,
}

/// One rendered file, relative to the output directory.
struct OutputFile {
    name: String,
    content: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet);

    let config = Config {
        project: render::Project {
            namespace: cli.namespace.clone(),
            library: cli.library.clone(),
        },
        format: cli.format.clone(),
        meta: model::Metadata {
            version: cli.lib_version.clone(),
            timestamp: cli.timestamp.clone().unwrap_or_else(current_timestamp),
        },
        modules: cli.modules.clone(),
        write_index: !cli.no_index,
    };

    info!("reading TypeScript definitions from {}", cli.input);
    let source = read_source(&cli.input)?;

    let files = generate(&source, &config)?;
    write_outputs(&cli.output, &files)?;
    Ok(())
}

/// Core pipeline — scan, filter, render. Extracted for testability.
fn generate(source: &str, config: &Config) -> Result<Vec<OutputFile>> {
    let renderer = render::create_renderer(&config.format, config.project.clone())?;
    let ext = renderer.file_extension();

    let mut modules = parser::scan(source);
    if !config.modules.is_empty() {
        for wanted in &config.modules {
            if modules.get(wanted).is_none() {
                warn!("no documented functions for module: {}", wanted);
            }
        }
        modules.retain(|m| config.modules.contains(&m.name));
    }

    if modules.is_empty() {
        warn!("no documented functions found");
    }

    let mut files = Vec::new();
    for module in modules.iter() {
        debug!(
            module = module.name.as_str(),
            functions = module.functions.len(),
            "rendering module"
        );
        files.push(OutputFile {
            name: output_name(&config.project.namespace, &module.name, ext),
            content: renderer.render_module(&module.name, &module.functions, &config.meta),
        });
    }

    if config.write_index {
        files.push(OutputFile {
            name: output_name(&config.project.namespace, "modules", ext),
            content: renderer.render_index(&modules, &config.meta),
        });
    }

    info!(
        "documented {} functions across {} modules",
        modules.total_functions(),
        modules.len()
    );
    Ok(files)
}

/// Read the bundle from a file, or from stdin for `-`.
fn read_source(input: &str) -> Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        return Ok(source);
    }

    let path = Path::new(input);
    if !path.is_file() {
        anyhow::bail!("TypeScript definitions file not found: {}", path.display());
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_outputs(output_dir: &Path, files: &[OutputFile]) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    for file in files {
        let out_path = output_dir.join(&file.name);
        fs::write(&out_path, &file.content)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!("wrote {}", out_path.display());
    }
    Ok(())
}

/// `("p5", "color", "txt")` → `p5-color.txt`
fn output_name(namespace: &str, module: &str, ext: &str) -> String {
    format!("{}-{}.{}", namespace, module, ext)
}

/// UTC time as `2024-01-31 12:00:00Z`.
fn current_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%SZ").to_string()
}
