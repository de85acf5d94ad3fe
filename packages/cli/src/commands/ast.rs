use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use sall_parser::snapshot::{to_compact_snapshot, to_snapshot};
use sall_parser::{format_error, parse};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct AstArgs {
    /// Stylesheet to print
    pub file: PathBuf,

    /// Print the tree on a single line (overrides config)
    #[arg(long)]
    pub compact: bool,
}

pub fn ast(args: AstArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let output = render(&cwd.join(&args.file), args.compact || !config.pretty)?;

    println!("{}", output);
    Ok(())
}

fn render(path: &Path, compact: bool) -> Result<String> {
    let source = fs::read_to_string(path)
        .map_err(|e| anyhow!("Cannot read {}: {}", path.display(), e))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    let sheet = parse(&source).map_err(|e| anyhow!("\n{}", format_error(&source, file_name, &e)))?;

    let output = if compact {
        to_compact_snapshot(&sheet)?
    } else {
        to_snapshot(&sheet)?
    };
    Ok(output)
}
