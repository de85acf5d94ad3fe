use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sall_parser::{format_error, parse};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// File or directory to check (defaults to the configured source directory)
    pub path: Option<PathBuf>,

    /// Source directory (overrides config)
    #[arg(long)]
    pub src_dir: Option<String>,
}

pub fn check(args: CheckArgs, cwd: &Path) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if let Some(src_dir) = args.src_dir {
        config.src_dir = src_dir;
    }

    let root = match args.path {
        Some(path) => cwd.join(path),
        None => config.get_src_dir(cwd),
    };

    if !root.exists() {
        return Err(anyhow!("Path does not exist: {}", root.display()));
    }

    let files = find_source_files(&root, &config);
    if files.is_empty() {
        println!(
            "{}",
            format!("⚠️  No .{} files found", config.extension).yellow()
        );
        return Ok(());
    }

    println!("{}", "🔍 Checking Sall files...".bright_blue().bold());

    let mut failures = 0;
    for file in &files {
        let display = file.strip_prefix(&root).unwrap_or(file);
        match check_file(file) {
            Ok(summary) => {
                println!("  {} {} {}", "✓".green(), display.display(), summary.dimmed());
            }
            Err(e) => {
                failures += 1;
                eprintln!("  {} {}", "✗".red(), display.display());
                eprintln!("{}", e);
            }
        }
    }

    println!();
    if failures == 0 {
        println!("{} Checked {} files", "✅".green(), files.len());
        Ok(())
    } else {
        Err(anyhow!("{} of {} files failed to parse", failures, files.len()))
    }
}

fn find_source_files(root: &Path, config: &Config) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file() && config.is_source_file(path))
        .collect();

    files.sort();
    files
}

fn check_file(path: &Path) -> Result<String> {
    let source = fs::read_to_string(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    let sheet = parse(&source).map_err(|e| anyhow!("{}", format_error(&source, file_name, &e)))?;
    tracing::debug!(file = file_name, "parsed");

    Ok(format!(
        "({} variables, {} classes)",
        sheet.variables.len(),
        sheet.anonymous_classes.len() + sheet.named_classes.len()
    ))
}
