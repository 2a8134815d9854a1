//! Command-line interface for stylecheck.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::project::ProjectType;
use crate::report;
use crate::rules::{RuleEngine, DEFAULT_NAMESPACE_ROOT};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Directories that never contain first-party sources.
const SKIPPED_DIRS: &[&str] = &["bin", "obj", "packages", "node_modules"];

/// House style checker for C# codebases.
///
/// Stylecheck scans a project for violations of local conventions:
/// namespace layout, identifier prefixes, XML documentation coverage,
/// inheritance control, and common implementation-quality smells.
#[derive(Parser)]
#[command(name = "stylecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a project or file for style violations
    #[command(visible_alias = "check")]
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to analyze (file or directory)
    pub path: PathBuf,

    /// Write a markdown report to this file
    #[arg(short = 'o', long)]
    pub report: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Override project type detection: library, webapi, console, razor, unknown
    #[arg(long)]
    pub project_type: Option<String>,

    /// Root token every namespace must start with
    #[arg(long, default_value = DEFAULT_NAMESPACE_ROOT)]
    pub namespace_root: String,
}

/// Collect C# source files under `root`, sorted for deterministic output.
fn collect_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            if e.file_type().is_dir() && name.starts_with('.') {
                return false;
            }
            if e.file_type().is_dir() && SKIPPED_DIRS.contains(&name.as_ref()) {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            let ext = entry.path().extension().and_then(|e| e.to_str());
            if ext == Some("cs") {
                files.push(entry.path().to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    // Resolve path
    let abs_path = match args.path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let metadata = std::fs::metadata(&abs_path)?;

    // Project root drives namespace expectations; a single file has none.
    let project_root = if metadata.is_dir() {
        Some(abs_path.clone())
    } else {
        None
    };

    // Project type: explicit override wins, otherwise detect from the manifest.
    let project_type = match &args.project_type {
        Some(s) => match s.parse::<ProjectType>() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!("Valid types: library, webapi, console, razor, unknown");
                return Ok(EXIT_ERROR);
            }
        },
        None => match &project_root {
            Some(root) => ProjectType::detect(root),
            None => ProjectType::Unknown,
        },
    };

    // Collect files
    let files = if metadata.is_dir() {
        collect_files(&abs_path)?
    } else {
        vec![abs_path.clone()]
    };

    if files.is_empty() {
        eprintln!("Warning: no C# files to analyze");
        return Ok(EXIT_SUCCESS);
    }

    // Read sources, skipping unreadable files with a warning.
    let mut sources = Vec::with_capacity(files.len());
    for file in &files {
        match std::fs::read_to_string(file) {
            Ok(content) => sources.push((file.clone(), content)),
            Err(e) => eprintln!("Warning: skipping {}: {}", file.display(), e),
        }
    }

    // Run analysis
    let mut engine = RuleEngine::new()
        .project_type(project_type)
        .namespace_root(&args.namespace_root);
    if let Some(root) = &project_root {
        engine = engine.project_root(root);
    }

    let results = engine.analyze_many(&sources);

    // Output results
    let path_str = args.path.to_string_lossy().to_string();
    let files_analyzed = sources.len();

    match args.format.as_str() {
        "json" => {
            report::write_json(&path_str, project_type, files_analyzed, &results)?;
        }
        _ => {
            report::write_pretty(&path_str, project_type, files_analyzed, &results);
        }
    }

    // Optional markdown report
    if let Some(report_path) = &args.report {
        report::write_markdown(report_path, &path_str, project_type, files_analyzed, &results)?;
        eprintln!("Report written to {}", report_path.display());
    }

    // Alerts alone do not fail the run.
    if report::total_violations(&results) > 0 {
        Ok(EXIT_VIOLATIONS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_files_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("obj")).unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join("obj/Generated.cs"), "// generated").unwrap();
        fs::write(root.join(".git/Hook.cs"), "// hook").unwrap();
        fs::write(root.join("Zebra.cs"), "namespace A;").unwrap();
        fs::write(root.join("Alpha.cs"), "namespace A;").unwrap();
        fs::write(root.join("readme.md"), "# readme").unwrap();

        let files = collect_files(root).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["Alpha.cs", "Zebra.cs"]);
    }
}
