//! Ctrlint CLI: lint exported class-model files.

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use walkdir::WalkDir;

use ctrlint::report::{OutputFormat, Reporter};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI options parsed from arguments.
struct Options {
    path: Option<String>,
    base_class: String,
    format: OutputFormat,
}

fn print_usage() {
    eprintln!("Ctrlint {} - Controller instantiability lint", VERSION);
    eprintln!();
    eprintln!("Usage: ctrlint [options] [path]");
    eprintln!();
    eprintln!("Lints class-model files (*.json) exported by the host build. A file");
    eprintln!("argument is linted directly; a directory is searched recursively.");
    eprintln!("Defaults to the current directory.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --base-class FQN  Controller base class to constrain");
    eprintln!("                    (default: {})", ctrlint::DEFAULT_BASE_CLASS);
    eprintln!("  --format FORMAT   Output format: text or json (default: text)");
    eprintln!("  --help, -h        Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  ctrlint                          Lint models under the current directory");
    eprintln!("  ctrlint build/classes.json       Lint a single model file");
    eprintln!("  ctrlint build/ --format json     Machine-readable report");
}

fn parse_args() -> Options {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut options = Options {
        path: None,
        base_class: ctrlint::DEFAULT_BASE_CLASS.to_string(),
        format: OutputFormat::Text,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--base-class" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("--base-class requires a fully-qualified class name");
                    print_usage();
                    process::exit(64);
                }
                options.base_class = args[i].clone();
            }
            "--format" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("--format requires a format (text, json)");
                    print_usage();
                    process::exit(64);
                }
                options.format = match args[i].as_str() {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    other => {
                        eprintln!("Unknown format: {} (valid: text, json)", other);
                        print_usage();
                        process::exit(64);
                    }
                };
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            arg if arg.starts_with('-') => {
                eprintln!("Unknown option: {}", arg);
                print_usage();
                process::exit(64);
            }
            _ => {
                if options.path.is_some() {
                    eprintln!("Unexpected argument: {}", args[i]);
                    print_usage();
                    process::exit(64);
                }
                options.path = Some(args[i].clone());
            }
        }
        i += 1;
    }

    options
}

/// Collect model files under a directory.
fn collect_model_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

fn main() {
    let options = parse_args();

    let lint_path = match &options.path {
        Some(p) => PathBuf::from(p),
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    if !lint_path.exists() {
        eprintln!("Error: Path '{}' does not exist", lint_path.display());
        process::exit(66);
    }

    let files = if lint_path.is_file() {
        vec![lint_path.clone()]
    } else {
        collect_model_files(&lint_path)
    };

    if files.is_empty() {
        println!("No model files found.");
        return;
    }

    let mut reporter = Reporter::new(options.format);
    for file in &files {
        match ctrlint::check_file(file, &options.base_class) {
            Ok(diagnostics) => reporter.add_file(file, diagnostics),
            Err(e) => {
                eprintln!("{}: {}", file.display(), e);
            }
        }
    }

    if reporter.finish() > 0 {
        process::exit(1);
    }
}
