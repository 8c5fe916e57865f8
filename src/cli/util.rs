//! CLI utility helpers

use evgen::{Error, Framework, Issue, Result, TestRunner};
use std::fs;
use std::path::{Path, PathBuf};

/// Value following any of `flags`
fn flag_value<'a>(args: &'a [String], flags: &[&str]) -> Option<&'a str> {
    args.iter()
        .position(|arg| flags.contains(&arg.as_str()))
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// First argument that is neither a flag nor a flag's value
pub fn positional(args: &[String]) -> Option<&str> {
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg.starts_with('-') {
            skip_next = !matches!(arg.as_str(), "--json" | "--strict");
            continue;
        }
        return Some(arg);
    }
    None
}

/// Parse every --framework argument
pub fn parse_framework_args(args: &[String]) -> Result<Vec<Framework>> {
    let mut frameworks = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        if arg == "--framework" || arg == "-f" {
            if let Some(name) = args.get(i + 1) {
                let framework: Framework = name.parse()?;
                if !frameworks.contains(&framework) {
                    frameworks.push(framework);
                }
            }
        }
    }
    Ok(frameworks)
}

/// Parse --runner argument
pub fn parse_runner_arg(args: &[String]) -> Result<Option<TestRunner>> {
    flag_value(args, &["--runner"])
        .map(str::parse::<TestRunner>)
        .transpose()
}

/// Parse --output argument to determine output file path
pub fn parse_output_arg(args: &[String]) -> Option<PathBuf> {
    flag_value(args, &["--output", "-o"]).map(PathBuf::from)
}

/// Parse --out-dir argument
pub fn parse_out_dir_arg(args: &[String]) -> Option<PathBuf> {
    flag_value(args, &["--out-dir", "-d"]).map(PathBuf::from)
}

/// Directory config discovery starts from
pub fn config_start(input: &Path) -> PathBuf {
    let dir = input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}

/// Write content to file or stdout
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            if let Some(parent) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(Error::Io)?;
            }
            fs::write(p, content).map_err(Error::Io)?;
            eprintln!("Written to: {}", p.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

/// One-line rendering of a validation issue
pub fn format_issue(issue: &Issue) -> String {
    match &issue.field {
        Some(field) => format!("[{}] {} (field: {})", issue.code, issue.message, field),
        None => format!("[{}] {}", issue.code, issue.message),
    }
}
