//! `check` command

use super::util::{format_issue, positional};
use evgen::*;
use std::path::Path;

pub fn cmd_check(args: &[String]) -> Result<()> {
    let path = positional(args).ok_or("Usage: evgen check <api.yaml> [--strict] [--json]")?;
    let json_output = args.contains(&"--json".to_string());
    let strict = args.contains(&"--strict".to_string());

    let api = ComponentApi::load(Path::new(path))?;
    let report = validate(&api);

    if json_output {
        let issues: Vec<_> = report
            .issues
            .iter()
            .map(|i| {
                serde_json::json!({
                    "severity": match i.severity { Severity::Error => "error", Severity::Warning => "warning" },
                    "code": i.code,
                    "message": i.message,
                    "field": i.field,
                })
            })
            .collect();
        let output = serde_json::json!({
            "valid": !report.has_errors(),
            "errors": report.error_count(),
            "warnings": report.warning_count(),
            "issues": issues,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if report.issues.is_empty() {
        println!("✓ {} is valid", path);
    } else {
        for issue in &report.issues {
            let prefix = match issue.severity {
                Severity::Error => "✗ ERROR",
                Severity::Warning => "⚠ WARN",
            };
            println!("{} {}", prefix, format_issue(issue));
        }
        println!();
        println!(
            "{} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        );
    }

    if report.has_errors() || (strict && report.has_warnings()) {
        return Err("Validation failed".into());
    }
    Ok(())
}
