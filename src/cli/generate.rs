//! `generate` command

use super::util::{
    config_start, format_issue, parse_framework_args, parse_out_dir_arg, parse_output_arg,
    parse_runner_arg, positional, write_output,
};
use evgen::*;
use std::path::Path;

const USAGE: &str = "Usage: evgen generate <api.yaml> [--framework F]... [--runner vitest|jest] [--output file | --out-dir dir]";

pub fn cmd_generate(args: &[String]) -> Result<()> {
    let api_path = Path::new(positional(args).ok_or(USAGE)?);
    let api = ComponentApi::load(api_path)?;

    let mut config = GenConfig::discover(&config_start(api_path))?;
    if let Some(runner) = parse_runner_arg(args)? {
        config.runner = runner;
    }

    let mut frameworks = parse_framework_args(args)?;
    if frameworks.is_empty() {
        frameworks = config.frameworks.clone();
    }

    for issue in validate(&api).issues {
        eprintln!("Warning: {}", format_issue(&issue));
    }

    match parse_out_dir_arg(args) {
        Some(dir) => {
            for framework in frameworks {
                let path = dir.join(config.apply_naming(&api.component, framework));
                write_output(&Some(path), &render_test_file(&api, framework, &config))?;
            }
        }
        None => {
            let [framework] = frameworks.as_slice() else {
                return Err(format!(
                    "{} frameworks selected; pass a single --framework or use --out-dir",
                    frameworks.len()
                )
                .into());
            };
            write_output(
                &parse_output_arg(args),
                &render_test_file(&api, *framework, &config),
            )?;
        }
    }
    Ok(())
}
