//! `schema` command

use evgen::*;

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("api");

    match schema_name {
        "api" | "component" => print_schema::<ComponentApi>(),
        "config" => print_schema::<GenConfig>(),
        _ => Err(format!("Unknown schema: {}. Use 'api' or 'config'.", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
