use anyhow::{Context, Result};
use coursedates::config::ExtractorConfig;
use coursedates::model::{AssignmentRecord, RawSource, SourceOrigin};
use coursedates::{cli, pipeline};
use std::env;
use std::fs;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" || args[1] == "help" {
        cli::print_help("coursedates");
        return Ok(());
    }

    simplelog::SimpleLogger::init(
        if env::var("COURSEDATES_DEBUG").is_ok() {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Warn
        },
        simplelog::Config::default(),
    )
    .ok();

    let config = ExtractorConfig::load_or_default();

    match args[1].as_str() {
        "scan" => {
            let file = args
                .get(2)
                .context("Usage: coursedates scan <file.txt> --course <name> [--pdf]")?;
            let course = flag_value(&args, "--course")
                .context("Missing required --course <name> argument")?;
            let origin = if args.iter().any(|a| a == "--pdf") {
                SourceOrigin::Pdf
            } else {
                SourceOrigin::Html
            };

            let text = fs::read_to_string(file)
                .with_context(|| format!("Failed to read text file '{}'", file))?;
            let sources = vec![RawSource::new(text, course, origin)];
            let events = pipeline::retain_valid(pipeline::extract_batch(&sources, &config));
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        "assignments" => {
            let file = args
                .get(2)
                .context("Usage: coursedates assignments <file.json> --course <name>")?;
            let course = flag_value(&args, "--course")
                .context("Missing required --course <name> argument")?;

            let json = fs::read_to_string(file)
                .with_context(|| format!("Failed to read JSON file '{}'", file))?;
            let records: Vec<AssignmentRecord> = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse assignment records from '{}'", file))?;

            let events = pipeline::normalize_assignments(&course, &records, &config);
            let events = pipeline::retain_valid(pipeline::finalize(events));
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            cli::print_help("coursedates");
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Returns the value following `flag`, if present.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
