//! Swatch demo - main entry point.
//!
//! Loads a dataset registry from JSON, builds a token table, applies an
//! optional filter and sort, and prints the resulting frame. Handy for
//! eyeballing datasets outside a site build.
//!
//! Usage:
//!   swatch <dataset.json> <prefix>... [--options swatch.toml]
//!          [--filter PATTERN] [--sort COLUMN[:asc|desc]] [--json]

use std::path::PathBuf;
use std::process::exit;

use swatch_core::{Cell, SortColumn, SortDirection, TableOptions};
use swatch_engine::DatasetRegistry;
use swatch_ui::{TableFrame, TokenTable};

// =============================================================================
// Arguments
// =============================================================================

const USAGE: &str = "Usage: swatch <dataset.json> <prefix>... \
[--options swatch.toml] [--filter PATTERN] [--sort COLUMN[:asc|desc]] [--json]";

struct Args {
    dataset: PathBuf,
    prefixes: Vec<String>,
    options: Option<PathBuf>,
    filter: Option<String>,
    sort: Option<(SortColumn, SortDirection)>,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut dataset = None;
    let mut prefixes = Vec::new();
    let mut options = None;
    let mut filter = None;
    let mut sort = None;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--options" => {
                let value = args.next().ok_or("--options needs a path")?;
                options = Some(PathBuf::from(value));
            }
            "--filter" => {
                filter = Some(args.next().ok_or("--filter needs a pattern")?);
            }
            "--sort" => {
                let value = args.next().ok_or("--sort needs COLUMN[:asc|desc]")?;
                sort = Some(parse_sort(&value)?);
            }
            "--json" => json = true,
            _ if dataset.is_none() => dataset = Some(PathBuf::from(arg)),
            _ => prefixes.push(arg),
        }
    }

    Ok(Args {
        dataset: dataset.ok_or("missing dataset path")?,
        prefixes,
        options,
        filter,
        sort,
        json,
    })
}

fn parse_sort(arg: &str) -> Result<(SortColumn, SortDirection), String> {
    let (column, direction) = arg.split_once(':').unwrap_or((arg, "asc"));
    let column = match column {
        "selector" => SortColumn::Selector,
        "variable" | "property" => SortColumn::Property,
        "token" => SortColumn::Token,
        "value" => SortColumn::Value,
        other => return Err(format!("unknown sort column '{}'", other)),
    };
    let direction = match direction {
        "asc" => SortDirection::Ascending,
        "desc" => SortDirection::Descending,
        other => return Err(format!("unknown sort direction '{}'", other)),
    };
    Ok((column, direction))
}

/// Merge an optional TOML options file with command-line prefixes.
fn load_options(args: &Args) -> Result<TableOptions, String> {
    let mut options = match &args.options {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            toml::from_str(&text)
                .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?
        }
        None => TableOptions::default(),
    };
    options.prefixes.extend(args.prefixes.iter().cloned());
    Ok(options)
}

// =============================================================================
// Frame Printing
// =============================================================================

fn print_frame(frame: &TableFrame) {
    let titles: Vec<&str> = frame.columns.iter().map(|c| c.title.as_str()).collect();
    println!("{}", titles.join(" | "));

    for row in &frame.rows {
        if row.is_detail() {
            print_detail(row);
            continue;
        }
        let marker = match row.is_open {
            Some(true) => "v ",
            Some(false) => "> ",
            None => "  ",
        };
        let cells: Vec<String> = row.cells.iter().map(cell_text).collect();
        println!("{}{}", marker, cells.join(" | "));
    }
}

fn print_detail(row: &swatch_core::Row) {
    for cell in &row.cells {
        if let Cell::Detail { property, values } = cell {
            println!("    {}", property);
            for value in values {
                println!("      - {}", value);
            }
        }
    }
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Text { text } => text.clone(),
        // Mark swatch values so color chips are visible in plain text.
        Cell::Value { text, swatch } => {
            if *swatch {
                format!("[{}]", text)
            } else {
                text.clone()
            }
        }
        Cell::Detail { property, .. } => property.clone(),
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            exit(1);
        }
    };

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let registry = match DatasetRegistry::load(&args.dataset) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    tracing::info!("Loaded {} datasets from {}", registry.len(), args.dataset.display());

    let table = TokenTable::new(&registry, &options);
    tracing::info!("Table ready: {} visible rows", table.engine().visible_count());

    if let Some((column, direction)) = args.sort {
        table.engine().sort(column, direction);
    }
    if let Some(pattern) = &args.filter {
        if let Err(e) = table.set_filter_now(pattern) {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }

    let frame = table.frame();
    if args.json {
        match serde_json::to_string_pretty(&frame) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                exit(1);
            }
        }
    } else {
        print_frame(&frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        assert_eq!(
            parse_sort("value:desc").unwrap(),
            (SortColumn::Value, SortDirection::Descending)
        );
        assert_eq!(
            parse_sort("token").unwrap(),
            (SortColumn::Token, SortDirection::Ascending)
        );
        assert!(parse_sort("bogus").is_err());
        assert!(parse_sort("value:sideways").is_err());
    }

    #[test]
    fn test_cell_text_marks_swatches() {
        assert_eq!(
            cell_text(&Cell::Value {
                text: "#fff".to_string(),
                swatch: true
            }),
            "[#fff]"
        );
        assert_eq!(
            cell_text(&Cell::Value {
                text: "4px".to_string(),
                swatch: false
            }),
            "4px"
        );
    }
}
