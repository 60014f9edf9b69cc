use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::catalog_io;
use crate::model::Catalog;
use crate::ops::{check, search};
use crate::tui::clipboard::{Clipboard, SystemClipboard};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let catalog = catalog_io::load_catalog(cli.catalog.as_deref().map(Path::new))?;

    match cli.command {
        None => {
            // No subcommand is handled in main.rs (launches the TUI)
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::List(args) => cmd_list(args, &catalog, json),
            Commands::Search(args) => cmd_search(args, &catalog, json),
            Commands::Show(args) => cmd_show(args, &catalog, json),
            Commands::Copy(args) => cmd_copy(args, &catalog),
            Commands::Check => cmd_check(&catalog, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(
    args: ListArgs,
    catalog: &Catalog,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.category {
        Some(ref id) => {
            let category = catalog
                .category(id)
                .ok_or_else(|| format!("category not found: {}", id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&category_to_json(category))?);
            } else {
                println!("{}", format_category_header(category));
                println!();
                for command in &category.items {
                    println!("{}", format_command_line(command));
                }
            }
        }
        None => {
            if json {
                let summaries: Vec<CategorySummaryJson> = catalog
                    .categories()
                    .iter()
                    .map(|c| CategorySummaryJson {
                        id: c.id.clone(),
                        title: c.title.clone(),
                        commands: c.items.len(),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for category in catalog.categories() {
                    println!(
                        "  {} ({})  {} commands",
                        category.title,
                        category.id,
                        category.items.len()
                    );
                }
            }
        }
    }
    Ok(())
}

fn cmd_search(
    args: SearchArgs,
    catalog: &Catalog,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let hits = search::search(&args.query, catalog);

    if json {
        let output: Vec<SearchHitJson> = hits
            .iter()
            .map(|hit| {
                let category_id = catalog
                    .category_of(&hit.command.id)
                    .map(|c| c.id.as_str())
                    .unwrap_or("");
                hit_to_json(category_id, hit)
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for hit in &hits {
            let category_id = catalog
                .category_of(&hit.command.id)
                .map(|c| c.id.as_str())
                .unwrap_or("");
            println!("[{}] {}", category_id, format_command_line(hit.command));
        }
    }
    Ok(())
}

fn cmd_show(
    args: ShowArgs,
    catalog: &Catalog,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let command = catalog
        .command(&args.id)
        .ok_or_else(|| format!("command not found: {}", args.id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&command_to_json(command))?);
    } else {
        for line in format_command_detail(command) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_copy(args: CopyArgs, catalog: &Catalog) -> Result<(), Box<dyn std::error::Error>> {
    let command = catalog
        .command(&args.id)
        .ok_or_else(|| format!("command not found: {}", args.id))?;
    let text = command
        .cmd
        .as_deref()
        .or(command.shortcut.as_deref())
        .ok_or_else(|| format!("{} has nothing to copy", args.id))?;

    let mut clipboard = SystemClipboard::new();
    clipboard.set_text(text)?;
    println!("copied: {}", text.lines().next().unwrap_or(""));
    Ok(())
}

fn cmd_check(catalog: &Catalog, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let issues = check::check_catalog(catalog.categories());

    if json {
        let output: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if issues.is_empty() {
        println!(
            "ok: {} categories, {} commands",
            catalog.categories().len(),
            catalog.command_count()
        );
    } else {
        for issue in &issues {
            println!("  {}", issue);
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(format!("{} issue(s) found", issues.len()).into())
    }
}
