// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use geohub::catalogue::views::{self, Scope, View};
use geohub::{Catalogue, ContentItem, Explorer, ExplorerConfig, FacetSelections, QueryState, ResultView};

mod cli;
use cli::display::*;
use cli::{Cli, Commands, QueryArgs};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GEOHUB_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> geohub::Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Countries { query } => {
            show(View::Countries, &Scope::default(), config, query, FacetSelections::new(), cli.json)
        }
        Commands::Explore {
            query,
            types,
            country,
            challenge,
            tag,
        } => {
            let selections: FacetSelections = [
                ("Type", types),
                ("Country", country),
                ("Challenges", challenge),
                ("Tags", tag),
            ]
            .into_iter()
            .filter(|(_, values)| !values.is_empty())
            .collect();
            show(View::Explore, &Scope::default(), config, query, selections, cli.json)
        }
        Commands::List {
            view,
            country,
            focus,
            challenge,
            facets,
            query,
        } => {
            let scope = Scope {
                country,
                focus,
                challenge,
            };
            let mut selections = FacetSelections::new();
            for (name, value) in &facets {
                selections.select(name, value);
            }
            show(view, &scope, config, query, selections, cli.json)
        }
        Commands::Facets { view, country } => {
            let scope = Scope {
                country,
                ..Scope::default()
            };
            let explorer = explorer_for(view, &scope, config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(explorer.facets())?);
            } else {
                print_facets(view, &explorer);
            }
            Ok(())
        }
    }
}

fn explorer_for(view: View, scope: &Scope, config: Option<&Path>) -> geohub::Result<Explorer> {
    match config {
        Some(path) => views::explorer_with(
            Catalogue::embedded()?,
            view,
            scope,
            ExplorerConfig::from_json_file(path)?,
        ),
        None => views::explorer(view, scope),
    }
}

fn show(
    view: View,
    scope: &Scope,
    config: Option<&Path>,
    query: QueryArgs,
    selections: FacetSelections,
    json: bool,
) -> geohub::Result<()> {
    let explorer = explorer_for(view, scope, config)?;
    let state = QueryState {
        query: query.query,
        selections,
        page: query.page,
    };
    let result = explorer.compute(&state);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_results(view, &state, &result);
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERING
// ═══════════════════════════════════════════════════════════════════════════

const META_FIELDS: [&str; 4] = ["type", "country", "uploaded", "role"];

fn print_results(view: View, state: &QueryState, result: &ResultView) {
    let label = format!(
        "{} · {} result{}",
        view.name().to_uppercase(),
        result.total_items,
        if result.total_items == 1 { "" } else { "s" }
    );
    println!("{}", section_top(&label));

    if !state.query.trim().is_empty() {
        println!("{}", row(&format!("query: {}", themed(YELLOW, &[], state.query.trim()))));
    }
    for (name, values) in state.selections.active() {
        let values: Vec<&str> = values.iter().map(String::as_str).collect();
        println!("{}", row(&format!("{}: {}", name, themed(MAGENTA, &[], &values.join(", ")))));
    }

    if result.items.is_empty() {
        println!("{}", row(&themed(GRAY, &[], "No results")));
    }
    for entry in &result.items {
        println!("{}", section_mid(&format!("{}", entry.id)));
        print_item(&entry.item, entry.score);
    }

    if result.total_pages > 1 {
        println!("{}", section_mid("PAGE"));
        println!(
            "{}",
            row(&page_window(&result.window, result.page, result.total_pages))
        );
    }
    println!("{}", section_bot());
}

fn print_item(item: &ContentItem, score: Option<f64>) {
    let inner = BOX_WIDTH - 2;
    let title = themed(CYAN, &[BOLD], &truncate(item.title(), inner - 8));
    let line = match score {
        Some(score) => format!("{} {}", score_value(score), title),
        None => title,
    };
    println!("{}", row(&line));

    let meta: Vec<&str> = META_FIELDS
        .iter()
        .filter_map(|field| item.str(field))
        .filter(|v| !v.is_empty())
        .collect();
    if !meta.is_empty() {
        println!("{}", row(&themed(GRAY, &[], &truncate(&meta.join(" · "), inner))));
    }

    if let Some(description) = item.str("description") {
        let lines = wrap(description, inner);
        for (i, line) in lines.iter().take(2).enumerate() {
            let line = if i == 1 && lines.len() > 2 {
                truncate(&format!("{} …", line), inner)
            } else {
                line.clone()
            };
            println!("{}", row(&line));
        }
    }

    let link = item.str("link").or_else(|| item.str("profile"));
    if let Some(link) = link.filter(|l| !l.is_empty() && *l != "#") {
        println!("{}", row(&themed(BLUE, &[DIM], &truncate(link, inner))));
    }
}

fn print_facets(view: View, explorer: &Explorer) {
    println!("{}", section_top(&format!("{} FACETS", view.name().to_uppercase())));
    if explorer.facets().is_empty() {
        println!("{}", row(&themed(GRAY, &[], "This view has no facets")));
    }
    for (category, vocabulary) in explorer.registry().categories().iter().zip(explorer.facets()) {
        println!("{}", section_mid(&vocabulary.name));
        for value in &vocabulary.values {
            let count = explorer
                .collection()
                .iter()
                .filter(|item| category.values(item).contains(value))
                .count();
            println!("{}", row(&facet_value(&truncate(value, BOX_WIDTH - 12), count)));
        }
    }
    println!("{}", section_bot());
}
