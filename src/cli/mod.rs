// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the geohub command-line interface.
//!
//! Four subcommands: `countries` for the home grid, `explore` for the
//! cross-country resource search, `list` for any country-scoped section, and
//! `facets` to see which filter values a view offers.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use geohub::catalogue::views::View;

#[derive(Parser)]
#[command(
    name = "geohub",
    about = "Search, filter and page through GEO Knowledge Hub country profiles",
    version
)]
pub struct Cli {
    /// Print the result view as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Replace the view's search, facet and paging setup with a JSON file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Query text and page, shared by every listing command.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Search text (prefix and typo tolerant); empty lists everything
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Page to show, 1-based (clamped to the available pages)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the countries with a profile
    Countries {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Search resources across every country
    Explore {
        #[command(flatten)]
        query: QueryArgs,

        /// Resource type, e.g. "Web Portal" (repeatable)
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<String>,

        /// Country title, e.g. "Ghana" (repeatable)
        #[arg(long, value_name = "COUNTRY")]
        country: Vec<String>,

        /// Challenge title, e.g. "Drought" (repeatable)
        #[arg(long, value_name = "CHALLENGE")]
        challenge: Vec<String>,

        /// Focus-area tag, e.g. "One Health" (repeatable)
        #[arg(long, value_name = "TAG")]
        tag: Vec<String>,
    },

    /// List one section of a country profile
    List {
        #[arg(value_enum)]
        view: View,

        /// Country id or title. Optional for challenges, which it narrows to
        /// those the country's resources address
        #[arg(long)]
        country: Option<String>,

        /// Focus-area id (challenges view)
        #[arg(long)]
        focus: Option<String>,

        /// Challenge id (resources view)
        #[arg(long)]
        challenge: Option<String>,

        /// Facet selection as NAME=VALUE (repeatable)
        #[arg(long = "facet", value_name = "NAME=VALUE", value_parser = parse_facet)]
        facets: Vec<(String, String)>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Show the facet values a view offers
    Facets {
        #[arg(value_enum, default_value_t = View::Explore)]
        view: View,

        /// Country id or title, for country-scoped views
        #[arg(long)]
        country: Option<String>,
    },
}

fn parse_facet(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() && !value.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}
