//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::AarlyClient;
use crate::config::Config;
use crate::schema::Category;

#[derive(Debug, Parser)]
#[command(name = "aarly-admin", version, about = "Admin tool for the Aarly funding directory")]
pub struct Cli {
    /// Override the API base URL from config/environment.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate an import template spreadsheet for a category
    Template {
        #[arg(value_enum)]
        category: Category,
        /// Output path (defaults to "{Category Label}_Template.xlsx")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Bulk-import records from an .xlsx/.xls spreadsheet
    Import {
        #[arg(value_enum)]
        category: Category,
        /// Spreadsheet to import (first sheet, first row treated as header)
        file: PathBuf,
    },
    /// Export existing records of a category to an .xlsx spreadsheet
    Export {
        #[arg(value_enum)]
        category: Category,
        /// Output path (defaults to "{Category Label}.xlsx")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List existing records of a category
    List {
        #[arg(value_enum)]
        category: Category,
    },
    /// Delete ALL records of a category (destructive, requires confirmation)
    Purge {
        #[arg(value_enum)]
        category: Category,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Dispatch a parsed command.
pub async fn run(cli: Cli) -> Result<()> {
    // Template generation is offline; everything else needs a client.
    if let Command::Template { category, output } = &cli.command {
        return commands::template::run(*category, output.as_deref());
    }

    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    let client = AarlyClient::new(&config.api_url, config.api_token.clone());

    match cli.command {
        Command::Template { .. } => unreachable!("handled above"),
        Command::Import { category, file } => commands::import::run(&client, category, &file).await,
        Command::Export { category, output } => {
            commands::export::run(&client, category, output.as_deref()).await
        }
        Command::List { category } => commands::list::run(&client, category).await,
        Command::Purge { category, yes } => commands::purge::run(&client, category, yes).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_categories_parse_from_route_segments() {
        let cli = Cli::parse_from(["aarly-admin", "import", "angel-investors", "sheet.xlsx"]);
        match cli.command {
            Command::Import { category, .. } => assert_eq!(category, Category::AngelInvestors),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_purge_yes_flag() {
        let cli = Cli::parse_from(["aarly-admin", "purge", "govt-grants", "--yes"]);
        match cli.command {
            Command::Purge { category, yes } => {
                assert_eq!(category, Category::GovtGrants);
                assert!(yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
