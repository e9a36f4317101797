//! CLI definitions for carquery.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use carquery_protocols::{QueryMode, QueryTarget, Selection};

/// carquery CLI.
#[derive(Parser)]
#[command(name = "carquery")]
#[command(about = "Pick a vehicle, ask the backend for its variants or on-road price")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.carquery/config.toml)
    #[arg(short, long, global = true, env = "CARQUERY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the options offered at every level for a selection path
    Options {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output format (table, json)
        #[arg(long, default_value = "table", value_parser = ["table", "json"])]
        format: String,
    },

    /// Build and print the query for a selection
    Query {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Send the query to the backend and show the response
    Ask {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        query: QueryArgs,

        /// Route the request through the background relay
        #[arg(long)]
        via_relay: bool,

        /// Print the full response instead of collapsing it
        #[arg(long)]
        expand: bool,
    },

    /// Split raw JSON into its highlighted value and the rest
    Format {
        /// JSON file to read (default: stdin)
        file: Option<PathBuf>,

        /// Key to highlight (default: display.highlight_key)
        #[arg(long)]
        key: Option<String>,

        /// Print the full response instead of collapsing it
        #[arg(long)]
        expand: bool,
    },

    /// Open a persistent result window through the relay
    Window,

    /// Check that the backend is up
    Health,
}

/// Selection flags shared by every command that takes a vehicle.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct SelectionArgs {
    /// Brand, e.g. TATA
    #[arg(long)]
    pub brand: Option<String>,

    /// Model, e.g. HARRIER
    #[arg(long)]
    pub model: Option<String>,

    /// Fuel type, e.g. DIESEL
    #[arg(long, alias = "fuel")]
    pub fuel_type: Option<String>,

    /// Transmission, e.g. MANUAL
    #[arg(long)]
    pub transmission: Option<String>,

    /// State for on-road pricing, e.g. DELHI
    #[arg(long)]
    pub state: Option<String>,
}

impl SelectionArgs {
    pub fn to_selection(&self) -> Selection {
        let mut selection = Selection::new();
        if let Some(v) = &self.brand {
            selection = selection.with_brand(v);
        }
        if let Some(v) = &self.model {
            selection = selection.with_model(v);
        }
        if let Some(v) = &self.fuel_type {
            selection = selection.with_fuel_type(v);
        }
        if let Some(v) = &self.transmission {
            selection = selection.with_transmission(v);
        }
        if let Some(v) = &self.state {
            selection = selection.with_state(v);
        }
        selection
    }
}

/// Query flags. Unset flags fall back to the `[query]` config section.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct QueryArgs {
    /// Query mode (strict, lenient)
    #[arg(long)]
    pub mode: Option<QueryMode>,

    /// What to ask for (on_road_price, variant)
    #[arg(long)]
    pub target: Option<QueryTarget>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ask() {
        let cli = Cli::parse_from([
            "carquery", "ask", "--brand", "TATA", "--model", "HARRIER", "--fuel", "DIESEL",
            "--mode", "strict", "--target", "variant", "--via-relay",
        ]);
        match cli.command {
            Commands::Ask {
                selection,
                query,
                via_relay,
                expand,
            } => {
                assert_eq!(selection.fuel_type.as_deref(), Some("DIESEL"));
                assert_eq!(query.mode, Some(QueryMode::Strict));
                assert_eq!(query.target, Some(QueryTarget::Variant));
                assert!(via_relay);
                assert!(!expand);
            }
            _ => panic!("Expected ask"),
        }
    }

    #[test]
    fn test_selection_args_to_selection() {
        let args = SelectionArgs {
            brand: Some("TATA".to_string()),
            state: Some("DELHI".to_string()),
            ..Default::default()
        };
        let selection = args.to_selection();
        assert_eq!(selection.brand(), Some("TATA"));
        assert_eq!(selection.model(), None);
        assert_eq!(selection.state(), Some("DELHI"));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["carquery", "options", "--format", "xml"]).is_err());
    }
}
