//! Offline subcommand handlers: options, query, format.

use std::io::Read;
use std::path::Path;

use serde_json::json;
use tracing::debug;

use carquery_core::{CascadeController, CascadeLevels, Rendered, ResultView};
use carquery_protocols::{Selection, SelectionField};

use crate::cli::{QueryArgs, SelectionArgs};
use crate::context::Context;

/// Print the option set of every level along a selection path.
///
/// Values the catalog does not know show up as disabled, empty levels
/// below them rather than as an error.
pub(crate) fn handle_options(
    ctx: &Context,
    selection: &SelectionArgs,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let selection = selection.to_selection();
    let levels = CascadeController::new(ctx.catalog.clone()).levels(&selection);

    match format {
        "json" => {
            let options = json!({
                "brands": levels.brands,
                "models": levels.models,
                "fuel_types": levels.fuel_types,
                "transmissions": levels.transmissions,
                "states": levels.states,
                "selection": selection,
            });
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
        _ => print!("{}", options_table(&levels, &selection)),
    }
    Ok(())
}

fn options_table(levels: &CascadeLevels, selection: &Selection) -> String {
    let mut out = format!("{:<14} {:<9} {:<14} {}\n", "LEVEL", "ENABLED", "SELECTED", "OPTIONS");
    out.push_str(&"-".repeat(72));
    out.push('\n');
    for field in SelectionField::ALL {
        let set = levels.get(field);
        out.push_str(&format!(
            "{:<14} {:<9} {:<14} {}\n",
            field.label(),
            if set.enabled { "yes" } else { "no" },
            selection.get(field).unwrap_or("-"),
            set.options.join(", ")
        ));
    }
    out
}

/// Build the query for a selection and print it.
pub(crate) fn handle_query(
    ctx: &Context,
    selection: &SelectionArgs,
    query: &QueryArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = ctx.session();
    session.apply(&selection.to_selection())?;
    let query = session.query(&ctx.query_builder(query))?;
    println!("Query: {}", query);
    Ok(())
}

/// Partition raw JSON from a file or stdin.
pub(crate) fn handle_format(
    ctx: &Context,
    file: Option<&Path>,
    key: Option<&str>,
    expand: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = match file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut raw = Vec::new();
            std::io::stdin().read_to_end(&mut raw)?;
            raw
        }
    };
    let key = key.unwrap_or(&ctx.config.display.highlight_key);
    debug!("Formatting {} bytes with highlight key {:?}", raw.len(), key);

    let mut view = ResultView::new();
    let rendered = view.render_raw(&raw, key)?;
    print!(
        "{}",
        render_text(rendered, expand || ctx.config.display.expand_remainder)
    );
    Ok(())
}

/// Text for a rendered response: the highlighted value, then the remainder.
///
/// A collapsed remainder is reduced to its line count.
pub(crate) fn render_text(rendered: &Rendered, expand: bool) -> String {
    let mut out = String::new();
    if let Some(highlighted) = &rendered.highlighted {
        out.push_str(highlighted);
        out.push_str("\n\n");
    }
    if expand {
        out.push_str("Full response:\n");
        out.push_str(&rendered.remainder);
        out.push('\n');
    } else {
        out.push_str(&format!(
            "Full response: {} lines (use --expand to show)\n",
            rendered.remainder.lines().count()
        ));
    }
    out
}
