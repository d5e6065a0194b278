use super::fetch_ui::FetchSpinner;
use crate::output::Output;
use crate::render;
use catalog_config::Config;
use catalog_core::{ApplyOutcome, ListingController};
use catalog_models::Selector;
use catalog_sources::create_gateway;
use color_eyre::Result;
use serde_json::json;

pub async fn run_search(config: &Config, query: &str, output: &Output) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        output.warn("Empty search query, nothing to look up");
        return Ok(());
    }

    let gateway = create_gateway(config)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create catalog client: {}", e))?;

    let mut listing = ListingController::new();
    let spinner = FetchSpinner::start(format!("Searching for \"{}\"...", query), output.is_quiet());
    let outcome = listing.refresh(gateway.as_ref(), Selector::query(query)).await;
    spinner.finish();
    tracing::debug!("Search outcome: {:?}", outcome);

    let results = listing.items();
    if !output.is_human() {
        output.json(&json!({
            "query": query,
            "success": outcome != ApplyOutcome::Failed,
            "count": results.len(),
            "items": results,
        }));
        return Ok(());
    }

    output.block(render::section_heading("Search Results"));
    output.info(format!("Found {} results for \"{}\"", results.len(), query));
    if results.is_empty() {
        output.warn("No matches found. Try adjusting your keywords or browse the categories.");
    } else {
        output.block(render::listing_table(results, 0, results.len()).to_string());
    }

    Ok(())
}
