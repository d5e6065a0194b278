use super::detail::browse_detail;
use super::fetch_ui::{is_interactive, FetchSpinner};
use super::prompts::{prompt_number_in_range, prompt_select};
use crate::output::Output;
use crate::render;
use catalog_config::Config;
use catalog_core::{ApplyOutcome, HomeFeed, LoadTrigger, ViewportSample};
use catalog_models::Category;
use catalog_sources::{create_gateway, ContentGateway};
use color_eyre::Result;
use serde_json::json;
use std::time::{Duration, Instant};

pub async fn run_browse(config: &Config, category: Category, pages: u32, output: &Output) -> Result<()> {
    let gateway = create_gateway(config)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create catalog client: {}", e))?;

    let mut home = HomeFeed::new(config.listing.hero_size);
    let spinner = FetchSpinner::start(format!("Loading {}...", category.label()), output.is_quiet());
    home.open(gateway.as_ref(), category).await;
    for _ in 1..pages.max(1) {
        if home.load_more(gateway.as_ref()).await.is_none() {
            break;
        }
    }
    spinner.finish();

    if !output.is_human() {
        let state = home.listing().state();
        output.json(&json!({
            "category": category.slug(),
            "label": category.label(),
            "hero": home.hero_strip(),
            "page": state.page,
            "has_more": state.has_more,
            "count": state.items.len(),
            "items": state.items,
        }));
        return Ok(());
    }

    if let Some(hero) = home.hero() {
        output.block(render::hero_banner(hero));
        output.block("");
    }
    output.block(render::section_heading(category.label()));

    let items = home.listing().items();
    if items.is_empty() {
        output.warn("Nothing to show for this category right now");
    } else {
        output.block(render::listing_table(items, 0, items.len()).to_string());
    }
    print_footer(&home, output);
    Ok(())
}

/// Scrollable listing. Each screen is one viewport sample; when the end of the
/// list comes into view the next page is fetched before the screen is drawn.
pub async fn run_interactive(config: &Config, category: Category, rows: usize, output: &Output) -> Result<()> {
    if !is_interactive() {
        return Err(color_eyre::eyre::eyre!("--interactive needs a terminal; use --pages instead"));
    }

    let gateway = create_gateway(config)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create catalog client: {}", e))?;
    let rows = rows.max(1);

    let mut home = HomeFeed::new(config.listing.hero_size);
    let mut trigger = LoadTrigger::new(
        config.listing.trigger_margin_rows,
        Duration::from_millis(config.listing.debounce_ms),
    );
    let mut offset = 0usize;

    let spinner = FetchSpinner::start(format!("Loading {}...", category.label()), output.is_quiet());
    home.open(gateway.as_ref(), category).await;
    spinner.finish();

    if let Some(hero) = home.hero() {
        output.block(render::hero_banner(hero));
    }

    const ACTIONS: [&str; 5] = ["Scroll down", "Scroll up", "Switch category", "Open title", "Quit"];

    loop {
        maybe_load_next(&mut home, &mut trigger, gateway.as_ref(), offset, rows, output).await;

        let label = home.category().map(|c| c.label()).unwrap_or_default();
        let items = home.listing().items();
        output.block("");
        output.block(render::section_heading(label));
        if items.is_empty() {
            output.warn("Nothing to show for this category right now");
        } else {
            output.block(render::listing_table(items, offset, rows).to_string());
        }
        print_footer(&home, output);

        let len = items.len();
        match prompt_select("Action", &ACTIONS, 0)? {
            0 => offset = (offset + rows).min(len),
            1 => offset = offset.saturating_sub(rows),
            2 => {
                let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
                let current = home
                    .category()
                    .and_then(|c| Category::ALL.iter().position(|other| *other == c))
                    .unwrap_or(0);
                let picked = Category::ALL[prompt_select("Category", &labels, current)?];
                let spinner = FetchSpinner::start(format!("Loading {}...", picked.label()), output.is_quiet());
                home.select_category(gateway.as_ref(), picked).await;
                spinner.finish();
                offset = 0;
            }
            3 => {
                if len == 0 {
                    output.warn("No titles to open");
                    continue;
                }
                let row = prompt_number_in_range("Row number", 1, len)?;
                let path = home.listing().items()[row - 1].detail_path.clone();
                browse_detail(gateway.as_ref(), &path, output).await?;
            }
            _ => return Ok(()),
        }
    }
}

/// Sample the viewport and fetch pages until the sentinel is out of view or
/// the listing is exhausted. A short page on a tall screen leaves the sentinel
/// visible, so the screen is re-sampled after every append.
async fn maybe_load_next(
    home: &mut HomeFeed,
    trigger: &mut LoadTrigger,
    gateway: &dyn ContentGateway,
    offset: usize,
    rows: usize,
    output: &Output,
) {
    loop {
        let listing = home.listing();
        let sample = ViewportSample::new(offset, rows, listing.items().len());
        let mut fired = trigger.observe(sample, listing.generation(), Instant::now());
        if !fired {
            if let Some(deadline) = trigger.pending_deadline() {
                tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
                fired = trigger.flush(Instant::now());
            }
        }
        if !fired || !listing.has_more() {
            return;
        }

        let next_page = listing.page() + 1;
        let spinner = FetchSpinner::start(format!("Loading page {}...", next_page), output.is_quiet());
        let outcome = home.load_more(gateway).await;
        spinner.finish();
        tracing::debug!("Incremental load of page {}: {:?}", next_page, outcome);

        if !matches!(outcome, Some(ApplyOutcome::Applied { added }) if added > 0) {
            return;
        }
    }
}

fn print_footer(home: &HomeFeed, output: &Output) {
    let listing = home.listing();
    if listing.has_more() {
        output.info(format!(
            "{} titles loaded (page {}), more available",
            listing.items().len(),
            listing.page()
        ));
    } else if !listing.items().is_empty() {
        output.info(format!("{} titles, end of list", listing.items().len()));
    }
}
