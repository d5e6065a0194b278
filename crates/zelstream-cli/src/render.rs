use catalog_core::{DetailLoader, Playable};
use catalog_models::{Category, SummaryRecord};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use serde_json::{json, Value};

fn base_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(h)));
    table
}

/// Rows `start..start + len` of a listing; row numbers are 1-based list positions
pub fn listing_table(items: &[SummaryRecord], start: usize, len: usize) -> Table {
    let mut table = base_table(&["#", "Title", "Year", "Type", "Rating", "Genre", "Detail path"]);
    for (index, item) in items.iter().enumerate().skip(start).take(len) {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&item.title),
            Cell::new(&item.year),
            Cell::new(item.kind),
            Cell::new(&item.rating),
            Cell::new(&item.genre),
            Cell::new(&item.detail_path),
        ]);
    }
    table
}

pub fn hero_banner(hero: &SummaryRecord) -> String {
    format!(
        "{} {}\n{}  ★ {} · {} · {}",
        "NEW".on_red().white().bold(),
        "Trending Now".red().bold(),
        hero.title.bold(),
        hero.rating.yellow(),
        hero.year,
        hero.kind
    )
}

pub fn section_heading(label: &str) -> String {
    format!("{} {}", "▌".red(), label.bold())
}

pub fn categories_table() -> Table {
    let mut table = base_table(&["Slug", "Label"]);
    for category in Category::ALL {
        table.add_row(vec![category.slug(), category.label()]);
    }
    table
}

pub fn detail_text(loader: &DetailLoader) -> String {
    let Some(record) = loader.record() else {
        return "Content not found".to_string();
    };
    let summary = &record.summary;

    let mut text = format!(
        "{}\n{} · {} · ★ {} · {}\n\n{}\n",
        summary.title.bold(),
        summary.kind.to_string().to_uppercase(),
        summary.year,
        summary.rating,
        summary.genre,
        record.synopsis()
    );

    match loader.playable() {
        Playable::Direct(url) => text.push_str(&format!("\n▶ {}\n", url)),
        Playable::Episode(episode) => text.push_str(&format!(
            "\n▶ Episode {} - {}\n  {}\n",
            episode.episode_number, episode.title, episode.player_url
        )),
        Playable::NoStream => text.push_str("\nNo stream available\n"),
    }

    if !record.episodes().is_empty() {
        let mut table = base_table(&["", "No.", "Episode", "Id"]);
        for episode in record.episodes() {
            let marker = if loader.is_active(episode) { "▶" } else { "" };
            table.add_row(vec![
                marker,
                episode.episode_number.as_str(),
                episode.title.as_str(),
                episode.id.as_str(),
            ]);
        }
        text.push_str(&format!("\nEpisodes ({})\n{}\n", record.episodes().len(), table));
    }

    if !record.related().is_empty() {
        let related = record.related();
        text.push_str(&format!(
            "\nYou May Also Like\n{}\n",
            listing_table(related, 0, related.len())
        ));
    }

    text
}

pub fn detail_json(loader: &DetailLoader) -> Value {
    match loader.record() {
        Some(record) => json!({
            "status": loader.status(),
            "record": record,
            "active_episode": loader.active_episode(),
            "playback_url": loader.playable().url(),
        }),
        None => json!({
            "status": loader.status(),
            "detail_path": loader.detail_path(),
        }),
    }
}
