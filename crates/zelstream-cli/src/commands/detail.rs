use super::fetch_ui::FetchSpinner;
use super::prompts::prompt_select;
use crate::output::Output;
use crate::render;
use catalog_config::Config;
use catalog_core::{DetailLoader, DetailStatus};
use catalog_sources::{create_gateway, ContentGateway};
use color_eyre::Result;

pub async fn run_detail(config: &Config, path: &str, episode: Option<&str>, output: &Output) -> Result<()> {
    let gateway = create_gateway(config)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create catalog client: {}", e))?;

    let mut loader = DetailLoader::new();
    load_with_spinner(&mut loader, gateway.as_ref(), path, output).await;

    if loader.status() == DetailStatus::NotFound {
        if !output.is_human() {
            output.json(&render::detail_json(&loader));
        }
        return Err(color_eyre::eyre::eyre!("Content not found: {}", path));
    }

    if let Some(episode_id) = episode {
        loader
            .select_episode(episode_id)
            .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    }

    print_detail(&loader, output);
    Ok(())
}

/// Detail view opened from an interactive listing, with an episode switcher
pub async fn browse_detail(gateway: &dyn ContentGateway, path: &str, output: &Output) -> Result<()> {
    let mut loader = DetailLoader::new();
    load_with_spinner(&mut loader, gateway, path, output).await;

    if loader.status() == DetailStatus::NotFound {
        output.error("Content not found");
        return Ok(());
    }

    loop {
        output.block(render::detail_text(&loader));

        let episodes: Vec<(String, String)> = loader
            .record()
            .map(|r| {
                r.episodes()
                    .iter()
                    .map(|ep| (ep.id.clone(), format!("Episode {} - {}", ep.episode_number, ep.title)))
                    .collect()
            })
            .unwrap_or_default();
        if episodes.is_empty() {
            return Ok(());
        }

        let mut choices = vec!["Back".to_string()];
        choices.extend(episodes.iter().map(|(_, label)| label.clone()));
        let choice = prompt_select("Switch episode", &choices, 0)?;
        if choice == 0 {
            return Ok(());
        }
        loader
            .select_episode(&episodes[choice - 1].0)
            .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    }
}

async fn load_with_spinner(loader: &mut DetailLoader, gateway: &dyn ContentGateway, path: &str, output: &Output) {
    let spinner = FetchSpinner::start(format!("Loading {}...", path), output.is_quiet());
    loader.load(gateway, path).await;
    spinner.finish();
}

fn print_detail(loader: &DetailLoader, output: &Output) {
    if output.is_human() {
        output.block(render::detail_text(loader));
    } else {
        output.json(&render::detail_json(loader));
    }
}
