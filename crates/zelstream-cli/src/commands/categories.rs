use crate::output::Output;
use crate::render;
use catalog_models::Category;
use color_eyre::Result;
use serde_json::json;

pub fn run_categories(output: &Output) -> Result<()> {
    if output.is_human() {
        output.block(render::categories_table().to_string());
    } else {
        let categories: Vec<_> = Category::ALL
            .iter()
            .map(|c| json!({ "slug": c.slug(), "label": c.label() }))
            .collect();
        output.json(&json!({ "categories": categories }));
    }
    Ok(())
}
