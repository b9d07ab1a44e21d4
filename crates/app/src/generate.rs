//! Generation pipeline: layouts + base image + form data -> rendered image

use std::path::PathBuf;

use anyhow::{Context, Result};
use image_core::{FontData, FormImage};
use template::{load_layout, FormData, FormRenderer, FormSide, Layout};

use crate::config::AppConfig;

/// Draw the form data onto both halves of the base image and save it
///
/// Returns the path of the saved image. Any failure (missing configuration
/// file, missing image or font, malformed coordinates, IO) aborts the whole
/// run; nothing is written in that case.
pub fn generate(config: &AppConfig, data: &FormData) -> Result<PathBuf> {
    tracing::info!("Generating form image");

    let mut layouts: Vec<(FormSide, Layout)> = Vec::with_capacity(2);
    for side in [FormSide::Left, FormSide::Right] {
        let (text_path, marks_path) = config.layout_paths(side);
        let layout = load_layout(&text_path, &marks_path)
            .with_context(|| format!("Failed to load the {side} layout"))?;
        layouts.push((side, layout));
    }

    let image_path = config.image_path();
    let mut form = FormImage::open(&image_path)
        .with_context(|| format!("Failed to open {}", image_path.display()))?;
    let (width, height) = form.dimensions();
    tracing::info!(width, height, "Opened {}", image_path.display());

    if layouts.iter().any(|(_, layout)| !layout.text.is_empty()) {
        let font_path = config.font_path();
        let font = FontData::from_file_with_index(&font_path, config.font_index)
            .with_context(|| format!("Failed to load font {}", font_path.display()))?;
        form.set_font(font);
    }

    for (side, layout) in &layouts {
        let stats = FormRenderer::new(layout)
            .with_style(config.style.clone())
            .render(&mut form, data)
            .with_context(|| format!("Failed to draw the {side} half"))?;
        tracing::info!(
            side = %side,
            texts = stats.texts,
            marks = stats.marks,
            "Drew form half"
        );
    }

    let output = config.output_path();
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    form.save(&output)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    tracing::info!("Saved {}", output.display());
    Ok(output)
}
