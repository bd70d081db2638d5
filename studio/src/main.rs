use std::fs;

use anyhow::{Context, Result, ensure};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use abut_rs::io::import::Importer;
use studio::compositor::{compose, row_visuals};
use studio::config::StudioConfig;
use studio::corrections::InsetTable;
use studio::editor::{EditorLimits, EditorState};
use studio::export::export_document;
use studio::io;
use studio::io::cli::Cli;
use studio::io::output::CompositionOutput;
use studio::render::composition_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] no config file provided, use --config-file to provide a custom config");
            StudioConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] using config: {config:?}");

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!(
                "could not create output folder: {}",
                args.output_folder.display()
            )
        })?;
    }

    let (assets, read_failures) = io::read_shape_assets(&args.assets_folder, &config.shape_files);
    for (label, err) in &read_failures {
        warn!("[MAIN] skipping asset '{label}': {err:#}");
    }

    let importer = Importer::new(config.normalized_height, config.sampler);
    let (registry, import_failures) = importer.import_all(&assets);
    for (label, err) in &import_failures {
        warn!("[MAIN] could not import shape '{label}': {err:#}");
    }
    ensure!(!registry.is_empty(), "no shape could be imported");
    info!("[MAIN] imported {} shapes", registry.len());

    let locked: Vec<bool> = registry
        .iter()
        .map(|s| config.rotation_locked.iter().any(|l| *l == s.label))
        .collect();
    let limits = EditorLimits {
        scale_range: config.scale_range,
        rotate_sensitivity: config.rotate_sensitivity,
    };
    let mut state = EditorState::new(registry.len(), &locked, limits);
    // Start the first shape rotated so a square reads as a diamond
    if let Some(first) = state.shapes.first_mut()
        && !first.locked
    {
        first.rotation_deg = 45.0;
    }

    if let Some(seed) = args.randomize_seed {
        let mut rng = SmallRng::seed_from_u64(seed);
        state.randomize(&mut rng);
        info!("[MAIN] randomized composition with seed {seed}");
    }

    let corrections = InsetTable::new(config.corrections.clone());
    let composition = compose(&registry, &state, &corrections, &config.placement);
    state.set_centers(&composition);
    info!(
        "[MAIN] composed {} shapes, bounds {:.1} x {:.1}",
        composition.placed.len(),
        composition.width(),
        composition.height()
    );

    let output = CompositionOutput::new(&composition, &registry, &state, &config);
    io::write_json(&output, &args.output_folder.join("composition.json"))?;

    let visuals = row_visuals(&registry, &state);
    let glow: Vec<usize> = state.selected.into_iter().collect();
    let preview = composition_to_svg(&composition, &visuals, &glow, &config.render);
    io::write_svg(&preview, &args.output_folder.join("preview.svg"))?;

    let export = export_document(&composition, &visuals, &config.export, &config.render);
    io::write_svg(&export, &args.output_folder.join("export.svg"))?;

    Ok(())
}
