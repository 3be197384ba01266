use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tagflow_core::{Bounds, Proposal, Scene, VerticalAlignment};
use tagflow_layout::{FlowLayout, FlowLayoutResult};

#[derive(Parser)]
#[command(name = "tagflow-debug")]
#[command(about = "Lays out a flow scene and prints the packed rows and placements")]
struct Args {
    /// Path to the .json scene file
    scene_file: String,

    /// Proposed width. Overrides the value in the scene file.
    #[arg(long, conflicts_with = "unbounded")]
    width: Option<f32>,

    /// Lay out without a width limit
    #[arg(long)]
    unbounded: bool,

    /// Proposed height. Overrides the value in the scene file.
    #[arg(long)]
    height: Option<f32>,

    /// Vertical alignment (top, center, bottom, anchor)
    #[arg(long)]
    alignment: Option<VerticalAlignment>,

    /// Fixed gap between items in a row
    #[arg(long)]
    item_spacing: Option<f32>,

    /// Fixed gap between rows
    #[arg(long)]
    row_spacing: Option<f32>,

    /// Output format (tree, json)
    #[arg(long, default_value = "tree")]
    format: String,

    /// Save output to file instead of stdout
    #[arg(long)]
    output: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the layout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.debug { "debug" } else { "info" }));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    if !Path::new(&args.scene_file).exists() {
        anyhow::bail!("Scene file not found: {}", args.scene_file);
    }

    let mut scene = tagflow_core::load_scene(&args.scene_file)
        .context("Failed to load scene file")?;
    apply_overrides(&mut scene, &args)?;

    let items = scene.build_items();
    let layout = FlowLayout::new(scene.config).with_debug(args.debug);
    let proposal = scene.proposal();
    let result = layout.compute(&items, Bounds::default(), proposal);
    info!(
        "Laid out {} items in {} rows, size {}x{}",
        items.len(),
        result.rows.len(),
        result.size.x,
        result.size.y
    );

    let output_text = match args.format.as_str() {
        "tree" => generate_tree_output(&scene, &result),
        "json" => generate_json_output(&scene, &result)?,
        other => anyhow::bail!("Unknown format: {}. Use 'tree' or 'json'", other),
    };

    if let Some(output_file) = args.output {
        fs::write(&output_file, output_text)
            .with_context(|| format!("Failed to write to file: {}", output_file))?;
        info!("Output written to: {}", output_file);
    } else {
        print!("{}", output_text);
    }

    Ok(())
}

fn apply_overrides(scene: &mut Scene, args: &Args) -> Result<()> {
    if args.unbounded {
        scene.width = None;
    } else if let Some(width) = args.width {
        scene.width = Some(width);
    }
    if let Some(height) = args.height {
        scene.height = Some(height);
    }
    if let Some(alignment) = args.alignment {
        scene.config.alignment = alignment;
    }
    if let Some(spacing) = args.item_spacing {
        scene.config.item_spacing = Some(spacing);
    }
    if let Some(spacing) = args.row_spacing {
        scene.config.row_spacing = Some(spacing);
    }
    scene.validate().context("Invalid command line override")?;
    Ok(())
}

fn describe_width(proposal: Proposal) -> String {
    match proposal.width_limit() {
        Some(limit) => limit.to_string(),
        None => "unbounded".to_string(),
    }
}

fn generate_tree_output(scene: &Scene, result: &FlowLayoutResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Flow width:{} alignment:{} size:({},{})\n",
        describe_width(scene.proposal()),
        scene.config.alignment,
        result.size.x,
        result.size.y
    ));

    let row_count = result.rows.len();
    for (row_index, row) in result.rows.iter().enumerate() {
        let last_row = row_index + 1 == row_count;
        let (branch, indent) = if last_row { ("└── ", "    ") } else { ("├── ", "│   ") };

        output.push_str(&format!("{}Row {}", branch, row_index));
        if row.spacing > 0.0 {
            output.push_str(&format!(" gap:{}", row.spacing));
        }
        output.push_str(&format!(" size:({},{})\n", row.size.x, row.size.y));

        let item_count = row.items.len();
        for (position, entry) in row.items.iter().enumerate() {
            let item_branch = if position + 1 == item_count { "└── " } else { "├── " };
            // Placements are emitted in input order, so the index addresses them directly
            let placement = &result.placements[entry.index];
            output.push_str(&format!(
                "{}{}[{}] {} pos:({},{}) size:({},{})\n",
                indent,
                item_branch,
                entry.index,
                scene.items[entry.index].label(),
                placement.position.x,
                placement.position.y,
                placement.size.x,
                placement.size.y
            ));
        }
    }

    output
}

#[derive(Serialize)]
struct FlowReport {
    width: Option<f32>,
    alignment: &'static str,
    size: [f32; 2],
    rows: Vec<RowReport>,
}

#[derive(Serialize)]
struct RowReport {
    spacing: f32,
    size: [f32; 2],
    items: Vec<ItemReport>,
}

#[derive(Serialize)]
struct ItemReport {
    index: usize,
    label: String,
    spacing: f32,
    position: [f32; 2],
    size: [f32; 2],
}

fn pair(value: Vec2) -> [f32; 2] {
    value.to_array()
}

fn generate_json_output(scene: &Scene, result: &FlowLayoutResult) -> Result<String> {
    let rows = result
        .rows
        .iter()
        .map(|row| RowReport {
            spacing: row.spacing,
            size: pair(row.size),
            items: row
                .items
                .iter()
                .map(|entry| ItemReport {
                    index: entry.index,
                    label: scene.items[entry.index].label(),
                    spacing: entry.spacing,
                    position: pair(result.placements[entry.index].position),
                    size: pair(entry.size),
                })
                .collect(),
        })
        .collect();

    let report = FlowReport {
        width: scene.proposal().width_limit(),
        alignment: scene.config.alignment.as_str(),
        size: pair(result.size),
        rows,
    };

    let mut text = serde_json::to_string_pretty(&report).context("Failed to serialize layout")?;
    text.push('\n');
    Ok(text)
}
