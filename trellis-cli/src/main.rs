//! Trellis CLI - headless layer inspector
//!
//! Loads a scene file or one of the built-in preview samples, builds its
//! layer tree and prints what the design view would show: the layers panel,
//! the viewport and the selection overlay.
//!
//! Usage:
//!   trellis                         Inspect the `app.swift` preview
//!   trellis scene.json              Inspect a scene file
//!   trellis --sample modal.swift    Inspect another built-in preview
//!   trellis ... --json              Print everything as JSON

mod report;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow, bail};
use clap::{ArgAction, Parser};
use trellis_common::warning::warn_once;
use trellis_dom::samples::{SAMPLE_FILES, sample_document};
use trellis_dom::{BlockLayout, DomTree, LayoutSnapshot, NodeId, Scene};
use trellis_inspector::{DevicePreset, Inspector, InspectorConfig, RebuildOutcome};

/// Trellis - inspect the layer tree of a design canvas
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Layers of the default preview
    trellis

    # Select the modal's close button at 150% zoom
    trellis --sample modal.swift --zoom 150 --select 0.0.2.0

    # Collapse a subtree and dump the state as JSON
    trellis scene.json --collapse 0 --json

    # Tweak the properties panel
    trellis --set padding=24 --set opacity=80
"#)]
struct Cli {
    /// Scene file (JSON) to inspect
    #[arg(value_name = "SCENE", conflicts_with = "sample")]
    scene: Option<PathBuf>,

    /// Built-in preview to inspect instead of a scene file
    #[arg(long, value_name = "FILE")]
    sample: Option<String>,

    /// List the built-in previews and exit
    #[arg(long)]
    list_samples: bool,

    /// Device frame: phone, tablet or desktop
    #[arg(long, default_value = "phone")]
    device: DevicePreset,

    /// Zoom percentage (clamped to 50-200)
    #[arg(long, default_value = "100")]
    zoom: u16,

    /// Select the layer at a dot-separated child-index path ("" = root)
    #[arg(long, value_name = "PATH")]
    select: Option<String>,

    /// Collapse the layer at PATH (repeatable)
    #[arg(long, value_name = "PATH")]
    collapse: Vec<String>,

    /// Set a properties panel field, e.g. border-radius=8 (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    assignments: Vec<String>,

    /// Hide the canvas grid
    #[arg(long)]
    no_grid: bool,

    /// Quiet period before a content change is rebuilt, in milliseconds
    #[arg(long, default_value = "100")]
    debounce_ms: u64,

    /// Layers panel indentation per level, in pixels
    #[arg(long, default_value = "12")]
    indent: f32,

    /// Maximum characters of text preview in a layer label
    #[arg(long, default_value = "20")]
    preview_chars: usize,

    /// Print the inspector state as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Content under inspection.
struct Content {
    key: String,
    dom: DomTree,
    root: NodeId,
    layout: LayoutSnapshot,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_samples {
        for file in SAMPLE_FILES {
            println!("{file}");
        }
        return Ok(());
    }

    let mut inspector = Inspector::new(InspectorConfig {
        rebuild_debounce: Duration::from_millis(cli.debounce_ms),
        indent_px: cli.indent,
        preview_chars: cli.preview_chars,
    });
    configure_canvas(&mut inspector, &cli)?;

    let size = inspector.viewport().canvas_size();
    let content = load_content(&cli, f32::from(size.width), f32::from(size.height))?;
    log::info!(
        "loaded '{}': {} nodes, {} measured",
        content.key,
        content.dom.len(),
        content.layout.len()
    );

    let start = Instant::now();
    let _ = inspector.set_content(&content.key, start);
    let settled = start + inspector.config().rebuild_debounce;
    match inspector.tick(settled, &content.dom, content.root) {
        RebuildOutcome::Rebuilt => {}
        RebuildOutcome::Failed(err) => {
            return Err(err).with_context(|| format!("cannot build layers for '{}'", content.key));
        }
        RebuildOutcome::Idle => bail!("layer rebuild did not run"),
    }

    for path in &cli.collapse {
        let id = inspector
            .resolve_path(path)
            .with_context(|| format!("cannot collapse '{path}'"))?;
        let _ = inspector.set_expanded(id, false);
    }
    if let Some(path) = &cli.select {
        let id = inspector
            .select_path(path)
            .with_context(|| format!("cannot select '{path}'"))?;
        log::debug!("selected {id} at '{path}'");
    }

    let screen = content.layout.project(0.0, 0.0, inspector.viewport().scale());
    let highlight = inspector.highlight(&screen);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report::json(&inspector, highlight))?);
    } else {
        report::print(&inspector, highlight);
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Apply device, zoom, grid and property flags.
fn configure_canvas(inspector: &mut Inspector, cli: &Cli) -> Result<()> {
    let viewport = inspector.viewport_mut();
    viewport.set_device_preset(cli.device);
    viewport.set_zoom(cli.zoom);
    if viewport.zoom_percent() != cli.zoom {
        warn_once(
            "viewport",
            &format!("zoom {}% is out of range, using {}%", cli.zoom, viewport.zoom_percent()),
        );
    }

    if cli.no_grid {
        inspector.toggle_grid();
    }

    for assignment in &cli.assignments {
        inspector
            .properties_mut()
            .apply(assignment)
            .with_context(|| format!("invalid --set '{assignment}'"))?;
    }
    Ok(())
}

/// Load the scene file or built-in preview named on the command line.
fn load_content(cli: &Cli, width: f32, height: f32) -> Result<Content> {
    if let Some(path) = &cli.scene {
        let loaded = Scene::from_path(path)
            .and_then(|scene| scene.load(width, height))
            .with_context(|| format!("cannot load scene '{}'", path.display()))?;
        return Ok(Content {
            key: path.display().to_string(),
            dom: loaded.dom,
            root: loaded.root,
            layout: loaded.layout,
        });
    }

    let key = cli.sample.as_deref().unwrap_or(SAMPLE_FILES[0]);
    let (dom, root) = sample_document(key).ok_or_else(|| {
        anyhow!(
            "no built-in preview for '{key}' (available: {})",
            SAMPLE_FILES.join(", ")
        )
    })?;
    let layout = BlockLayout::default().layout(&dom, root, width, height);
    Ok(Content {
        key: key.to_string(),
        dom,
        root,
        layout,
    })
}
