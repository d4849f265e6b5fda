use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use isomap::color::Interpolation;
use isomap::surface::MapSurface;
use isomap::synth::{synth_snapshot, ReplayToken, SynthCfg};
use isomap::{Config, GeoPoint, MapSync, Snapshot, SyncReport};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "isomap")]
#[command(about = "Headless host: sync isochrone snapshots into map layers")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run one sync cycle on a snapshot and write the layer content as JSON
    Render {
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Partial JSON config (render + map options)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the fill colors used for N isochrone groups
    Gradient {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value = "oklab")]
        mode: Interpolation,
    },
    /// Write a deterministic synthetic snapshot
    Synth {
        #[arg(long, default_value_t = 4)]
        groups: usize,
        #[arg(long, default_value_t = 1)]
        components: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 48.137, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, default_value_t = 11.575, allow_hyphen_values = true)]
        lng: f64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Render {
            snapshot,
            out,
            config,
        } => render(&snapshot, &out, config.as_deref()).map(|_| ()),
        Action::Gradient { n, mode } => {
            for c in gradient(n, mode) {
                println!("{c}");
            }
            Ok(())
        }
        Action::Synth {
            groups,
            components,
            seed,
            lat,
            lng,
            out,
        } => synth(groups, components, seed, GeoPoint::new(lat, lng), &out),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let bytes = std::fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing config {}", path.display()))
}

fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading snapshot {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing snapshot {}", path.display()))
}

fn write_json(path: &Path, value: &impl serde::Serialize) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn report_json(r: &SyncReport) -> Value {
    json!({
        "center": r.center,
        "colors": r.colors,
        "polygons": r.polygons,
        "isochrones_empty": r.isochrones_empty,
        "fitted": r.fitted,
        "skipped": r.skipped.iter().map(|s| json!({
            "group": s.group,
            "component": s.component,
            "error": s.error.to_string(),
        })).collect::<Vec<_>>(),
    })
}

/// Mount a surface, sync once, write `{meta, markers, isochrones, viewport, visible, report}`.
fn render(snapshot: &Path, out: &Path, config: Option<&Path>) -> Result<Value> {
    tracing::info!(snapshot = %snapshot.display(), out = %out.display(), config = ?config, "render");
    let cfg = load_config(config)?;
    let snap = load_snapshot(snapshot)?;

    let mut ms = MapSync::new(MapSurface::mount(cfg.map), cfg.render);
    let report = ms.on_snapshot_changed(&snap);

    let viewport = ms.viewport().viewport();
    let doc = json!({
        "meta": {
            "version": isomap::VERSION,
            "snapshot": snapshot.to_string_lossy(),
            "config": config.map(|p| p.to_string_lossy().into_owned()),
        },
        "markers": ms.markers(),
        "isochrones": ms.isochrones(),
        "viewport": viewport,
        "visible": viewport.visible_bounds(),
        "report": report_json(&report),
    });
    write_json(out, &doc)?;
    Ok(doc)
}

fn gradient(n: usize, mode: Interpolation) -> Vec<isomap::color::Color> {
    tracing::info!(n, mode = ?mode, "gradient");
    isomap::color::ColorScale::default().with_mode(mode).colors(n)
}

fn synth(groups: usize, components: usize, seed: u64, center: GeoPoint, out: &Path) -> Result<()> {
    tracing::info!(groups, components, seed, lat = center.lat, lng = center.lng, out = %out.display(), "synth");
    let cfg = SynthCfg {
        groups,
        components,
        ..SynthCfg::default()
    };
    let snap = synth_snapshot(center, cfg, ReplayToken::new(seed));
    write_json(out, &snap)
}
