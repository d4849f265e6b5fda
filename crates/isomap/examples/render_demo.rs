//! Run one sync cycle on a synthetic snapshot and print what was drawn.
//!
//! Usage:
//!   cargo run -p isomap --example render_demo -- [groups] [components]

use isomap::surface::MapSurface;
use isomap::synth::{synth_snapshot, ReplayToken, SynthCfg};
use isomap::{GeoPoint, MapSync, RenderCfg};

fn main() {
    let mut args = std::env::args().skip(1);
    let groups = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);
    let components = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let cfg = SynthCfg {
        groups,
        components,
        ..SynthCfg::default()
    };
    let snap = synth_snapshot(GeoPoint::new(48.137, 11.575), cfg, ReplayToken::new(2025));

    let mut ms = MapSync::new(MapSurface::default(), RenderCfg::default());
    let report = ms.on_snapshot_changed(&snap);

    for (i, color) in report.colors.iter().enumerate() {
        let n = ms.isochrones().iter().filter(|p| p.group == i).count();
        println!("group {i}: {color} ({n} polygon(s))");
    }
    let vp = ms.viewport().viewport();
    let c = vp.center_point();
    println!("viewport: center=({:.4}, {:.4}) zoom={}", c.lat, c.lng, vp.zoom());
}
