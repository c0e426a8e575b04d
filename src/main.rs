//! Headless demo: a scripted click-through of the map engine.
//!
//! Runs the full pipeline — input events, zoom state, animation, panel
//! presentation — against the in-memory surfaces, logging the rendered
//! viewport attribute as frames go by. Run with
//! `cargo run --features binary`.

use std::thread;

use mappa::catalog::{CatalogEntry, RegionCatalog, RegionId};
use mappa::engine::MapEngine;
use mappa::geometry::{RegionBounds, Viewport};
use mappa::input::{ClickTarget, InputEvent};
use mappa::options::Options;
use mappa::surface::{MemoryPanel, MemorySurface, StaticGeometry};
use mappa::util::frame_timing::FrameTiming;
use web_time::Instant;

fn demo_catalog() -> RegionCatalog {
    let mut catalog = RegionCatalog::new();
    catalog.insert(
        RegionId::new("fr"),
        CatalogEntry {
            name: "France".to_owned(),
            description: "France is celebrated for its culture, cuisine, \
                          and history."
                .to_owned(),
            image: Some("flags/flag_fr.png".to_owned()),
        },
    );
    catalog.insert(
        RegionId::new("jp"),
        CatalogEntry {
            name: "Japan".to_owned(),
            description: "Japan blends tradition with technology.".to_owned(),
            image: Some("flags/flag_jp.png".to_owned()),
        },
    );
    catalog
}

fn demo_geometry() -> StaticGeometry {
    let mut geometry = StaticGeometry::new();
    geometry.insert(
        RegionId::new("fr"),
        RegionBounds::new(450.0, 130.0, 55.0, 60.0),
    );
    geometry.insert(
        RegionId::new("jp"),
        RegionBounds::new(845.0, 210.0, 45.0, 90.0),
    );
    geometry
}

fn click(
    engine: &mut MapEngine<MemorySurface, MemoryPanel, StaticGeometry>,
    target: &ClickTarget,
) {
    let _ = engine.handle_input(InputEvent::PointerDown {
        target: target.clone(),
    });
    let _ = engine.handle_input(InputEvent::PointerUp {
        target: target.clone(),
    });
}

fn run_to_completion(
    engine: &mut MapEngine<MemorySurface, MemoryPanel, StaticGeometry>,
    timing: &mut FrameTiming,
) {
    let mut frames = 0u32;
    while engine.tick(Instant::now()) {
        frames += 1;
        if frames % 10 == 0 {
            log::info!(
                "frame {frames}: viewBox = {}",
                engine.map_surface().view_box()
            );
        }
        timing.end_frame();
        thread::sleep(timing.frame_budget());
    }
    log::info!(
        "settled after {frames} frames at viewBox = {} ({:.0} fps)",
        engine.map_surface().view_box(),
        timing.fps()
    );
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut engine = MapEngine::new(
        Viewport::new(0.0, 0.0, 1000.0, 600.0),
        Options::default(),
        demo_catalog(),
        demo_geometry(),
        MemorySurface::new(),
        MemoryPanel::new(),
    );
    engine.initialize();

    let mut timing = FrameTiming::new(60);

    log::info!("clicking France");
    click(&mut engine, &ClickTarget::Region(RegionId::new("fr")));
    run_to_completion(&mut engine, &mut timing);
    log::info!("panel: {}", engine.panel_surface().markup());

    log::info!("clicking Japan while focused (direct retarget)");
    click(&mut engine, &ClickTarget::Region(RegionId::new("jp")));
    run_to_completion(&mut engine, &mut timing);
    log::info!("panel: {}", engine.panel_surface().markup());

    log::info!("clicking the background to zoom out");
    click(&mut engine, &ClickTarget::Background);
    run_to_completion(&mut engine, &mut timing);
}
