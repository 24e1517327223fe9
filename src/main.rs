// Main entry point - Dependency injection and poller startup
mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;
use std::time::Duration;

use crate::application::poller::{Poller, GAUGE_IDS};
use crate::application::registry::GaugeRegistry;
use crate::domain::render::RingGeometry;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_source::HttpSnapshotSource;
use crate::infrastructure::svg_surface::SvgSurface;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let settings = load_dashboard_config()?.dashboard;

    // Create the rendering surface (infrastructure layer)
    let surface = Arc::new(SvgSurface::new(
        &settings.output_dir,
        RingGeometry::default(),
        GAUGE_IDS,
    )?);

    // Create the snapshot source (infrastructure layer)
    let source = Arc::new(HttpSnapshotSource::new(
        settings.snapshot_url.clone(),
        Duration::from_millis(settings.request_timeout_ms),
    )?);

    // Wire up the registry and poller (application layer)
    let registry = GaugeRegistry::new(surface);
    let poller = Poller::new(
        source,
        registry,
        Duration::from_millis(settings.poll_interval_ms),
    );

    println!(
        "Starting medgas-dashboard, polling {} every {}ms",
        settings.snapshot_url, settings.poll_interval_ms
    );

    poller.run().await;

    Ok(())
}
