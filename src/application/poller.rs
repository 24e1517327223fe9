// Poller - timer-driven task feeding snapshots into the gauge registry
use crate::application::registry::GaugeRegistry;
use crate::application::snapshot_source::SnapshotSource;
use crate::domain::gauge::{ColorBand, GaugeScale};
use crate::domain::snapshot::Snapshot;
use std::sync::Arc;
use std::time::Duration;

pub const PRESSURE_GAUGE: &str = "pressure-gauge";
pub const DEW_GAUGE: &str = "dew-gauge";
pub const VACUO_GAUGE: &str = "vacuo-gauge";
pub const REDE_GAUGE: &str = "rede-gauge";

/// Target ids the rendering surface must provide before the first tick.
pub const GAUGE_IDS: [&str; 4] = [PRESSURE_GAUGE, DEW_GAUGE, VACUO_GAUGE, REDE_GAUGE];

const PRESSURE_SCALE: GaugeScale = GaugeScale::new(0.0, 12.0);
const PRESSURE_BANDS: [ColorBand; 3] = [
    ColorBand::new(0.0, 5.0, "#ff4444"),
    ColorBand::new(5.0, 7.0, "#ffaa00"),
    ColorBand::new(7.0, 12.0, "#00cc44"),
];

const DEW_SCALE: GaugeScale = GaugeScale::new(-100.0, 10.0);
const DEW_BANDS: [ColorBand; 3] = [
    ColorBand::new(-100.0, -45.0, "#00cc44"),
    ColorBand::new(-45.0, -10.0, "#ffaa00"),
    ColorBand::new(-10.0, 10.0, "#ff4444"),
];

const VACUO_SCALE: GaugeScale = GaugeScale::new(0.0, 760.0);
const VACUO_BANDS: [ColorBand; 3] = [
    ColorBand::new(0.0, 300.0, "#ff4444"),
    ColorBand::new(300.0, 500.0, "#ffaa00"),
    ColorBand::new(500.0, 760.0, "#00cc44"),
];

const REDE_SCALE: GaugeScale = GaugeScale::new(0.0, 12.0);
const REDE_BANDS: [ColorBand; 3] = [
    ColorBand::new(0.0, 5.0, "#ff4444"),
    ColorBand::new(5.0, 8.0, "#ffaa00"),
    ColorBand::new(8.0, 12.0, "#00cc44"),
];

/// Fetches a snapshot, pushes every present field into the registry, then
/// sleeps for the poll interval. Because the next fetch is scheduled only
/// after the previous one settles, at most one fetch is ever in flight.
pub struct Poller {
    source: Arc<dyn SnapshotSource>,
    registry: GaugeRegistry,
    interval: Duration,
}

impl Poller {
    pub fn new(source: Arc<dyn SnapshotSource>, registry: GaugeRegistry, interval: Duration) -> Self {
        Self {
            source,
            registry,
            interval,
        }
    }

    /// Run forever: an immediate first tick, then one tick per interval.
    pub async fn run(mut self) {
        loop {
            self.tick().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One poll cycle. A failed fetch skips the whole tick; the next one
    /// retries with no backoff.
    pub async fn tick(&mut self) {
        match self.source.fetch().await {
            Ok(snapshot) => self.apply(&snapshot),
            Err(e) => tracing::warn!("snapshot fetch failed, retrying next tick: {e:#}"),
        }
    }

    /// Forward each present field to its gauge. Vacuum readings arrive with
    /// a negative sign and are normalized via absolute value.
    pub fn apply(&mut self, snapshot: &Snapshot) {
        if snapshot.is_empty() {
            tracing::debug!(fetched_at = %snapshot.fetched_at, "snapshot carried no known fields");
            return;
        }
        tracing::debug!(fetched_at = %snapshot.fetched_at, "applying snapshot");

        if let Some(value) = snapshot.pressure {
            self.update_gauge(PRESSURE_GAUGE, value, PRESSURE_SCALE, &PRESSURE_BANDS);
        }
        if let Some(value) = snapshot.dew_point {
            self.update_gauge(DEW_GAUGE, value, DEW_SCALE, &DEW_BANDS);
        }
        if let Some(value) = snapshot.vacuo {
            self.update_gauge(VACUO_GAUGE, value.abs(), VACUO_SCALE, &VACUO_BANDS);
        }
        if let Some(value) = snapshot.rede {
            self.update_gauge(REDE_GAUGE, value, REDE_SCALE, &REDE_BANDS);
        }
        tracing::debug!(gauges = self.registry.len(), "snapshot applied");
    }

    fn update_gauge(&mut self, id: &str, value: f64, scale: GaugeScale, bands: &[ColorBand]) {
        if let Err(e) = self.registry.create_or_update(id, value, scale, "", bands) {
            tracing::warn!(gauge = id, "gauge update skipped: {e}");
        }
    }

    #[allow(dead_code)]
    pub fn registry(&self) -> &GaugeRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::render_surface::RenderSurface;
    use crate::domain::render::DrawCommand;

    struct PanelSurface;

    impl RenderSurface for PanelSurface {
        fn has_target(&self, id: &str) -> bool {
            GAUGE_IDS.contains(&id)
        }

        fn draw(&self, _id: &str, _commands: &[DrawCommand]) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct FixedSource(Snapshot);

    #[async_trait::async_trait]
    impl SnapshotSource for FixedSource {
        async fn fetch(&self) -> anyhow::Result<Snapshot> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl SnapshotSource for FailingSource {
        async fn fetch(&self) -> anyhow::Result<Snapshot> {
            anyhow::bail!("connection refused")
        }
    }

    fn poller(source: Arc<dyn SnapshotSource>) -> Poller {
        let registry = GaugeRegistry::new(Arc::new(PanelSurface));
        Poller::new(source, registry, Duration::from_millis(5000))
    }

    #[test]
    fn pressure_reading_lands_in_the_amber_band() {
        let snapshot = Snapshot {
            pressure: Some(6.0),
            ..Snapshot::default()
        };
        let mut poller = poller(Arc::new(FixedSource(snapshot.clone())));
        poller.apply(&snapshot);

        let chart = poller.registry().chart(PRESSURE_GAUGE).unwrap();
        assert_eq!(chart.filled, 6.0);
        assert_eq!(chart.empty, 6.0);
        assert_eq!(chart.fill_color, "#ffaa00");
        assert_eq!(chart.label, "6.0");
    }

    #[test]
    fn vacuum_sign_is_normalized_before_banding() {
        let snapshot = Snapshot {
            vacuo: Some(-400.0),
            ..Snapshot::default()
        };
        let mut poller = poller(Arc::new(FixedSource(snapshot.clone())));
        poller.apply(&snapshot);

        let chart = poller.registry().chart(VACUO_GAUGE).unwrap();
        assert_eq!(chart.filled, 400.0);
        assert_eq!(chart.fill_color, "#ffaa00");
        assert_eq!(chart.label, "400.0");
    }

    #[test]
    fn missing_fields_leave_their_gauges_untouched() {
        let first = Snapshot {
            pressure: Some(6.0),
            rede: Some(9.0),
            ..Snapshot::default()
        };
        let second = Snapshot {
            rede: Some(4.0),
            ..Snapshot::default()
        };
        let mut poller = poller(Arc::new(FixedSource(first.clone())));
        poller.apply(&first);
        poller.apply(&second);

        assert_eq!(poller.registry().chart(PRESSURE_GAUGE).unwrap().label, "6.0");
        assert_eq!(poller.registry().chart(REDE_GAUGE).unwrap().label, "4.0");
        assert!(poller.registry().chart(DEW_GAUGE).is_none());
    }

    #[test]
    fn dew_point_uses_its_inverted_band_order() {
        let snapshot = Snapshot {
            dew_point: Some(-60.0),
            ..Snapshot::default()
        };
        let mut poller = poller(Arc::new(FixedSource(snapshot.clone())));
        poller.apply(&snapshot);

        let chart = poller.registry().chart(DEW_GAUGE).unwrap();
        assert_eq!(chart.fill_color, "#00cc44");
        assert_eq!(chart.filled, 40.0);
    }

    #[tokio::test]
    async fn tick_applies_a_fetched_snapshot() {
        let snapshot = Snapshot {
            pressure: Some(8.0),
            ..Snapshot::default()
        };
        let mut poller = poller(Arc::new(FixedSource(snapshot)));
        poller.tick().await;
        assert_eq!(poller.registry().chart(PRESSURE_GAUGE).unwrap().label, "8.0");
    }

    #[tokio::test]
    async fn failed_fetch_skips_the_tick_without_touching_gauges() {
        let mut poller = poller(Arc::new(FailingSource));
        poller.tick().await;
        assert!(poller.registry().is_empty());
    }
}
