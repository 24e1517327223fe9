// Gauge registry - create-or-update semantics over a rendering surface
use crate::application::render_surface::RenderSurface;
use crate::domain::gauge::{color_for, value_label, ColorBand, GaugeScale};
use crate::domain::render::{gauge_commands, RingGeometry};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no rendering target for gauge '{0}'")]
    MissingTarget(String),
    #[error("invalid value for gauge '{id}': {value}")]
    NonNumericValue { id: String, value: f64 },
    #[error("invalid scale for gauge '{id}': [{min}, {max}]")]
    InvalidScale { id: String, min: f64, max: f64 },
    #[error(transparent)]
    Surface(#[from] anyhow::Error),
}

/// Live state of one gauge face. Created lazily on the first snapshot
/// carrying its field and mutated in place from then on, never destroyed.
#[derive(Debug, Clone)]
pub struct GaugeChart {
    pub scale: GaugeScale,
    pub unit: String,
    pub filled: f64,
    pub empty: f64,
    pub fill_color: &'static str,
    pub label: String,
}

/// Owns the id-to-chart map and the surface the charts are painted onto.
/// Updating an existing id keeps the cached chart's identity so the face
/// is redrawn, not recreated.
pub struct GaugeRegistry {
    surface: Arc<dyn RenderSurface>,
    geometry: RingGeometry,
    charts: HashMap<String, GaugeChart>,
}

impl GaugeRegistry {
    pub fn new(surface: Arc<dyn RenderSurface>) -> Self {
        Self::with_geometry(surface, RingGeometry::default())
    }

    pub fn with_geometry(surface: Arc<dyn RenderSurface>, geometry: RingGeometry) -> Self {
        Self {
            surface,
            geometry,
            charts: HashMap::new(),
        }
    }

    /// Push one reading into the gauge identified by `id`. Validation
    /// failures leave the previous face untouched. The band lookup and the
    /// label use the raw value; only the slice sizes are clamped.
    pub fn create_or_update(
        &mut self,
        id: &str,
        value: f64,
        scale: GaugeScale,
        unit: &str,
        bands: &[ColorBand],
    ) -> Result<(), RegistryError> {
        if !self.surface.has_target(id) {
            return Err(RegistryError::MissingTarget(id.to_string()));
        }
        if !value.is_finite() {
            return Err(RegistryError::NonNumericValue {
                id: id.to_string(),
                value,
            });
        }
        if !scale.is_valid() {
            return Err(RegistryError::InvalidScale {
                id: id.to_string(),
                min: scale.min,
                max: scale.max,
            });
        }

        let (filled, empty) = scale.slices(value);
        let fill_color = color_for(value, bands);
        let label = value_label(value);

        match self.charts.get_mut(id) {
            Some(chart) => {
                chart.scale = scale;
                chart.filled = filled;
                chart.empty = empty;
                chart.fill_color = fill_color;
                chart.label = label;
            }
            None => {
                self.charts.insert(
                    id.to_string(),
                    GaugeChart {
                        scale,
                        unit: unit.to_string(),
                        filled,
                        empty,
                        fill_color,
                        label,
                    },
                );
            }
        }

        let chart = &self.charts[id];
        let commands = gauge_commands(
            chart.filled,
            chart.empty,
            chart.fill_color,
            &chart.label,
            &chart.unit,
            self.geometry,
        );
        self.surface.draw(id, &commands)?;
        tracing::debug!(
            gauge = id,
            value,
            span = chart.scale.span(),
            color = chart.fill_color,
            "gauge drawn"
        );
        Ok(())
    }

    #[allow(dead_code)]
    pub fn chart(&self, id: &str) -> Option<&GaugeChart> {
        self.charts.get(id)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
