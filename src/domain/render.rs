// Pure render model: gauge state to drawing instructions
use super::gauge::EMPTY_SLICE_COLOR;

/// Fraction of the outer radius cut out of the ring's middle.
const CUTOUT_RATIO: f64 = 0.7;

/// The ring covers half a circle, opening downwards.
const RING_SWEEP_DEG: f64 = 180.0;

/// Where the filled slice starts: 270 degrees clockwise from 12 o'clock,
/// i.e. pointing left, so the ring fills left-to-right over the top.
const RING_START_DEG: f64 = 270.0;

/// Canvas dimensions and the ring placement derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub width: f64,
    pub height: f64,
}

impl RingGeometry {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    /// The half-circle sits on the bottom edge of the canvas.
    pub fn center_y(&self) -> f64 {
        self.height
    }

    pub fn outer_radius(&self) -> f64 {
        (self.width / 2.0).min(self.height)
    }

    pub fn inner_radius(&self) -> f64 {
        self.outer_radius() * CUTOUT_RATIO
    }

    /// Baseline for the centered value label, just above the bottom edge.
    pub fn label_y(&self) -> f64 {
        self.height / 1.1
    }
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::new(300.0, 150.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// One drawing instruction. Angles are degrees measured clockwise from
/// 12 o'clock; a slice spans `[start_deg, start_deg + sweep_deg]`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ArcSlice {
        center_x: f64,
        center_y: f64,
        outer_radius: f64,
        inner_radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        color: String,
    },
    Text {
        x: f64,
        y: f64,
        size_px: f64,
        weight: FontWeight,
        color: String,
        content: String,
    },
}

/// The two slices of the progress ring: filled first, then the neutral
/// remainder. Sweeps are proportional to the slice sizes over the half
/// circle. Zero-size slices emit no command.
pub fn ring_commands(
    filled: f64,
    empty: f64,
    fill_color: &str,
    geometry: RingGeometry,
) -> Vec<DrawCommand> {
    let span = filled + empty;
    if span <= 0.0 {
        return Vec::new();
    }

    let filled_sweep = RING_SWEEP_DEG * filled / span;
    let slice = |start_deg: f64, sweep_deg: f64, color: &str| DrawCommand::ArcSlice {
        center_x: geometry.center_x(),
        center_y: geometry.center_y(),
        outer_radius: geometry.outer_radius(),
        inner_radius: geometry.inner_radius(),
        start_deg,
        sweep_deg,
        color: color.to_string(),
    };

    let mut commands = Vec::with_capacity(2);
    if filled > 0.0 {
        commands.push(slice(RING_START_DEG, filled_sweep, fill_color));
    }
    if empty > 0.0 {
        commands.push(slice(
            RING_START_DEG + filled_sweep,
            RING_SWEEP_DEG - filled_sweep,
            EMPTY_SLICE_COLOR,
        ));
    }
    commands
}

/// Value and unit painted in the middle of the ring after the slices.
pub fn center_text(label: &str, unit: &str, geometry: RingGeometry) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Text {
        x: geometry.center_x(),
        y: geometry.label_y(),
        size_px: 32.0,
        weight: FontWeight::Bold,
        color: "#333".to_string(),
        content: label.to_string(),
    }];
    if !unit.is_empty() {
        commands.push(DrawCommand::Text {
            x: geometry.center_x(),
            y: geometry.label_y() + 25.0,
            size_px: 14.0,
            weight: FontWeight::Normal,
            color: "#666".to_string(),
            content: unit.to_string(),
        });
    }
    commands
}

/// Full instruction list for one gauge face.
pub fn gauge_commands(
    filled: f64,
    empty: f64,
    fill_color: &str,
    label: &str,
    unit: &str,
    geometry: RingGeometry,
) -> Vec<DrawCommand> {
    let mut commands = ring_commands(filled, empty, fill_color, geometry);
    commands.extend(center_text(label, unit, geometry));
    commands
}
