// Rendering surface seam between the registry and concrete backends
use crate::domain::render::DrawCommand;

/// Something gauge faces can be painted onto. The registry only ever asks
/// whether a target id exists and hands over finished draw commands, so
/// tests can substitute a recording fake.
pub trait RenderSurface: Send + Sync {
    /// Whether a drawing target with this id exists on the surface.
    fn has_target(&self, id: &str) -> bool;

    /// Materialize one gauge face, replacing whatever was shown before.
    fn draw(&self, id: &str, commands: &[DrawCommand]) -> anyhow::Result<()>;
}
