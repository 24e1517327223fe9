// Application layer - Registry, poller and the seams they depend on
pub mod poller;
pub mod registry;
pub mod render_surface;
pub mod snapshot_source;
