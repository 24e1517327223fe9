// Domain layer - Gauge model, snapshots and the pure render model
pub mod gauge;
pub mod render;
pub mod snapshot;
