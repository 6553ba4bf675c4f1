pub mod projector;
pub mod registry;

pub use projector::{
    CompetitorLabels, CompetitorReading, MetricsProjector, ProjectionSummary, read_snapshot,
};
pub use registry::{BowlMetrics, FULL_LABELS, GaugeFamily, TEAM_LABELS, render_registry};
