//! Result model and the client-side logic that consumes it: progressive
//! playback, visible-subgraph derivation, route roles and aggregates.

pub mod playback;
pub mod route;
pub mod scale;
pub mod scheduler;
pub mod stats;
mod types;
mod visible;

pub use playback::{PlaybackController, PlaybackFrame, PlaybackState, PlaybackStatus};
pub use route::{RouteOutcome, RouteStop, RouteSummary, StopRole};
pub use scheduler::{ManualScheduler, Scheduler, TimeoutScheduler};
pub use stats::SpreadStats;
pub use types::{Coordinates, PathResult, SpreadLink, SpreadNode, SpreadResult};
pub use visible::{VisibleSubgraph, visible};
