//! Read-only board snapshot: dimensions, occupancy, threat annotations and the
//! loose item, plus the [`BoardView`] oracle the search engine consumes.

mod builder;
mod dimensions;
mod error;
mod snapshot;
mod view;

pub use builder::BoardBuilder;
pub use dimensions::BoardDimensions;
pub use error::SnapshotError;
pub use snapshot::BoardSnapshot;
pub use view::{BoardView, Occupancy};
