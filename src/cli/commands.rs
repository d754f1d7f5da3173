pub mod health;
pub mod snapshot;

pub use health::health;
pub use snapshot::{run_snapshot, snapshot};
