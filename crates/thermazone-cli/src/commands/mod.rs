//! Command implementations.

mod export;
mod rooms;
mod stats;
mod zones;

pub use export::cmd_export;
pub use rooms::cmd_rooms;
pub use stats::{StatsArgs, cmd_stats};
pub use zones::cmd_zones;
