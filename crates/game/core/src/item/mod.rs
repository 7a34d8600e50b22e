//! Item records and their acquisition sources.
mod record;
mod sources;

pub use record::{ItemRecord, ItemRecordBuilder, ItemStats};
pub use sources::{ItemSources, NeutralDrop, NeutralDropRate};
