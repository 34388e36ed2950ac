//! Measurement ingestion and memoized loading for thermazone.
//!
//! This crate reads the raw measurement CSV (`Name,time,temperature`) into
//! [`RawMeasurement`](thermazone_types::RawMeasurement) batches and provides
//! an explicit memoization layer over file loading.
//!
//! # Features
//!
//! - Forgiving row-level parsing: malformed rows are skipped and counted,
//!   never aborting the batch
//! - Explicit load outcome separating good rows from the skip count
//! - Fingerprint-keyed caching with explicit invalidation
//!
//! # Example
//!
//! ```no_run
//! use thermazone_store::CachedLoader;
//!
//! let mut loader = CachedLoader::new("measurements.csv");
//! let batch = loader.load()?;
//! println!("{} rows ({} skipped)", batch.measurements.len(), batch.skipped);
//! # Ok::<(), thermazone_store::Error>(())
//! ```

mod cache;
mod error;
mod ingest;

pub use cache::CachedLoader;
pub use error::{Error, Result};
pub use ingest::{LoadOutcome, load_csv, read_measurements};
