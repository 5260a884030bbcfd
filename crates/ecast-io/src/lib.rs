//! # ecast-io: Dataset Loading & Export
//!
//! Gets historical energy series into the forecast engine and predictions
//! back out to files.
//!
//! ## Supported Formats
//!
//! | Format | Extension | Read | Write |
//! |--------|-----------|------|-------|
//! | CSV | `.csv` | yes | yes (frames) |
//! | JSON array | `.json` | yes | no |
//! | Parquet | `.parquet` | `parquet` feature | `parquet` feature |
//!
//! ## Quick Start
//!
//! ```rust
//! use ecast_core::SeriesSource;
//! use ecast_io::DatasetRegistry;
//!
//! let registry = DatasetRegistry::builtin().unwrap();
//! assert_eq!(registry.series("tunisia").unwrap().last_year(), 2025);
//! ```

pub mod frame;
pub mod records;
pub mod registry;

pub use frame::{frame_to_records, read_frame, records_to_frame, write_frame};
pub use records::{load_records, load_series, parse_csv_records, parse_json_records};
pub use registry::{BuiltinDataset, DatasetRegistry, BUILTIN_DATASETS};
