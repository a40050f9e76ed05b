/// timestat library crate: time string conversion and list statistics.
///
/// The binary in `main.rs` is a thin CLI over these modules; `tests/`
/// integration tests use them via `use timestat::*`.
pub mod error;
pub mod hms;
pub mod stats;

pub use error::TimestatError;
pub use hms::{to_hms, to_seconds};
pub use stats::{parse_list, stat, summarize, Summary};
