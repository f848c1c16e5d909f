//! Process-level run ID for tracing matching computations.
//!
//! Every ranking and auto-assignment computed in one process shares the
//! same ULID, so a whole campaign can be followed through the logs even
//! when several campaigns run on the same day.
//!
//! ```
//! use sh_matching::run_id;
//!
//! let id = run_id::current();
//! assert_eq!(id, run_id::current());
//! ```

use once_cell::sync::Lazy;
use ulid::Ulid;

static RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// The process-level run ID, generated at first access. ULIDs are
/// 26 characters and sort lexicographically by creation time.
#[inline]
pub fn current() -> &'static str {
    &RUN_ID
}

/// A fresh ULID, for sub-operations that need their own identity
/// (per-request ids, batch chunks).
#[inline]
pub fn fresh() -> String {
    Ulid::new().to_string()
}
