//! Exit code constants for the cadence CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing schedule, uninitialized library)
//! - 2: Configuration error (unreadable or invalid `cadence.yaml`)
//! - 3: Observance catalog error (catalog file exists but cannot be parsed)
//! - 4: Library I/O failure (reading or writing library artefacts)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid library state.
pub const USER_ERROR: i32 = 1;

/// Configuration file could not be read, parsed, or validated.
pub const CONFIG_ERROR: i32 = 2;

/// Observance catalog file could not be parsed.
pub const CATALOG_ERROR: i32 = 3;

/// Reading or writing files in the content library failed.
pub const LIBRARY_FAILURE: i32 = 4;
