//! Centralized constants for report formatting and diagnostics.

/// Header printed before the per-file rows.
pub const REPORT_HEADER: &str = "\tfile\t\tsize before\t\tsize after";

/// Separator between the size-before and size-after columns of a row.
pub const SIZE_COLUMN_GAP: &str = "\t\t\t";

/// Diagnostic for a payload file with no content.
pub const EMPTY_SOURCE_MESSAGE: &str = "size of the file to copy cannot be 0";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
