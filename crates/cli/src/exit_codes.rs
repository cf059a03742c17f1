//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain     | Description                              |
//! |---------|------------|------------------------------------------|
//! | 0       | Universal  | Success                                  |
//! | 1       | Universal  | General error (unspecified)              |
//! | 2       | Universal  | CLI usage error (bad args, missing file) |
//! | 60-69   | reprice    | Repricing run codes                      |

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Reprice (60-69)
// =============================================================================

/// Config failed to parse or a policy value is out of range.
/// The pipeline never started.
pub const EXIT_REPRICE_INVALID_CONFIG: u8 = 60;

/// A catalog file could not be read or contains a malformed row.
pub const EXIT_REPRICE_INPUT: u8 = 61;

/// Pipeline or output failure after inputs were loaded.
pub const EXIT_REPRICE_RUNTIME: u8 = 62;

/// Map an engine error to its exit code.
pub fn reprice_exit_code(err: &shelfprice_reprice::RepriceError) -> u8 {
    use shelfprice_reprice::RepriceError as E;
    match err {
        E::ConfigParse(_) | E::ConfigValidation(_) => EXIT_REPRICE_INVALID_CONFIG,
        E::MissingColumn { .. }
        | E::PriceParse { .. }
        | E::WeightParse { .. }
        | E::EmptyName { .. }
        | E::Csv { .. } => EXIT_REPRICE_INPUT,
        E::NonFiniteAmount { .. } | E::AmountOutOfRange { .. } => EXIT_REPRICE_RUNTIME,
    }
}
