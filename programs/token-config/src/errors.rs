//! Token config errors.

use pinocchio::program_error::ProgramError;

pub use token_config_interface::TokenConfigError;

/// Balance-ledger error codes.
///
/// These are the SPL Token program's own custom codes. The program never
/// produces them itself: they reach the caller unchanged when a token CPI
/// fails. The in-memory ledger in `testing` raises the same codes so tests
/// observe exactly what the real ledger would report.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub enum LedgerError {
    /// Insufficient funds for the operation
    InsufficientFunds = 1,
    /// Account not associated with this mint
    MintMismatch = 3,
    /// Owner (or mint authority) does not match
    OwnerMismatch = 4,
    /// Account or mint already in use
    AlreadyInUse = 6,
    /// State is uninitialized
    UninitializedState = 9,
    /// Operation overflowed
    Overflow = 14,
}

impl From<LedgerError> for ProgramError {
    fn from(e: LedgerError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
