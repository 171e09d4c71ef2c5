//! Program ID constants.

/// Token config program ID as a base58 string.
///
/// Used by off-chain code that works with its own `Pubkey` type.
pub const TOKEN_CONFIG_PROGRAM_ID: &str = "Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS";

/// SPL Token program ID.
pub const SPL_TOKEN_PROGRAM_ID: pinocchio::pubkey::Pubkey =
    pinocchio_pubkey::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// System program ID.
pub const SYSTEM_PROGRAM_ID: pinocchio::pubkey::Pubkey = [0u8; 32];

pinocchio_pubkey::declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");
