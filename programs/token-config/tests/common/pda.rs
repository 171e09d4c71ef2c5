//! PDA derivation helpers for token-config tests.

use solana_sdk::pubkey::Pubkey;

pub use token_config_interface::TOKEN_CONFIG_SEED;

/// Derive the TokenConfig PDA for a mint
pub fn find_token_config_pda(program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_CONFIG_SEED, mint.as_ref()], program_id)
}

// ============================================================================
// Common Constants
// ============================================================================

/// System program ID
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk::system_program::ID;

/// SPL Token program ID
pub const SPL_TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
