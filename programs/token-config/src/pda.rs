//! Program Derived Address (PDA) helpers
//!
//! One TokenConfig PDA exists per mint.
//! Seeds: `["token-config", mint]`
//!
//! - `find_token_config_pda(mint)` - Derives the PDA address and bump
//! - `gen_token_config_seeds(mint, bump)` - Creates signer seeds for CPIs
//! - `validate_config_address(key, mint)` - Recomputes the PDA and checks a supplied key
//! - `validate_stored_config_address(key, mint, bump)` - Re-proves a stored config's address from its bump

use pinocchio::{instruction::Seed, program_error::ProgramError, pubkey::Pubkey};

pub use token_config_interface::TOKEN_CONFIG_SEED;

use crate::TokenConfigError;

/// Derive the TokenConfig PDA for `mint`.
#[cfg(target_os = "solana")]
pub fn find_token_config_pda(mint: &Pubkey) -> (Pubkey, u8) {
    pinocchio::pubkey::find_program_address(&[TOKEN_CONFIG_SEED, mint.as_ref()], &crate::ID)
}

/// Derive the TokenConfig PDA for `mint`.
///
/// Host builds have no PDA syscall; derivation goes through `solana-pubkey`,
/// which yields the same address and bump.
#[cfg(not(target_os = "solana"))]
pub fn find_token_config_pda(mint: &Pubkey) -> (Pubkey, u8) {
    let program_id = solana_pubkey::Pubkey::new_from_array(crate::ID);
    let (address, bump) = solana_pubkey::Pubkey::find_program_address(
        &[TOKEN_CONFIG_SEED, mint.as_ref()],
        &program_id,
    );
    (address.to_bytes(), bump)
}

/// Rebuild the TokenConfig PDA for `mint` from a known `bump`.
#[cfg(target_os = "solana")]
fn create_token_config_address(mint: &Pubkey, bump: u8) -> Result<Pubkey, ProgramError> {
    pinocchio::pubkey::create_program_address(
        &[TOKEN_CONFIG_SEED, mint.as_ref(), &[bump]],
        &crate::ID,
    )
}

#[cfg(not(target_os = "solana"))]
fn create_token_config_address(mint: &Pubkey, bump: u8) -> Result<Pubkey, ProgramError> {
    let program_id = solana_pubkey::Pubkey::new_from_array(crate::ID);
    solana_pubkey::Pubkey::create_program_address(
        &[TOKEN_CONFIG_SEED, mint.as_ref(), &[bump]],
        &program_id,
    )
    .map(|address| address.to_bytes())
    .map_err(|_| TokenConfigError::InvalidConfigurationAddress.into())
}

/// Signer seeds for the TokenConfig PDA.
pub fn gen_token_config_seeds<'a>(mint: &'a Pubkey, bump: &'a [u8; 1]) -> [Seed<'a>; 3] {
    [
        Seed::from(TOKEN_CONFIG_SEED),
        Seed::from(mint.as_ref()),
        Seed::from(bump.as_ref()),
    ]
}

/// Recompute the TokenConfig PDA for `mint` and compare it with `key`.
///
/// Returns the canonical bump on success.
///
/// # Errors
///
/// `InvalidConfigurationAddress` when `key` is not the derived address.
pub fn validate_config_address(key: &Pubkey, mint: &Pubkey) -> Result<u8, ProgramError> {
    let (expected, bump) = find_token_config_pda(mint);
    if key != &expected {
        return Err(TokenConfigError::InvalidConfigurationAddress.into());
    }
    Ok(bump)
}

/// Check `key` against the address derived from a stored `mint` and `bump`.
///
/// Costs one hash instead of a bump search.
///
/// # Errors
///
/// `InvalidConfigurationAddress` when the seeds fall on the curve or the
/// derived address differs from `key`.
pub fn validate_stored_config_address(
    key: &Pubkey,
    mint: &Pubkey,
    bump: u8,
) -> Result<(), ProgramError> {
    match create_token_config_address(mint, bump) {
        Ok(expected) if &expected == key => Ok(()),
        _ => Err(TokenConfigError::InvalidConfigurationAddress.into()),
    }
}
