//! Pause and unpause token operations.
//!
//! While paused, `MintTokens`, `TransferTokens` and `BurnTokens` fail with
//! `OperationsPaused`. Both calls are idempotent.

use pinocchio::{ProgramResult, account_info::AccountInfo, pubkey::Pubkey};
use pinocchio_log::log;

use super::AdminAccounts;
use crate::{
    PauseStateChangedEvent, TokenConfig, emit_event,
    instructions::{assert_no_args, inspect_config_mut},
};

/// Set the pause flag to `paused`.
fn set_paused_impl(
    config: &mut TokenConfig,
    config_address: &Pubkey,
    authority: &Pubkey,
    paused: bool,
) -> ProgramResult {
    config.validate_address(config_address)?;
    config.require_admin(authority)?;

    config.set_paused(paused);

    emit_event(&PauseStateChangedEvent {
        mint: config.mint,
        authority: *authority,
        paused: paused as u8,
        _padding: [0u8; 7],
    });
    Ok(())
}

/// Pause token operations.
///
/// # Errors
///
/// `InvalidConfigurationAddress` or `UnauthorizedAdmin`.
pub fn pause_impl(
    config: &mut TokenConfig,
    config_address: &Pubkey,
    authority: &Pubkey,
) -> ProgramResult {
    set_paused_impl(config, config_address, authority, true)
}

/// Resume token operations.
///
/// # Errors
///
/// `InvalidConfigurationAddress` or `UnauthorizedAdmin`.
pub fn unpause_impl(
    config: &mut TokenConfig,
    config_address: &Pubkey,
    authority: &Pubkey,
) -> ProgramResult {
    set_paused_impl(config, config_address, authority, false)
}

/// Process the Pause instruction.
///
/// # Errors
///
/// Account errors, `InvalidInstructionData` for trailing data, or the
/// errors of [`pause_impl`].
pub fn process_pause(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let AdminAccounts {
        token_config,
        authority,
    } = AdminAccounts::try_from(accounts)?;
    assert_no_args(data)?;

    inspect_config_mut(token_config, |config| {
        pause_impl(config, token_config.key(), authority.key()).inspect_err(|_| {
            log!("pause: rejected");
        })?;
        log!("pause: token operations paused");
        Ok(())
    })
}

/// Process the Unpause instruction.
///
/// # Errors
///
/// Account errors, `InvalidInstructionData` for trailing data, or the
/// errors of [`unpause_impl`].
pub fn process_unpause(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let AdminAccounts {
        token_config,
        authority,
    } = AdminAccounts::try_from(accounts)?;
    assert_no_args(data)?;

    inspect_config_mut(token_config, |config| {
        unpause_impl(config, token_config.key(), authority.key()).inspect_err(|_| {
            log!("unpause: rejected");
        })?;
        log!("unpause: token operations resumed");
        Ok(())
    })
}
