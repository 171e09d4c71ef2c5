//! `TransferAuthority` instruction handler.
//!
//! Hands administrative control to a new authority in a single step. The
//! previous authority loses all rights immediately.

use pinocchio::{ProgramResult, account_info::AccountInfo, pubkey::Pubkey};
use pinocchio_log::log;
use token_config_interface::{TransferAuthorityArgs, parse_args};

use super::AdminAccounts;
use crate::{
    AuthorityTransferredEvent, TokenConfig, TokenConfigError, emit_event,
    instructions::inspect_config_mut,
};

/// Replace the config's authority.
///
/// # Errors
///
/// `InvalidConfigurationAddress`, `UnauthorizedAdmin`, or `InvalidAuthority`
/// when `new_authority` is the zero address.
pub fn transfer_authority_impl(
    config: &mut TokenConfig,
    config_address: &Pubkey,
    authority: &Pubkey,
    new_authority: &Pubkey,
) -> ProgramResult {
    config.validate_address(config_address)?;
    config.require_admin(authority)?;
    TokenConfig::validate_authority(new_authority)?;

    let previous_authority = config.authority;
    config.authority = *new_authority;

    emit_event(&AuthorityTransferredEvent {
        mint: config.mint,
        previous_authority,
        new_authority: *new_authority,
    });
    Ok(())
}

/// Process the TransferAuthority instruction.
///
/// # Errors
///
/// Account or instruction data errors, or the errors of
/// [`transfer_authority_impl`].
pub fn process_transfer_authority(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let AdminAccounts {
        token_config,
        authority,
    } = AdminAccounts::try_from(accounts)?;

    let args = parse_args::<TransferAuthorityArgs>(data).ok_or_else(|| {
        log!("transfer_authority: malformed instruction data");
        TokenConfigError::InvalidInstructionData
    })?;

    inspect_config_mut(token_config, |config| {
        transfer_authority_impl(config, token_config.key(), authority.key(), &args.new_authority)
            .inspect_err(|_| {
                log!("transfer_authority: rejected");
            })?;
        log!("transfer_authority: authority updated");
        Ok(())
    })
}
