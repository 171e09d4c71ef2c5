//! Token config instruction handlers.
//!
//! [`process_instruction`] reads the one-byte discriminator and dispatches to
//! the `process_*` handler. Each handler parses its accounts, then calls the
//! matching `*_impl` function that holds the authorization logic.

use pinocchio::{
    ProgramResult, account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey,
};
use pinocchio_log::log;
use token_config_interface::TokenConfigInstruction;

use crate::{TokenConfig, TokenConfigError};

// Admin instructions (initialization, pausing, authority handoff)
pub mod admin;

// Token operation modules
mod burn_tokens;
mod mint_tokens;
mod transfer_tokens;

pub use admin::*;

pub use burn_tokens::{burn_tokens_impl, process_burn_tokens};
pub use mint_tokens::{mint_tokens_impl, process_mint_tokens};
pub use transfer_tokens::{process_transfer_tokens, transfer_tokens_impl};

/// Program entrypoint.
///
/// # Errors
///
/// `IncorrectProgramId` when invoked under another program id,
/// `InvalidInstructionData` for an unknown discriminator, otherwise whatever
/// the handler returns.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    if program_id != &crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    let (instruction, data) = TokenConfigInstruction::unpack(data).ok_or_else(|| {
        log!("invalid instruction discriminator");
        ProgramError::from(TokenConfigError::InvalidInstructionData)
    })?;

    let name: &'static str = instruction.into();
    log!("Instruction: {}", name);

    match instruction {
        TokenConfigInstruction::Initialize => process_initialize(accounts, data),
        TokenConfigInstruction::MintTokens => process_mint_tokens(accounts, data),
        TokenConfigInstruction::TransferTokens => process_transfer_tokens(accounts, data),
        TokenConfigInstruction::BurnTokens => process_burn_tokens(accounts, data),
        TokenConfigInstruction::Pause => process_pause(accounts, data),
        TokenConfigInstruction::Unpause => process_unpause(accounts, data),
        TokenConfigInstruction::TransferAuthority => process_transfer_authority(accounts, data),
    }
}

// ============================================================================
// Account checks shared by handlers
// ============================================================================

/// # Errors
///
/// `AccountNotSigner` unless `account` signed.
#[inline]
pub(crate) fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer() {
        return Err(TokenConfigError::AccountNotSigner.into());
    }
    Ok(())
}

/// # Errors
///
/// `AccountNotWritable` unless `account` is writable.
#[inline]
pub(crate) fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable() {
        return Err(TokenConfigError::AccountNotWritable.into());
    }
    Ok(())
}

/// Copy the config out of a program-owned account.
///
/// The account borrow is released before returning, so the account can be
/// passed to a CPI afterwards.
///
/// # Errors
///
/// `InvalidConfigAccount` if the account is not a config owned by this program.
pub(crate) fn load_config(account: &AccountInfo) -> Result<TokenConfig, ProgramError> {
    if !account.is_owned_by(&crate::ID) {
        return Err(TokenConfigError::InvalidConfigAccount.into());
    }
    let data = account.try_borrow_data()?;
    TokenConfig::load(&data).copied()
}

/// Run `f` against the config stored in `account`, writing changes in place.
///
/// # Errors
///
/// `InvalidConfigAccount`, `AccountNotWritable`, or whatever `f` returns.
pub(crate) fn inspect_config_mut(
    account: &AccountInfo,
    f: impl FnOnce(&mut TokenConfig) -> ProgramResult,
) -> ProgramResult {
    if !account.is_owned_by(&crate::ID) {
        return Err(TokenConfigError::InvalidConfigAccount.into());
    }
    assert_writable(account)?;
    let mut data = account.try_borrow_mut_data()?;
    f(TokenConfig::load_mut(&mut data)?)
}

/// Read a `u64` amount argument.
///
/// # Errors
///
/// `InvalidInstructionData` unless `data` is exactly 8 bytes.
pub(crate) fn parse_amount(data: &[u8]) -> Result<u64, ProgramError> {
    token_config_interface::parse_args::<token_config_interface::AmountArgs>(data)
        .map(|args| args.amount)
        .ok_or_else(|| TokenConfigError::InvalidInstructionData.into())
}

/// # Errors
///
/// `InvalidInstructionData` unless `data` is empty.
#[inline]
pub(crate) fn assert_no_args(data: &[u8]) -> ProgramResult {
    if !data.is_empty() {
        return Err(TokenConfigError::InvalidInstructionData.into());
    }
    Ok(())
}
