//! Transfer tokens between token accounts.

use pinocchio::{
    ProgramResult, account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey,
};
use pinocchio_log::log;

use crate::{
    TokenConfig, TokenConfigError, TokensTransferredEvent, emit_event,
    instructions::{load_config, parse_amount},
    ledger::{Ledger, TokenProgramLedger},
};

/// Accounts for the TransferTokens instruction.
pub struct TransferTokensAccounts<'a> {
    /// TokenConfig PDA of the source account's mint
    pub token_config: &'a AccountInfo,
    /// Source token account
    pub source: &'a AccountInfo,
    /// Destination token account
    pub destination: &'a AccountInfo,
    /// Owner of the source account, checked by the token program
    pub owner: &'a AccountInfo,
    /// SPL Token program
    pub token_program: &'a AccountInfo,
}

impl<'a> TryFrom<&'a [AccountInfo]> for TransferTokensAccounts<'a> {
    type Error = ProgramError;

    fn try_from(accounts: &'a [AccountInfo]) -> Result<Self, Self::Error> {
        let [token_config, source, destination, owner, token_program, ..] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };
        Ok(Self {
            token_config,
            source,
            destination,
            owner,
            token_program,
        })
    }
}

/// Move `amount` from `source` to `destination`.
///
/// The config only gates on the pause flag; the owner's authorization is
/// enforced by the ledger.
///
/// # Errors
///
/// `InvalidConfigurationAddress`, `OperationsPaused`,
/// `TokenAccountMintMismatch`, or a ledger failure.
pub fn transfer_tokens_impl<L: Ledger>(
    ledger: &mut L,
    config: &TokenConfig,
    config_address: &Pubkey,
    source: &Pubkey,
    destination: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> ProgramResult {
    config.validate_address(config_address)?;
    config.require_not_paused()?;

    // Another token's config must not be able to gate this transfer
    if ledger.token_account_mint(source)? != config.mint {
        return Err(TokenConfigError::TokenAccountMintMismatch.into());
    }

    ledger.transfer(source, destination, owner, amount)?;

    emit_event(&TokensTransferredEvent {
        mint: config.mint,
        source: *source,
        destination: *destination,
        amount,
    });
    Ok(())
}

/// Process the TransferTokens instruction.
///
/// # Errors
///
/// Account or instruction data errors, or the errors of
/// [`transfer_tokens_impl`].
pub fn process_transfer_tokens(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let TransferTokensAccounts {
        token_config,
        source,
        destination,
        owner,
        token_program,
    } = TransferTokensAccounts::try_from(accounts)?;

    let amount = parse_amount(data)?;
    let config = load_config(token_config)?;
    let mut ledger = TokenProgramLedger::new(token_program, accounts)?;

    transfer_tokens_impl(
        &mut ledger,
        &config,
        token_config.key(),
        source.key(),
        destination.key(),
        owner.key(),
        amount,
    )
    .inspect_err(|_| {
        log!("transfer_tokens: rejected");
    })?;

    log!("transfer_tokens: transferred {}", amount);
    Ok(())
}
