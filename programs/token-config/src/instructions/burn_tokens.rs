//! Burn tokens from a token account.

use pinocchio::{
    ProgramResult, account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey,
};
use pinocchio_log::log;

use crate::{
    TokenConfig, TokenConfigError, TokensBurnedEvent, emit_event,
    instructions::{load_config, parse_amount},
    ledger::{Ledger, TokenProgramLedger},
};

/// Accounts for the BurnTokens instruction.
pub struct BurnTokensAccounts<'a> {
    /// TokenConfig PDA
    pub token_config: &'a AccountInfo,
    /// Mint, must match token_config.mint
    pub mint: &'a AccountInfo,
    /// Token account to burn from
    pub source: &'a AccountInfo,
    /// Owner of the source account, checked by the token program
    pub owner: &'a AccountInfo,
    /// SPL Token program
    pub token_program: &'a AccountInfo,
}

impl<'a> TryFrom<&'a [AccountInfo]> for BurnTokensAccounts<'a> {
    type Error = ProgramError;

    fn try_from(accounts: &'a [AccountInfo]) -> Result<Self, Self::Error> {
        let [token_config, mint, source, owner, token_program, ..] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };
        Ok(Self {
            token_config,
            mint,
            source,
            owner,
            token_program,
        })
    }
}

/// Burn `amount` from `source`, reducing supply.
///
/// # Errors
///
/// `InvalidConfigurationAddress`, `OperationsPaused`, `InvalidMint`, or a
/// ledger failure.
pub fn burn_tokens_impl<L: Ledger>(
    ledger: &mut L,
    config: &TokenConfig,
    config_address: &Pubkey,
    mint: &Pubkey,
    source: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> ProgramResult {
    config.validate_address(config_address)?;
    config.require_not_paused()?;

    if mint != &config.mint {
        return Err(TokenConfigError::InvalidMint.into());
    }

    ledger.burn(mint, source, owner, amount)?;

    emit_event(&TokensBurnedEvent {
        mint: config.mint,
        source: *source,
        amount,
    });
    Ok(())
}

/// Process the BurnTokens instruction.
///
/// # Errors
///
/// Account or instruction data errors, or the errors of [`burn_tokens_impl`].
pub fn process_burn_tokens(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let BurnTokensAccounts {
        token_config,
        mint,
        source,
        owner,
        token_program,
    } = BurnTokensAccounts::try_from(accounts)?;

    let amount = parse_amount(data)?;
    let config = load_config(token_config)?;
    let mut ledger = TokenProgramLedger::new(token_program, accounts)?;

    burn_tokens_impl(
        &mut ledger,
        &config,
        token_config.key(),
        mint.key(),
        source.key(),
        owner.key(),
        amount,
    )
    .inspect_err(|_| {
        log!("burn_tokens: rejected");
    })?;

    log!("burn_tokens: burned {}", amount);
    Ok(())
}
