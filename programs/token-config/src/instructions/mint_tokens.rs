//! Mint tokens to a token account.

use pinocchio::{
    ProgramResult, account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey,
};
use pinocchio_log::log;

use crate::{
    TokenConfig, TokenConfigError, TokensMintedEvent, emit_event,
    instructions::{assert_signer, load_config, parse_amount},
    ledger::{ConfigSigner, Ledger, TokenProgramLedger},
};

/// Accounts for the MintTokens instruction.
pub struct MintTokensAccounts<'a> {
    /// TokenConfig PDA, signs the mint CPI as mint authority
    pub token_config: &'a AccountInfo,
    /// Mint, must match token_config.mint
    pub mint: &'a AccountInfo,
    /// Destination token account
    pub destination: &'a AccountInfo,
    /// Must match token_config.authority
    pub authority: &'a AccountInfo,
    /// SPL Token program
    pub token_program: &'a AccountInfo,
}

impl<'a> TryFrom<&'a [AccountInfo]> for MintTokensAccounts<'a> {
    type Error = ProgramError;

    fn try_from(accounts: &'a [AccountInfo]) -> Result<Self, Self::Error> {
        let [token_config, mint, destination, authority, token_program, ..] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };
        assert_signer(authority)?;
        Ok(Self {
            token_config,
            mint,
            destination,
            authority,
            token_program,
        })
    }
}

/// Mint `amount` of the config's token to `destination`.
///
/// Checks run in order: config address, pause flag, authority, mint. The
/// ledger is only called once all of them pass.
///
/// # Errors
///
/// `InvalidConfigurationAddress`, `OperationsPaused`, `UnauthorizedMinter`,
/// `InvalidMint`, or a ledger failure.
pub fn mint_tokens_impl<L: Ledger>(
    ledger: &mut L,
    config: &TokenConfig,
    config_address: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> ProgramResult {
    config.validate_address(config_address)?;
    config.require_not_paused()?;
    config.require_mint_authority(authority)?;

    if mint != &config.mint {
        return Err(TokenConfigError::InvalidMint.into());
    }

    let signer = ConfigSigner {
        address: config_address,
        mint: &config.mint,
        bump: config.bump,
    };
    ledger.mint_to(mint, destination, amount, &signer)?;

    emit_event(&TokensMintedEvent {
        mint: config.mint,
        destination: *destination,
        amount,
    });
    Ok(())
}

/// Process the MintTokens instruction.
///
/// # Errors
///
/// Account or instruction data errors, or the errors of [`mint_tokens_impl`].
pub fn process_mint_tokens(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let MintTokensAccounts {
        token_config,
        mint,
        destination,
        authority,
        token_program,
    } = MintTokensAccounts::try_from(accounts)?;

    let amount = parse_amount(data)?;
    let config = load_config(token_config)?;
    let mut ledger = TokenProgramLedger::new(token_program, accounts)?;

    mint_tokens_impl(
        &mut ledger,
        &config,
        token_config.key(),
        mint.key(),
        destination.key(),
        authority.key(),
        amount,
    )
    .inspect_err(|_| {
        log!("mint_tokens: rejected");
    })?;

    log!("mint_tokens: minted {}", amount);
    Ok(())
}
