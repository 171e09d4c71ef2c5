//! Balance-ledger adapter.
//!
//! The program never stores balances. Mint creation, minting, transfers and
//! burns are delegated to the SPL Token program through the [`Ledger`]
//! trait. On-chain the trait is implemented by [`TokenProgramLedger`], which
//! issues CPIs; host tests use the in-memory ledger from `testing`.
//!
//! Ledger failures are returned unchanged so the caller sees the token
//! program's own error code.

use pinocchio::{
    ProgramResult,
    account_info::AccountInfo,
    instruction::Signer,
    program_error::ProgramError,
    pubkey::Pubkey,
    sysvars::{Sysvar, rent::Rent},
};
use pinocchio_log::log;
use pinocchio_system::instructions::CreateAccount;
use pinocchio_token::{
    instructions::{Burn, InitializeMint2, MintTo, Transfer},
    state::{Mint, TokenAccount},
};
use token_config_interface::SPL_TOKEN_PROGRAM_ID;

use crate::{TokenConfigError, pda::gen_token_config_seeds};

/// Signing identity of a TokenConfig PDA.
///
/// Only the program can produce a signature for this address, which is what
/// makes it the mint authority.
#[derive(Clone, Copy, Debug)]
pub struct ConfigSigner<'a> {
    /// The TokenConfig PDA
    pub address: &'a Pubkey,
    /// Mint the PDA is derived from
    pub mint: &'a Pubkey,
    /// Canonical bump
    pub bump: u8,
}

/// Operations the program needs from the balance ledger.
///
/// Token accounts and mints are named by address; the implementation is
/// responsible for locating them.
pub trait Ledger {
    /// Create a new mint with `mint_authority` and no freeze authority.
    ///
    /// # Errors
    ///
    /// Ledger-specific, e.g. when the mint address is already in use.
    fn create_mint(
        &mut self,
        payer: &Pubkey,
        mint: &Pubkey,
        decimals: u8,
        mint_authority: &Pubkey,
    ) -> ProgramResult;

    /// Mint `amount` to `destination`, signed by the config PDA.
    ///
    /// # Errors
    ///
    /// Ledger-specific, e.g. mint mismatch or overflow.
    fn mint_to(
        &mut self,
        mint: &Pubkey,
        destination: &Pubkey,
        amount: u64,
        authority: &ConfigSigner,
    ) -> ProgramResult;

    /// Move `amount` from `source` to `destination`, authorized by `owner`.
    ///
    /// # Errors
    ///
    /// Ledger-specific, e.g. insufficient funds or owner mismatch.
    fn transfer(
        &mut self,
        source: &Pubkey,
        destination: &Pubkey,
        owner: &Pubkey,
        amount: u64,
    ) -> ProgramResult;

    /// Burn `amount` from `source`, authorized by `owner`.
    ///
    /// # Errors
    ///
    /// Ledger-specific, e.g. insufficient funds or owner mismatch.
    fn burn(&mut self, mint: &Pubkey, source: &Pubkey, owner: &Pubkey, amount: u64)
    -> ProgramResult;

    /// Mint held by the token account at `account`.
    ///
    /// # Errors
    ///
    /// When `account` is not an initialized token account.
    fn token_account_mint(&self, account: &Pubkey) -> Result<Pubkey, ProgramError>;
}

/// [`Ledger`] backed by SPL Token CPIs.
///
/// Accounts are resolved by key from the instruction's account list, so
/// every account a call touches must have been passed to the instruction.
pub struct TokenProgramLedger<'a> {
    accounts: &'a [AccountInfo],
}

impl<'a> TokenProgramLedger<'a> {
    /// # Errors
    ///
    /// `InvalidTokenProgram` unless `token_program` is SPL Token.
    pub fn new(
        token_program: &AccountInfo,
        accounts: &'a [AccountInfo],
    ) -> Result<Self, ProgramError> {
        if token_program.key() != &SPL_TOKEN_PROGRAM_ID {
            log!("ledger: invalid token program");
            return Err(TokenConfigError::InvalidTokenProgram.into());
        }
        Ok(Self { accounts })
    }

    fn account(&self, key: &Pubkey) -> Result<&'a AccountInfo, ProgramError> {
        self.accounts
            .iter()
            .find(|account| account.key() == key)
            .ok_or(ProgramError::NotEnoughAccountKeys)
    }
}

impl Ledger for TokenProgramLedger<'_> {
    fn create_mint(
        &mut self,
        payer: &Pubkey,
        mint: &Pubkey,
        decimals: u8,
        mint_authority: &Pubkey,
    ) -> ProgramResult {
        let payer = self.account(payer)?;
        let mint = self.account(mint)?;

        let lamports = Rent::get()?.minimum_balance(Mint::LEN);
        CreateAccount {
            from: payer,
            to: mint,
            lamports,
            space: Mint::LEN as u64,
            owner: &SPL_TOKEN_PROGRAM_ID,
        }
        .invoke()?;

        InitializeMint2 {
            mint,
            decimals,
            mint_authority,
            freeze_authority: None,
        }
        .invoke()
    }

    fn mint_to(
        &mut self,
        mint: &Pubkey,
        destination: &Pubkey,
        amount: u64,
        authority: &ConfigSigner,
    ) -> ProgramResult {
        let bump = [authority.bump];
        let seeds = gen_token_config_seeds(authority.mint, &bump);
        let signer = Signer::from(&seeds);

        MintTo {
            mint: self.account(mint)?,
            account: self.account(destination)?,
            mint_authority: self.account(authority.address)?,
            amount,
        }
        .invoke_signed(&[signer])
    }

    fn transfer(
        &mut self,
        source: &Pubkey,
        destination: &Pubkey,
        owner: &Pubkey,
        amount: u64,
    ) -> ProgramResult {
        Transfer {
            from: self.account(source)?,
            to: self.account(destination)?,
            authority: self.account(owner)?,
            amount,
        }
        .invoke()
    }

    fn burn(
        &mut self,
        mint: &Pubkey,
        source: &Pubkey,
        owner: &Pubkey,
        amount: u64,
    ) -> ProgramResult {
        Burn {
            account: self.account(source)?,
            mint: self.account(mint)?,
            authority: self.account(owner)?,
            amount,
        }
        .invoke()
    }

    fn token_account_mint(&self, account: &Pubkey) -> Result<Pubkey, ProgramError> {
        let token_account = TokenAccount::from_account_info(self.account(account)?)?;
        Ok(*token_account.mint())
    }
}
