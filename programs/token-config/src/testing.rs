//! Host-side test harness.
//!
//! [`LocalLedger`] is an in-memory stand-in for the SPL Token program that
//! reports the same error codes for the failures the program relies on.
//! [`LocalChain`] stores configs by address next to a ledger and runs each
//! instruction's `*_impl` atomically: if it fails, every config and balance
//! is restored to its state before the call.

use std::collections::BTreeMap;

use pinocchio::{ProgramResult, program_error::ProgramError, pubkey::Pubkey};
use token_config_interface::InitializeArgs;

use crate::{
    LedgerError, TokenConfig, TokenConfigError,
    instructions::{
        burn_tokens_impl, initialize_impl, mint_tokens_impl, pause_impl, transfer_authority_impl,
        transfer_tokens_impl, unpause_impl,
    },
    ledger::{ConfigSigner, Ledger},
    pda::find_token_config_pda,
};

/// Mint state tracked by [`LocalLedger`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintState {
    /// Decimals
    pub decimals: u8,
    /// Mint authority
    pub mint_authority: Pubkey,
    /// Total supply
    pub supply: u64,
}

/// Token account state tracked by [`LocalLedger`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAccountState {
    /// Mint held by the account
    pub mint: Pubkey,
    /// Owner allowed to debit the account
    pub owner: Pubkey,
    /// Balance
    pub amount: u64,
}

/// In-memory balance ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalLedger {
    mints: BTreeMap<Pubkey, MintState>,
    accounts: BTreeMap<Pubkey, TokenAccountState>,
}

impl LocalLedger {
    /// Open an empty token account for `mint`.
    ///
    /// # Errors
    ///
    /// `UninitializedState` for an unknown mint, `AlreadyInUse` for a taken address.
    pub fn create_token_account(
        &mut self,
        address: &Pubkey,
        mint: &Pubkey,
        owner: &Pubkey,
    ) -> ProgramResult {
        if !self.mints.contains_key(mint) {
            return Err(LedgerError::UninitializedState.into());
        }
        if self.accounts.contains_key(address) || self.mints.contains_key(address) {
            return Err(LedgerError::AlreadyInUse.into());
        }
        self.accounts.insert(
            *address,
            TokenAccountState {
                mint: *mint,
                owner: *owner,
                amount: 0,
            },
        );
        Ok(())
    }

    /// Balance of a token account.
    pub fn balance(&self, account: &Pubkey) -> Option<u64> {
        self.accounts.get(account).map(|state| state.amount)
    }

    /// Supply of a mint.
    pub fn supply(&self, mint: &Pubkey) -> Option<u64> {
        self.mints.get(mint).map(|state| state.supply)
    }

    /// Mint state.
    pub fn mint(&self, mint: &Pubkey) -> Option<&MintState> {
        self.mints.get(mint)
    }

    /// Sum of all balances held in accounts of `mint`.
    pub fn total_balance(&self, mint: &Pubkey) -> u128 {
        self.accounts
            .values()
            .filter(|state| &state.mint == mint)
            .map(|state| state.amount as u128)
            .sum()
    }

    fn token_account(&self, address: &Pubkey) -> Result<TokenAccountState, ProgramError> {
        self.accounts
            .get(address)
            .copied()
            .ok_or_else(|| LedgerError::UninitializedState.into())
    }

    fn mint_state(&self, address: &Pubkey) -> Result<MintState, ProgramError> {
        self.mints
            .get(address)
            .copied()
            .ok_or_else(|| LedgerError::UninitializedState.into())
    }
}

impl Ledger for LocalLedger {
    fn create_mint(
        &mut self,
        _payer: &Pubkey,
        mint: &Pubkey,
        decimals: u8,
        mint_authority: &Pubkey,
    ) -> ProgramResult {
        if self.mints.contains_key(mint) || self.accounts.contains_key(mint) {
            return Err(LedgerError::AlreadyInUse.into());
        }
        self.mints.insert(
            *mint,
            MintState {
                decimals,
                mint_authority: *mint_authority,
                supply: 0,
            },
        );
        Ok(())
    }

    fn mint_to(
        &mut self,
        mint: &Pubkey,
        destination: &Pubkey,
        amount: u64,
        authority: &ConfigSigner,
    ) -> ProgramResult {
        let mut mint_state = self.mint_state(mint)?;
        let mut account = self.token_account(destination)?;

        if &account.mint != mint {
            return Err(LedgerError::MintMismatch.into());
        }
        if &mint_state.mint_authority != authority.address {
            return Err(LedgerError::OwnerMismatch.into());
        }

        mint_state.supply = mint_state
            .supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        account.amount = account
            .amount
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.mints.insert(*mint, mint_state);
        self.accounts.insert(*destination, account);
        Ok(())
    }

    fn transfer(
        &mut self,
        source: &Pubkey,
        destination: &Pubkey,
        owner: &Pubkey,
        amount: u64,
    ) -> ProgramResult {
        let mut from = self.token_account(source)?;
        let mut to = self.token_account(destination)?;

        if from.amount < amount {
            return Err(LedgerError::InsufficientFunds.into());
        }
        if from.mint != to.mint {
            return Err(LedgerError::MintMismatch.into());
        }
        if &from.owner != owner {
            return Err(LedgerError::OwnerMismatch.into());
        }

        // Self-transfer is a checked no-op
        if source == destination {
            return Ok(());
        }

        from.amount -= amount;
        to.amount = to.amount.checked_add(amount).ok_or(LedgerError::Overflow)?;

        self.accounts.insert(*source, from);
        self.accounts.insert(*destination, to);
        Ok(())
    }

    fn burn(
        &mut self,
        mint: &Pubkey,
        source: &Pubkey,
        owner: &Pubkey,
        amount: u64,
    ) -> ProgramResult {
        let mut account = self.token_account(source)?;
        let mut mint_state = self.mint_state(mint)?;

        if &account.mint != mint {
            return Err(LedgerError::MintMismatch.into());
        }
        if account.amount < amount {
            return Err(LedgerError::InsufficientFunds.into());
        }
        if &account.owner != owner {
            return Err(LedgerError::OwnerMismatch.into());
        }

        account.amount -= amount;
        mint_state.supply = mint_state
            .supply
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;

        self.accounts.insert(*source, account);
        self.mints.insert(*mint, mint_state);
        Ok(())
    }

    fn token_account_mint(&self, account: &Pubkey) -> Result<Pubkey, ProgramError> {
        self.token_account(account).map(|state| state.mint)
    }
}

/// Configs and a ledger, with atomic instruction execution.
#[derive(Clone, Debug, Default)]
pub struct LocalChain {
    /// Balance ledger
    pub ledger: LocalLedger,
    configs: BTreeMap<Pubkey, TokenConfig>,
}

impl LocalChain {
    /// Empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Config stored at `address`.
    pub fn config(&self, address: &Pubkey) -> Option<&TokenConfig> {
        self.configs.get(address)
    }

    /// Store `config` at an arbitrary address, as if an attacker had
    /// copied a config's bytes into an account owned by the program.
    pub fn place_config(&mut self, address: &Pubkey, config: TokenConfig) {
        self.configs.insert(*address, config);
    }

    /// Run `f`, restoring all state if it fails.
    fn atomic<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ProgramError>,
    ) -> Result<T, ProgramError> {
        let snapshot = self.clone();
        let result = f(self);
        if result.is_err() {
            *self = snapshot;
        }
        result
    }

    fn load(&self, address: &Pubkey) -> Result<TokenConfig, ProgramError> {
        self.configs
            .get(address)
            .copied()
            .ok_or_else(|| TokenConfigError::InvalidConfigAccount.into())
    }

    /// `Initialize`: create `mint` with its config. Returns the config address.
    ///
    /// # Errors
    ///
    /// `AlreadyInitialized` or the errors of [`initialize_impl`].
    pub fn initialize(
        &mut self,
        mint: &Pubkey,
        authority: &Pubkey,
        args: &InitializeArgs,
    ) -> Result<Pubkey, ProgramError> {
        self.atomic(|chain| {
            let (address, bump) = find_token_config_pda(mint);
            if chain.configs.contains_key(&address) {
                return Err(TokenConfigError::AlreadyInitialized.into());
            }
            let config = initialize_impl(&mut chain.ledger, &address, bump, mint, authority, args)?;
            chain.configs.insert(address, config);
            Ok(address)
        })
    }

    /// `MintTokens`.
    ///
    /// # Errors
    ///
    /// See [`mint_tokens_impl`].
    pub fn mint_tokens(
        &mut self,
        config_address: &Pubkey,
        mint: &Pubkey,
        destination: &Pubkey,
        authority: &Pubkey,
        amount: u64,
    ) -> ProgramResult {
        self.atomic(|chain| {
            let config = chain.load(config_address)?;
            mint_tokens_impl(
                &mut chain.ledger,
                &config,
                config_address,
                mint,
                destination,
                authority,
                amount,
            )
        })
    }

    /// `TransferTokens`.
    ///
    /// # Errors
    ///
    /// See [`transfer_tokens_impl`].
    pub fn transfer_tokens(
        &mut self,
        config_address: &Pubkey,
        source: &Pubkey,
        destination: &Pubkey,
        owner: &Pubkey,
        amount: u64,
    ) -> ProgramResult {
        self.atomic(|chain| {
            let config = chain.load(config_address)?;
            transfer_tokens_impl(
                &mut chain.ledger,
                &config,
                config_address,
                source,
                destination,
                owner,
                amount,
            )
        })
    }

    /// `BurnTokens`.
    ///
    /// # Errors
    ///
    /// See [`burn_tokens_impl`].
    pub fn burn_tokens(
        &mut self,
        config_address: &Pubkey,
        mint: &Pubkey,
        source: &Pubkey,
        owner: &Pubkey,
        amount: u64,
    ) -> ProgramResult {
        self.atomic(|chain| {
            let config = chain.load(config_address)?;
            burn_tokens_impl(
                &mut chain.ledger,
                &config,
                config_address,
                mint,
                source,
                owner,
                amount,
            )
        })
    }

    /// `Pause`.
    ///
    /// # Errors
    ///
    /// See [`pause_impl`].
    pub fn pause(&mut self, config_address: &Pubkey, authority: &Pubkey) -> ProgramResult {
        self.update_config(config_address, |config| {
            pause_impl(config, config_address, authority)
        })
    }

    /// `Unpause`.
    ///
    /// # Errors
    ///
    /// See [`unpause_impl`].
    pub fn unpause(&mut self, config_address: &Pubkey, authority: &Pubkey) -> ProgramResult {
        self.update_config(config_address, |config| {
            unpause_impl(config, config_address, authority)
        })
    }

    /// `TransferAuthority`.
    ///
    /// # Errors
    ///
    /// See [`transfer_authority_impl`].
    pub fn transfer_authority(
        &mut self,
        config_address: &Pubkey,
        authority: &Pubkey,
        new_authority: &Pubkey,
    ) -> ProgramResult {
        self.update_config(config_address, |config| {
            transfer_authority_impl(config, config_address, authority, new_authority)
        })
    }

    fn update_config(
        &mut self,
        config_address: &Pubkey,
        f: impl FnOnce(&mut TokenConfig) -> ProgramResult,
    ) -> ProgramResult {
        self.atomic(|chain| {
            let config = chain
                .configs
                .get_mut(config_address)
                .ok_or(TokenConfigError::InvalidConfigAccount)?;
            f(config)
        })
    }
}
