//! Initialize a mint and its token config.

use pinocchio::{
    ProgramResult,
    account_info::AccountInfo,
    instruction::Signer,
    program_error::ProgramError,
    pubkey::Pubkey,
    sysvars::{Sysvar, rent::Rent},
};
use pinocchio_log::log;
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};
use token_config_interface::{InitializeArgs, SYSTEM_PROGRAM_ID, parse_args};

use crate::{
    TokenConfig, TokenConfigError, TokenInitializedEvent, emit_event,
    instructions::{assert_signer, assert_writable},
    ledger::{Ledger, TokenProgramLedger},
    pda::{gen_token_config_seeds, validate_config_address},
};

/// Accounts for the Initialize instruction.
pub struct InitializeAccounts<'a> {
    /// TokenConfig PDA ["token-config", mint] to create
    pub token_config: &'a AccountInfo,
    /// Mint account to create (fresh keypair)
    pub mint: &'a AccountInfo,
    /// Initial authority, pays for both accounts
    pub authority: &'a AccountInfo,
    /// SPL Token program
    pub token_program: &'a AccountInfo,
    /// System program
    pub system_program: &'a AccountInfo,
}

impl<'a> TryFrom<&'a [AccountInfo]> for InitializeAccounts<'a> {
    type Error = ProgramError;

    fn try_from(accounts: &'a [AccountInfo]) -> Result<Self, Self::Error> {
        let [token_config, mint, authority, token_program, system_program, ..] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };

        assert_writable(token_config)?;
        assert_signer(mint)?;
        assert_writable(mint)?;
        assert_signer(authority)?;
        assert_writable(authority)?;

        if system_program.key() != &SYSTEM_PROGRAM_ID {
            log!("initialize: invalid system program");
            return Err(TokenConfigError::InvalidSystemProgram.into());
        }

        Ok(Self {
            token_config,
            mint,
            authority,
            token_program,
            system_program,
        })
    }
}

/// Create the mint through `ledger` and build the config record.
///
/// The caller has already checked that `config_address` is the PDA for
/// `mint` with `bump` and that no config exists there yet. The mint is
/// created with `config_address` as its mint authority.
///
/// # Errors
///
/// Metadata errors (`NameTooLong`, `SymbolTooLong`, `InvalidTokenMetadata`),
/// `InvalidAuthority`, or a ledger failure from mint creation.
pub fn initialize_impl<L: Ledger>(
    ledger: &mut L,
    config_address: &Pubkey,
    bump: u8,
    mint: &Pubkey,
    authority: &Pubkey,
    args: &InitializeArgs,
) -> Result<TokenConfig, ProgramError> {
    let config = TokenConfig::new(authority, mint, bump, args)?;

    ledger.create_mint(authority, mint, args.decimals, config_address)?;

    emit_event(&TokenInitializedEvent {
        mint: *mint,
        config: *config_address,
        authority: *authority,
        decimals: args.decimals,
        _padding: [0u8; 7],
    });

    Ok(config)
}

/// Initialize a new token.
///
/// Creates the mint (authority = TokenConfig PDA) and the TokenConfig
/// account at `["token-config", mint]`, with the signer as authority.
///
/// # Errors
///
/// `AlreadyInitialized` if a config already exists for the mint,
/// `InvalidConfigurationAddress` for a non-derived config address, plus
/// account, metadata and ledger errors.
pub fn process_initialize(accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let InitializeAccounts {
        token_config,
        mint,
        authority,
        token_program,
        system_program: _,
    } = InitializeAccounts::try_from(accounts)?;

    let args = parse_args::<InitializeArgs>(data).ok_or_else(|| {
        log!("initialize: malformed instruction data");
        ProgramError::from(TokenConfigError::InvalidInstructionData)
    })?;

    let bump = validate_config_address(token_config.key(), mint.key()).inspect_err(|_| {
        log!("initialize: config address is not the derived PDA");
    })?;

    if !token_config.data_is_empty() || token_config.is_owned_by(&crate::ID) {
        log!("initialize: token config already exists");
        return Err(TokenConfigError::AlreadyInitialized.into());
    }

    let mut ledger = TokenProgramLedger::new(token_program, accounts)?;
    let config = initialize_impl(
        &mut ledger,
        token_config.key(),
        bump,
        mint.key(),
        authority.key(),
        &args,
    )?;

    create_config_account(authority, token_config, mint.key(), bump)?;

    let mut account_data = token_config.try_borrow_mut_data()?;
    account_data.copy_from_slice(bytemuck::bytes_of(&config));

    log!("initialize: token initialized, decimals={}", args.decimals);
    Ok(())
}

/// Create the TokenConfig account, signed by its PDA seeds.
///
/// A PDA can receive lamports before it exists, which would make a plain
/// `CreateAccount` fail. In that case the balance is topped up to rent
/// exemption and the account is allocated and assigned instead.
fn create_config_account(
    payer: &AccountInfo,
    token_config: &AccountInfo,
    mint: &Pubkey,
    bump: u8,
) -> ProgramResult {
    let bump_bytes = [bump];
    let seeds = gen_token_config_seeds(mint, &bump_bytes);
    let space = TokenConfig::LEN as u64;
    let required = Rent::get()?.minimum_balance(TokenConfig::LEN);
    let current = token_config.lamports();

    if current == 0 {
        return CreateAccount {
            from: payer,
            to: token_config,
            lamports: required,
            space,
            owner: &crate::ID,
        }
        .invoke_signed(&[Signer::from(&seeds)]);
    }

    if current < required {
        Transfer {
            from: payer,
            to: token_config,
            lamports: required - current,
        }
        .invoke()?;
    }

    Allocate {
        account: token_config,
        space,
    }
    .invoke_signed(&[Signer::from(&seeds)])?;

    Assign {
        account: token_config,
        owner: &crate::ID,
    }
    .invoke_signed(&[Signer::from(&seeds)])
}
