//! Account-level checks: signers, writability, program accounts and
//! instruction data shape.

mod common;

use common::*;
use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use token_config_interface::{InitializeArgs, TokenConfigError, TokenConfigInstruction};

/// Context plus an initialized token and a funded fee payer that holds no
/// rights over it.
fn setup() -> (TestContext, Pubkey, Pubkey, Keypair) {
    let mut ctx = TestContext::new();
    let mint = Keypair::new();
    let token_config = initialize(
        &mut ctx.svm,
        &ctx.program_id,
        &ctx.authority,
        &mint,
        6,
        "Checked",
        "CHK",
    )
    .unwrap();
    let payer = funded_keypair(&mut ctx.svm);
    (ctx, mint.pubkey(), token_config, payer)
}

/// Naming the authority without its signature cannot mint.
#[test]
#[ignore = "requires cargo build-sbf"]
fn test_mint_requires_authority_signature() {
    let (mut ctx, mint, token_config, payer) = setup();
    let destination = create_token_account(&mut ctx.svm, &mint, &payer.pubkey());

    let ix = mint_tokens_ix(
        &ctx.program_id,
        &token_config,
        &mint,
        &destination,
        &ctx.authority.pubkey(),
        1_000,
    );
    let ix = without_signer(ix, &ctx.authority.pubkey());
    let result = send(&mut ctx.svm, ix, &[&payer]);

    assert_program_error(result, TokenConfigError::AccountNotSigner);
    assert_eq!(mint_supply(&ctx.svm, &mint), 0);
    assert_eq!(token_balance(&ctx.svm, &destination), 0);
}

/// Naming the authority without its signature cannot pause.
#[test]
#[ignore = "requires cargo build-sbf"]
fn test_pause_requires_authority_signature() {
    let (mut ctx, _, token_config, payer) = setup();

    let ix = pause_ix(&ctx.program_id, &token_config, &ctx.authority.pubkey());
    let ix = without_signer(ix, &ctx.authority.pubkey());
    let result = send(&mut ctx.svm, ix, &[&payer]);

    assert_program_error(result, TokenConfigError::AccountNotSigner);
    assert!(!read_config(&ctx.svm, &token_config).is_paused());
}

/// Naming the authority without its signature cannot take over the config.
#[test]
#[ignore = "requires cargo build-sbf"]
fn test_transfer_authority_requires_authority_signature() {
    let (mut ctx, _, token_config, payer) = setup();

    let ix = transfer_authority_ix(
        &ctx.program_id,
        &token_config,
        &ctx.authority.pubkey(),
        &payer.pubkey(),
    );
    let ix = without_signer(ix, &ctx.authority.pubkey());
    let result = send(&mut ctx.svm, ix, &[&payer]);

    assert_program_error(result, TokenConfigError::AccountNotSigner);
    assert_eq!(
        read_config(&ctx.svm, &token_config).authority,
        ctx.authority.pubkey().to_bytes()
    );
}

/// Admin updates need the config passed writable.
#[test]
#[ignore = "requires cargo build-sbf"]
fn test_pause_requires_writable_config() {
    let (mut ctx, _, token_config, _) = setup();

    let mut ix = pause_ix(&ctx.program_id, &token_config, &ctx.authority.pubkey());
    ix.accounts[0] = AccountMeta::new_readonly(token_config, false);
    let authority = ctx.authority.insecure_clone();
    let result = send(&mut ctx.svm, ix, &[&authority]);

    assert_program_error(result, TokenConfigError::AccountNotWritable);
    assert!(!read_config(&ctx.svm, &token_config).is_paused());
}

/// Pause takes no arguments.
#[test]
#[ignore = "requires cargo build-sbf"]
fn test_pause_rejects_trailing_data() {
    let (mut ctx, _, token_config, _) = setup();

    let data = vec![TokenConfigInstruction::Pause.to_u8(), 1];
    let ix = admin_ix(&ctx.program_id, &token_config, &ctx.authority.pubkey(), data);
    let authority = ctx.authority.insecure_clone();
    let result = send(&mut ctx.svm, ix, &[&authority]);

    assert_program_error(result, TokenConfigError::InvalidInstructionData);
    assert!(!read_config(&ctx.svm, &token_config).is_paused());
}

/// A token program other than SPL Token is refused before any CPI.
#[test]
#[ignore = "requires cargo build-sbf"]
fn test_mint_rejects_fake_token_program() {
    let (mut ctx, mint, token_config, payer) = setup();
    let destination = create_token_account(&mut ctx.svm, &mint, &payer.pubkey());

    let mut ix = mint_tokens_ix(
        &ctx.program_id,
        &token_config,
        &mint,
        &destination,
        &ctx.authority.pubkey(),
        1_000,
    );
    ix.accounts[4] = AccountMeta::new_readonly(Pubkey::new_unique(), false);
    let authority = ctx.authority.insecure_clone();
    let result = send(&mut ctx.svm, ix, &[&authority]);

    assert_program_error(result, TokenConfigError::InvalidTokenProgram);
    assert_eq!(mint_supply(&ctx.svm, &mint), 0);
}

/// A system program other than the real one is refused.
#[test]
#[ignore = "requires cargo build-sbf"]
fn test_initialize_rejects_fake_system_program() {
    let TestContext {
        mut svm,
        program_id,
        authority,
    } = TestContext::new();
    let mint = Keypair::new();
    let (token_config, _) = find_token_config_pda(&program_id, &mint.pubkey());
    let args = InitializeArgs::new(6, "Checked", "CHK").unwrap();

    let mut ix = initialize_ix(
        &program_id,
        &token_config,
        &mint.pubkey(),
        &authority.pubkey(),
        &args,
    );
    ix.accounts[4] = AccountMeta::new_readonly(Pubkey::new_unique(), false);
    let result = send(&mut svm, ix, &[&authority, &mint]);

    assert_program_error(result, TokenConfigError::InvalidSystemProgram);
    assert!(svm.get_account(&token_config).is_none());
    assert!(svm.get_account(&mint.pubkey()).is_none());
}
