//! Token config instruction helpers.
//!
//! Each helper builds one instruction, signs and sends it, and returns the
//! transaction error on failure so tests can assert the exact code.

use litesvm::LiteSVM;
use solana_sdk::instruction::{AccountMeta, Instruction, InstructionError};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::{Transaction, TransactionError};
use token_config_interface::{
    InitializeArgs, TokenConfigError, TokenConfigInstruction, build_amount_instruction_data,
    build_initialize_instruction_data, build_transfer_authority_instruction_data,
};

use super::pda::{SPL_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID, find_token_config_pda};

/// Sign with `signers` (the first one pays) and send.
pub fn send(
    svm: &mut LiteSVM,
    ix: Instruction,
    signers: &[&Keypair],
) -> Result<(), TransactionError> {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&signers[0].pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx).map(|_| ()).map_err(|e| e.err);
    // Identical repeat transactions would otherwise be rejected as duplicates
    svm.expire_blockhash();
    result
}

/// Assert that `result` failed with the program's custom `error`.
#[track_caller]
pub fn assert_program_error(result: Result<(), TransactionError>, error: TokenConfigError) {
    assert_eq!(
        result,
        Err(TransactionError::InstructionError(
            0,
            InstructionError::Custom(error.to_u32())
        )),
        "expected {error}"
    );
}

/// Assert that `result` failed with a raw custom code (e.g. from SPL Token).
#[track_caller]
pub fn assert_custom_code(result: Result<(), TransactionError>, code: u32) {
    assert_eq!(
        result,
        Err(TransactionError::InstructionError(
            0,
            InstructionError::Custom(code)
        ))
    );
}

// ============================================================================
// Initialize
// ============================================================================

/// Build an Initialize instruction against an explicit config address.
pub fn initialize_ix(
    program_id: &Pubkey,
    token_config: &Pubkey,
    mint: &Pubkey,
    authority: &Pubkey,
    args: &InitializeArgs,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*token_config, false),
            AccountMeta::new(*mint, true),
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data: build_initialize_instruction_data(args).to_vec(),
    }
}

/// Create a token with `mint` as the new mint keypair.
///
/// Returns the TokenConfig PDA on success.
pub fn initialize(
    svm: &mut LiteSVM,
    program_id: &Pubkey,
    authority: &Keypair,
    mint: &Keypair,
    decimals: u8,
    name: &str,
    symbol: &str,
) -> Result<Pubkey, TransactionError> {
    let (token_config, _) = find_token_config_pda(program_id, &mint.pubkey());
    let args = InitializeArgs::new(decimals, name, symbol).expect("metadata within limits");
    let ix = initialize_ix(program_id, &token_config, &mint.pubkey(), &authority.pubkey(), &args);
    send(svm, ix, &[authority, mint]).map(|_| token_config)
}

// ============================================================================
// Token operations
// ============================================================================

/// Build a MintTokens instruction with `authority` as a signer.
pub fn mint_tokens_ix(
    program_id: &Pubkey,
    token_config: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*token_config, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
        ],
        data: build_amount_instruction_data(TokenConfigInstruction::MintTokens, amount).to_vec(),
    }
}

/// Mint `amount` to `destination`.
pub fn mint_tokens(
    svm: &mut LiteSVM,
    program_id: &Pubkey,
    token_config: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Keypair,
    amount: u64,
) -> Result<(), TransactionError> {
    let ix = mint_tokens_ix(
        program_id,
        token_config,
        mint,
        destination,
        &authority.pubkey(),
        amount,
    );
    send(svm, ix, &[authority])
}

/// Transfer `amount` from `source` (owned by `owner`) to `destination`.
pub fn transfer_tokens(
    svm: &mut LiteSVM,
    program_id: &Pubkey,
    token_config: &Pubkey,
    source: &Pubkey,
    destination: &Pubkey,
    owner: &Keypair,
    amount: u64,
) -> Result<(), TransactionError> {
    let ix = Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*token_config, false),
            AccountMeta::new(*source, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(owner.pubkey(), true),
            AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
        ],
        data: build_amount_instruction_data(TokenConfigInstruction::TransferTokens, amount)
            .to_vec(),
    };
    send(svm, ix, &[owner])
}

/// Burn `amount` from `source` (owned by `owner`).
pub fn burn_tokens(
    svm: &mut LiteSVM,
    program_id: &Pubkey,
    token_config: &Pubkey,
    mint: &Pubkey,
    source: &Pubkey,
    owner: &Keypair,
    amount: u64,
) -> Result<(), TransactionError> {
    let ix = Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*token_config, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new(*source, false),
            AccountMeta::new_readonly(owner.pubkey(), true),
            AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
        ],
        data: build_amount_instruction_data(TokenConfigInstruction::BurnTokens, amount).to_vec(),
    };
    send(svm, ix, &[owner])
}

// ============================================================================
// Admin
// ============================================================================

/// Build an admin instruction: writable config, signing authority.
pub fn admin_ix(
    program_id: &Pubkey,
    token_config: &Pubkey,
    authority: &Pubkey,
    data: Vec<u8>,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*token_config, false),
            AccountMeta::new_readonly(*authority, true),
        ],
        data,
    }
}

/// Build a Pause instruction.
pub fn pause_ix(program_id: &Pubkey, token_config: &Pubkey, authority: &Pubkey) -> Instruction {
    let data = vec![TokenConfigInstruction::Pause.to_u8()];
    admin_ix(program_id, token_config, authority, data)
}

/// Build a TransferAuthority instruction.
pub fn transfer_authority_ix(
    program_id: &Pubkey,
    token_config: &Pubkey,
    authority: &Pubkey,
    new_authority: &Pubkey,
) -> Instruction {
    let data = build_transfer_authority_instruction_data(&new_authority.to_bytes()).to_vec();
    admin_ix(program_id, token_config, authority, data)
}

/// Pause token operations.
pub fn pause(
    svm: &mut LiteSVM,
    program_id: &Pubkey,
    token_config: &Pubkey,
    authority: &Keypair,
) -> Result<(), TransactionError> {
    let ix = pause_ix(program_id, token_config, &authority.pubkey());
    send(svm, ix, &[authority])
}

/// Resume token operations.
pub fn unpause(
    svm: &mut LiteSVM,
    program_id: &Pubkey,
    token_config: &Pubkey,
    authority: &Keypair,
) -> Result<(), TransactionError> {
    let data = vec![TokenConfigInstruction::Unpause.to_u8()];
    let ix = admin_ix(program_id, token_config, &authority.pubkey(), data);
    send(svm, ix, &[authority])
}

/// Hand authority to `new_authority`.
pub fn transfer_authority(
    svm: &mut LiteSVM,
    program_id: &Pubkey,
    token_config: &Pubkey,
    authority: &Keypair,
    new_authority: &Pubkey,
) -> Result<(), TransactionError> {
    let ix = transfer_authority_ix(program_id, token_config, &authority.pubkey(), new_authority);
    send(svm, ix, &[authority])
}

/// Strip the signer flag from `key` in `ix`.
pub fn without_signer(mut ix: Instruction, key: &Pubkey) -> Instruction {
    for meta in ix.accounts.iter_mut().filter(|meta| &meta.pubkey == key) {
        meta.is_signer = false;
    }
    ix
}
