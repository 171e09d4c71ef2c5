//! Program deployment helpers for token-config tests.

use std::path::PathBuf;

use litesvm::LiteSVM;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

/// Token config program ID (from the interface crate)
pub const TOKEN_CONFIG_PROGRAM_ID: Pubkey = Pubkey::new_from_array(
    five8_const::decode_32_const(token_config_interface::TOKEN_CONFIG_PROGRAM_ID),
);

/// Lamports given to every test wallet
pub const AIRDROP_LAMPORTS: u64 = 10_000_000_000;

/// Path of the SBF build artifact
fn program_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/deploy/token_config.so")
}

/// Deploy the token config program.
///
/// # Panics
///
/// When the program has not been built with `cargo build-sbf`.
pub fn deploy_token_config_program(svm: &mut LiteSVM) -> Pubkey {
    let path = program_path();
    assert!(
        path.exists(),
        "{} not found, run `cargo build-sbf` first",
        path.display()
    );
    svm.add_program_from_file(TOKEN_CONFIG_PROGRAM_ID, &path)
        .expect("program should load");
    TOKEN_CONFIG_PROGRAM_ID
}

/// Fresh VM with the program deployed and a funded authority.
pub struct TestContext {
    pub svm: LiteSVM,
    pub program_id: Pubkey,
    pub authority: Keypair,
}

impl TestContext {
    pub fn new() -> Self {
        let mut svm = LiteSVM::new();
        let program_id = deploy_token_config_program(&mut svm);
        let authority = funded_keypair(&mut svm);
        Self {
            svm,
            program_id,
            authority,
        }
    }
}

/// New keypair with `AIRDROP_LAMPORTS`.
pub fn funded_keypair(svm: &mut LiteSVM) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), AIRDROP_LAMPORTS).unwrap();
    keypair
}
