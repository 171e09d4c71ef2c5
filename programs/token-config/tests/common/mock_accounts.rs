//! Mock account helpers for token-config tests.
//!
//! Token accounts are written directly in the SPL Token layout instead of
//! going through the token program, so tests only need the program under
//! test and the built-in SPL Token program.

use litesvm::LiteSVM;
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;
use token_config::TokenConfig;

use super::pda::SPL_TOKEN_PROGRAM_ID;

/// SPL Token account size
pub const TOKEN_ACCOUNT_LEN: usize = 165;

/// Rent-exempt balance of a 165-byte account
pub const TOKEN_ACCOUNT_RENT: u64 = 2_039_280;

/// Create an initialized, empty SPL token account for `mint` owned by `owner`.
pub fn create_token_account(svm: &mut LiteSVM, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    let address = Pubkey::new_unique();

    // SPL Token account layout (165 bytes)
    let mut data = vec![0u8; TOKEN_ACCOUNT_LEN];
    // mint: 32 bytes at offset 0
    data[0..32].copy_from_slice(mint.as_ref());
    // owner: 32 bytes at offset 32
    data[32..64].copy_from_slice(owner.as_ref());
    // amount: 8 bytes at offset 64 (zero)
    // delegate (COption<Pubkey>): 36 bytes at offset 72 (None)
    // state: 1 byte at offset 108
    data[108] = 1; // Initialized

    let account = Account {
        lamports: TOKEN_ACCOUNT_RENT,
        data,
        owner: SPL_TOKEN_PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    };
    svm.set_account(address, account).unwrap();

    address
}

/// Balance of a token account
pub fn token_balance(svm: &LiteSVM, account: &Pubkey) -> u64 {
    let data = svm.get_account(account).expect("token account exists").data;
    u64::from_le_bytes(data[64..72].try_into().unwrap())
}

/// Supply of a mint
pub fn mint_supply(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    let data = svm.get_account(mint).expect("mint exists").data;
    u64::from_le_bytes(data[36..44].try_into().unwrap())
}

/// Mint authority of a mint, if set
pub fn mint_authority(svm: &LiteSVM, mint: &Pubkey) -> Option<Pubkey> {
    let data = svm.get_account(mint).expect("mint exists").data;
    // COption tag: 4 bytes at offset 0
    if data[0..4] != [1, 0, 0, 0] {
        return None;
    }
    Some(Pubkey::try_from(&data[4..36]).unwrap())
}

/// Decimals of a mint
pub fn mint_decimals(svm: &LiteSVM, mint: &Pubkey) -> u8 {
    svm.get_account(mint).expect("mint exists").data[44]
}

/// Read the TokenConfig stored at `address`
pub fn read_config(svm: &LiteSVM, address: &Pubkey) -> TokenConfig {
    let account = svm.get_account(address).expect("config account exists");
    *TokenConfig::load(&account.data).expect("valid config data")
}

/// Copy the raw account at `from` to `to`, keeping owner and data.
pub fn clone_account(svm: &mut LiteSVM, from: &Pubkey, to: &Pubkey) {
    let account = svm.get_account(from).expect("source account exists");
    svm.set_account(*to, account).unwrap();
}
