//! Admin instructions for token config management.
//!
//! `Initialize` is open to any payer; the rest are gated on the config's
//! authority.

use pinocchio::{account_info::AccountInfo, program_error::ProgramError};

use super::assert_signer;

mod initialize;
mod set_paused;
mod transfer_authority;

pub use initialize::{InitializeAccounts, initialize_impl, process_initialize};
pub use set_paused::{pause_impl, process_pause, process_unpause, unpause_impl};
pub use transfer_authority::{process_transfer_authority, transfer_authority_impl};

/// Accounts for `Pause`, `Unpause` and `TransferAuthority`.
pub struct AdminAccounts<'a> {
    /// TokenConfig PDA to update
    pub token_config: &'a AccountInfo,
    /// Must match token_config.authority
    pub authority: &'a AccountInfo,
}

impl<'a> TryFrom<&'a [AccountInfo]> for AdminAccounts<'a> {
    type Error = ProgramError;

    fn try_from(accounts: &'a [AccountInfo]) -> Result<Self, Self::Error> {
        let [token_config, authority, ..] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };
        assert_signer(authority)?;
        Ok(Self {
            token_config,
            authority,
        })
    }
}
