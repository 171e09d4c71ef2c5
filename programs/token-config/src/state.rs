//! Token config state account.

use bytemuck::{Pod, Zeroable};
use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use token_config_interface::{InitializeArgs, MAX_NAME_LEN, MAX_SYMBOL_LEN};

use crate::{TokenConfigError, pda::validate_stored_config_address};

/// Token configuration account, one per mint.
///
/// Lives at the PDA `["token-config", mint]` and is owned by this program.
/// The same PDA is the mint authority of `mint`, so supply can only grow
/// through `MintTokens`.
///
/// # Layout
///
/// ```text
/// offset  size  field
///      0     8  discriminator ("tokencfg")
///      8    32  authority
///     40    32  mint
///     72    32  name (zero padded)
///    104    10  symbol (zero padded)
///    114     1  name_len
///    115     1  symbol_len
///    116     1  decimals
///    117     1  paused
///    118     1  bump
///    119     1  reserved
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct TokenConfig {
    /// Account discriminator
    pub discriminator: [u8; 8],
    /// Sole administrative identity. Changed only by `TransferAuthority`.
    pub authority: Pubkey,
    /// SPL mint administered by this config. Immutable.
    pub mint: Pubkey,
    /// UTF-8 token name
    pub name: [u8; MAX_NAME_LEN],
    /// UTF-8 token symbol
    pub symbol: [u8; MAX_SYMBOL_LEN],
    /// Used bytes of `name`
    pub name_len: u8,
    /// Used bytes of `symbol`
    pub symbol_len: u8,
    /// Mint decimals, mirrored from the mint at creation
    pub decimals: u8,
    /// Nonzero while mint, transfer and burn are blocked
    pub paused: u8,
    /// Canonical PDA bump
    pub bump: u8,
    /// Reserved for future use
    pub _reserved: [u8; 1],
}

impl TokenConfig {
    /// Discriminator stored in the first 8 bytes of account data
    pub const DISCRIMINATOR: [u8; 8] = *b"tokencfg";

    /// Account size in bytes
    pub const LEN: usize = core::mem::size_of::<Self>();

    /// Build a fresh, unpaused config.
    ///
    /// # Errors
    ///
    /// Fails when the metadata in `args` is invalid (see [`Self::validate_metadata`]).
    pub fn new(
        authority: &Pubkey,
        mint: &Pubkey,
        bump: u8,
        args: &InitializeArgs,
    ) -> Result<Self, ProgramError> {
        Self::validate_metadata(args)?;
        Self::validate_authority(authority)?;

        let mut config = Self::zeroed();
        config.discriminator = Self::DISCRIMINATOR;
        config.authority = *authority;
        config.mint = *mint;
        config.name = args.name;
        config.symbol = args.symbol;
        config.name_len = args.name_len;
        config.symbol_len = args.symbol_len;
        config.decimals = args.decimals;
        config.paused = 0;
        config.bump = bump;
        Ok(config)
    }

    /// Check name and symbol lengths and encoding.
    ///
    /// # Errors
    ///
    /// `NameTooLong`, `SymbolTooLong` or `InvalidTokenMetadata`.
    pub fn validate_metadata(args: &InitializeArgs) -> Result<(), ProgramError> {
        let name = args.name_bytes().ok_or(TokenConfigError::NameTooLong)?;
        let symbol = args.symbol_bytes().ok_or(TokenConfigError::SymbolTooLong)?;

        if core::str::from_utf8(name).is_err() || core::str::from_utf8(symbol).is_err() {
            return Err(TokenConfigError::InvalidTokenMetadata.into());
        }

        // Padding must be zero so the stored record is canonical
        let name_padding = &args.name[name.len()..];
        let symbol_padding = &args.symbol[symbol.len()..];
        if name_padding.iter().chain(symbol_padding).any(|b| *b != 0) {
            return Err(TokenConfigError::InvalidTokenMetadata.into());
        }

        Ok(())
    }

    /// Reject the all-zero identity as an authority.
    ///
    /// # Errors
    ///
    /// `InvalidAuthority` for `[0; 32]`.
    pub fn validate_authority(authority: &Pubkey) -> Result<(), ProgramError> {
        if authority == &[0u8; 32] {
            return Err(TokenConfigError::InvalidAuthority.into());
        }
        Ok(())
    }

    /// View account data as a config.
    ///
    /// # Errors
    ///
    /// `InvalidConfigAccount` if the size or discriminator is wrong.
    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        let config: &Self = bytemuck::try_from_bytes(data)
            .map_err(|_| ProgramError::from(TokenConfigError::InvalidConfigAccount))?;
        if !config.is_initialized() {
            return Err(TokenConfigError::InvalidConfigAccount.into());
        }
        Ok(config)
    }

    /// Mutable view of account data as a config.
    ///
    /// # Errors
    ///
    /// `InvalidConfigAccount` if the size or discriminator is wrong.
    pub fn load_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        let config: &mut Self = bytemuck::try_from_bytes_mut(data)
            .map_err(|_| ProgramError::from(TokenConfigError::InvalidConfigAccount))?;
        if !config.is_initialized() {
            return Err(TokenConfigError::InvalidConfigAccount.into());
        }
        Ok(config)
    }

    /// Whether the discriminator has been written.
    pub fn is_initialized(&self) -> bool {
        self.discriminator == Self::DISCRIMINATOR
    }

    /// Token name.
    pub fn name(&self) -> &str {
        self.name
            .get(..self.name_len as usize)
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    /// Token symbol.
    pub fn symbol(&self) -> &str {
        self.symbol
            .get(..self.symbol_len as usize)
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    /// Whether token operations are blocked.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused != 0
    }

    /// Set or clear the pause flag.
    #[inline]
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused as u8;
    }

    /// # Errors
    ///
    /// `OperationsPaused` while the config is paused.
    #[inline]
    pub fn require_not_paused(&self) -> Result<(), ProgramError> {
        if self.is_paused() {
            return Err(TokenConfigError::OperationsPaused.into());
        }
        Ok(())
    }

    /// Authority check on the mint path.
    ///
    /// # Errors
    ///
    /// `UnauthorizedMinter` if `signer` is not the authority.
    #[inline]
    pub fn require_mint_authority(&self, signer: &Pubkey) -> Result<(), ProgramError> {
        if &self.authority != signer {
            return Err(TokenConfigError::UnauthorizedMinter.into());
        }
        Ok(())
    }

    /// Authority check on the admin path (pause, unpause, authority handoff).
    ///
    /// # Errors
    ///
    /// `UnauthorizedAdmin` if `signer` is not the authority.
    #[inline]
    pub fn require_admin(&self, signer: &Pubkey) -> Result<(), ProgramError> {
        if &self.authority != signer {
            return Err(TokenConfigError::UnauthorizedAdmin.into());
        }
        Ok(())
    }

    /// Check that `key` is derived from this config's mint and stored bump.
    ///
    /// # Errors
    ///
    /// `InvalidConfigurationAddress` on mismatch.
    pub fn validate_address(&self, key: &Pubkey) -> Result<(), ProgramError> {
        validate_stored_config_address(key, &self.mint, self.bump)
    }
}
