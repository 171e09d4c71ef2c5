//! Instruction discriminators and argument layouts.
//!
//! Instruction data is a one-byte discriminator followed by a packed,
//! little-endian `Pod` argument struct (or nothing, for argument-less
//! instructions). Arguments are read with an unaligned copy, so the layouts
//! below carry no alignment padding requirements on the wire.

use bytemuck::{Pod, Zeroable};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use pinocchio::pubkey::Pubkey;

use crate::{MAX_NAME_LEN, MAX_SYMBOL_LEN};

/// Token config instruction set.
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, strum::IntoStaticStr,
)]
pub enum TokenConfigInstruction {
    /// Create the mint and its TokenConfig PDA.
    ///
    /// # Accounts
    /// 0. `[writable]` TokenConfig PDA ["token-config", mint]
    /// 1. `[writable, signer]` Mint account to create
    /// 2. `[writable, signer]` Authority (payer)
    /// 3. `[]` SPL Token program
    /// 4. `[]` System program
    Initialize = 0,

    /// Mint tokens to a token account. Authority only, blocked while paused.
    ///
    /// # Accounts
    /// 0. `[]` TokenConfig PDA
    /// 1. `[writable]` Mint
    /// 2. `[writable]` Destination token account
    /// 3. `[signer]` Authority
    /// 4. `[]` SPL Token program
    MintTokens = 1,

    /// Transfer tokens between token accounts. Blocked while paused.
    ///
    /// # Accounts
    /// 0. `[]` TokenConfig PDA
    /// 1. `[writable]` Source token account
    /// 2. `[writable]` Destination token account
    /// 3. `[signer]` Source owner
    /// 4. `[]` SPL Token program
    TransferTokens = 2,

    /// Burn tokens from a token account. Blocked while paused.
    ///
    /// # Accounts
    /// 0. `[]` TokenConfig PDA
    /// 1. `[writable]` Mint
    /// 2. `[writable]` Source token account
    /// 3. `[signer]` Source owner
    /// 4. `[]` SPL Token program
    BurnTokens = 3,

    /// Pause all token operations.
    ///
    /// # Accounts
    /// 0. `[writable]` TokenConfig PDA
    /// 1. `[signer]` Authority
    Pause = 4,

    /// Resume token operations.
    ///
    /// # Accounts
    /// 0. `[writable]` TokenConfig PDA
    /// 1. `[signer]` Authority
    Unpause = 5,

    /// Hand administrative control to a new authority (single step).
    ///
    /// # Accounts
    /// 0. `[writable]` TokenConfig PDA
    /// 1. `[signer]` Current authority
    TransferAuthority = 6,
}

impl TokenConfigInstruction {
    /// Split instruction data into its discriminator and argument bytes.
    pub fn unpack(data: &[u8]) -> Option<(Self, &[u8])> {
        let (discriminator, rest) = data.split_first()?;
        let instruction = Self::try_from(*discriminator).ok()?;
        Some((instruction, rest))
    }

    /// Discriminator byte.
    pub fn to_u8(self) -> u8 {
        self.into()
    }
}

/// Arguments for `Initialize`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct InitializeArgs {
    /// Mint decimals
    pub decimals: u8,
    /// Number of used bytes in `name`
    pub name_len: u8,
    /// Number of used bytes in `symbol`
    pub symbol_len: u8,
    /// UTF-8 name, zero padded
    pub name: [u8; MAX_NAME_LEN],
    /// UTF-8 symbol, zero padded
    pub symbol: [u8; MAX_SYMBOL_LEN],
}

impl InitializeArgs {
    /// Size in bytes
    pub const LEN: usize = core::mem::size_of::<Self>();

    /// Pack name and symbol into fixed-size buffers.
    ///
    /// Returns `None` when either string exceeds its maximum length.
    pub fn new(decimals: u8, name: &str, symbol: &str) -> Option<Self> {
        if name.len() > MAX_NAME_LEN || symbol.len() > MAX_SYMBOL_LEN {
            return None;
        }

        let mut args = Self::zeroed();
        args.decimals = decimals;
        args.name_len = name.len() as u8;
        args.symbol_len = symbol.len() as u8;
        args.name[..name.len()].copy_from_slice(name.as_bytes());
        args.symbol[..symbol.len()].copy_from_slice(symbol.as_bytes());
        Some(args)
    }

    /// Used name bytes, or `None` if `name_len` is out of range.
    pub fn name_bytes(&self) -> Option<&[u8]> {
        self.name.get(..self.name_len as usize)
    }

    /// Used symbol bytes, or `None` if `symbol_len` is out of range.
    pub fn symbol_bytes(&self) -> Option<&[u8]> {
        self.symbol.get(..self.symbol_len as usize)
    }
}

/// Arguments for `MintTokens`, `TransferTokens` and `BurnTokens`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct AmountArgs {
    /// Amount in base units
    pub amount: u64,
}

impl AmountArgs {
    /// Size in bytes
    pub const LEN: usize = core::mem::size_of::<Self>();
}

/// Arguments for `TransferAuthority`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct TransferAuthorityArgs {
    /// The new authority address
    pub new_authority: Pubkey,
}

impl TransferAuthorityArgs {
    /// Size in bytes
    pub const LEN: usize = core::mem::size_of::<Self>();
}

/// Read an argument struct from instruction data (after the discriminator).
///
/// The slice must be exactly `size_of::<T>()` bytes.
pub fn parse_args<T: Pod>(data: &[u8]) -> Option<T> {
    bytemuck::try_pod_read_unaligned(data).ok()
}

// ============================================================================
// Instruction Data Builders
// ============================================================================

/// Build instruction data for `Initialize`.
///
/// Layout: [discriminator: u8, args: InitializeArgs (45 bytes)]
pub fn build_initialize_instruction_data(args: &InitializeArgs) -> [u8; 1 + InitializeArgs::LEN] {
    let mut data = [0u8; 1 + InitializeArgs::LEN];
    data[0] = TokenConfigInstruction::Initialize.to_u8();
    data[1..].copy_from_slice(bytemuck::bytes_of(args));
    data
}

/// Build instruction data for an amount-carrying instruction
/// (`MintTokens`, `TransferTokens`, `BurnTokens`).
///
/// Layout: [discriminator: u8, amount: u64 (LE)]
pub fn build_amount_instruction_data(
    instruction: TokenConfigInstruction,
    amount: u64,
) -> [u8; 1 + AmountArgs::LEN] {
    let mut data = [0u8; 1 + AmountArgs::LEN];
    data[0] = instruction.to_u8();
    data[1..].copy_from_slice(&amount.to_le_bytes());
    data
}

/// Build instruction data for `TransferAuthority`.
///
/// Layout: [discriminator: u8, new_authority: [u8; 32]]
pub fn build_transfer_authority_instruction_data(
    new_authority: &Pubkey,
) -> [u8; 1 + TransferAuthorityArgs::LEN] {
    let mut data = [0u8; 1 + TransferAuthorityArgs::LEN];
    data[0] = TokenConfigInstruction::TransferAuthority.to_u8();
    data[1..].copy_from_slice(new_authority);
    data
}
