//! Token Config Interface
//!
//! Shared types for the token configuration program and its clients.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            client / operator tooling          │
//! │  • builds instruction data                    │
//! │  • decodes custom error codes                 │
//! └──────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │              token-config program             │
//! │  • owns the TokenConfig PDA per mint          │
//! │  • gates mint/transfer/burn (pause, authority)│
//! │  • signs mint CPIs as the mint authority      │
//! └──────────────────────────────────────────────┘
//!                      │ CPI
//!                      ▼
//! ┌──────────────────────────────────────────────┐
//! │                SPL Token program              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`instruction`]: instruction discriminators, argument layouts and data builders
//! - `error`: the program's custom error codes
//! - `program_ids`: program ID constants

#![no_std]

mod error;
pub mod instruction;
mod program_ids;

pub use error::*;
pub use instruction::*;
pub use program_ids::*;

/// Seed prefix of the TokenConfig PDA.
///
/// Seeds: `["token-config", mint]`
pub const TOKEN_CONFIG_SEED: &[u8] = b"token-config";

/// Maximum length of the token name in bytes.
pub const MAX_NAME_LEN: usize = 32;

/// Maximum length of the token symbol in bytes.
pub const MAX_SYMBOL_LEN: usize = 10;
