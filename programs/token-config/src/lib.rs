//! Token Config Program
//!
//! Administers a single SPL token per `TokenConfig` PDA: one authority creates
//! the mint, mints and burns supply, gates transfers, pauses/unpauses all token
//! activity and hands off administrative control.
//!
//! # Architecture
//!
//! The program owns the mint authority: at initialization the mint is created
//! with the TokenConfig PDA (`["token-config", mint]`) as its mint authority,
//! so every later mint is provably gated by this program.
//!
//! Handlers are split in two layers:
//! - `process_*` functions parse and validate accounts, then build a
//!   [`ledger::TokenProgramLedger`] that performs SPL Token CPIs.
//! - `*_impl` functions hold the authorization and state logic and talk to
//!   the balance ledger only through the [`ledger::Ledger`] trait, so they run
//!   unchanged against the in-memory ledger in [`testing`].
//!
//! # Instructions
//!
//! - `Initialize`: Create the mint and TokenConfig
//! - `MintTokens`: Mint to a token account (authority, not paused)
//! - `TransferTokens`: Move tokens between accounts (not paused)
//! - `BurnTokens`: Burn tokens from an account (not paused)
//! - `Pause` / `Unpause`: Toggle the pause gate (authority)
//! - `TransferAuthority`: Single-step authority handoff (authority)

#![cfg_attr(not(any(test, feature = "test-utils")), no_std)]

pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;


// Error and event types
pub use errors::{LedgerError, TokenConfigError};
pub use events::{
    AuthorityTransferredEvent, Event, EventType, PauseStateChangedEvent, TokenInitializedEvent,
    TokensBurnedEvent, TokensMintedEvent, TokensTransferredEvent, decode_event, emit_event,
};

// Instruction dispatch
pub use instructions::process_instruction;

// PDA derivation helpers
pub use pda::*;

// State types
pub use state::TokenConfig;

// Program ID, shared with clients through the interface crate
pub use token_config_interface::{ID, check_id, id};

#[cfg(not(feature = "no-entrypoint"))]
pinocchio::entrypoint!(process_instruction);
