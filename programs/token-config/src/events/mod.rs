//! Event definitions for the token config program.
//!
//! Events are written to the transaction log with `sol_log_data` as two
//! fields: the little-endian `u64` event type, then the `Pod` event body.
//! Indexers read them back from the `Program data:` log lines.
//!
//! # Event Types
//!
//! - [`TokenInitializedEvent`] - Emitted when a mint and its config are created
//! - [`TokensMintedEvent`] - Emitted when supply is minted
//! - [`TokensTransferredEvent`] - Emitted when tokens move between accounts
//! - [`TokensBurnedEvent`] - Emitted when supply is burned
//! - [`PauseStateChangedEvent`] - Emitted on every successful pause/unpause
//! - [`AuthorityTransferredEvent`] - Emitted when the authority changes

use bytemuck::{Pod, Zeroable};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use pinocchio::pubkey::Pubkey;

/// Event type discriminators for identifying event types in logs.
///
/// # Ranges
/// - **1-15**: Token events (supply and balance movements)
/// - **16-31**: Admin events
#[repr(u64)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive, strum::IntoStaticStr,
)]
pub enum EventType {
    // =========================================================================
    // Token Events (1-15)
    // =========================================================================
    /// Mint and config created
    TokenInitialized = 1,
    /// Tokens minted
    TokensMinted = 2,
    /// Tokens transferred
    TokensTransferred = 3,
    /// Tokens burned
    TokensBurned = 4,
    // Reserved: 5-15

    // =========================================================================
    // Admin Events (16-31)
    // =========================================================================
    /// Pause flag changed
    PauseStateChanged = 16,
    /// Authority handed off
    AuthorityTransferred = 17,
}

/// A `Pod` event body with a fixed event type.
pub trait Event: Pod {
    /// Discriminator written before the body
    const EVENT_TYPE: EventType;
}

/// Write `event` to the transaction log.
pub fn emit_event<T: Event>(event: &T) {
    let discriminator = u64::from(T::EVENT_TYPE).to_le_bytes();
    pinocchio::log::sol_log_data(&[&discriminator, bytemuck::bytes_of(event)]);
}

/// Decode an event from its two logged fields.
///
/// Returns `None` if the discriminator is not `T`'s or the body has the
/// wrong size.
pub fn decode_event<T: Event>(discriminator: &[u8], body: &[u8]) -> Option<T> {
    let discriminator: [u8; 8] = discriminator.try_into().ok()?;
    if u64::from_le_bytes(discriminator) != u64::from(T::EVENT_TYPE) {
        return None;
    }
    bytemuck::try_pod_read_unaligned(body).ok()
}

/// Event emitted when a mint and its TokenConfig are created.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct TokenInitializedEvent {
    /// New mint
    pub mint: Pubkey,
    /// TokenConfig PDA (also the mint authority)
    pub config: Pubkey,
    /// Initial authority
    pub authority: Pubkey,
    /// Mint decimals
    pub decimals: u8,
    /// Padding
    pub _padding: [u8; 7],
}

impl Event for TokenInitializedEvent {
    const EVENT_TYPE: EventType = EventType::TokenInitialized;
}

/// Event emitted when tokens are minted.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct TokensMintedEvent {
    /// Token mint
    pub mint: Pubkey,
    /// Credited token account
    pub destination: Pubkey,
    /// Amount in base units
    pub amount: u64,
}

impl Event for TokensMintedEvent {
    const EVENT_TYPE: EventType = EventType::TokensMinted;
}

/// Event emitted when tokens are transferred.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct TokensTransferredEvent {
    /// Token mint
    pub mint: Pubkey,
    /// Debited token account
    pub source: Pubkey,
    /// Credited token account
    pub destination: Pubkey,
    /// Amount in base units
    pub amount: u64,
}

impl Event for TokensTransferredEvent {
    const EVENT_TYPE: EventType = EventType::TokensTransferred;
}

/// Event emitted when tokens are burned.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct TokensBurnedEvent {
    /// Token mint
    pub mint: Pubkey,
    /// Debited token account
    pub source: Pubkey,
    /// Amount in base units
    pub amount: u64,
}

impl Event for TokensBurnedEvent {
    const EVENT_TYPE: EventType = EventType::TokensBurned;
}

/// Event emitted by `Pause` and `Unpause`, including no-op calls.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct PauseStateChangedEvent {
    /// Token mint
    pub mint: Pubkey,
    /// Authority that made the call
    pub authority: Pubkey,
    /// Resulting state (1 = paused)
    pub paused: u8,
    /// Padding
    pub _padding: [u8; 7],
}

impl Event for PauseStateChangedEvent {
    const EVENT_TYPE: EventType = EventType::PauseStateChanged;
}

/// Event emitted when administrative control changes hands.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct AuthorityTransferredEvent {
    /// Token mint
    pub mint: Pubkey,
    /// Authority before the call
    pub previous_authority: Pubkey,
    /// Authority after the call
    pub new_authority: Pubkey,
}

impl Event for AuthorityTransferredEvent {
    const EVENT_TYPE: EventType = EventType::AuthorityTransferred;
}
