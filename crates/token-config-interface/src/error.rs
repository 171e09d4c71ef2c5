//! Token config error types.

use pinocchio::program_error::ProgramError;

/// First custom error code used by the program.
///
/// Codes below this value belong to the SPL Token program, whose CPI
/// failures are passed through unchanged, so the two ranges never collide.
pub const ERROR_CODE_OFFSET: u32 = 6000;

/// Custom error codes returned by the token config program.
///
/// Surfaced to clients as `ProgramError::Custom(code)`. Failures raised by
/// the SPL Token program during a CPI are passed through with the token
/// program's own codes and are not part of this table.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub enum TokenConfigError {
    /// A TokenConfig already exists at the derived address
    AlreadyInitialized = 6000,
    /// Supplied config address does not match the PDA derived from its mint
    InvalidConfigurationAddress = 6001,
    /// Signer is not the authority (mint path)
    UnauthorizedMinter = 6002,
    /// Signer is not the authority (admin path)
    UnauthorizedAdmin = 6003,
    /// Token is paused
    OperationsPaused = 6004,
    /// Mint account does not match the config's mint
    InvalidMint = 6005,
    /// Token account holds a different mint than the config's mint
    TokenAccountMintMismatch = 6006,
    /// Authority must not be the zero address
    InvalidAuthority = 6007,
    /// Name longer than `MAX_NAME_LEN`
    NameTooLong = 6008,
    /// Symbol longer than `MAX_SYMBOL_LEN`
    SymbolTooLong = 6009,
    /// Name or symbol is not valid UTF-8
    InvalidTokenMetadata = 6010,
    /// Instruction data is malformed
    InvalidInstructionData = 6011,
    /// Account is not a TokenConfig owned by this program
    InvalidConfigAccount = 6012,
    /// Token program account is not SPL Token
    InvalidTokenProgram = 6013,
    /// System program account is not the system program
    InvalidSystemProgram = 6014,
    /// Required signer did not sign
    AccountNotSigner = 6015,
    /// Required writable account is read-only
    AccountNotWritable = 6016,
}

impl TokenConfigError {
    /// Convert to error code
    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    /// Create from error code
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            6000 => Some(Self::AlreadyInitialized),
            6001 => Some(Self::InvalidConfigurationAddress),
            6002 => Some(Self::UnauthorizedMinter),
            6003 => Some(Self::UnauthorizedAdmin),
            6004 => Some(Self::OperationsPaused),
            6005 => Some(Self::InvalidMint),
            6006 => Some(Self::TokenAccountMintMismatch),
            6007 => Some(Self::InvalidAuthority),
            6008 => Some(Self::NameTooLong),
            6009 => Some(Self::SymbolTooLong),
            6010 => Some(Self::InvalidTokenMetadata),
            6011 => Some(Self::InvalidInstructionData),
            6012 => Some(Self::InvalidConfigAccount),
            6013 => Some(Self::InvalidTokenProgram),
            6014 => Some(Self::InvalidSystemProgram),
            6015 => Some(Self::AccountNotSigner),
            6016 => Some(Self::AccountNotWritable),
            _ => None,
        }
    }

    /// Decode a `ProgramError` returned by the program, if it carries one of our codes.
    pub fn from_program_error(error: &ProgramError) -> Option<Self> {
        match error {
            ProgramError::Custom(code) => Self::from_u32(*code),
            _ => None,
        }
    }

    /// Human-readable description shown to users.
    pub const fn message(self) -> &'static str {
        match self {
            Self::AlreadyInitialized => "Token configuration already initialized",
            Self::InvalidConfigurationAddress => {
                "Configuration address does not match its derived address"
            }
            Self::UnauthorizedMinter => "Unauthorized: Only authority can mint tokens",
            Self::UnauthorizedAdmin => "Unauthorized: Only authority can perform admin operations",
            Self::OperationsPaused => "Token operations are currently paused",
            Self::InvalidMint => "Mint account does not match the configuration",
            Self::TokenAccountMintMismatch => "Token account does not hold the configured mint",
            Self::InvalidAuthority => "Authority must be a non-zero identity",
            Self::NameTooLong => "Token name exceeds 32 bytes",
            Self::SymbolTooLong => "Token symbol exceeds 10 bytes",
            Self::InvalidTokenMetadata => "Token name or symbol is not valid UTF-8",
            Self::InvalidInstructionData => "Instruction data is malformed",
            Self::InvalidConfigAccount => {
                "Account is not a token configuration owned by this program"
            }
            Self::InvalidTokenProgram => "Token program account is not SPL Token",
            Self::InvalidSystemProgram => "System program account is not the system program",
            Self::AccountNotSigner => "Required signer did not sign",
            Self::AccountNotWritable => "Required writable account is read-only",
        }
    }
}

impl core::fmt::Display for TokenConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{name}: {}", self.message())
    }
}

impl From<TokenConfigError> for ProgramError {
    fn from(e: TokenConfigError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
