pub mod accounts;
pub mod admin;
pub mod burn;
pub mod claim;
pub mod collection;
pub mod initialize;
pub mod mint;
pub mod query;
pub mod vault;

pub mod models;
pub mod util;

pub use accounts::*;
pub use admin::*;
pub use burn::*;
pub use claim::*;
pub use collection::*;
pub use initialize::*;
pub use mint::*;
pub use models::*;
pub use query::*;
pub use vault::*;

pub mod constant {
    pub const CURRENT_VERSION: u8 = 1;

    /// How long a signed mint/claim approval stays valid after issuance.
    pub const APPROVAL_WINDOW_SECS: i64 = 300;
    /// Forward allowance for a signer clock slightly ahead of the cluster.
    pub const CLOCK_DRIFT_SECS: i64 = 30;

    pub const MAX_BASE_URI_LEN: usize = 200;
    pub const MAX_NAME_LEN: usize = 64;
    pub const MAX_EXTERNAL_TOKEN_ID_LEN: usize = 64;

    pub const PROGRAM_STATE_SEED: &[u8] = b"program_state";
    pub const COLLECTION_SEED: &[u8] = b"collection";
    pub const VAULT_SEED: &[u8] = b"vault";
    pub const VAULT_MINT_SEED: &[u8] = b"vault_mint";
}

pub mod errors {
    use anchor_lang::prelude::*;

    #[error_code]
    pub enum VaultError {
        #[msg("Unauthorized")]
        Unauthorized,
        #[msg("No matching signature verification record in this transaction")]
        InvalidSignature,
        #[msg("Malformed ed25519 verification record")]
        SignatureVerificationFailed,
        #[msg("Program state has already been initialized")]
        AlreadyInitialized,
        #[msg("The vault is not initialized")]
        NotInitialized,
        #[msg("Vault has already been minted")]
        AlreadyMinted,
        #[msg("Vault has already been claimed")]
        AlreadyClaimed,
        #[msg("The vault is not minted")]
        NotMinted,
        #[msg("Insufficient funds to cover the price")]
        InsufficientFunds,
        #[msg("Approval timestamp is stale or future-dated")]
        ApprovalExpired,
        #[msg("Supplied address does not match the derived address")]
        AddressDerivationMismatch,
        #[msg("Invalid external token ID")]
        InvalidExternalTokenId,
        #[msg("Collection already exists")]
        CollectionAlreadyExists,
        #[msg("Arithmetic overflow")]
        Overflow,
        #[msg("Vault name exceeds the maximum length")]
        InvalidName,
        #[msg("Base URI exceeds the maximum length")]
        InvalidBaseUri,
    }
}
