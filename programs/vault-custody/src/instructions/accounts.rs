use anchor_lang::prelude::*;

use super::constant::*;
use super::errors::VaultError;

#[account]
#[derive(InitSpace)]
pub struct ProgramState {
    pub version: u8,
    pub authority: Pubkey,
    /// Off-chain signer whose ed25519 approvals authorize mint/claim.
    pub signer_public_key: Pubkey,
    pub fee_receiver: Pubkey,
    /// Default mpl-core collection; set by the first create_collection.
    pub collection: Pubkey,
    #[max_len(MAX_BASE_URI_LEN)]
    pub base_uri: String,
    pub bump: u8,
}

#[account]
#[derive(InitSpace)]
pub struct Vault {
    pub version: u8,
    /// Creator of the vault record; gates burn_nft.
    pub authority: Pubkey,
    /// Holder of the minted asset; meaningful only while is_minted.
    pub owner: Pubkey,
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    #[max_len(MAX_EXTERNAL_TOKEN_ID_LEN)]
    pub external_token_id: String,
    /// Incremented on every successful mint; bound into the signed
    /// mint message, so an approval is consumable at most once.
    pub nonce: u64,
    pub is_initialized: bool,
    pub is_minted: bool,
    pub is_claimed: bool,
    pub mint: Pubkey,
    pub token_account: Pubkey,
    pub claimer: Option<Pubkey>,
    pub bump: u8,
}

impl Vault {
    /// State transition for a successful mint. Environment checks
    /// (signature record, freshness, fee) happen before this is called.
    pub fn record_mint(&mut self, payer: Pubkey, asset: Pubkey) -> Result<()> {
        require!(self.is_initialized, VaultError::NotInitialized);
        require!(!self.is_minted, VaultError::AlreadyMinted);

        self.is_minted = true;
        self.owner = payer;
        self.mint = asset;
        self.token_account = asset;
        self.nonce = self.nonce.checked_add(1).ok_or(VaultError::Overflow)?;

        Ok(())
    }

    /// Only the current asset holder may claim; the burn that follows is
    /// force-approved by the program, so ownership is checked here.
    pub fn record_claim(&mut self, claimer: Pubkey) -> Result<()> {
        require!(self.is_minted, VaultError::NotMinted);
        require!(!self.is_claimed, VaultError::AlreadyClaimed);
        require!(claimer == self.owner, VaultError::Unauthorized);

        self.is_claimed = true;
        self.claimer = Some(claimer);

        Ok(())
    }

    /// Burn returns the vault to the unminted-but-initialized shape.
    /// The nonce is deliberately not reset, so mint approvals issued
    /// before the burn can never revalidate against a re-mint.
    pub fn record_burn(&mut self, caller: &Pubkey) -> Result<()> {
        require!(*caller == self.authority, VaultError::Unauthorized);
        require!(self.is_minted, VaultError::NotMinted);
        require!(!self.is_claimed, VaultError::AlreadyClaimed);

        self.is_minted = false;
        self.mint = Pubkey::default();
        self.token_account = Pubkey::default();

        Ok(())
    }
}
