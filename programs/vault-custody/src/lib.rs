use anchor_lang::prelude::*;

pub mod instructions;

declare_id!("DMLBNjTTdxA3Tnbx21ZsQU3hX1VUSW4SENPb3HCZrBCr");

#[program]
pub mod vault_custody {
    use super::*;
    pub use instructions::*;

    pub fn initialize_program(
        ctx: Context<InitializeProgram>,
        base_uri: String,
        signer: Pubkey,
        fee_receiver: Pubkey,
    ) -> Result<()> {
        instructions::initialize_program(ctx, base_uri, signer, fee_receiver)
    }

    pub fn create_collection(
        ctx: Context<CreateCollection>,
        collection_type: String,
    ) -> Result<()> {
        instructions::create_collection(ctx, collection_type)
    }

    pub fn initialize_vault(
        ctx: Context<InitializeVault>,
        external_token_id: String,
        name: String,
    ) -> Result<()> {
        instructions::initialize_vault(ctx, external_token_id, name)
    }

    pub fn mint_vault(
        ctx: Context<MintVault>,
        external_token_id: String,
        price: u64,
        timestamp: i64,
    ) -> Result<()> {
        instructions::mint_vault(ctx, external_token_id, price, timestamp)
    }

    pub fn claim_vault(
        ctx: Context<ClaimVault>,
        external_token_id: String,
        price: u64,
        timestamp: i64,
    ) -> Result<()> {
        instructions::claim_vault(ctx, external_token_id, price, timestamp)
    }

    pub fn burn_nft(ctx: Context<BurnNft>) -> Result<()> {
        instructions::burn_nft(ctx)
    }

    pub fn set_base_uri(ctx: Context<SetBaseUri>, new_base_uri: String) -> Result<()> {
        instructions::set_base_uri(ctx, new_base_uri)
    }

    pub fn update_signer_public_key(
        ctx: Context<UpdateSignerPublicKey>,
        new_signer_public_key: Pubkey,
    ) -> Result<()> {
        instructions::update_signer_public_key(ctx, new_signer_public_key)
    }

    // Query functions
    pub fn is_claimed(ctx: Context<QueryVault>) -> Result<bool> {
        instructions::is_claimed(ctx)
    }

    pub fn get_vault_owner(ctx: Context<QueryVault>) -> Result<Pubkey> {
        instructions::get_vault_owner(ctx)
    }

    pub fn get_claimer(ctx: Context<QueryVault>) -> Result<Option<Pubkey>> {
        instructions::get_claimer(ctx)
    }

    pub fn get_base_uri(ctx: Context<GetBaseUri>) -> Result<String> {
        instructions::get_base_uri(ctx)
    }
}
