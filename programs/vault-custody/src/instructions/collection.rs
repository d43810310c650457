use anchor_lang::prelude::*;
use mpl_core::{
    instructions::CreateCollectionV2CpiBuilder,
    types::{
        PermanentBurnDelegate, PermanentFreezeDelegate, Plugin, PluginAuthority,
        PluginAuthorityPair,
    },
    ID as MPL_CORE_PROGRAM_ID,
};

use super::accounts::*;
use super::constant::*;
use super::errors::VaultError;
use super::util::check_config_authority;

/// Vault assets stay frozen inside the collection until claimed; the
/// permanent burn delegate lets the program-state PDA (the collection's
/// update authority) burn them through the freeze on claim and burn_nft.
pub fn collection_plugins() -> Vec<PluginAuthorityPair> {
    vec![
        PluginAuthorityPair {
            plugin: Plugin::PermanentFreezeDelegate(PermanentFreezeDelegate { frozen: true }),
            authority: Some(PluginAuthority::UpdateAuthority),
        },
        PluginAuthorityPair {
            plugin: Plugin::PermanentBurnDelegate(PermanentBurnDelegate {}),
            authority: Some(PluginAuthority::UpdateAuthority),
        },
    ]
}

pub fn create_collection(ctx: Context<CreateCollection>, collection_type: String) -> Result<()> {
    check_config_authority(
        &ctx.accounts.program_state.authority,
        &ctx.accounts.payer.key(),
    )?;

    let collection_bump = ctx.bumps.collection;
    let seeds = &[
        COLLECTION_SEED,
        collection_type.as_bytes(),
        &[collection_bump],
    ];

    // A funded PDA means a previous create_collection already ran.
    require!(
        ctx.accounts.collection.to_account_info().lamports() == 0,
        VaultError::CollectionAlreadyExists
    );

    let name = format!("Emblem {} Vaults", collection_type);

    CreateCollectionV2CpiBuilder::new(&ctx.accounts.mpl_core_program.to_account_info())
        .collection(&ctx.accounts.collection.to_account_info())
        .update_authority(Some(&ctx.accounts.program_state.to_account_info()))
        .payer(&ctx.accounts.payer.to_account_info())
        .system_program(&ctx.accounts.system_program.to_account_info())
        .name(name)
        .uri(ctx.accounts.program_state.base_uri.clone())
        .plugins(collection_plugins())
        .invoke_signed(&[seeds])?;

    // The first collection created becomes the default vault scope.
    let program_state = &mut ctx.accounts.program_state;
    if program_state.collection == Pubkey::default() {
        program_state.collection = ctx.accounts.collection.key();
    }

    msg!(
        "Collection created: type={}, address={}",
        collection_type,
        ctx.accounts.collection.key()
    );

    Ok(())
}

#[derive(Accounts)]
#[instruction(collection_type: String)]
pub struct CreateCollection<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: Initialized by mpl-core at the derived address
    #[account(
        mut,
        seeds = [COLLECTION_SEED, collection_type.as_bytes()],
        bump,
    )]
    pub collection: UncheckedAccount<'info>,

    /// CHECK: Address constraint pins the mpl-core program
    #[account(address = MPL_CORE_PROGRAM_ID)]
    pub mpl_core_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
