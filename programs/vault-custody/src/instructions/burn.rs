use anchor_lang::prelude::*;
use mpl_core::{instructions::BurnV1CpiBuilder, ID as MPL_CORE_PROGRAM_ID};

use super::accounts::*;
use super::constant::*;
use super::errors::VaultError;

pub fn burn_nft(ctx: Context<BurnNft>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.record_burn(&ctx.accounts.authority.key())?;

    // The program-state PDA holds the permanent burn delegate and signs
    // the burn through the collection freeze.
    let state_seeds: &[&[u8]] = &[PROGRAM_STATE_SEED, &[ctx.accounts.program_state.bump]];
    BurnV1CpiBuilder::new(&ctx.accounts.mpl_core_program.to_account_info())
        .asset(&ctx.accounts.asset.to_account_info())
        .collection(Some(&ctx.accounts.collection.to_account_info()))
        .authority(Some(&ctx.accounts.program_state.to_account_info()))
        .payer(&ctx.accounts.authority.to_account_info())
        .invoke_signed(&[state_seeds])?;

    let vault = &ctx.accounts.vault;

    msg!(
        "Vault asset burned: external_token_id={}, authority={}, nonce={}",
        vault.external_token_id,
        vault.authority,
        vault.nonce
    );

    Ok(())
}

#[derive(Accounts)]
pub struct BurnNft<'info> {
    #[account(
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        mut,
        seeds = [
            VAULT_SEED,
            program_state.collection.as_ref(),
            vault.external_token_id.as_bytes()
        ],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Must be the asset recorded at mint time
    #[account(mut, address = vault.mint @ VaultError::AddressDerivationMismatch)]
    pub asset: UncheckedAccount<'info>,

    /// CHECK: Collection of the asset, pinned to program state
    #[account(mut, address = program_state.collection)]
    pub collection: UncheckedAccount<'info>,

    /// CHECK: Address constraint pins the mpl-core program
    #[account(address = MPL_CORE_PROGRAM_ID)]
    pub mpl_core_program: UncheckedAccount<'info>,
}
