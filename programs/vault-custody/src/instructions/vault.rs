use anchor_lang::prelude::*;

use super::accounts::*;
use super::constant::*;
use super::errors::VaultError;
use super::util::{check_external_token_id, check_vault_name};

pub fn initialize_vault(
    ctx: Context<InitializeVault>,
    external_token_id: String,
    name: String,
) -> Result<()> {
    check_external_token_id(&external_token_id)?;
    check_vault_name(&name)?;
    // Vaults are scoped under the default collection; it must exist first.
    require!(
        ctx.accounts.program_state.collection != Pubkey::default(),
        VaultError::NotInitialized
    );

    let vault = &mut ctx.accounts.vault;
    vault.version = CURRENT_VERSION;
    vault.authority = ctx.accounts.authority.key();
    vault.owner = Pubkey::default();
    vault.name = name;
    vault.external_token_id = external_token_id;
    vault.nonce = 0;
    vault.is_initialized = true;
    vault.is_minted = false;
    vault.is_claimed = false;
    vault.mint = Pubkey::default();
    vault.token_account = Pubkey::default();
    vault.claimer = None;
    vault.bump = ctx.bumps.vault;

    msg!(
        "Vault initialized: external_token_id={}, authority={}, address={}",
        vault.external_token_id,
        vault.authority,
        vault.key()
    );

    Ok(())
}

#[derive(Accounts)]
#[instruction(external_token_id: String)]
pub struct InitializeVault<'info> {
    #[account(
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        init,
        payer = authority,
        space = 8 + Vault::INIT_SPACE,
        seeds = [
            VAULT_SEED,
            program_state.collection.as_ref(),
            external_token_id.as_bytes()
        ],
        bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
