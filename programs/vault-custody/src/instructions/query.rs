use anchor_lang::prelude::*;

use super::accounts::*;

pub fn is_claimed(ctx: Context<QueryVault>) -> Result<bool> {
    Ok(ctx.accounts.vault.is_claimed)
}

pub fn get_vault_owner(ctx: Context<QueryVault>) -> Result<Pubkey> {
    Ok(ctx.accounts.vault.owner)
}

pub fn get_claimer(ctx: Context<QueryVault>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.vault.claimer)
}

pub fn get_base_uri(ctx: Context<GetBaseUri>) -> Result<String> {
    Ok(ctx.accounts.program_state.base_uri.clone())
}

#[derive(Accounts)]
pub struct QueryVault<'info> {
    pub vault: Account<'info, Vault>,
}

#[derive(Accounts)]
pub struct GetBaseUri<'info> {
    pub program_state: Account<'info, ProgramState>,
}
