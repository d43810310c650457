use anchor_lang::prelude::*;

use super::accounts::*;
use super::constant::*;
use super::util::{check_base_uri, check_config_authority};

pub fn set_base_uri(ctx: Context<SetBaseUri>, new_base_uri: String) -> Result<()> {
    let program_state = &mut ctx.accounts.program_state;
    check_config_authority(&program_state.authority, &ctx.accounts.authority.key())?;
    check_base_uri(&new_base_uri)?;

    program_state.base_uri = new_base_uri;

    msg!(
        "Base URI updated: authority={}, base_uri={}",
        program_state.authority,
        program_state.base_uri
    );

    Ok(())
}

pub fn update_signer_public_key(
    ctx: Context<UpdateSignerPublicKey>,
    new_signer_public_key: Pubkey,
) -> Result<()> {
    let program_state = &mut ctx.accounts.program_state;
    check_config_authority(&program_state.authority, &ctx.accounts.authority.key())?;

    program_state.signer_public_key = new_signer_public_key;

    msg!(
        "Signer public key updated: authority={}, signer={}",
        program_state.authority,
        program_state.signer_public_key
    );

    Ok(())
}

#[derive(Accounts)]
pub struct SetBaseUri<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump
    )]
    pub program_state: Account<'info, ProgramState>,

    pub authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct UpdateSignerPublicKey<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump
    )]
    pub program_state: Account<'info, ProgramState>,

    pub authority: Signer<'info>,
}
