use anchor_lang::prelude::*;

use super::accounts::*;
use super::constant::*;
use super::util::check_base_uri;

pub fn initialize_program(
    ctx: Context<InitializeProgram>,
    base_uri: String,
    signer: Pubkey,
    fee_receiver: Pubkey,
) -> Result<()> {
    check_base_uri(&base_uri)?;

    let program_state = &mut ctx.accounts.program_state;
    program_state.version = CURRENT_VERSION;
    program_state.authority = ctx.accounts.authority.key();
    program_state.signer_public_key = signer;
    program_state.fee_receiver = fee_receiver;
    program_state.collection = Pubkey::default();
    program_state.base_uri = base_uri;
    program_state.bump = ctx.bumps.program_state;

    msg!(
        "Program state initialized: authority={}, signer={}, fee_receiver={}",
        program_state.authority,
        program_state.signer_public_key,
        program_state.fee_receiver
    );

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeProgram<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + ProgramState::INIT_SPACE,
        seeds = [PROGRAM_STATE_SEED],
        bump
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
