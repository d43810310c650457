use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as sysvar_instructions;
use anchor_lang::system_program;
use mpl_core::{instructions::BurnV1CpiBuilder, ID as MPL_CORE_PROGRAM_ID};

use super::accounts::*;
use super::constant::*;
use super::errors::VaultError;
use super::models::{Approval, ClaimApproval};
use super::util::{check_approval_freshness, verify_signed_approval};

pub fn claim_vault(
    ctx: Context<ClaimVault>,
    external_token_id: String,
    price: u64,
    timestamp: i64,
) -> Result<()> {
    let vault = &ctx.accounts.vault;
    require!(vault.is_minted, VaultError::NotMinted);
    require!(!vault.is_claimed, VaultError::AlreadyClaimed);

    let clock = Clock::get()?;
    check_approval_freshness(clock.unix_timestamp, timestamp)?;

    let approval = ClaimApproval {
        price,
        timestamp,
        external_token_id,
    };
    let message = approval.message(&vault.key());
    verify_signed_approval(
        &ctx.accounts.instructions_sysvar,
        &ctx.accounts.program_state.signer_public_key,
        &message,
    )?;

    if price > 0 {
        require!(
            ctx.accounts.claimer.lamports() >= price,
            VaultError::InsufficientFunds
        );
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.claimer.to_account_info(),
                    to: ctx.accounts.fee_receiver.to_account_info(),
                },
            ),
            price,
        )?;
    }

    // record_claim checks the claimer owns the asset before the
    // program-signed burn force-approves through the collection freeze.
    let vault = &mut ctx.accounts.vault;
    vault.record_claim(ctx.accounts.claimer.key())?;

    // Claiming releases the wrapped token off-chain, so the on-chain
    // unit is destroyed. The program-state PDA holds the permanent burn
    // delegate and signs the burn.
    let state_seeds: &[&[u8]] = &[PROGRAM_STATE_SEED, &[ctx.accounts.program_state.bump]];
    BurnV1CpiBuilder::new(&ctx.accounts.mpl_core_program.to_account_info())
        .asset(&ctx.accounts.asset.to_account_info())
        .collection(Some(&ctx.accounts.collection.to_account_info()))
        .authority(Some(&ctx.accounts.program_state.to_account_info()))
        .payer(&ctx.accounts.claimer.to_account_info())
        .invoke_signed(&[state_seeds])?;

    let vault = &ctx.accounts.vault;
    msg!(
        "Vault claimed: external_token_id={}, claimer={}, price={}",
        vault.external_token_id,
        ctx.accounts.claimer.key(),
        price
    );

    Ok(())
}

#[derive(Accounts)]
#[instruction(external_token_id: String)]
pub struct ClaimVault<'info> {
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
            external_token_id.as_bytes()
        ],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub claimer: Signer<'info>,

    /// CHECK: Must be the asset recorded at mint time
    #[account(mut, address = vault.mint @ VaultError::AddressDerivationMismatch)]
    pub asset: UncheckedAccount<'info>,

    /// CHECK: Collection of the asset, pinned to program state
    #[account(mut, address = program_state.collection)]
    pub collection: UncheckedAccount<'info>,

    /// CHECK: Address constrained to the recorded fee receiver
    #[account(mut, address = program_state.fee_receiver)]
    pub fee_receiver: UncheckedAccount<'info>,

    /// CHECK: Instructions sysvar, address constrained
    #[account(address = sysvar_instructions::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    /// CHECK: Address constraint pins the mpl-core program
    #[account(address = MPL_CORE_PROGRAM_ID)]
    pub mpl_core_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
