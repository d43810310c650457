use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as sysvar_instructions;
use anchor_lang::system_program;
use mpl_core::{accounts::BaseCollectionV1, instructions::CreateV2CpiBuilder, ID as MPL_CORE_PROGRAM_ID};

use super::accounts::*;
use super::constant::*;
use super::errors::VaultError;
use super::models::{Approval, MintApproval};
use super::util::{check_approval_freshness, verify_signed_approval};

pub fn mint_vault(
    ctx: Context<MintVault>,
    external_token_id: String,
    price: u64,
    timestamp: i64,
) -> Result<()> {
    let vault = &ctx.accounts.vault;
    require!(!vault.is_minted, VaultError::AlreadyMinted);

    let clock = Clock::get()?;
    check_approval_freshness(clock.unix_timestamp, timestamp)?;

    // The signed message binds the current nonce, so a captured approval
    // cannot be replayed once the mint below advances it.
    let approval = MintApproval {
        price,
        timestamp,
        external_token_id: external_token_id.clone(),
        nonce: vault.nonce,
    };
    let message = approval.message(&vault.key());
    verify_signed_approval(
        &ctx.accounts.instructions_sysvar,
        &ctx.accounts.program_state.signer_public_key,
        &message,
    )?;

    let (expected_asset, asset_bump) = Pubkey::find_program_address(
        &[VAULT_MINT_SEED, external_token_id.as_bytes()],
        ctx.program_id,
    );
    require!(
        ctx.accounts.asset.key() == expected_asset,
        VaultError::AddressDerivationMismatch
    );

    // Settle the fee before any state flips; a failure here aborts the
    // whole transaction with the vault untouched.
    if price > 0 {
        require!(
            ctx.accounts.payer.lamports() >= price,
            VaultError::InsufficientFunds
        );
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: ctx.accounts.fee_receiver.to_account_info(),
                },
            ),
            price,
        )?;
    }

    let name = format!("Emblem Vault {}", external_token_id);
    let uri = format!(
        "{}{}",
        ctx.accounts.program_state.base_uri, external_token_id
    );
    let asset_seeds: &[&[u8]] = &[
        VAULT_MINT_SEED,
        external_token_id.as_bytes(),
        &[asset_bump],
    ];
    // The program-state PDA is the collection's update authority and
    // signs the creation into the collection.
    let state_seeds: &[&[u8]] = &[PROGRAM_STATE_SEED, &[ctx.accounts.program_state.bump]];

    CreateV2CpiBuilder::new(&ctx.accounts.mpl_core_program.to_account_info())
        .asset(&ctx.accounts.asset.to_account_info())
        .collection(Some(&ctx.accounts.collection.to_account_info()))
        .authority(Some(&ctx.accounts.program_state.to_account_info()))
        .payer(&ctx.accounts.payer.to_account_info())
        .owner(Some(&ctx.accounts.payer.to_account_info()))
        .system_program(&ctx.accounts.system_program.to_account_info())
        .name(name)
        .uri(uri)
        .invoke_signed(&[asset_seeds, state_seeds])?;

    let vault = &mut ctx.accounts.vault;
    vault.record_mint(ctx.accounts.payer.key(), expected_asset)?;

    msg!(
        "Vault minted: external_token_id={}, owner={}, nonce={}, price={}",
        vault.external_token_id,
        vault.owner,
        vault.nonce,
        price
    );

    Ok(())
}

#[derive(Accounts)]
#[instruction(external_token_id: String)]
pub struct MintVault<'info> {
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
    pub payer: Signer<'info>,

    /// CHECK: mpl-core asset PDA; derivation re-checked in the handler
    #[account(mut)]
    pub asset: UncheckedAccount<'info>,

    #[account(mut, address = program_state.collection)]
    pub collection: Account<'info, BaseCollectionV1>,

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
