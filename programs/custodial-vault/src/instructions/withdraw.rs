use crate::{errors::VaultError, events::WithdrawMade, instructions::shared::TransferAccounts};
use anchor_lang::prelude::*;

pub fn handler(ctx: Context<TransferAccounts>, amount: u64) -> Result<()> {
    require!(amount > 0, VaultError::ZeroAmount);
    require!(
        ctx.accounts.user_transfers.initialized,
        VaultError::NotInitialized
    );

    // Overdraw is rejected here, before any token movement.
    let user_transfers = &mut ctx.accounts.user_transfers;
    user_transfers.record_withdraw(amount)?;
    let vault = &mut ctx.accounts.vault;
    vault.record_withdraw(amount)?;

    ctx.accounts.transfer_out(amount)?;

    let clock = Clock::get()?;
    emit!(WithdrawMade {
        vault: ctx.accounts.vault.key(),
        depositor: ctx.accounts.user.key(),
        amount,
        vault_withdrawn: ctx.accounts.vault.withdrawn_amount,
        user_withdrawn: ctx.accounts.user_transfers.withdrawn_amount,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "[vault] withdraw user={} amount={} total_withdrawn={}",
        ctx.accounts.user.key(),
        amount,
        ctx.accounts.vault.withdrawn_amount
    );
    Ok(())
}
