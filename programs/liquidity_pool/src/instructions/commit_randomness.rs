use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::instructions::pick_winner::ensure_drawable;
use crate::state::Lottery;

/// Accounts required to commit a Switchboard randomness account to a lottery.
///
/// Ensures:
/// 1. Only the owner of the lottery can commit the randomness.
/// 2. The randomness was requested in the previous slot and is not revealed yet.
/// 3. No randomness account was committed before.
#[derive(Accounts)]
pub struct CommitRandomness<'info> {
    pub owner: Signer<'info>,

    /// The lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.id.to_le_bytes().as_ref()],
        bump = lottery.bump,
        has_one = owner @ LotteryError::NotOwner,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_commit_randomness(ctx: Context<CommitRandomness>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery = &mut ctx.accounts.lottery;
    ensure_drawable(lottery)?;
    require!(
        !lottery.has_committed_randomness(),
        LotteryError::RandomnessAlreadyCommitted
    );

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| {
                msg!("Failed to parse randomness account data");
                LotteryError::InvalidRandomnessData
            })?;

    if randomness_data.seed_slot != clock.slot.saturating_sub(1) {
        msg!("Seed slot: {}", randomness_data.seed_slot);
        msg!("Current slot: {}", clock.slot);
        return Err(LotteryError::RandomnessAlreadyRevealed.into());
    }

    lottery.commit_randomness(ctx.accounts.randomness_account_data.key())?;

    msg!(
        "Randomness account {} committed to lottery {}",
        lottery.randomness_account,
        lottery.id
    );
    Ok(())
}
