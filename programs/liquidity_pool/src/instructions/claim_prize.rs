use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::PrizeClaimedEvent;
use crate::state::Lottery;

/// Accounts required for claiming the lottery prize.
///
/// Ensures:
/// 1. A winner has been picked.
/// 2. Only the picked winner can claim.
/// 3. The prize is paid out once.
#[derive(Accounts)]
pub struct ClaimPrize<'info> {
    /// The winner, receiving the prize.
    #[account(mut)]
    pub winner: Signer<'info>,

    /// The lottery state account holding the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.id.to_le_bytes().as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, Lottery>>,
}

/// Processes the prize claim for the winner.
///
/// Steps:
/// 1. Verify that the caller is the unpaid winner.
/// 2. Mark the prize as claimed.
/// 3. Transfer the winner share of the pot to the caller.
pub fn process_claim_prize(ctx: Context<ClaimPrize>) -> Result<()> {
    let winner = ctx.accounts.winner.key();
    let lottery = &mut ctx.accounts.lottery;

    lottery.check_claim(&winner)?;
    let (winner_amount, _) = lottery.prize_split()?;

    lottery.prize_claimed = true;

    **lottery.to_account_info().try_borrow_mut_lamports()? -= winner_amount;
    **ctx.accounts.winner.try_borrow_mut_lamports()? += winner_amount;

    msg!("Prize of {} paid to {}", winner_amount, winner);

    emit!(PrizeClaimedEvent {
        lottery: lottery.key(),
        winner,
        amount: winner_amount,
    });

    Ok(())
}
