use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::events::LotteryClosedEvent;
use crate::state::Lottery;

/// Returns the lottery rent to its owner once the round is fully settled.
///
/// The winner share is held in this account until `claim_prize`, so closing
/// waits for the claim. A winner that never signs, such as an
/// `add_participant` entry for a PDA, leaves the account open for good.
#[derive(Accounts)]
pub struct CloseLottery<'info> {
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.id.to_le_bytes().as_ref()],
        bump = lottery.bump,
        has_one = owner @ LotteryError::NotOwner,
        constraint = lottery.prize_claimed @ LotteryError::PrizeNotClaimed,
        close = owner
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

pub fn process_close_lottery(ctx: Context<CloseLottery>) -> Result<()> {
    msg!("Lottery {} closed, rent returned to owner", ctx.accounts.lottery.id);

    emit!(LotteryClosedEvent {
        lottery: ctx.accounts.lottery.key(),
        owner: ctx.accounts.owner.key(),
    });

    Ok(())
}
