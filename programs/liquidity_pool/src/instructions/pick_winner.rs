use anchor_lang::prelude::*;
use solana_program::sysvar::slot_hashes;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::events::WinnerPickedEvent;
use crate::randomness::{draw_seed, newest_slot_hash, winner_index};
use crate::state::Lottery;

/// Accounts required to draw a winner from recent slot hashes.
///
/// This ensures that:
/// 1. Only the lottery owner can pick a winner.
/// 2. The hash source really is the SlotHashes sysvar.
/// 3. A winner hasn't already been chosen.
/// 4. No Switchboard randomness has been committed; a committed lottery
///    must be drawn through `reveal_winner`.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// Lottery owner. Receives the owner share at draw time.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The lottery state account holding the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.id.to_le_bytes().as_ref()],
        bump = lottery.bump,
        has_one = owner @ LotteryError::NotOwner,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// CHECK: address constrained to the SlotHashes sysvar; raw data is read in the handler.
    #[account(address = slot_hashes::ID)]
    pub recent_slothashes: UncheckedAccount<'info>,
}

pub fn process_pick_winner(ctx: Context<PickWinner>) -> Result<()> {
    let clock = Clock::get()?;
    ensure_slot_hash_drawable(&ctx.accounts.lottery)?;

    let slot_hash = {
        let data = ctx.accounts.recent_slothashes.try_borrow_data()?;
        newest_slot_hash(&data)?
    };
    let seed = draw_seed(
        &slot_hash,
        clock.slot,
        clock.unix_timestamp,
        &ctx.accounts.lottery.key(),
    );

    settle_draw(&mut ctx.accounts.lottery, &ctx.accounts.owner, &seed)
}

/// A draw needs an open lottery with at least one entry. An empty lottery
/// fails with `InvalidArgument`, which clients match on by name.
pub(crate) fn ensure_drawable(lottery: &Lottery) -> Result<()> {
    require!(!lottery.is_drawn(), LotteryError::WinnerAlreadyPicked);
    if lottery.participants.is_empty() {
        msg!("Lottery {} has no participants", lottery.id);
        return Err(ProgramError::InvalidArgument.into());
    }
    Ok(())
}

/// Once an oracle account is committed the slot-hash path is closed, so the
/// owner cannot pick whichever source suits them.
pub(crate) fn ensure_slot_hash_drawable(lottery: &Lottery) -> Result<()> {
    ensure_drawable(lottery)?;
    require!(
        !lottery.has_committed_randomness(),
        LotteryError::RandomnessAlreadyCommitted
    );
    Ok(())
}

/// Picks the winner from `seed`, pays the owner share and records the result.
/// The winner share stays in the lottery account until `claim_prize`.
pub(crate) fn settle_draw<'info>(
    lottery: &mut Account<'info, Lottery>,
    owner: &Signer<'info>,
    seed: &[u8; 32],
) -> Result<()> {
    let index =
        winner_index(seed, lottery.participants.len()).ok_or(ProgramError::InvalidArgument)?;

    msg!("Participants: {}", lottery.participants.len());
    msg!("Winning index: {}", index);

    let winner = lottery.set_winner(index)?;
    let (winner_amount, owner_amount) = lottery.prize_split()?;

    if owner_amount > 0 {
        **lottery.to_account_info().try_borrow_mut_lamports()? -= owner_amount;
        **owner.try_borrow_mut_lamports()? += owner_amount;
    }

    msg!("Winner: {}", winner);
    msg!("Winner prize: {}, owner prize: {}", winner_amount, owner_amount);

    emit!(WinnerPickedEvent {
        lottery: lottery.key(),
        winner,
        winner_amount,
        owner_amount,
    });

    Ok(())
}
