use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::events::ParticipantJoinedEvent;
use crate::state::Lottery;

/// Accounts required to buy an entry into a lottery.
#[derive(Accounts)]
pub struct JoinLottery<'info> {
    /// The account paying the entry price.
    #[account(mut)]
    pub participant: Signer<'info>,

    /// Lottery state account. Also holds the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.id.to_le_bytes().as_ref()],
        bump = lottery.bump,
        constraint = !lottery.is_drawn() @ LotteryError::WinnerAlreadyPicked
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// System program for the entry payment.
    pub system_program: Program<'info, System>,
}

/// Accounts required for the owner to enter someone for free.
#[derive(Accounts)]
pub struct AddParticipant<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.id.to_le_bytes().as_ref()],
        bump = lottery.bump,
        has_one = owner @ LotteryError::NotOwner,
        constraint = !lottery.is_drawn() @ LotteryError::WinnerAlreadyPicked
    )]
    pub lottery: Box<Account<'info, Lottery>>,
}

/// Enters the signer into the lottery.
///
/// Steps performed:
/// 1. Record the participant and the new pot total (open lottery, no duplicate, capacity).
/// 2. Transfer `pool_value` lamports from the participant to the lottery pot.
pub fn process_join_lottery(ctx: Context<JoinLottery>) -> Result<()> {
    let participant = ctx.accounts.participant.key();
    let price = ctx.accounts.lottery.pool_value;

    ctx.accounts.lottery.enter(participant, price)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.participant.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        price,
    )?;

    let lottery = &ctx.accounts.lottery;
    msg!("Participant {} joined lottery {}", participant, lottery.id);
    msg!("Participants: {}, pot: {}", lottery.participants.len(), lottery.total_amount);

    emit!(ParticipantJoinedEvent {
        lottery: lottery.key(),
        participant,
        amount: price,
        participant_count: lottery.participants.len() as u64,
    });

    Ok(())
}

/// Adds `participant` without payment. Owner only.
pub fn process_add_participant(ctx: Context<AddParticipant>, participant: Pubkey) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.enter(participant, 0)?;

    msg!("Owner added {} to lottery {}", participant, lottery.id);

    emit!(ParticipantJoinedEvent {
        lottery: lottery.key(),
        participant,
        amount: 0,
        participant_count: lottery.participants.len() as u64,
    });

    Ok(())
}
