use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::instructions::pick_winner::{ensure_drawable, settle_draw};
use crate::state::Lottery;

/// Accounts required to draw a winner from committed Switchboard randomness.
#[derive(Accounts)]
pub struct RevealWinner<'info> {
    /// Lottery owner. Receives the owner share at draw time.
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery.id.to_le_bytes().as_ref()],
        bump = lottery.bump,
        has_one = owner @ LotteryError::NotOwner,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_reveal_winner(ctx: Context<RevealWinner>) -> Result<()> {
    let clock = Clock::get()?;
    ensure_drawable(&ctx.accounts.lottery)?;

    require!(
        ctx.accounts.lottery.randomness_account != Pubkey::default()
            && ctx.accounts.randomness_account_data.key()
                == ctx.accounts.lottery.randomness_account,
        LotteryError::IncorrectRandomnessAccount
    );

    let seed = {
        let randomness_data =
            RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
                .map_err(|_| LotteryError::InvalidRandomnessData)?;
        randomness_data
            .get_value(&clock)
            .map_err(|_| LotteryError::RandomnessNotResolved)?
    };

    msg!("Randomness result: {}", seed[0]);

    settle_draw(&mut ctx.accounts.lottery, &ctx.accounts.owner, &seed)
}
