use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, LOTTERY_SEED};
use crate::error::LotteryError;
use crate::events::LotteryCreatedEvent;
use crate::state::{Config, Lottery};

/// Accounts required to initialize the program configuration.
/// Runs once per deployment; every lottery id is taken from this account.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Config state account that numbers lotteries.
    #[account(
        init,
        payer = payer,
        space = 8 + Config::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts required to open a new lottery.
#[derive(Accounts)]
pub struct NewLottery<'info> {
    /// Creator of the lottery. Pays rent and becomes its owner.
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// The lottery being created, addressed by the next free id.
    #[account(
        init,
        payer = owner,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED, config.lottery_count.to_le_bytes().as_ref()],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

pub fn process_initialize(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.bump = ctx.bumps.config;
    config.lottery_count = 0;

    msg!("Config initialized by {}", ctx.accounts.payer.key());
    Ok(())
}

/// Opens lottery #`config.lottery_count` and advances the counter.
///
/// # Arguments
/// * `ctx` - Context holding the NewLottery accounts
/// * `pool_value` - Entry price in lamports
/// * `winner_prize` - Winner share of the pot in percent
/// * `owner_prize` - Owner share of the pot in percent
pub fn process_new_lottery(
    ctx: Context<NewLottery>,
    pool_value: u64,
    winner_prize: u8,
    owner_prize: u8,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let id = config.lottery_count;

    ctx.accounts.lottery.open(
        id,
        ctx.accounts.owner.key(),
        pool_value,
        winner_prize,
        owner_prize,
        ctx.bumps.lottery,
    )?;

    config.lottery_count = id.checked_add(1).ok_or(LotteryError::Overflow)?;

    msg!("Lottery {} opened, pool value {}", id, pool_value);
    msg!("Prize split: winner {}%, owner {}%", winner_prize, owner_prize);

    emit!(LotteryCreatedEvent {
        lottery: ctx.accounts.lottery.key(),
        id,
        owner: ctx.accounts.owner.key(),
        pool_value,
        winner_prize,
        owner_prize,
    });

    Ok(())
}
