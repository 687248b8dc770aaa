use anchor_lang::prelude::*;
pub use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod randomness;
pub mod state;

declare_id!("GPyMAqy5mDHXHmpvFEN7sJyhLu8upoYr57ADhzeeoJ8s");

#[program]
pub mod liquidity_pool {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        process_initialize(ctx)
    }

    pub fn new_lottery(
        ctx: Context<NewLottery>,
        pool_value: u64,
        winner_prize: u8,
        owner_prize: u8,
    ) -> Result<()> {
        process_new_lottery(ctx, pool_value, winner_prize, owner_prize)
    }

    pub fn join_lottery(ctx: Context<JoinLottery>) -> Result<()> {
        process_join_lottery(ctx)
    }

    pub fn add_participant(ctx: Context<AddParticipant>, participant: Pubkey) -> Result<()> {
        process_add_participant(ctx, participant)
    }

    pub fn pick_winner(ctx: Context<PickWinner>) -> Result<()> {
        process_pick_winner(ctx)
    }

    pub fn commit_randomness(ctx: Context<CommitRandomness>) -> Result<()> {
        process_commit_randomness(ctx)
    }

    pub fn reveal_winner(ctx: Context<RevealWinner>) -> Result<()> {
        process_reveal_winner(ctx)
    }

    pub fn claim_prize(ctx: Context<ClaimPrize>) -> Result<()> {
        process_claim_prize(ctx)
    }

    pub fn close_lottery(ctx: Context<CloseLottery>) -> Result<()> {
        process_close_lottery(ctx)
    }
}
