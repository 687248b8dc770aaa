use anchor_lang::prelude::*;

#[event]
pub struct LotteryCreatedEvent {
    pub lottery: Pubkey,
    pub id: u64,
    pub owner: Pubkey,
    pub pool_value: u64,
    pub winner_prize: u8,
    pub owner_prize: u8,
}

#[event]
pub struct ParticipantJoinedEvent {
    pub lottery: Pubkey,
    pub participant: Pubkey,
    pub amount: u64,
    pub participant_count: u64,
}

#[event]
pub struct WinnerPickedEvent {
    pub lottery: Pubkey,
    pub winner: Pubkey,
    pub winner_amount: u64,
    pub owner_amount: u64,
}

#[event]
pub struct PrizeClaimedEvent {
    pub lottery: Pubkey,
    pub winner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct LotteryClosedEvent {
    pub lottery: Pubkey,
    pub owner: Pubkey,
}
