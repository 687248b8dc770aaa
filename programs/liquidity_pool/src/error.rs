use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    // Lottery setup
    #[msg("Winner and owner prizes must add up to 100 percent")]
    InvalidPrizeSplit,
    #[msg("The pool value must be greater than zero")]
    InvalidPoolValue,

    // Participation
    #[msg("A winner has already been picked for this lottery")]
    WinnerAlreadyPicked,
    #[msg("This account already participates in the lottery")]
    AlreadyParticipating,
    #[msg("The lottery has reached its participant limit")]
    LotteryFull,
    #[msg("The amount calculation caused an overflow")]
    Overflow,
    #[msg("Only the lottery owner can perform this action")]
    NotOwner,
    #[msg("No participant at the selected position")]
    ParticipantNotFound,

    // Randomness
    #[msg("The SlotHashes sysvar holds no entries")]
    SlotHashesUnavailable,
    #[msg("Incorrect randomness account")]
    IncorrectRandomnessAccount,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("A randomness account is already committed to this lottery")]
    RandomnessAlreadyCommitted,
    #[msg("Invalid randomness data")]
    InvalidRandomnessData,
    #[msg("Randomness not yet resolved")]
    RandomnessNotResolved,

    // Payout
    #[msg("No winner has been picked yet")]
    WinnerNotPicked,
    #[msg("Only the picked winner can claim the prize")]
    NotWinner,
    #[msg("The prize has already been claimed")]
    PrizeAlreadyClaimed,
    #[msg("The prize must be claimed before the lottery can be closed")]
    PrizeNotClaimed,
}
