use anchor_lang::prelude::*;

use crate::constants::{MAX_PARTICIPANTS, PERCENT_BASIS};
use crate::error::LotteryError;

/// Program-wide settings, created once by `initialize`.
#[account]
#[derive(InitSpace, Default)]
pub struct Config {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Number of lotteries created so far. Doubles as the id of the next one.
    pub lottery_count: u64,
}

#[account]
#[derive(InitSpace, Default)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Sequential id taken from `Config::lottery_count` at creation.
    pub id: u64,

    /// Creator of the lottery. Receives the owner share of the pot.
    pub owner: Pubkey,

    /// Lamports paid in by participants so far.
    pub total_amount: u64,

    /// Entry price in lamports for a single participant.
    pub pool_value: u64,

    /// Percentage of `total_amount` paid to the winner.
    pub winner_prize: u8,

    /// Percentage of `total_amount` paid to the owner.
    pub owner_prize: u8,

    /// Entries in join order.
    #[max_len(100)]
    pub participants: Vec<Pubkey>,

    /// `None` until a draw has happened.
    pub winner: Option<Pubkey>,

    /// Set once the winner has withdrawn their share.
    pub prize_claimed: bool,

    /// Switchboard randomness account committed for an oracle draw.
    /// `Pubkey::default()` when nothing is committed.
    pub randomness_account: Pubkey,
}

impl Lottery {
    /// Fills a freshly allocated lottery. Percentages must add up to 100.
    pub fn open(
        &mut self,
        id: u64,
        owner: Pubkey,
        pool_value: u64,
        winner_prize: u8,
        owner_prize: u8,
        bump: u8,
    ) -> std::result::Result<(), LotteryError> {
        if u64::from(winner_prize) + u64::from(owner_prize) != PERCENT_BASIS {
            return Err(LotteryError::InvalidPrizeSplit);
        }
        if pool_value == 0 {
            return Err(LotteryError::InvalidPoolValue);
        }

        self.bump = bump;
        self.id = id;
        self.owner = owner;
        self.total_amount = 0;
        self.pool_value = pool_value;
        self.winner_prize = winner_prize;
        self.owner_prize = owner_prize;
        self.participants = Vec::new();
        self.winner = None;
        self.prize_claimed = false;
        self.randomness_account = Pubkey::default();
        Ok(())
    }

    pub fn is_drawn(&self) -> bool {
        self.winner.is_some()
    }

    pub fn is_participant(&self, key: &Pubkey) -> bool {
        self.participants.contains(key)
    }

    /// Adds `participant` and credits `paid` lamports to the pot.
    /// Complimentary entries pass `paid = 0`.
    pub fn enter(
        &mut self,
        participant: Pubkey,
        paid: u64,
    ) -> std::result::Result<(), LotteryError> {
        if self.is_drawn() {
            return Err(LotteryError::WinnerAlreadyPicked);
        }
        if self.is_participant(&participant) {
            return Err(LotteryError::AlreadyParticipating);
        }
        if self.participants.len() >= MAX_PARTICIPANTS {
            return Err(LotteryError::LotteryFull);
        }

        self.total_amount = self
            .total_amount
            .checked_add(paid)
            .ok_or(LotteryError::Overflow)?;
        self.participants.push(participant);
        Ok(())
    }

    /// Splits the pot into `(winner_amount, owner_amount)`.
    /// The winner share rounds down and the owner takes the remainder,
    /// so both always add up to `total_amount`.
    pub fn prize_split(&self) -> std::result::Result<(u64, u64), LotteryError> {
        let winner_amount = u128::from(self.total_amount)
            .checked_mul(u128::from(self.winner_prize))
            .ok_or(LotteryError::Overflow)?
            / u128::from(PERCENT_BASIS);
        let winner_amount = u64::try_from(winner_amount).map_err(|_| LotteryError::Overflow)?;
        let owner_amount = self
            .total_amount
            .checked_sub(winner_amount)
            .ok_or(LotteryError::Overflow)?;
        Ok((winner_amount, owner_amount))
    }

    pub fn has_committed_randomness(&self) -> bool {
        self.randomness_account != Pubkey::default()
    }

    /// Binds the lottery to one Switchboard randomness account. A commitment
    /// cannot be replaced, so the oracle draw cannot be re-rolled.
    pub fn commit_randomness(&mut self, account: Pubkey) -> std::result::Result<(), LotteryError> {
        if self.is_drawn() {
            return Err(LotteryError::WinnerAlreadyPicked);
        }
        if self.has_committed_randomness() {
            return Err(LotteryError::RandomnessAlreadyCommitted);
        }
        self.randomness_account = account;
        Ok(())
    }

    /// Records the participant at `index` as the winner.
    pub fn set_winner(&mut self, index: usize) -> std::result::Result<Pubkey, LotteryError> {
        if self.is_drawn() {
            return Err(LotteryError::WinnerAlreadyPicked);
        }
        let winner = *self
            .participants
            .get(index)
            .ok_or(LotteryError::ParticipantNotFound)?;
        self.winner = Some(winner);
        Ok(winner)
    }

    /// Checks that `claimant` may withdraw the winner share.
    pub fn check_claim(&self, claimant: &Pubkey) -> std::result::Result<(), LotteryError> {
        match self.winner {
            None => Err(LotteryError::WinnerNotPicked),
            Some(winner) if winner != *claimant => Err(LotteryError::NotWinner),
            Some(_) if self.prize_claimed => Err(LotteryError::PrizeAlreadyClaimed),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_lottery(pool_value: u64, winner_prize: u8, owner_prize: u8) -> Lottery {
        let mut lottery = Lottery::default();
        lottery
            .open(0, Pubkey::new_unique(), pool_value, winner_prize, owner_prize, 255)
            .unwrap();
        lottery
    }

    #[test]
    fn test_open_rejects_bad_split() {
        let mut lottery = Lottery::default();
        let res = lottery.open(0, Pubkey::new_unique(), 100, 80, 30, 255);
        assert!(matches!(res, Err(LotteryError::InvalidPrizeSplit)));
    }

    #[test]
    fn test_open_rejects_zero_pool_value() {
        let mut lottery = Lottery::default();
        let res = lottery.open(0, Pubkey::new_unique(), 0, 80, 20, 255);
        assert!(matches!(res, Err(LotteryError::InvalidPoolValue)));
    }

    #[test]
    fn test_enter_rejects_duplicate() {
        let mut lottery = open_lottery(100, 80, 20);
        let alice = Pubkey::new_unique();
        lottery.enter(alice, 100).unwrap();
        assert!(matches!(
            lottery.enter(alice, 100),
            Err(LotteryError::AlreadyParticipating)
        ));
        assert_eq!(lottery.total_amount, 100);
    }

    #[test]
    fn test_enter_respects_capacity() {
        let mut lottery = open_lottery(1, 50, 50);
        for _ in 0..MAX_PARTICIPANTS {
            lottery.enter(Pubkey::new_unique(), 1).unwrap();
        }
        assert!(matches!(
            lottery.enter(Pubkey::new_unique(), 1),
            Err(LotteryError::LotteryFull)
        ));
    }

    #[test]
    fn test_enter_overflow() {
        let mut lottery = open_lottery(u64::MAX, 50, 50);
        lottery.enter(Pubkey::new_unique(), u64::MAX).unwrap();
        assert!(matches!(
            lottery.enter(Pubkey::new_unique(), 1),
            Err(LotteryError::Overflow)
        ));
        assert_eq!(lottery.participants.len(), 1);
    }

    #[test]
    fn test_prize_split_rounds_in_owner_favour() {
        let mut lottery = open_lottery(33, 80, 20);
        lottery.enter(Pubkey::new_unique(), 33).unwrap();
        // 33 * 80 / 100 = 26.4
        assert_eq!(lottery.prize_split().unwrap(), (26, 7));
    }

    #[test]
    fn test_prize_split_large_pot() {
        let mut lottery = open_lottery(u64::MAX, 99, 1);
        lottery.enter(Pubkey::new_unique(), u64::MAX).unwrap();
        let (winner, owner) = lottery.prize_split().unwrap();
        assert_eq!(winner.checked_add(owner), Some(u64::MAX));
    }

    #[test]
    fn test_check_claim() {
        let mut lottery = open_lottery(100, 80, 20);
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        lottery.enter(alice, 100).unwrap();
        lottery.enter(bob, 100).unwrap();
        assert!(matches!(
            lottery.check_claim(&alice),
            Err(LotteryError::WinnerNotPicked)
        ));

        lottery.set_winner(1).unwrap();
        assert!(matches!(
            lottery.check_claim(&alice),
            Err(LotteryError::NotWinner)
        ));
        assert!(lottery.check_claim(&bob).is_ok());

        lottery.prize_claimed = true;
        assert!(matches!(
            lottery.check_claim(&bob),
            Err(LotteryError::PrizeAlreadyClaimed)
        ));
    }

    #[test]
    fn test_commit_randomness_once() {
        let mut lottery = open_lottery(100, 80, 20);
        let first = Pubkey::new_unique();
        lottery.commit_randomness(first).unwrap();
        assert!(lottery.has_committed_randomness());

        assert!(matches!(
            lottery.commit_randomness(Pubkey::new_unique()),
            Err(LotteryError::RandomnessAlreadyCommitted)
        ));
        assert_eq!(lottery.randomness_account, first);
    }

    #[test]
    fn test_commit_randomness_after_draw() {
        let mut lottery = open_lottery(100, 80, 20);
        lottery.enter(Pubkey::new_unique(), 100).unwrap();
        lottery.set_winner(0).unwrap();
        assert!(matches!(
            lottery.commit_randomness(Pubkey::new_unique()),
            Err(LotteryError::WinnerAlreadyPicked)
        ));
    }

    #[test]
    fn test_init_space_holds_max_participants() {
        // bump + id + owner + total_amount + pool_value + winner_prize + owner_prize
        let fixed = 1 + 8 + 32 + 8 + 8 + 1 + 1;
        let participants = 4 + 32 * MAX_PARTICIPANTS;
        // winner (Option<Pubkey>) + prize_claimed + randomness_account
        let tail = (1 + 32) + 1 + 32;
        assert_eq!(Lottery::INIT_SPACE, fixed + participants + tail);
    }
}
