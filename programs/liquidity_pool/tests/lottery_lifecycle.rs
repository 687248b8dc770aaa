use anchor_lang::prelude::Pubkey;
use anchor_lang::{AccountDeserialize, AccountSerialize, Space};
use liquidity_pool::constants::{LOTTERY_SEED, MAX_PARTICIPANTS};
use liquidity_pool::error::LotteryError;
use liquidity_pool::randomness::{draw_seed, newest_slot_hash, winner_index};
use liquidity_pool::state::Lottery;

// These tests drive the lottery rules through the crate's public types, the
// same path the instruction handlers take, without needing a validator.

fn new_lottery(owner: Pubkey) -> Lottery {
    let mut lottery = Lottery::default();
    lottery.open(0, owner, 100, 80, 20, 254).unwrap();
    lottery
}

fn slot_hashes(hash: [u8; 32]) -> Vec<u8> {
    let mut data = 1u64.to_le_bytes().to_vec();
    data.extend_from_slice(&500u64.to_le_bytes());
    data.extend_from_slice(&hash);
    data
}

#[test]
fn new_lottery_starts_empty() {
    let owner = Pubkey::new_unique();
    let lottery = new_lottery(owner);

    assert_eq!(lottery.owner, owner);
    assert_eq!(lottery.total_amount, 0);
    assert_eq!(lottery.pool_value, 100);
    assert_eq!(lottery.winner_prize, 80);
    assert_eq!(lottery.owner_prize, 20);
    assert!(lottery.participants.is_empty());
    assert_eq!(lottery.winner, None);
    assert!(!lottery.prize_claimed);
}

#[test]
fn full_lottery_round() {
    let owner = Pubkey::new_unique();
    let mut lottery = new_lottery(owner);
    let players: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();

    for player in &players {
        lottery.enter(*player, lottery.pool_value).unwrap();
    }
    let guest = Pubkey::new_unique();
    lottery.enter(guest, 0).unwrap();

    assert_eq!(lottery.participants.len(), 4);
    assert_eq!(lottery.total_amount, 300);

    let hash = newest_slot_hash(&slot_hashes([11u8; 32])).unwrap();
    let lottery_key = Pubkey::find_program_address(
        &[LOTTERY_SEED, lottery.id.to_le_bytes().as_ref()],
        &liquidity_pool::ID,
    )
    .0;
    let seed = draw_seed(&hash, 501, 1_700_000_000, &lottery_key);
    let index = winner_index(&seed, lottery.participants.len()).unwrap();
    let winner = lottery.set_winner(index).unwrap();

    assert!(lottery.is_participant(&winner));
    assert_eq!(lottery.winner, Some(winner));
    assert_eq!(lottery.prize_split().unwrap(), (240, 60));

    // drawn lotteries are closed to entries and further draws
    assert!(matches!(
        lottery.enter(Pubkey::new_unique(), 100),
        Err(LotteryError::WinnerAlreadyPicked)
    ));
    assert!(matches!(
        lottery.set_winner(0),
        Err(LotteryError::WinnerAlreadyPicked)
    ));

    lottery.check_claim(&winner).unwrap();
    lottery.prize_claimed = true;
    assert!(matches!(
        lottery.check_claim(&winner),
        Err(LotteryError::PrizeAlreadyClaimed)
    ));
}

#[test]
fn empty_lottery_has_no_winner_index() {
    let lottery = new_lottery(Pubkey::new_unique());
    let seed = draw_seed(&[1u8; 32], 1, 1, &Pubkey::new_unique());
    assert_eq!(winner_index(&seed, lottery.participants.len()), None);
}

#[test]
fn full_account_fits_allocated_space() {
    let mut lottery = new_lottery(Pubkey::new_unique());
    for _ in 0..MAX_PARTICIPANTS {
        lottery.enter(Pubkey::new_unique(), 100).unwrap();
    }
    lottery.set_winner(MAX_PARTICIPANTS - 1).unwrap();
    lottery.randomness_account = Pubkey::new_unique();

    let mut data = Vec::new();
    lottery.try_serialize(&mut data).unwrap();
    assert!(data.len() <= 8 + Lottery::INIT_SPACE);

    let restored = Lottery::try_deserialize(&mut data.as_slice()).unwrap();
    assert_eq!(restored.participants, lottery.participants);
    assert_eq!(restored.winner, lottery.winner);
    assert_eq!(restored.total_amount, 100 * MAX_PARTICIPANTS as u64);
}
