use anchor_lang::prelude::*;
use solana_program::hash::hashv;

use crate::error::LotteryError;

/// SlotHashes layout: u64 entry count, then `(slot: u64, hash: [u8; 32])`
/// entries with the most recent slot first.
const ENTRY_COUNT_LEN: usize = 8;
const SLOT_LEN: usize = 8;
const HASH_LEN: usize = 32;

/// Reads the most recent hash straight from the raw SlotHashes sysvar data,
/// without deserializing the full entry list.
pub fn newest_slot_hash(data: &[u8]) -> std::result::Result<[u8; 32], LotteryError> {
    let start = ENTRY_COUNT_LEN + SLOT_LEN;
    let end = start + HASH_LEN;
    if data.len() < end {
        return Err(LotteryError::SlotHashesUnavailable);
    }

    let mut count = [0u8; ENTRY_COUNT_LEN];
    count.copy_from_slice(&data[..ENTRY_COUNT_LEN]);
    if u64::from_le_bytes(count) == 0 {
        return Err(LotteryError::SlotHashesUnavailable);
    }

    let mut hash = [0u8; HASH_LEN];
    hash.copy_from_slice(&data[start..end]);
    Ok(hash)
}

/// seed = sha256(slot_hash || slot || unix_timestamp || lottery)
/// Numeric values are little-endian encoded. Mixing in the lottery key keeps
/// two lotteries drawn in the same slot independent.
pub fn draw_seed(slot_hash: &[u8; 32], slot: u64, unix_timestamp: i64, lottery: &Pubkey) -> [u8; 32] {
    hashv(&[
        slot_hash.as_ref(),
        slot.to_le_bytes().as_ref(),
        unix_timestamp.to_le_bytes().as_ref(),
        lottery.as_ref(),
    ])
    .to_bytes()
}

/// Maps a seed onto `[0, count)` using its first 8 bytes as a little-endian u64.
/// Returns `None` when there is nobody to pick.
pub fn winner_index(seed: &[u8; 32], count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&seed[..8]);
    let random_value = u64::from_le_bytes(bytes);

    Some((random_value % count as u64) as usize)
}
