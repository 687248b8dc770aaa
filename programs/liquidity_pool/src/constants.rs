/// Seed of the program-wide configuration PDA.
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed prefix of every lottery PDA, followed by the lottery id in little endian.
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Maximum number of entries a single lottery account can hold.
/// Must match the `max_len` on `Lottery::participants`.
pub const MAX_PARTICIPANTS: usize = 100;

/// Prize shares are whole percentages of the pot.
pub const PERCENT_BASIS: u64 = 100;
