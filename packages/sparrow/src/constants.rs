// Ledger TTL management

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Precision

/// Fixed-point scale of the exchange rate (1.0 == EXCHANGE_RATE_PRECISION)
pub const EXCHANGE_RATE_PRECISION: i128 = 1_000_000_000_000_000_000; // 1e18

pub const BPS_DENOMINATOR: i128 = 10_000;

/// Decimals of the native Stellar asset (and therefore of pool shares)
pub const ASSET_DECIMALS: u32 = 7;
pub const ONE_UNIT: i128 = 10_000_000; // 1e7 stroops

// Fees

pub const MAX_TOTAL_FEE_BPS: u32 = 1_000; // 10%
pub const MAX_DAO_FEE_BPS: u32 = 10_000;
pub const MAX_DEV_FEE_BPS: u32 = 10_000;

pub const DEFAULT_DAO_FEE_BPS: u32 = 500;
pub const DEFAULT_DEV_FEE_BPS: u32 = 300;

// Staking

pub const DEFAULT_MIN_STAKE_AMOUNT: i128 = ONE_UNIT / 10;

pub const MAX_PENDING_UNLOCKS: u32 = 100;

pub const MAX_RESERVE_RATIO_BPS: u32 = 10_000;

// Storage schema

pub const SCHEMA_VERSION: u32 = 1;
