//! Storage lifetime and input limits for the voting contract

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger one day is 17,280 ledgers.

/// One day worth of ledgers
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance entries (admin, status, proposal counter) are kept alive for 30 days
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Bump the instance once less than this many ledgers remain
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Voter and proposal records outlive the session so results stay readable
pub const RECORD_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// Bump a record once less than this many ledgers remain
pub const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ===== String Length Constants =====

/// Maximum length for a proposal description, in bytes
pub const MAX_DESCRIPTION_LENGTH: u32 = 2048;
