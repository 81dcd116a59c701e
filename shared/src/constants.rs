// Local-storage keys for the persisted spin record.
pub const KEY_SPIN_USED: &str = "spin_used";
pub const KEY_SPIN_TIME: &str = "spin_time";
pub const KEY_DISCOUNT_VALUE: &str = "discount_value";
pub const KEY_SESSION_ID: &str = "session_id";
pub const KEY_SS_START: &str = "ss_start";

// Session identifiers are cosmetic traceability codes, not secrets.
// The alphabet skips visually ambiguous characters (0/O, 1/I/L).
pub const SESSION_ID_LEN: usize = 8;
pub const SESSION_ID_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const SUSPENSE_MS: u32 = 1500;
pub const SCREENSHOT_SECS: i64 = 60;
pub const SCREENSHOT_URGENT_SECS: i64 = 10;

pub const HOUR_MS: i64 = 60 * 60 * 1000;
