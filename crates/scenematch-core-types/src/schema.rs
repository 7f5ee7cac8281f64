//! Canonical schema constants for structured logging
//!
//! These constants keep event fields consistent between the engine, the
//! report and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_COMPARISON_ID: &str = "comparison_id";

// Compared subjects
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_COUNTERPART: &str = "counterpart";
pub const FIELD_TIER: &str = "tier";
pub const FIELD_EQUAL: &str = "equal";

// Report sizes
pub const FIELD_GOOD_LEN: &str = "good_len";
pub const FIELD_BAD_LEN: &str = "bad_len";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_DIAGNOSTIC: &str = "diagnostic";
