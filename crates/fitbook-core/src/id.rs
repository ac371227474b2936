//! Domain identifier generation.
//!
//! Identifiers are opaque strings with a short entity prefix followed
//! by eight hex characters of UUID entropy, e.g. `BK3F29AC01`.

use uuid::Uuid;

fn prefixed(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{prefix}{}", hex[..8].to_uppercase())
}

/// New booking identifier (`BK…`).
pub fn booking_id() -> String {
    prefixed("BK")
}

/// New client identifier (`CL…`).
pub fn client_id() -> String {
    prefixed("CL")
}

/// New trainer identifier (`TR…`).
pub fn trainer_id() -> String {
    prefixed("TR")
}

/// New user identifier (`USR…`).
pub fn user_id() -> String {
    prefixed("USR")
}
