//! Deciding role and identity when a connection opens.
//!
//! ```text
//!   isHand=true ──┐
//!                 ├──→ Hand ──→ playerId: override → stored → fresh token
//!   mobile UA ────┘                  │
//!                                    ▼
//!   otherwise ───────→ Board     persisted for next time
//! ```

use ballotbox_protocol::PlayerId;
use rand::Rng;

use crate::{IdentityStore, QueryParams, Session};

/// User-agent fragments that mark a phone or tablet. Matched
/// case-insensitively anywhere in the string.
const MOBILE_MARKERS: [&str; 10] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
    "mobile",
    "crios",
];

/// Builds the session for this connection.
///
/// - A hand is chosen when `isHand=true` was passed or the device looks
///   mobile; everything else is a board.
/// - Hands resolve a player id from, in order: the explicit `playerId`
///   override, the store, a freshly generated token. The resolved id is
///   written back to the store so a reconnect lands on the same seat.
/// - Boards never touch the store.
///
/// This never fails. A store that can't be written is logged and the
/// session proceeds; the id just won't survive a restart.
pub fn bootstrap<S: IdentityStore>(
    params: &QueryParams,
    store: &mut S,
    user_agent: &str,
) -> Session {
    let is_hand = params.is_hand || is_mobile(user_agent);
    if !is_hand {
        tracing::info!(debug = params.debug, "board session started");
        return Session::board(params.debug);
    }

    let player_id = params
        .player_id
        .clone()
        .filter(|id| !id.is_empty())
        .or_else(|| store.load().filter(|id| !id.is_empty()))
        .unwrap_or_else(generate_token);

    if let Err(e) = store.store(&player_id) {
        tracing::warn!(%player_id, error = %e, "could not persist player id");
    }

    tracing::info!(%player_id, debug = params.debug, "hand session started");
    Session::hand(PlayerId(player_id), params.debug)
}

/// Returns `true` if the user agent looks like a phone or tablet.
///
/// An empty or unrecognized agent is a desktop.
pub fn is_mobile(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|marker| ua.contains(marker))
}

/// Generates a random 32-character hex string (128 bits of entropy).
///
/// Used as a fresh player id for a hand that has never connected before.
/// Ids only need to be unique within a game, so this is far more than
/// enough to never collide at a table.
pub fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Naming follows `test_{function}_{scenario}_{expected}`.

    use super::*;
    use crate::{ClientRole, MemoryIdentityStore, SessionError};

    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) Firefox/118.0";
    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";

    /// A store whose writes always fail.
    struct BrokenStore;

    impl IdentityStore for BrokenStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn store(&mut self, _: &str) -> Result<(), SessionError> {
            Err(SessionError::Storage(std::io::Error::other("disk full")))
        }
    }

    fn hand_params() -> QueryParams {
        QueryParams {
            is_hand: true,
            ..QueryParams::default()
        }
    }

    // =====================================================================
    // is_mobile()
    // =====================================================================

    #[test]
    fn test_is_mobile_recognizes_phones_and_tablets() {
        assert!(is_mobile(IPHONE_UA));
        assert!(is_mobile("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
        assert!(is_mobile("Mozilla/5.0 (iPad; CPU OS 16_0)"));
        assert!(is_mobile("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(is_mobile("Mozilla/5.0 CriOS/118.0 Safari"));
    }

    #[test]
    fn test_is_mobile_is_case_insensitive() {
        assert!(is_mobile("SOMETHING MOBILE"));
        assert!(is_mobile("blackberry9700"));
    }

    #[test]
    fn test_is_mobile_desktop_and_empty_are_not_mobile() {
        assert!(!is_mobile(DESKTOP_UA));
        assert!(!is_mobile(""));
    }

    // =====================================================================
    // bootstrap(): role
    // =====================================================================

    #[test]
    fn test_bootstrap_desktop_without_override_is_board() {
        let mut store = MemoryIdentityStore::new();

        let session = bootstrap(&QueryParams::default(), &mut store, DESKTOP_UA);

        assert_eq!(session.role(), ClientRole::Board);
        assert_eq!(session.player_id(), None);
    }

    #[test]
    fn test_bootstrap_board_persists_nothing() {
        let mut store = MemoryIdentityStore::new();

        bootstrap(&QueryParams::default(), &mut store, DESKTOP_UA);

        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_bootstrap_board_ignores_player_id_override() {
        let params = QueryParams {
            player_id: Some("p9".into()),
            ..QueryParams::default()
        };
        let mut store = MemoryIdentityStore::new();

        let session = bootstrap(&params, &mut store, DESKTOP_UA);

        assert_eq!(session.player_id(), None);
    }

    #[test]
    fn test_bootstrap_is_hand_override_makes_hand_on_desktop() {
        let mut store = MemoryIdentityStore::new();

        let session = bootstrap(&hand_params(), &mut store, DESKTOP_UA);

        assert_eq!(session.role(), ClientRole::Hand);
    }

    #[test]
    fn test_bootstrap_mobile_agent_makes_hand() {
        let mut store = MemoryIdentityStore::new();

        let session = bootstrap(&QueryParams::default(), &mut store, IPHONE_UA);

        assert!(session.is_hand());
        assert!(session.player_id().is_some());
    }

    #[test]
    fn test_bootstrap_carries_debug_flag() {
        let params = QueryParams {
            debug: true,
            ..QueryParams::default()
        };
        let mut store = MemoryIdentityStore::new();

        assert!(bootstrap(&params, &mut store, DESKTOP_UA).debug());
    }

    // =====================================================================
    // bootstrap(): identity resolution order
    // =====================================================================

    #[test]
    fn test_bootstrap_explicit_override_beats_stored_id() {
        let params = QueryParams {
            player_id: Some("explicit".into()),
            ..hand_params()
        };
        let mut store = MemoryIdentityStore::with_player_id("stored");

        let session = bootstrap(&params, &mut store, DESKTOP_UA);

        assert_eq!(session.player_id(), Some(&PlayerId::from("explicit")));
        assert_eq!(store.load().as_deref(), Some("explicit"));
    }

    #[test]
    fn test_bootstrap_stored_id_beats_fresh_token() {
        let mut store = MemoryIdentityStore::with_player_id("stored");

        let session = bootstrap(&hand_params(), &mut store, DESKTOP_UA);

        assert_eq!(session.player_id(), Some(&PlayerId::from("stored")));
    }

    #[test]
    fn test_bootstrap_empty_override_falls_through_to_store() {
        let params = QueryParams {
            player_id: Some(String::new()),
            ..hand_params()
        };
        let mut store = MemoryIdentityStore::with_player_id("stored");

        let session = bootstrap(&params, &mut store, DESKTOP_UA);

        assert_eq!(session.player_id(), Some(&PlayerId::from("stored")));
    }

    #[test]
    fn test_bootstrap_fresh_token_is_persisted_and_reused() {
        let mut store = MemoryIdentityStore::new();

        let first = bootstrap(&hand_params(), &mut store, DESKTOP_UA);
        let second = bootstrap(&hand_params(), &mut store, DESKTOP_UA);

        let id = first.player_id().expect("hand has an id");
        assert_eq!(id.as_str().len(), 32);
        assert_eq!(store.load().as_deref(), Some(id.as_str()));
        assert_eq!(second.player_id(), Some(id));
    }

    #[test]
    fn test_bootstrap_store_failure_still_yields_hand() {
        let session = bootstrap(&hand_params(), &mut BrokenStore, DESKTOP_UA);

        assert!(session.is_hand());
        assert!(session.player_id().is_some());
    }

    // =====================================================================
    // generate_token()
    // =====================================================================

    #[test]
    fn test_generate_token_is_32_hex_chars_and_unique() {
        let a = generate_token();
        let b = generate_token();

        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
