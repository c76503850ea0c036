//! Connection-time switches read from a URL query string.

/// The three switches a client can be opened with.
///
/// | Key | Effect |
/// |---|---|
/// | `isHand` | force hand mode; only the exact value `true` counts |
/// | `playerId` | explicit player id; an empty value counts as absent |
/// | `debug` | show raw state dumps; presence alone enables it |
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pub is_hand: bool,
    pub player_id: Option<String>,
    pub debug: bool,
}

impl QueryParams {
    /// Parses a query string such as `?isHand=true&playerId=abc&debug`.
    ///
    /// The leading `?` is optional. Unknown keys are ignored. When a key
    /// repeats, the first occurrence wins. Values are form-decoded
    /// (`+` is a space, `%XX` is a byte).
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> =
            match serde_urlencoded::from_str(query) {
                Ok(pairs) => pairs,
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring unreadable query");
                    return Self::default();
                }
            };

        let mut params = Self::default();
        let mut seen_hand = false;
        let mut seen_player = false;
        for (key, value) in pairs {
            match key.as_str() {
                "isHand" if !seen_hand => {
                    seen_hand = true;
                    params.is_hand = value == "true";
                }
                "playerId" if !seen_player => {
                    seen_player = true;
                    params.player_id = Some(value).filter(|v| !v.is_empty());
                }
                "debug" => params.debug = true,
                _ => {}
            }
        }

        params
    }
}
