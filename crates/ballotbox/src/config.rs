//! Client configuration, built from command-line arguments.

use std::ffi::OsString;
use std::path::PathBuf;

use ballotbox_session::QueryParams;
use clap::Parser;

/// Engine address used when none is given.
pub const DEFAULT_URL: &str = "ws://127.0.0.1:3000";

/// Where a hand keeps its player id unless told otherwise.
pub const DEFAULT_IDENTITY_PATH: &str = ".ballotbox/identity.json";

/// Stands in for a browser user agent. Desktop, so a board by default.
pub const DEFAULT_USER_AGENT: &str = "ballotbox-cli (desktop)";

/// Command-line arguments for a ballotbox client.
#[derive(Parser, Debug)]
#[command(name = "ballotbox-cli", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Engine WebSocket URL. May carry a `?query` of its own
    #[arg(default_value = DEFAULT_URL)]
    pub url: String,

    /// Connection switches, e.g. `isHand=true&playerId=abc&debug`
    pub query: Option<String>,

    /// File holding this device's player id
    #[arg(short, long, default_value = DEFAULT_IDENTITY_PATH)]
    pub identity: PathBuf,

    /// User agent used to tell phones (hands) from desktops (boards)
    #[arg(
        long,
        env = "BALLOTBOX_USER_AGENT",
        default_value = DEFAULT_USER_AGENT
    )]
    pub user_agent: String,
}

/// Everything needed to start a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Engine WebSocket URL.
    pub url: String,
    /// Connection-time switches, as they'd appear in a page URL.
    pub query: QueryParams,
    pub identity_path: PathBuf,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            query: QueryParams::default(),
            identity_path: PathBuf::from(DEFAULT_IDENTITY_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<CliArgs> for ClientConfig {
    /// A query embedded in the URL is used unless a separate query
    /// argument is given.
    fn from(args: CliArgs) -> Self {
        let (url, embedded) = match args.url.split_once('?') {
            Some((base, query)) => (base.to_string(), Some(query.to_string())),
            None => (args.url, None),
        };
        let query = args
            .query
            .or(embedded)
            .map(|q| QueryParams::parse(&q))
            .unwrap_or_default();

        Self {
            url,
            query,
            identity_path: args.identity,
            user_agent: args.user_agent,
        }
    }
}

impl ClientConfig {
    /// Parses a full argument list, program name first.
    ///
    /// # Errors
    /// The [`clap::Error`] for bad arguments, and also for `--help` and
    /// `--version`, whose kinds say so.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        CliArgs::try_parse_from(args).map(Self::from)
    }
}
