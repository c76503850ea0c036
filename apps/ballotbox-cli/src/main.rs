use ballotbox::prelude::*;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const HELP: &str = "commands: start | reveal | name <new name> \
                    | pick <player id> | vote ja|nein | quit";

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// One line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Intent(Intent),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let intent = match word {
        "start" => Intent::StartGame,
        "reveal" => Intent::RevealRole,
        "name" if !rest.is_empty() => {
            Intent::UpdatePlayerName(rest.to_string())
        }
        "pick" if !rest.is_empty() => {
            Intent::SelectChancellorCandidate(PlayerId::from(rest))
        }
        "vote" => match rest {
            "ja" => Intent::VoteOnTicket(Vote::Ja),
            "nein" => Intent::VoteOnTicket(Vote::Nein),
            _ => return Err("vote ja or vote nein".into()),
        },
        "help" | "" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "name" | "pick" => return Err(format!("{word} needs an argument")),
        other => return Err(format!("unknown command {other:?}")),
    };
    Ok(Command::Intent(intent))
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

fn vote_text(vote: Option<Vote>) -> String {
    vote.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn describe_hand(hand: &HandView) -> String {
    match hand {
        HandView::Idle => "Waiting...".into(),
        HandView::Observer => {
            "The game has already started. You are observing.".into()
        }
        HandView::Lobby { name, can_start } => {
            let start = if *can_start { " Type `start` to begin." } else { "" };
            format!("In the lobby as {name}. `name <x>` to rename.{start}")
        }
        HandView::RevealRole { revealed: None } => {
            "Type `reveal` to see your role.".into()
        }
        HandView::RevealRole { revealed: Some(text) } => text.clone(),
        HandView::PickChancellor { candidates } => {
            let mut out = String::from("Pick a chancellor:");
            for c in candidates {
                out.push_str(&format!("\n  pick {}  ({})", c.id, c.name));
            }
            out
        }
        HandView::Vote { current } => format!(
            "Vote on the ticket: `vote ja` or `vote nein` (current: {})",
            vote_text(*current)
        ),
    }
}

fn describe_board(board: &BoardView) -> String {
    match board {
        BoardView::Waiting => "Waiting for the game...".into(),
        BoardView::Roster { players } => {
            let mut out = String::from("Roles dealt:");
            for p in players {
                let seen = if p.seen_role { "seen" } else { "not seen" };
                out.push_str(&format!("\n  {}: {seen}", p.name));
            }
            out
        }
        BoardView::Election {
            presidential_candidate,
        } => format!("{presidential_candidate} is choosing a chancellor."),
        BoardView::VotePending { pending } => {
            format!("Waiting on {pending} vote(s).")
        }
        BoardView::TicketResult { tally, ballots } => {
            let verdict = if tally.success { "passed" } else { "failed" };
            let mut out =
                format!("Ticket {verdict} with {} ja.", tally.ja_count);
            for b in ballots {
                out.push_str(&format!("\n  {}: {}", b.name, vote_text(b.vote)));
            }
            out
        }
        BoardView::LegislativeSession {
            president,
            chancellor,
        } => format!(
            "President {president} and Chancellor {chancellor} \
             are legislating."
        ),
    }
}

fn describe(view: &View) -> String {
    match view {
        View::Hand(hand) => describe_hand(hand),
        View::Board(board) => describe_board(board),
    }
}

fn print_rendered(rendered: &Rendered) {
    println!("\n{}", describe(&rendered.view));
    if let Some(dump) = &rendered.debug_dump {
        println!("{dump}");
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

/// Reads commands from stdin until EOF or `quit`, forwarding intents.
async fn read_commands(tx: mpsc::Sender<Intent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match parse_command(&line) {
            Ok(Command::Intent(intent)) => {
                if tx.send(intent).await.is_err() {
                    break;
                }
            }
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(e) => println!("{e}. {HELP}"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from(CliArgs::parse());
    init_tracing();

    let mut store = FileIdentityStore::new(&config.identity_path);
    let session = bootstrap(&config.query, &mut store, &config.user_agent);
    match session.player_id() {
        Some(id) => eprintln!("hand client as player {id}"),
        None => eprintln!("board client"),
    }

    let conn = WebSocketConnection::connect(&config.url).await?;
    let (tx, mut intents) = mpsc::channel(16);
    tokio::spawn(read_commands(tx));

    let mut client = Client::new(session);
    drive(&conn, &JsonCodec, &mut client, &mut intents, print_rendered)
        .await?;
    Ok(())
}
