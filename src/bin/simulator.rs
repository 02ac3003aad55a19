use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use wordlie::bot::{self, Reply};
use wordlie::core::types::UserId;
use wordlie::startup::boot;

/// One reply per inbound line, as a JSON object on its own line.
#[derive(Serialize)]
struct Outbound<'a> {
    user: UserId,
    #[serde(flatten)]
    reply: &'a Reply,
}

#[derive(Serialize)]
struct ProtocolError<'a> {
    error: &'a str,
}

// Input lines are `<user id> <message>`, e.g. `42 /game` or `42 tiger`.
fn main() -> io::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let game = match boot(config_path.as_deref()) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("[FATAL] {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        tracing::debug!(input = %input, "inbound");

        let Some((user, message)) = input
            .split_once(char::is_whitespace)
            .and_then(|(user, message)| Some((user.parse::<UserId>().ok()?, message)))
        else {
            let error = ProtocolError { error: "expected '<user id> <message>'" };
            writeln!(stdout, "{}", serde_json::to_string(&error)?)?;
            continue;
        };

        let reply = bot::handle(&game, user, message);
        let outbound = Outbound { user, reply: &reply };
        writeln!(stdout, "{}", serde_json::to_string(&outbound)?)?;
        stdout.flush()?;
    }
    tracing::info!("input closed, shutting down");
    Ok(())
}
