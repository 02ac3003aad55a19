// File: src/bot.rs
//! Transport-neutral chat front: turns one inbound message into one reply.

use crate::core::types::UserId;
use crate::error::GameError;
use crate::game::{TurnOutcome, WordlieGame};
use serde::Serialize;

pub const HELP_TEXT: &str = "This is a bot to play a word game.\n\
The rules are simple:\n\n\
- You or the bot write the first word (type /game to make bot start).\n\
- Then, one by one, you write the words that begin with the last letter of the previous word.\n\
- If you or the bot don't know a word, you'll have to come up with another one (type /idk or press the button to make bot come up another word).\n\
- If you or the bot cannot come up any word, the game will be end (type /end to give up).";

const NOT_STARTED: &str = "You haven't started the game yet";
const GIVE_UP_HINT: &str = " or type /end to give up!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Start,
    Help,
    Game,
    DontKnow,
    End,
    Unknown(&'a str),
    Text(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(input: &'a str) -> Self {
        let input = input.trim();
        let Some(command) = input.strip_prefix('/') else {
            return Command::Text(input);
        };
        // "/game@wordlie_bot extra" -> "game"
        let name = command
            .split_whitespace()
            .next()
            .unwrap_or("")
            .split('@')
            .next()
            .unwrap_or("");
        match name {
            "start" => Command::Start,
            "help" => Command::Help,
            "game" => Command::Game,
            "idk" => Command::DontKnow,
            "end" => Command::End,
            other => Command::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    /// Whether to attach the "I don't know this word" button.
    pub offer_dont_know: bool,
}

impl Reply {
    fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), offer_dont_know: false }
    }

    fn with_button(text: impl Into<String>) -> Self {
        Self { text: text.into(), offer_dont_know: true }
    }
}

fn turn_reply(outcome: TurnOutcome) -> Reply {
    match outcome {
        TurnOutcome::BotWord(word) => Reply::with_button(word),
        TurnOutcome::UserWins => Reply::plain("I give up. You won"),
    }
}

fn rejection(error: GameError, in_round: bool) -> Reply {
    match error {
        GameError::NotStarted => Reply::plain(NOT_STARTED),
        GameError::WrongStartingLetter { expected } => Reply::plain(format!(
            "Your word should start with '{expected}'. Try again{GIVE_UP_HINT}"
        )),
        GameError::UnknownWord if in_round => {
            Reply::plain(format!("I don't know this word. Try again{GIVE_UP_HINT}"))
        }
        GameError::UnknownWord => Reply::plain("I don't know this word. Try again"),
        GameError::AlreadyUsed => Reply::plain(format!(
            "This word is already used. Try again{GIVE_UP_HINT}"
        )),
    }
}

pub fn handle(game: &WordlieGame, user: UserId, input: &str) -> Reply {
    match Command::parse(input) {
        Command::Start | Command::Help => Reply::plain(HELP_TEXT),
        Command::Game => match game.start_round(user) {
            Some(word) => Reply::with_button(format!("First word is: {word}")),
            None => Reply::plain("I don't know any words yet"),
        },
        Command::DontKnow => game
            .dont_know(user)
            .map(turn_reply)
            .unwrap_or_else(|e| rejection(e, false)),
        Command::End => match game.end_round(user) {
            Ok(()) => Reply::plain("You lose)"),
            Err(e) => rejection(e, false),
        },
        Command::Unknown(name) => {
            tracing::debug!(user, command = name, "unknown command");
            Reply::plain("Unknown command. Type /help")
        }
        Command::Text(word) => {
            let in_round = game.is_in_round(user);
            game.submit_word(user, word)
                .map(turn_reply)
                .unwrap_or_else(|e| rejection(e, in_round))
        }
    }
}
