// File: src/game.rs
use crate::core::dictionary::MasterDictionary;
use crate::core::types::{first_letter, last_letter, Letter, UserId};
use crate::core::view::DictionaryView;
use crate::error::GameError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// Per-party game state. One round at a time, each with its own view.
#[derive(Debug)]
pub struct GameSession {
    user_id: UserId,
    view: DictionaryView,
    last_word: String,
    started: bool,
}

impl GameSession {
    fn new(user_id: UserId, dictionary: Arc<MasterDictionary>) -> Self {
        Self {
            user_id,
            view: DictionaryView::new(dictionary),
            last_word: String::new(),
            started: false,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn last_word(&self) -> Option<&str> {
        (!self.last_word.is_empty()).then_some(self.last_word.as_str())
    }

    pub fn view(&self) -> &DictionaryView {
        &self.view
    }

    /// Discards the round: a fresh view over the same dictionary.
    fn end_round(&mut self) {
        self.started = false;
        self.view = DictionaryView::new(Arc::clone(self.view.dictionary()));
        self.last_word.clear();
    }

    /// The bot's move: best unused word for `letter`, or a concession that
    /// ends the round.
    fn reply_with(&mut self, letter: Letter) -> TurnOutcome {
        match self.view.get_most_frequent_word_by(letter).map(str::to_owned) {
            Some(word) => {
                self.view.hide_word(&word);
                self.last_word.clone_from(&word);
                TurnOutcome::BotWord(word)
            }
            None => {
                tracing::debug!(user = self.user_id, %letter, "no words left, conceding");
                self.end_round();
                TurnOutcome::UserWins
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    BotWord(String),
    /// The bot had nothing left for the letter. The round is over.
    UserWins,
}

/// Maps external parties to their sessions over one shared dictionary.
pub struct WordlieGame {
    dictionary: Arc<MasterDictionary>,
    first_letters: Vec<Letter>,
    sessions: RwLock<HashMap<UserId, Arc<Mutex<GameSession>>>>,
    rng: Mutex<StdRng>,
}

fn lock(session: &Mutex<GameSession>) -> MutexGuard<'_, GameSession> {
    // Every operation leaves the session consistent, so a panic elsewhere
    // does not invalidate it.
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

impl WordlieGame {
    pub fn new(dictionary: Arc<MasterDictionary>) -> Self {
        Self::with_rng(dictionary, StdRng::from_entropy())
    }

    pub fn with_seed(dictionary: Arc<MasterDictionary>, seed: u64) -> Self {
        Self::with_rng(dictionary, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dictionary: Arc<MasterDictionary>, rng: StdRng) -> Self {
        let first_letters = dictionary.letters_present();
        Self {
            dictionary,
            first_letters,
            sessions: RwLock::new(HashMap::new()),
            rng: Mutex::new(rng),
        }
    }

    pub fn dictionary(&self) -> &Arc<MasterDictionary> {
        &self.dictionary
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns the session for `user`, creating it on first contact.
    ///
    /// Concurrent first contacts for the same id all get the same session:
    /// the shared-lock lookup is repeated under the exclusive lock before
    /// inserting.
    pub fn session(&self, user: UserId) -> Arc<Mutex<GameSession>> {
        if let Some(session) = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&user)
        {
            return Arc::clone(session);
        }

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let session = sessions.entry(user).or_insert_with(|| {
            tracing::debug!(user, "creating session");
            Arc::new(Mutex::new(GameSession::new(user, Arc::clone(&self.dictionary))))
        });
        Arc::clone(session)
    }

    pub fn is_in_round(&self, user: UserId) -> bool {
        lock(&self.session(user)).is_started()
    }

    /// Starts a new round (abandoning any current one) with the bot's opening
    /// word for a random letter. `None` only for an empty dictionary.
    pub fn start_round(&self, user: UserId) -> Option<String> {
        let letter = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            *self.first_letters.choose(&mut *rng)?
        };

        let session = self.session(user);
        let mut session = lock(&session);
        session.end_round();
        match session.reply_with(letter) {
            TurnOutcome::BotWord(word) => {
                session.started = true;
                tracing::debug!(user, %word, "round started");
                Some(word)
            }
            TurnOutcome::UserWins => None,
        }
    }

    /// Plays the user's `word`. Outside a round any known word opens one.
    pub fn submit_word(&self, user: UserId, word: &str) -> Result<TurnOutcome, GameError> {
        let word = word.trim();
        let Some(reply_letter) = last_letter(word) else {
            return Err(GameError::UnknownWord);
        };

        let session = self.session(user);
        let mut session = lock(&session);

        if session.started {
            if let Some(expected) = last_letter(&session.last_word) {
                if first_letter(word) != Some(expected) {
                    return Err(GameError::WrongStartingLetter { expected });
                }
            }
        }
        if !self.dictionary.contains(word) {
            return Err(GameError::UnknownWord);
        }
        if !session.view.hide_word(word) {
            return Err(GameError::AlreadyUsed);
        }

        session.started = true;
        session.last_word = word.to_string();
        Ok(session.reply_with(reply_letter))
    }

    /// "I don't know": the bot swaps its last word for the next best one
    /// with the same first letter.
    pub fn dont_know(&self, user: UserId) -> Result<TurnOutcome, GameError> {
        let session = self.session(user);
        let mut session = lock(&session);
        if !session.started {
            return Err(GameError::NotStarted);
        }
        let letter = first_letter(&session.last_word).ok_or(GameError::NotStarted)?;
        Ok(session.reply_with(letter))
    }

    /// Gives up the current round.
    pub fn end_round(&self, user: UserId) -> Result<(), GameError> {
        let session = self.session(user);
        let mut session = lock(&session);
        if !session.started {
            return Err(GameError::NotStarted);
        }
        session.end_round();
        tracing::debug!(user, "round ended by user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(words: &[&str]) -> WordlieGame {
        WordlieGame::with_seed(Arc::new(words.iter().collect()), 42)
    }

    #[test]
    fn bot_answers_with_most_frequent_word_for_last_letter() {
        let game = game(&["tiger", "rat", "rabbit", "tapir"]);
        assert_eq!(game.submit_word(1, "tiger"), Ok(TurnOutcome::BotWord("rat".into())));
        assert_eq!(game.submit_word(1, "tapir"), Ok(TurnOutcome::BotWord("rabbit".into())));
        assert_eq!(game.submit_word(1, "tiger"), Err(GameError::AlreadyUsed));
    }

    #[test]
    fn rejections_leave_round_unchanged() {
        let game = game(&["tiger", "rat", "tapir", "toad"]);
        game.submit_word(1, "tiger").unwrap();

        assert_eq!(
            game.submit_word(1, "rat"),
            Err(GameError::WrongStartingLetter { expected: 't' })
        );
        assert_eq!(game.submit_word(1, "tomato"), Err(GameError::UnknownWord));
        assert_eq!(game.submit_word(1, "   "), Err(GameError::UnknownWord));

        let session = game.session(1);
        let session = lock(&session);
        assert!(session.is_started());
        assert_eq!(session.last_word(), Some("rat"));
    }

    #[test]
    fn exhaustion_ends_the_round() {
        let game = game(&["cat", "tac"]);
        assert_eq!(game.submit_word(7, "tac"), Ok(TurnOutcome::BotWord("cat".into())));
        // "cat" was the only 'c' word.
        assert_eq!(game.dont_know(7), Ok(TurnOutcome::UserWins));
        assert_eq!(game.dont_know(7), Err(GameError::NotStarted));

        // The next round sees the whole dictionary again.
        assert_eq!(game.submit_word(7, "tac"), Ok(TurnOutcome::BotWord("cat".into())));
    }

    #[test]
    fn dont_know_replaces_the_bots_word() {
        let game = game(&["ox", "xylophone", "xenon", "xray"]);
        assert_eq!(game.submit_word(3, "ox"), Ok(TurnOutcome::BotWord("xylophone".into())));
        assert_eq!(game.dont_know(3), Ok(TurnOutcome::BotWord("xenon".into())));
        assert_eq!(game.dont_know(3), Ok(TurnOutcome::BotWord("xray".into())));
        assert_eq!(game.dont_know(3), Ok(TurnOutcome::UserWins));
    }

    #[test]
    fn start_round_opens_with_a_hidden_word() {
        let game = game(&["apple", "banana", "cherry"]);
        let opening = game.start_round(5).unwrap();
        assert!(game.dictionary().contains(&opening));

        let session = game.session(5);
        let session = lock(&session);
        assert!(session.is_started());
        assert_eq!(session.last_word(), Some(opening.as_str()));
        assert!(session.view().is_hidden(&opening));
    }

    #[test]
    fn end_round_requires_an_active_round() {
        let game = game(&["cat", "tac"]);
        assert_eq!(game.end_round(9), Err(GameError::NotStarted));
        game.submit_word(9, "cat").unwrap();
        assert_eq!(game.end_round(9), Ok(()));

        let session = game.session(9);
        let session = lock(&session);
        assert!(!session.is_started());
        assert_eq!(session.last_word(), None);
        assert!(!session.view().is_hidden("cat"));
    }

    #[test]
    fn sessions_are_independent() {
        let game = game(&["tiger", "rat", "rabbit"]);
        assert_eq!(game.submit_word(1, "tiger"), Ok(TurnOutcome::BotWord("rat".into())));
        assert_eq!(game.submit_word(2, "tiger"), Ok(TurnOutcome::BotWord("rat".into())));
        assert_eq!(game.session_count(), 2);
    }

    #[test]
    fn empty_dictionary_cannot_open_a_round() {
        let game = game(&[]);
        assert_eq!(game.start_round(1), None);
    }
}
