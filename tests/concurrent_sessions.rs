use std::sync::{Arc, Barrier};
use std::thread;
use wordlie::{MasterDictionary, TurnOutcome, WordlieGame};

fn dictionary() -> Arc<MasterDictionary> {
    Arc::new(["tiger", "rat", "rabbit", "tapir", "raven", "tumor"].into_iter().collect())
}

#[test]
fn first_contacts_race_to_a_single_session() {
    const CALLERS: usize = 32;
    let game = Arc::new(WordlieGame::with_seed(dictionary(), 0));
    let barrier = Arc::new(Barrier::new(CALLERS));

    let handles: Vec<_> = (0..CALLERS)
        .map(|_| {
            let game = Arc::clone(&game);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                game.session(77)
            })
        })
        .collect();

    let sessions: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(game.session_count(), 1);
    assert!(sessions.iter().all(|s| Arc::ptr_eq(s, &sessions[0])));
    assert!(Arc::ptr_eq(&sessions[0], &game.session(77)));
}

#[test]
fn parallel_players_do_not_see_each_others_words() {
    const PLAYERS: i64 = 16;
    let game = Arc::new(WordlieGame::with_seed(dictionary(), 0));

    let handles: Vec<_> = (0..PLAYERS)
        .map(|user| {
            let game = Arc::clone(&game);
            thread::spawn(move || {
                let first = game.submit_word(user, "tiger").unwrap();
                let second = game.submit_word(user, "tapir").unwrap();
                let third = game.submit_word(user, "tumor").unwrap();
                (first, second, third)
            })
        })
        .collect();

    for handle in handles {
        let (first, second, third) = handle.join().unwrap();
        assert_eq!(first, TurnOutcome::BotWord("rat".into()));
        assert_eq!(second, TurnOutcome::BotWord("rabbit".into()));
        assert_eq!(third, TurnOutcome::BotWord("raven".into()));
    }
    assert_eq!(game.session_count(), PLAYERS as usize);
}

#[test]
fn shared_dictionary_is_not_copied_per_session() {
    let dictionary = dictionary();
    let game = WordlieGame::with_seed(Arc::clone(&dictionary), 0);
    for user in 0..10 {
        game.submit_word(user, "tiger").unwrap();
    }
    // The game holds one reference, each session's view holds one more.
    assert_eq!(Arc::strong_count(&dictionary), 1 + 1 + 10);
}
