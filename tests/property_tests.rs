//! Property tests for normalization and move application.

use proptest::prelude::*;

use shiritori::core::{GameConfig, GameState, GameStatus};
use shiritori::dictionary::StaticSource;
use shiritori::game::GameController;
use shiritori::kana::{canonicalize, is_hiragana, last_sound};
use shiritori::rules::Verdict;

/// Small word pool with plenty of chains, repeats, and ン endings.
const POOL: &[&str] = &[
    "しりとり", "りんご", "ごりら", "らっぱ", "ぱんだ", "だちょう", "うま", "まり", "りす", "すいか",
    "かめ", "めだか", "からす", "すし", "しか", "かん", "ほん", "いぬ", "ぬりえ", "えんぴつ",
    "つくえ", "こーひー", "ひこうき", "きしゃ", "やま", "まど", "どーなつ", "つみき", "き", "ご",
    "リンゴ", "ゴリラ",
];

fn kana_word() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            (0x3041u32..=0x3096).prop_map(|c| char::from_u32(c).unwrap()),
            (0x30A1u32..=0x30F6).prop_map(|c| char::from_u32(c).unwrap()),
            Just('ー'),
        ],
        1..8,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn started_game(seed: u64) -> GameController {
    let mut game = GameController::new(StaticSource::new(POOL.iter().copied()), GameConfig::new().with_seed(seed));
    game.start();
    game
}

proptest! {
    #[test]
    fn prop_canonical_form_has_no_hiragana(word in kana_word()) {
        prop_assert!(!canonicalize(&word).chars().any(is_hiragana));
    }

    #[test]
    fn prop_canonicalize_is_idempotent(word in kana_word()) {
        let once = canonicalize(&word);
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn prop_last_sound_ignores_script(word in kana_word()) {
        prop_assert_eq!(last_sound(&canonicalize(&word)), last_sound(&word));
    }

    #[test]
    fn prop_moves_respect_state_invariants(
        seed in any::<u64>(),
        moves in prop::collection::vec(0..POOL.len(), 1..30),
    ) {
        let mut game = started_game(seed);

        for index in moves {
            let before: GameState = game.state().clone();
            let word = POOL[index];
            let verdict = game.submit(word);
            let after = game.state();

            match verdict {
                Verdict::Accepted(accepted) => {
                    prop_assert_eq!(after.used().len(), before.used().len() + 1);
                    prop_assert!(!before.has_used(&canonicalize(word)));
                    prop_assert!(after.has_used(accepted.canonical()));
                    prop_assert_eq!(accepted.canonical(), canonicalize(word));
                    prop_assert_eq!(after.status(), GameStatus::Active);
                }
                Verdict::Rejected(_) => {
                    prop_assert_eq!(after.history(), before.history());
                    prop_assert_eq!(after.used(), before.used());
                    prop_assert_eq!(after.status(), before.status());
                }
                Verdict::Terminated(_, played) => {
                    prop_assert_eq!(after.status(), GameStatus::Ended);
                    prop_assert_eq!(after.latest(), Some(&played));
                }
                Verdict::Ignored => {
                    prop_assert_eq!(after, &before);
                }
            }

            if before.is_ended() {
                prop_assert_eq!(after, &before);
            }

            for played in after.history() {
                prop_assert!(after.has_used(played.canonical()));
            }
            prop_assert!(after.history().len() <= after.history_limit());
        }
    }
}
