//! Integration tests for the goldfish simulator
//! Full games and sessions with known seeds, plus property tests over random decks

use crate::card::{Card, CardDatabase, CardId};
use crate::game::{
    FirstDrawRule, Game, GameConfig, GameError, Library, Multiset, Player, DAMAGE_THRESHOLD,
};
use crate::rng::GameRng;
use crate::sims::{register_standard_cards, BurnStrategy, SavannahBoltStrategy};
use crate::simulation::{parse_deck_file, Deck, Session};
use crate::strategy::{play_card, Strategy};
use proptest::prelude::*;

/// Deals 3 and leaves no permanent behind
struct Incinerate;

impl Card for Incinerate {
    fn name(&self) -> &str {
        "Incinerate"
    }
    fn on_play(&self, game: &mut Game<'_>) -> bool {
        game.deal_damage(3);
        false
    }
    fn each_turn(&self, _game: &mut Game<'_>) {}
}

struct Goblin;

impl Card for Goblin {
    fn name(&self) -> &str {
        "Goblin"
    }
    fn on_play(&self, _game: &mut Game<'_>) -> bool {
        true
    }
    fn each_turn(&self, game: &mut Game<'_>) {
        game.deal_damage(1);
    }
}

struct Mountain;

impl Card for Mountain {
    fn name(&self) -> &str {
        "Mountain"
    }
    fn on_play(&self, game: &mut Game<'_>) -> bool {
        game.player_mut().add_land();
        false
    }
    fn each_turn(&self, _game: &mut Game<'_>) {}
}

/// Plays every card in hand each turn
struct Dump;

impl Strategy for Dump {
    fn name(&self) -> &str {
        "dump"
    }
    fn turn(&self, game: &mut Game<'_>) -> Result<(), GameError> {
        let hand: Vec<CardId> = game.player().hand().instances().collect();
        for card in hand {
            play_card(card, game)?;
        }
        Ok(())
    }
}

fn red_db() -> (CardDatabase, [CardId; 3]) {
    let mut db = CardDatabase::new();
    let incinerate = db.register(Incinerate).unwrap();
    let goblin = db.register(Goblin).unwrap();
    let mountain = db.register(Mountain).unwrap();
    (db, [incinerate, goblin, mountain])
}

#[test]
fn test_one_burn_spell_per_turn_takes_seven_turns() {
    let (db, [incinerate, ..]) = red_db();
    let deck = Deck::new([(incinerate, 60)]);
    let strategy = BurnStrategy::new(incinerate);

    for first_draw in [FirstDrawRule::Literal, FirstDrawRule::SkipOnPlay] {
        let config = GameConfig {
            on_the_play: true,
            first_draw,
            ..GameConfig::default()
        };
        let library = Library::new(&deck, &mut GameRng::new(Some(1)));
        let mut game = Game::new(Player::new(library, &strategy), &db, config);

        let result = game.goldfish().unwrap();
        assert_eq!(result.win_turn, Some(7), "ceil(20 / 3) turns with {:?}", first_draw);
        assert_eq!(result.damage_dealt, 21);
        assert!(game.battlefield().is_empty());
    }
}

#[test]
fn test_burn_session_mean_is_exact() {
    let (db, [incinerate, ..]) = red_db();
    let strategy = BurnStrategy::new(incinerate);
    let mut session = Session::new(Deck::new([(incinerate, 60)]), &strategy, &db);

    assert_eq!(session.simulate(50).unwrap().mean(), Ok(7.0));
}

#[test]
fn test_literal_rule_draws_on_first_turn_on_the_play() {
    let (db, [_, _, mountain]) = red_db();
    let deck = Deck::new([(mountain, 60)]);

    let library_after_first_turn = |first_draw| {
        let config = GameConfig {
            on_the_play: true,
            first_draw,
            max_turns: 1,
        };
        let library = Library::new(&deck, &mut GameRng::new(Some(4)));
        let mut game = Game::new(Player::new(library, &Dump), &db, config);
        game.goldfish().unwrap();
        game.player().library().len()
    };

    assert_eq!(library_after_first_turn(FirstDrawRule::Literal), 52);
    assert_eq!(library_after_first_turn(FirstDrawRule::SkipOnPlay), 53);
}

#[test]
fn test_deck_out_is_not_fatal() {
    let (db, [_, goblin, mountain]) = red_db();
    // 10 cards, one goblin: runs out of library long before 20 damage
    let deck = Deck::new([(mountain, 9), (goblin, 1)]);
    let library = Library::new(&deck, &mut GameRng::new(Some(8)));
    let mut game = Game::new(Player::new(library, &Dump), &db, GameConfig::default());

    let result = game.goldfish().unwrap();
    assert!(game.player().library().is_empty());
    assert!(result.win_turn.is_some(), "the goblin keeps attacking after deck out");
}

#[test]
fn test_savannah_bolt_deck_file() {
    let mut db = CardDatabase::new();
    let cards = register_standard_cards(&mut db).unwrap();
    let deck = parse_deck_file("decks/savannah_bolt.txt", &db).expect("Failed to parse deck");
    let strategy = SavannahBoltStrategy::new(cards);

    let mut session = Session::new(deck, &strategy, &db).with_seed(12345);
    let summary = session.simulate(200).unwrap().summary().unwrap();

    assert_eq!(summary.trials, 200);
    assert_eq!(summary.did_not_converge, 0);
    assert!(summary.min >= 1);
    assert!(summary.mean >= summary.min as f64 && summary.mean <= summary.max as f64);
}

#[test]
fn test_variance_of_mean_shrinks_with_trials() {
    let mut db = CardDatabase::new();
    let cards = register_standard_cards(&mut db).unwrap();
    let deck = Deck::new([(cards.savannah, 20), (cards.lion, 20), (cards.bolt, 20)]);
    let strategy = SavannahBoltStrategy::new(cards);

    let spread_of_means = |trials: usize| {
        let means: Vec<f64> = (0..8u64)
            .map(|batch| {
                Session::new(deck.clone(), &strategy, &db)
                    .with_seed(batch * 1_000_003)
                    .parallel(true)
                    .simulate(trials)
                    .and_then(|session| session.mean())
                    .unwrap()
            })
            .collect();
        let centre = means.iter().sum::<f64>() / means.len() as f64;
        means.iter().map(|m| (m - centre).powi(2)).sum::<f64>() / (means.len() - 1) as f64
    };

    let small = spread_of_means(10);
    let large = spread_of_means(10_000);
    assert!(
        large < small,
        "variance of the mean should shrink: {} trials -> {}, {} trials -> {}",
        10,
        small,
        10_000,
        large
    );
}

proptest! {
    #[test]
    fn prop_library_is_permutation_of_deck(
        counts in prop::collection::vec(0u32..12, 3),
        seed in any::<u64>(),
    ) {
        let (_db, ids) = red_db();
        let deck = Deck::new(ids.iter().copied().zip(counts));
        let mut library = Library::new(&deck, &mut GameRng::new(Some(seed)));

        let mut drawn = Multiset::new();
        while let Some(card) = library.draw() {
            drawn.add(card);
        }
        prop_assert_eq!(drawn.len(), deck.len());
        prop_assert_eq!(&drawn, deck.cards());
    }

    #[test]
    fn prop_hand_counts_match_draws(
        counts in prop::collection::vec(0u32..8, 3),
        draws in 0usize..40,
        seed in any::<u64>(),
    ) {
        let (_db, ids) = red_db();
        let deck = Deck::new(ids.iter().copied().zip(counts));
        let library = Library::new(&deck, &mut GameRng::new(Some(seed)));
        let mut reference = library.clone();
        let mut player = Player::new(library, &Dump);

        let mut expected = Multiset::new();
        for _ in 0..draws {
            if let Some(card) = reference.draw() {
                expected.add(card);
            }
            player.draw();
        }
        prop_assert_eq!(player.hand(), &expected);
        prop_assert_eq!(player.hand().len(), draws.min(deck.len()));
    }

    #[test]
    fn prop_damage_never_decreases(
        counts in prop::collection::vec(0u32..20, 3),
        seed in any::<u64>(),
        on_the_play in any::<bool>(),
    ) {
        let (db, ids) = red_db();
        let deck = Deck::new(ids.iter().copied().zip(counts));
        let config = GameConfig { on_the_play, ..GameConfig::default() };
        let library = Library::new(&deck, &mut GameRng::new(Some(seed)));
        let mut game = Game::new(Player::new(library, &Dump), &db, config);
        game.player_mut().draw_hand();

        let mut last = game.damage_dealt();
        for turn in 1..=30u32 {
            game.take_turn().unwrap();
            prop_assert!(game.damage_dealt() >= last);
            prop_assert_eq!(game.turn(), turn);
            last = game.damage_dealt();
        }
    }

    #[test]
    fn prop_goldfish_converges_with_burn(
        extra_lands in 0u32..30,
        seed in any::<u64>(),
    ) {
        let (db, [incinerate, _, mountain]) = red_db();
        let deck = Deck::new([(incinerate, 30), (mountain, extra_lands)]);
        let mut session = Session::new(deck, &Dump, &db).with_seed(seed);

        for result in session.simulate(5).unwrap().results() {
            prop_assert!(result.turns >= 1);
            prop_assert!(result.damage_dealt >= DAMAGE_THRESHOLD);
            prop_assert_eq!(result.win_turn, Some(result.turns));
        }
    }
}
