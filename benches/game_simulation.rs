use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mtg_goldfish::card::CardDatabase;
use mtg_goldfish::rng::GameRng;
use mtg_goldfish::sims::{register_standard_cards, SavannahBoltStrategy};
use mtg_goldfish::simulation::{parse_deck_file, Session};

fn benchmark_single_game(c: &mut Criterion) {
    let mut db = CardDatabase::new();
    let cards = register_standard_cards(&mut db).expect("Failed to register cards");
    let deck = parse_deck_file("decks/savannah_bolt.txt", &db).expect("Failed to parse deck");
    let strategy = SavannahBoltStrategy::new(cards);
    let session = Session::new(deck, &strategy, &db);

    c.bench_function("single_game_seed_12345", |b| {
        b.iter(|| session.game(&mut GameRng::new(Some(black_box(12345)))))
    });
}

fn benchmark_sessions(c: &mut Criterion) {
    let mut db = CardDatabase::new();
    let cards = register_standard_cards(&mut db).expect("Failed to register cards");
    let deck = parse_deck_file("decks/savannah_bolt.txt", &db).expect("Failed to parse deck");
    let strategy = SavannahBoltStrategy::new(cards);

    c.bench_function("100_games_sequential", |b| {
        let mut session = Session::new(deck.clone(), &strategy, &db).with_seed(0);
        b.iter(|| session.simulate(black_box(100)).map(|s| s.results().len()))
    });

    c.bench_function("1000_games_parallel", |b| {
        let mut session = Session::new(deck.clone(), &strategy, &db)
            .with_seed(0)
            .parallel(true);
        b.iter(|| session.simulate(black_box(1000)).map(|s| s.results().len()))
    });
}

fn benchmark_deck_parsing(c: &mut Criterion) {
    let mut db = CardDatabase::new();
    register_standard_cards(&mut db).expect("Failed to register cards");

    c.bench_function("parse_deck_file", |b| {
        b.iter(|| parse_deck_file(black_box("decks/savannah_bolt.txt"), black_box(&db)))
    });
}

criterion_group!(benches, benchmark_single_game, benchmark_sessions, benchmark_deck_parsing);
criterion_main!(benches);
