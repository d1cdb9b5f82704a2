criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        traversing_to_a_guess,
        learning_new_items,
        computing_statistics,
        collecting_items,
        rendering_the_tree,
        converting_record_round_trip,
}

use pseudoqui::game::DecisionTree;
use pseudoqui::tree::Record;
use pseudoqui::tree::Tree;

/// Seed tree plus `n` learned items, each inserted at the end of an
/// xorshift-chosen path so the depth stays logarithmic.
fn grown(n: usize) -> DecisionTree {
    let mut game = DecisionTree::default();
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for i in 0..n {
        game.reset();
        loop {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            if game.answer(state & 1 == 1).expect("asking") {
                break;
            }
        }
        game.learn(&format!("Animal {}", i), &format!("Question {}?", i), i % 2 == 0)
            .expect("guessing");
    }
    game
}

fn traversing_to_a_guess(c: &mut criterion::Criterion) {
    let mut game = grown(1_000);
    c.bench_function("answer No down to a guess", |b| {
        b.iter(|| {
            game.reset();
            while !game.answer(false).expect("asking") {}
        })
    });
}

fn learning_new_items(c: &mut criterion::Criterion) {
    c.bench_function("learn 100 items into the seed tree", |b| {
        b.iter_batched(
            DecisionTree::default,
            |mut game| {
                for i in 0..100 {
                    game.reset();
                    while !game.answer(i % 3 == 0).expect("asking") {}
                    game.learn(&format!("Animal {}", i), "Is it new?", true)
                        .expect("guessing");
                }
                game
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn computing_statistics(c: &mut criterion::Criterion) {
    let game = grown(1_000);
    c.bench_function("compute statistics of a 1k item tree", |b| {
        b.iter(|| game.statistics())
    });
}

fn collecting_items(c: &mut criterion::Criterion) {
    let game = grown(1_000);
    c.bench_function("collect items of a 1k item tree", |b| {
        b.iter(|| game.all_items().count())
    });
}

fn rendering_the_tree(c: &mut criterion::Criterion) {
    let game = grown(1_000);
    c.bench_function("render a 1k item tree", |b| b.iter(|| game.display()));
}

fn converting_record_round_trip(c: &mut criterion::Criterion) {
    let game = grown(1_000);
    c.bench_function("serialize and rebuild a 1k item tree", |b| {
        b.iter(|| {
            let json = serde_json::to_string(&Record::from(&game)).expect("serialize");
            let record = serde_json::from_str::<Record>(&json).expect("deserialize");
            Tree::try_from(record).expect("well formed")
        })
    });
}
