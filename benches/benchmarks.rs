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
        proposing_full_queue,
        supporting_full_queue,
        folding_full_queue,
        settling_full_queue,
}

const PLAYERS: usize = 1024;

fn populated(engine: &SettlementEngine) -> Table {
    let mut table = Table::new(engine.rules());
    for p in 0..PLAYERS {
        engine
            .propose(&mut table, p, 1 + (p as i64 % 80))
            .expect("valid proposal");
    }
    for p in 0..PLAYERS {
        engine
            .support(&mut table, (p + 1) % PLAYERS, p, true)
            .expect("valid support");
    }
    table
}

fn proposing_full_queue(c: &mut criterion::Criterion) {
    let engine = SettlementEngine::default();
    c.bench_function("propose 1024 actions", |b| {
        b.iter(|| {
            let mut table = Table::new(engine.rules());
            for p in 0..PLAYERS {
                let _ = engine.propose(&mut table, p, 10);
            }
            table
        })
    });
}

fn supporting_full_queue(c: &mut criterion::Criterion) {
    let engine = SettlementEngine::default();
    let table = populated(&engine);
    c.bench_function("support every action once more", |b| {
        b.iter(|| {
            let mut table = table.clone();
            for p in 0..PLAYERS {
                let _ = engine.support(&mut table, (p + 2) % PLAYERS, p, true);
            }
            table
        })
    });
}

fn folding_full_queue(c: &mut criterion::Criterion) {
    let engine = SettlementEngine::default();
    let table = populated(&engine);
    let actions = table.queue.iter().cloned().collect::<Vec<_>>();
    c.bench_function("fold 1024 pending actions", |b| {
        b.iter(|| Settlement::fold(&actions, Outcome::Win, &table.ledger, engine.rules()))
    });
}

fn settling_full_queue(c: &mut criterion::Criterion) {
    let engine = SettlementEngine::default();
    let table = populated(&engine);
    c.bench_function("settle 1024 pending actions", |b| {
        b.iter(|| {
            let mut table = table.clone();
            engine.run(&mut table, Outcome::Lose)
        })
    });
}

use synergy::engine::Settlement;
use synergy::engine::SettlementEngine;
use synergy::game::Outcome;
use synergy::game::Table;
