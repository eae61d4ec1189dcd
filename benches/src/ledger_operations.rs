use std::sync::Arc;
use std::thread;

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dragon_bank::prelude::*;

fn seeded_bank(num_accounts: u64) -> (CentralBank<Cents>, Vec<AccountId>) {
    let bank = CentralBank::<Cents, NoHistory>::without_history();
    let ids = (0..num_accounts)
        .map(|i| {
            let account_type = if i % 2 == 0 {
                AccountType::Checking
            } else {
                AccountType::Savings
            };
            bank.create_account(
                &format!("owner{i}@bank.com"),
                Cents::from_raw(1_000_000),
                account_type,
            )
            .unwrap()
        })
        .collect();
    (bank, ids)
}

/// Benchmark pure validators
fn bench_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("validators");

    group.bench_function("is_amount_valid", |b| {
        b.iter(|| {
            black_box(is_amount_valid(black_box(199.99)));
            black_box(is_amount_valid(black_box(200.001)));
        })
    });

    group.bench_function("is_email_valid", |b| {
        b.iter(|| {
            black_box(is_email_valid(black_box("first.last@mail.example.org")));
            black_box(is_email_valid(black_box("a..b@c.com")));
        })
    });

    group.finish();
}

/// Benchmark account creation
fn bench_create_accounts(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_accounts");

    for num_accounts in [100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_accounts),
            &num_accounts,
            |b, &num_accounts| {
                b.iter_batched(
                    CentralBank::<Cents, NoHistory>::without_history,
                    |bank| {
                        for i in 0..num_accounts {
                            black_box(
                                bank.create_account(
                                    "a@b.com",
                                    Cents::from_raw(i),
                                    AccountType::Checking,
                                )
                                .unwrap(),
                            );
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark owner lookup, which scans the registry
fn bench_resolve_by_owner(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_by_owner");

    for num_accounts in [100, 1_000] {
        let (bank, _) = seeded_bank(num_accounts);
        let email = format!("owner{}@bank.com", num_accounts - 2);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_accounts),
            &email,
            |b, email| {
                b.iter(|| black_box(bank.resolve_account_id(email, AccountType::Checking)));
            },
        );
    }

    group.finish();
}

/// Benchmark transfers from several threads over a shared registry
fn bench_concurrent_transfers(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_transfers");

    for num_threads in [1, 4] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_threads),
            &num_threads,
            |b, &num_threads| {
                b.iter_batched(
                    || {
                        let (bank, ids) = seeded_bank(64);
                        (Arc::new(bank), Arc::new(ids))
                    },
                    |(bank, ids)| {
                        let handles: Vec<_> = (0..num_threads)
                            .map(|t| {
                                let bank = Arc::clone(&bank);
                                let ids = Arc::clone(&ids);
                                thread::spawn(move || {
                                    for i in 0..1_000 {
                                        let from = ids[(i + t) % ids.len()];
                                        let to = ids[(i * 7 + 1) % ids.len()];
                                        let _ = bank.transfer(from, to, Cents::from_raw(1));
                                    }
                                })
                            })
                            .collect();
                        for handle in handles {
                            handle.join().unwrap();
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_validators,
    bench_create_accounts,
    bench_resolve_by_owner,
    bench_concurrent_transfers
);
criterion_main!(benches);
