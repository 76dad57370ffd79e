use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_decimal::Decimal;
use tx_analytics::{Transaction, TransactionsStore, CREDIT, DEBIT};

const NUM_TRANSACTIONS: u64 = 100_000;

fn build_store() -> TransactionsStore {
    let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    (0..NUM_TRANSACTIONS)
        .map(|i| Transaction {
            id: i.to_string(),
            date: start + Days::new(i % 730),
            amount: Decimal::new((i % 10_000) as i64, 2),
            tx_type: if i % 3 == 0 { CREDIT } else { DEBIT }.to_string(),
            description: format!("payment {}", i),
            merchant: format!("merchant {}", i % 50),
            card_type: "Visa".to_string(),
        })
        .collect()
}

fn queries(c: &mut Criterion) {
    let store = build_store();
    let mut group = c.benchmark_group("queries");
    group.throughput(Throughput::Elements(NUM_TRANSACTIONS));

    group.bench_function("total_amount_100K", |b| {
        b.iter(|| black_box(store.total_amount()));
    });

    group.bench_function("total_amount_by_date_100K", |b| {
        b.iter(|| black_box(store.total_amount_by_date(Some(2019), Some(6), None)));
    });

    group.bench_function("busiest_month_100K", |b| {
        b.iter(|| black_box(store.busiest_month()));
    });

    group.bench_function("find_by_id_last_100K", |b| {
        let last = (NUM_TRANSACTIONS - 1).to_string();
        b.iter(|| black_box(store.find_by_id(&last)));
    });

    group.bench_function("summary_100K", |b| {
        b.iter(|| black_box(store.summary()));
    });

    group.finish();
}

criterion_group!(benches, queries);
criterion_main!(benches);
