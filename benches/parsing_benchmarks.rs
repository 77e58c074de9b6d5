//! Parsing Benchmarks
//!
//! Benchmarks for response parsing, request composition and precision formatting

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use ccxt_bitoasis::exchanges::bitoasis::{
    compose, parse_markets, parse_order, parse_order_book, routes, Params, PairInfo,
};
use ccxt_bitoasis::utils::{amount_to_precision, price_to_precision, CommonCurrencies};

fn bench_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("precision");

    let price = dec!(50000.125678);
    let amount = dec!(0.00123456);

    group.bench_function("price_to_precision", |b| {
        b.iter(|| black_box(price_to_precision(black_box(price), Some(2))))
    });

    group.bench_function("amount_to_precision", |b| {
        b.iter(|| black_box(amount_to_precision(black_box(amount), Some(4))))
    });

    group.finish();
}

fn bench_pair_decompose(c: &mut Criterion) {
    c.bench_function("pair_decompose", |b| {
        b.iter(|| black_box(PairInfo::decompose(black_box("BTC-AED"), &CommonCurrencies)))
    });
}

fn book_response(depth: usize) -> Value {
    let bids: Vec<Value> = (0..depth)
        .map(|i| json!([format!("{}.00", 50000 - i), "1.000"]))
        .collect();
    let asks: Vec<Value> = (0..depth)
        .map(|i| json!({"price": format!("{}.00", 50001 + i), "amount": "0.500"}))
        .collect();
    json!({"bids": bids, "asks": asks})
}

fn bench_order_book(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_book");

    for depth in [10, 100, 500] {
        let raw = book_response(depth);
        group.bench_with_input(BenchmarkId::new("parse", depth), &raw, |b, raw| {
            b.iter(|| black_box(parse_order_book(raw, "BTC/AED", 1_513_089_232_000)))
        });
    }

    group.finish();
}

fn bench_entities(c: &mut Criterion) {
    let mut group = c.benchmark_group("entities");

    let order = json!({
        "id": "1096341",
        "pair": "BTC-AED",
        "side": "BUY",
        "type": "LIMIT",
        "amount_BTC": "0.5",
        "amount_AED": "1500.065",
        "price": "3000.13",
        "avg_execution_price": "0",
        "fee": "1.5",
        "date_created": "2017-12-12T14:33:52.000Z",
        "status": "OPEN"
    });
    group.bench_function("parse_order", |b| {
        b.iter(|| black_box(parse_order(&order, &CommonCurrencies)))
    });

    let pairs: Vec<Value> = ["BTC-AED", "ETH-AED", "XRP-AED", "LTC-AED", "BCH-AED", "XLM-AED"]
        .iter()
        .map(|p| json!({"pair": p, "price_precision": "2", "mimimum_order_size": "0.001", "maximum_order_size": "10"}))
        .collect();
    let markets = json!({ "pairs": pairs });
    group.bench_function("parse_markets", |b| {
        b.iter(|| black_box(parse_markets(&markets, &CommonCurrencies)))
    });

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let base = "https://api.bitoasis.net/v1";

    group.bench_function("public_get", |b| {
        b.iter(|| {
            let mut params = Params::new();
            params.insert("pair".into(), "BTC-AED".into());
            params.insert("bids_limit".into(), 50.into());
            params.insert("asks_limit".into(), 50.into());
            black_box(compose(&routes::ORDER_BOOK, params, None, base))
        })
    });

    group.bench_function("private_post", |b| {
        b.iter(|| {
            let mut params = Params::new();
            params.insert("pair".into(), "BTC-AED".into());
            params.insert("amount".into(), "0.5".into());
            params.insert("type".into(), "limit".into());
            params.insert("side".into(), "buy".into());
            params.insert("price".into(), "3000.13".into());
            black_box(compose(&routes::CREATE_ORDER, params, Some("token"), base))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_precision,
    bench_pair_decompose,
    bench_order_book,
    bench_entities,
    bench_compose,
);

criterion_main!(benches);
