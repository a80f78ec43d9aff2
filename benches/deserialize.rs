use criterion::{criterion_group, criterion_main, Criterion};
use serde::Deserialize;
use steam_web_session::{TradeOffer, TradeOfferState};

#[allow(dead_code)]
#[derive(Deserialize)]
struct Body {
    #[serde(default)]
    trade_offers_sent: Vec<TradeOffer>,
    #[serde(default)]
    trade_offers_received: Vec<TradeOffer>,
}

#[allow(dead_code)]
#[derive(Deserialize)]
struct Response {
    response: Body,
}

fn criterion_benchmark(c: &mut Criterion) {
    let trade_offers_bytes = include_bytes!("fixtures/get_trade_offers.json");
    
    c.bench_function("deserializes trade offers", |b| b.iter(|| {
        serde_json::from_slice::<Response>(trade_offers_bytes).ok();
    }));
    
    c.bench_function("maps trade offer state codes", |b| b.iter(|| {
        (0..=12).filter_map(|code| TradeOfferState::from_code(code).ok()).count()
    }));
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
