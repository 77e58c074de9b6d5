//! BitOasis public market data
//!
//! Run with `RUST_LOG=ccxt_bitoasis=debug cargo run --example bitoasis_public`

use ccxt_bitoasis::client::ExchangeConfig;
use ccxt_bitoasis::types::Exchange;
use ccxt_bitoasis::{Bitoasis, CcxtResult};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> CcxtResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let exchange = Bitoasis::new(ExchangeConfig::new())?;

    let markets = exchange.load_markets(false).await?;
    let mut symbols: Vec<_> = markets.keys().cloned().collect();
    symbols.sort();
    println!("=== {} markets ===", symbols.len());
    for symbol in &symbols {
        let market = &markets[symbol];
        println!(
            "{:<10} id={:<10} price precision={:?} min amount={:?}",
            symbol, market.id, market.precision.price, market.limits.amount.min
        );
    }

    let symbol = "BTC/AED";
    let ticker = exchange.fetch_ticker(symbol).await?;
    println!("\n{symbol} last={:?} bid={:?} ask={:?}", ticker.last, ticker.bid, ticker.ask);

    let book = exchange.fetch_order_book(symbol, Some(10)).await?;
    println!("\nOrder book ({} bids / {} asks)", book.bids.len(), book.asks.len());
    for (bid, ask) in book.bids.iter().zip(book.asks.iter()).take(5) {
        println!("  {:>14} {:>12} | {:>14} {:>12}", bid.price, bid.amount, ask.price, ask.amount);
    }

    let trades = exchange.fetch_trades(symbol, None, Some(5)).await?;
    println!("\nLast {} trades", trades.len());
    for trade in trades {
        println!(
            "  {} {:?} {:?} @ {:?}",
            trade.datetime.unwrap_or_default(),
            trade.side,
            trade.amount,
            trade.price
        );
    }

    Ok(())
}
