//! BitOasis account overview
//!
//! Requires a bearer token in `BITOASIS_TOKEN`. Read-only: no orders are placed.

use ccxt_bitoasis::client::ExchangeConfig;
use ccxt_bitoasis::types::Exchange;
use ccxt_bitoasis::{Bitoasis, CcxtError, CcxtResult};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> CcxtResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = std::env::var("BITOASIS_TOKEN").map_err(|_| CcxtError::AuthenticationRequired {
        message: "set BITOASIS_TOKEN to run this demo".into(),
    })?;
    let exchange = Bitoasis::new(ExchangeConfig::new().with_token(token))?;

    let balances = exchange.fetch_balance().await?;
    println!("=== Balances ===");
    for (currency, balance) in &balances.currencies {
        if let Some(free) = balance.free.filter(|f| !f.is_zero()) {
            println!("  {currency:<6} {free}");
        }
    }

    let open = exchange.fetch_open_orders(None, None, Some(20)).await?;
    println!("\n=== {} open orders ===", open.len());
    for order in &open {
        println!(
            "  {} {} {:?} {:?} @ {:?}",
            order.id, order.symbol, order.side, order.amount, order.price
        );
    }

    let deposits = exchange.fetch_deposits(Some("BTC"), None, Some(10)).await?;
    println!("\n=== {} BTC deposits ===", deposits.len());
    for deposit in deposits {
        println!("  {} {:?} {:?}", deposit.id, deposit.amount, deposit.status);
    }

    match exchange.fetch_deposit_address("BTC").await {
        Ok(address) => println!("\nBTC deposit address: {}", address.address),
        Err(err) => println!("\nno BTC deposit address: {err}"),
    }

    Ok(())
}
