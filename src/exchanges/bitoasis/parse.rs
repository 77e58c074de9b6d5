//! BitOasis response parsers
//!
//! Each parser maps one raw JSON object onto a unified type. Optional fields
//! that are absent or null come back as `None`, never as zero. A parser only
//! fails when a structurally required field is missing.

use rust_decimal::Decimal;
use serde_json::Value;

use super::pair::PairInfo;
use crate::errors::{CcxtError, CcxtResult};
use crate::types::{
    Balance, Balances, DepositAddress, Fee, Market, MinMax, Order, OrderBook, OrderBookEntry,
    OrderStatus, Ticker, Trade, Transaction, TransactionStatus,
};
use crate::utils::{
    check_address, safe_array, safe_decimal, safe_integer, safe_integer_product, safe_string,
    safe_string_lower, safe_timestamp, safe_value, safe_value2, to_decimal, CurrencyCodes,
};

/// 응답에서 필수 최상위 키 추출
pub fn required<'a>(response: &'a Value, key: &str, data_type: &str) -> CcxtResult<&'a Value> {
    safe_value(response, key).ok_or_else(|| CcxtError::ParseError {
        data_type: data_type.to_string(),
        message: format!("response has no '{key}' field"),
    })
}

/// 응답에서 배열 추출 (키가 없으면 빈 목록)
pub fn list<'a>(response: &'a Value, key: &str) -> &'a [Value] {
    safe_array(response, key).map(Vec::as_slice).unwrap_or(&[])
}

// === Status tables ===

pub fn parse_order_status(status: &str) -> OrderStatus {
    match status {
        "OPEN" => OrderStatus::Open,
        "DONE" => OrderStatus::Closed,
        "CANCELED" => OrderStatus::Canceled,
        other => OrderStatus::Unknown(other.to_string()),
    }
}

pub fn parse_deposit_status(status: &str) -> TransactionStatus {
    match status {
        "UNCONFIRMED" | "PENDING" => TransactionStatus::Pending,
        "DONE" => TransactionStatus::Ok,
        "FAILED" => TransactionStatus::Failed,
        "CANCELED" => TransactionStatus::Canceled,
        other => TransactionStatus::Unknown(other.to_string()),
    }
}

pub fn parse_withdrawal_status(status: &str) -> TransactionStatus {
    match status {
        "PROCESSING" | "PENDING" => TransactionStatus::Pending,
        "DONE" => TransactionStatus::Ok,
        "FAILED" => TransactionStatus::Failed,
        "CANCELED" => TransactionStatus::Canceled,
        other => TransactionStatus::Unknown(other.to_string()),
    }
}

// === Market data ===

/// `{pair, price_precision, mimimum_order_size, maximum_order_size}`
pub fn parse_market(raw: &Value, codes: &dyn CurrencyCodes) -> CcxtResult<Market> {
    let id = safe_string(raw, "pair").ok_or_else(|| CcxtError::ParseError {
        data_type: "Market".into(),
        message: "market has no 'pair' field".into(),
    })?;
    let info = PairInfo::decompose(&id, codes)?;

    let mut market = Market::spot(info.pair, info.base, info.quote, info.base_id, info.quote_id);
    market.precision.price = safe_integer(raw, "price_precision").and_then(|p| i32::try_from(p).ok());
    // upstream spells the minimum key "mimimum"
    market.limits.amount = MinMax {
        min: safe_decimal(raw, "mimimum_order_size"),
        max: safe_decimal(raw, "maximum_order_size"),
    };
    market.info = raw.clone();
    Ok(market)
}

pub fn parse_markets(response: &Value, codes: &dyn CurrencyCodes) -> CcxtResult<Vec<Market>> {
    required(response, "pairs", "Market")?;
    list(response, "pairs")
        .iter()
        .map(|raw| parse_market(raw, codes))
        .collect()
}

/// `{pair, bid, ask, open_price, last_price, daily_low, daily_high, daily_change, daily_percentage_change}`
///
/// The payload carries no timestamp; `timestamp` is the local capture time.
pub fn parse_ticker(raw: &Value, symbol: &str, timestamp: i64) -> Ticker {
    let mut ticker = Ticker::new(symbol.to_string())
        .with_timestamp(timestamp)
        .with_last(safe_decimal(raw, "last_price"));
    ticker.high = safe_decimal(raw, "daily_high");
    ticker.low = safe_decimal(raw, "daily_low");
    ticker.bid = safe_decimal(raw, "bid");
    ticker.ask = safe_decimal(raw, "ask");
    ticker.open = safe_decimal(raw, "open_price");
    ticker.change = safe_decimal(raw, "daily_change");
    ticker.percentage = safe_decimal(raw, "daily_percentage_change");
    ticker.info = raw.clone();
    ticker
}

fn parse_book_entry(row: &Value) -> Option<OrderBookEntry> {
    let (price, amount) = match row {
        Value::Array(cells) if cells.len() >= 2 => (to_decimal(&cells[0]), to_decimal(&cells[1])),
        Value::Object(_) => (safe_decimal(row, "price"), safe_decimal(row, "amount")),
        _ => (None, None),
    };
    Some(OrderBookEntry::new(price?, amount?))
}

fn parse_book_side(raw: &Value, key: &str) -> Vec<OrderBookEntry> {
    list(raw, key)
        .iter()
        .filter_map(|row| {
            let entry = parse_book_entry(row);
            if entry.is_none() {
                tracing::warn!(side = key, row = %row, "skipping malformed order book row");
            }
            entry
        })
        .collect()
}

/// `{bids: [...], asks: [...]}`, rows either `[price, amount]` or `{price, amount}`
pub fn parse_order_book(raw: &Value, symbol: &str, timestamp: i64) -> OrderBook {
    let mut book = OrderBook::new(symbol.to_string()).with_timestamp(timestamp);
    book.bids = parse_book_side(raw, "bids");
    book.asks = parse_book_side(raw, "asks");
    book.sort();
    book
}

/// `{id, type, price, amount, timestamp}` with `timestamp` in seconds
pub fn parse_trade(raw: &Value, symbol: &str) -> Trade {
    let mut trade = Trade::new(
        safe_string(raw, "id").unwrap_or_default(),
        symbol.to_string(),
        safe_decimal(raw, "price"),
        safe_decimal(raw, "amount"),
    )
    .with_timestamp(safe_integer_product(raw, "timestamp", 1000));
    trade.side = safe_string(raw, "type");
    trade.info = raw.clone();
    trade
}

// === Orders ===

/// `{id, pair, side, type, amount_<BASE>, amount_<QUOTE>, price, avg_execution_price, fee, date_created, status}`
///
/// The amount and cost keys are named after the pair's currencies, so the pair
/// is decomposed before any numeric field is read.
pub fn parse_order(raw: &Value, codes: &dyn CurrencyCodes) -> CcxtResult<Order> {
    let pair = safe_string(raw, "pair").ok_or_else(|| CcxtError::ParseError {
        data_type: "Order".into(),
        message: "order has no 'pair' field".into(),
    })?;
    let info = PairInfo::decompose(&pair, codes)?;

    let amount_of = |code: &str, id: &str| {
        safe_decimal(raw, &format!("amount_{code}"))
            .or_else(|| safe_decimal(raw, &format!("amount_{id}")))
    };
    let amount = amount_of(&info.base, &info.base_id);
    let cost = amount_of(&info.quote, &info.quote_id);

    let mut order = Order::new(safe_string(raw, "id").unwrap_or_default(), info.symbol)
        .with_timestamp(safe_timestamp(raw, "date_created"))
        .with_status(safe_string(raw, "status").map(|s| parse_order_status(&s)));
    order.order_type = safe_string_lower(raw, "type");
    order.side = safe_string_lower(raw, "side");
    order.price = safe_decimal(raw, "price");
    order.average = safe_decimal(raw, "avg_execution_price");
    order.amount = amount;
    order.cost = cost;
    order.fee = safe_decimal(raw, "fee").map(|fee| Fee::new(Some(fee), Some(info.quote.clone())));
    order.info = raw.clone();
    Ok(order)
}

pub fn parse_orders(raw: &[Value], codes: &dyn CurrencyCodes) -> CcxtResult<Vec<Order>> {
    raw.iter().map(|order| parse_order(order, codes)).collect()
}

// === Funding ===

/// `{value, currency}` 금액 객체
fn parse_amount(obj: Option<&Value>, codes: &dyn CurrencyCodes) -> (Option<Decimal>, Option<String>) {
    match obj {
        Some(obj) => (
            safe_decimal(obj, "value"),
            safe_string(obj, "currency").map(|c| codes.code(&c)),
        ),
        None => (None, None),
    }
}

/// 상태는 엔티티에서 읽고, 없으면 금액 객체에서 읽는다
fn funding_status(raw: &Value, amount: Option<&Value>) -> Option<String> {
    safe_string(raw, "status").or_else(|| amount.and_then(|a| safe_string(a, "status")))
}

fn parsed_address(raw: &Value, key: &str) -> (Option<String>, Option<String>) {
    match safe_value(raw, key) {
        Some(addr) => (safe_string(addr, "address"), safe_string(addr, "address_id")),
        None => (None, None),
    }
}

/// `{id, amount: {value, currency}, tx_hash, date_created, status, parsed_deposit_address}`
pub fn parse_deposit(raw: &Value, codes: &dyn CurrencyCodes) -> Transaction {
    let amount_obj = safe_value(raw, "amount");
    let (amount, currency) = parse_amount(amount_obj, codes);
    let (address, tag) = parsed_address(raw, "parsed_deposit_address");

    let mut tx = Transaction::deposit(safe_string(raw, "id").unwrap_or_default())
        .with_timestamp(safe_timestamp(raw, "date_created"))
        .with_address(address, tag);
    tx.txid = safe_string(raw, "tx_hash");
    tx.amount = amount;
    tx.currency = currency;
    tx.status = funding_status(raw, amount_obj).map(|s| parse_deposit_status(&s));
    tx.info = raw.clone();
    tx
}

/// `{id, amount_withdrawn, amount_fee, tx_hash, date_created, status, parsed_withdrawal_address}`
pub fn parse_withdrawal(raw: &Value, codes: &dyn CurrencyCodes) -> Transaction {
    let amount_obj = safe_value2(raw, "amount_withdrawn", "amount");
    let (amount, currency) = parse_amount(amount_obj, codes);
    let (address, tag) = parsed_address(raw, "parsed_withdrawal_address");

    let mut tx = Transaction::withdrawal(safe_string(raw, "id").unwrap_or_default())
        .with_timestamp(safe_timestamp(raw, "date_created"))
        .with_address(address, tag);
    tx.txid = safe_string(raw, "tx_hash");
    tx.amount = amount;
    tx.currency = currency;
    tx.status = funding_status(raw, amount_obj).map(|s| parse_withdrawal_status(&s));
    tx.fee = match parse_amount(safe_value(raw, "amount_fee"), codes) {
        (None, None) => None,
        (cost, currency) => Some(Fee::new(cost, currency)),
    };
    tx.info = raw.clone();
    tx
}

/// `{parsed_address: {address, address_id}}`
pub fn parse_deposit_address(response: &Value, code: &str) -> CcxtResult<DepositAddress> {
    let parsed = required(response, "parsed_address", "DepositAddress")?;
    let address = safe_string(parsed, "address").unwrap_or_default();
    let address = check_address(&address)?;

    let mut result = DepositAddress::new(code, address).with_tag(safe_string(parsed, "address_id"));
    result.info = response.clone();
    Ok(result)
}

// === Account ===

/// `{balances: {<currencyId>: <free>}}`
pub fn parse_balance(response: &Value, codes: &dyn CurrencyCodes, timestamp: i64) -> CcxtResult<Balances> {
    let raw = required(response, "balances", "Balance")?;
    let entries = raw.as_object().ok_or_else(|| CcxtError::ParseError {
        data_type: "Balance".into(),
        message: "'balances' is not an object".into(),
    })?;

    let mut balances = Balances::new().with_timestamp(timestamp);
    for (currency_id, value) in entries {
        balances.add(codes.code(currency_id), Balance::from_free(to_decimal(value)));
    }
    balances.info = raw.clone();
    Ok(balances)
}
