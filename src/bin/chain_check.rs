//! Binary to fetch a live option chain, price a sample straddle against it,
//! and print the payoff table and break-evens for inspecting live data.
//!
//! # Usage
//!
//! ```sh
//! export OPTLAB_API_KEY="your-api-key"
//! cargo run --bin chain_check --features cli -- SPY 2026-09-18
//! ```

use std::env;

use optlab_rs::client::OptLabClient;
use optlab_rs::payoff::{break_evens, compute_payoff_with_chain};
use optlab_rs::types::enums::LegAction;
use optlab_rs::types::leg::Leg;
use optlab_rs::types::option_chain::OptionChainRequest;

#[tokio::main]
async fn main() -> optlab_rs::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let api_key = env::var("OPTLAB_API_KEY").expect("set OPTLAB_API_KEY env var before running");

    let mut args = env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "SPY".to_owned());
    let expiry = args.next();

    let client = OptLabClient::new(api_key)?;

    let expiry = match expiry {
        Some(e) => e,
        None => {
            let expiries = client.get_expiry_list(&symbol).await?;
            expiries
                .data
                .first()
                .cloned()
                .expect("no active expiries for symbol")
        }
    };

    println!("Fetching {symbol} chain for {expiry}…");
    let chain = client
        .get_option_chain(&OptionChainRequest {
            symbol: symbol.clone(),
            expiry,
        })
        .await?
        .data;

    let spot = chain.last_price;
    println!("{symbol} spot: {spot:.2}");
    println!(
        "chain: {} calls / {} puts\n",
        chain.calls.len(),
        chain.puts.len()
    );

    // Sample strategy: an at-the-money long straddle. Strikes snap to the
    // nearest quoted call strike; premiums resolve from the live quotes.
    let atm_strike = chain
        .calls
        .iter()
        .map(|q| q.strike)
        .min_by(|a, b| (a - spot).abs().total_cmp(&(b - spot).abs()))
        .expect("chain has no call quotes");

    let legs = vec![
        Leg::call(LegAction::Buy, atm_strike, 1, 0.0),
        Leg::put(LegAction::Buy, atm_strike, 1, 0.0),
    ];
    println!("Long straddle @ {atm_strike:.2}:");

    let curve = compute_payoff_with_chain(&legs, spot, &chain);
    for point in curve.iter().step_by(20) {
        println!("  {:>10.2}  {:>10.2}", point.price, point.profit);
    }

    let be = break_evens(&curve);
    match be.as_slice() {
        [] => println!("\nno break-even inside the window"),
        crossings => {
            let list: Vec<String> = crossings.iter().map(|p| format!("{p:.2}")).collect();
            println!("\nbreak-evens: {}", list.join(", "));
        }
    }

    Ok(())
}
