//! Integration tests against a live OptLab backend.
//!
//! # Running
//!
//! These tests require a real API key. Set the following environment
//! variables before running:
//!
//! ```sh
//! export OPTLAB_API_KEY="your-api-key"
//! export OPTLAB_BASE_URL="https://staging.api.optlab.io"   # optional
//! cargo test --test backend -- --nocapture
//! ```
//!
//! Without `OPTLAB_API_KEY`, every test is silently skipped.
//!
//! # What is tested
//!
//! - **Spot quotes** — validates key & deserialization
//! - **Option chains** — chain fetch, normalization, expiry list
//! - **Payoff round trip** — live chain through the payoff engine
//! - **Reports** — submit → poll → fetch lifecycle
//! - **Error handling** — verifies bad requests produce typed `OptLabError::Api`

use optlab_rs::client::OptLabClient;
use optlab_rs::error::OptLabError;
use optlab_rs::payoff::{break_evens, compute_payoff_with_chain};
use optlab_rs::types::enums::LegAction;
use optlab_rs::types::leg::Leg;
use optlab_rs::types::option_chain::OptionChainRequest;
use optlab_rs::types::reports::GenerateReportRequest;

/// A liquid, well-known underlying for testing.
const TEST_SYMBOL: &str = "SPY";

/// Helper: create a client from the environment or skip the test.
fn live_client() -> Option<OptLabClient> {
    let api_key = std::env::var("OPTLAB_API_KEY").ok()?;
    if api_key.is_empty() {
        return None;
    }
    let client = match std::env::var("OPTLAB_BASE_URL") {
        Ok(base) => OptLabClient::with_base_url(api_key, base),
        Err(_) => OptLabClient::new(api_key),
    };
    Some(client.expect("client construction failed"))
}

/// Macro to skip a test when credentials are missing.
macro_rules! require_client {
    () => {
        match live_client() {
            Some(c) => c,
            None => {
                eprintln!("⏭  Skipped (OPTLAB_API_KEY not set)");
                return;
            }
        }
    };
}

// ===================================================================
// Spot quotes
// ===================================================================

#[tokio::test]
async fn test_spot_quote() {
    let client = require_client!();
    let quote = client
        .get_spot_quote(TEST_SYMBOL)
        .await
        .expect("get_spot_quote failed")
        .data;
    assert_eq!(quote.symbol, TEST_SYMBOL);
    assert!(quote.last_price > 0.0, "spot price should be positive");
    println!("✔ Spot: {} = {}", quote.symbol, quote.last_price);
}

// ===================================================================
// Option chains
// ===================================================================

#[tokio::test]
async fn test_expiry_list_and_chain() {
    let client = require_client!();

    let expiries = client
        .get_expiry_list(TEST_SYMBOL)
        .await
        .expect("get_expiry_list failed");
    assert!(!expiries.data.is_empty(), "expected at least one expiry");

    let chain = client
        .get_option_chain(&OptionChainRequest {
            symbol: TEST_SYMBOL.into(),
            expiry: expiries.data[0].clone(),
        })
        .await
        .expect("get_option_chain failed")
        .data;

    assert!(chain.last_price > 0.0);
    assert!(!chain.calls.is_empty(), "chain should have call quotes");

    // Normalization contract: strike-sorted, finite strikes only.
    for quotes in [&chain.calls, &chain.puts] {
        assert!(quotes.iter().all(|q| q.strike.is_finite()));
        assert!(quotes.windows(2).all(|w| w[0].strike <= w[1].strike));
    }
    println!(
        "✔ Chain: {} calls / {} puts @ spot {}",
        chain.calls.len(),
        chain.puts.len(),
        chain.last_price
    );
}

#[tokio::test]
async fn test_payoff_from_live_chain() {
    let client = require_client!();

    let expiries = client
        .get_expiry_list(TEST_SYMBOL)
        .await
        .expect("get_expiry_list failed");
    let chain = client
        .get_option_chain(&OptionChainRequest {
            symbol: TEST_SYMBOL.into(),
            expiry: expiries.data[0].clone(),
        })
        .await
        .expect("get_option_chain failed")
        .data;

    let atm = chain
        .calls
        .iter()
        .map(|q| q.strike)
        .min_by(|a, b| (a - chain.last_price).abs().total_cmp(&(b - chain.last_price).abs()))
        .expect("no call strikes");

    let legs = vec![
        Leg::call(LegAction::Buy, atm, 1, 0.0),
        Leg::put(LegAction::Buy, atm, 1, 0.0),
    ];
    let curve = compute_payoff_with_chain(&legs, chain.last_price, &chain);
    assert!(!curve.is_empty());
    assert!(curve.iter().all(|p| p.profit.is_finite()));

    // A long straddle priced from live quotes loses money at the money and
    // crosses zero on both wings (unless premiums resolved to zero).
    let be = break_evens(&curve);
    println!("✔ Straddle @ {atm}: {} break-evens", be.len());
}

// ===================================================================
// Reports — submit → poll → fetch
// ===================================================================

#[tokio::test]
async fn test_report_lifecycle() {
    let client = require_client!();

    let submitted = client
        .generate_report(&GenerateReportRequest {
            symbol: TEST_SYMBOL.into(),
            legs: vec![Leg::call(LegAction::Buy, 100.0, 1, 5.0)],
            focus: Some("integration test — short market summary".into()),
        })
        .await
        .expect("generate_report failed")
        .data;
    assert!(!submitted.task_id.is_empty());
    println!("✔ Report task submitted: {}", submitted.task_id);

    let report = client
        .wait_for_report(&submitted.task_id)
        .await
        .expect("wait_for_report failed");
    assert_eq!(report.symbol, TEST_SYMBOL);
    assert!(!report.body.is_empty(), "report body should not be empty");
    println!("✔ Report {} ({} bytes)", report.report_id, report.body.len());
}

// ===================================================================
// Error handling
// ===================================================================

#[tokio::test]
async fn test_unknown_symbol_is_a_typed_error() {
    let client = require_client!();

    let err = client
        .get_spot_quote("NO_SUCH_SYMBOL_XYZ")
        .await
        .expect_err("expected an error for an unknown symbol");
    match err {
        OptLabError::Api(body) => {
            println!("✔ Typed API error: {body}");
        }
        OptLabError::HttpStatus { status, .. } => {
            assert!(status.is_client_error());
            println!("✔ HTTP status error: {status}");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}
