//! # cartcalc-cli
//!
//! Host around `cartcalc-core`: owns every bit of I/O the engine refuses to
//! do.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  args + env ──► CliConfig ──► policy.toml ──► PricingEngine             │
//! │                     │                              │                    │
//! │                     ▼                              ▼                    │
//! │              cart.json / stdin ──► CartRequest ──► calculate()          │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                                         render(json | text) ──► stdout  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod request;

use std::fs::File;
use std::io;

use anyhow::Context;
use cartcalc_core::{PricingEngine, PricingResult};
use tracing::{debug, info};

use crate::config::{CliConfig, InputSource, OutputFormat};
use crate::request::CartRequest;

/// Loads policy and request, prices the cart, and renders the result.
pub fn run(config: &CliConfig) -> anyhow::Result<String> {
    let policy = config.load_policy().context("loading pricing policy")?;
    let engine = PricingEngine::new(policy).context("building pricing engine")?;
    debug!(policy = ?engine.policy(), "pricing engine ready");

    let request = match &config.input {
        InputSource::Stdin => CartRequest::from_reader(io::stdin().lock()),
        InputSource::File(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening cart request {}", path.display()))?;
            CartRequest::from_reader(file)
        }
    }?;

    let result = price(&engine, &request)?;
    render(&result, config.format)
}

/// Prices a parsed request.
pub fn price(engine: &PricingEngine, request: &CartRequest) -> anyhow::Result<PricingResult> {
    let result = engine
        .calculate(&request.items, &request.customer, request.method)
        .context("pricing cart")?;

    info!(
        lines = result.lines().len(),
        method = %request.method,
        grand_total = result.grand_total().cents(),
        "priced cart"
    );

    Ok(result)
}

/// Renders a result in the requested format.
pub fn render(result: &PricingResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("serializing pricing result")
        }
        OutputFormat::Text => Ok(result.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_request() -> CartRequest {
        CartRequest::from_json(
            r#"{
                "customer": { "tenureYears": 0 },
                "method": "STANDARD",
                "items": [ { "id": "CHAIR", "unitPriceCents": 100000, "quantity": 3 } ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_price_and_render_json() {
        let result = price(&PricingEngine::default(), &sample_request()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&result, OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["originalTotal"], 300_000);
        assert_eq!(json["bulkDiscountTotal"], 45_000);
        assert_eq!(json["finalTotal"], 255_000);
        assert_eq!(json["shipment"]["isFreeShipping"], true);
        assert_eq!(json["grandTotal"], 255_000);
    }

    #[test]
    fn test_render_text() {
        let result = price(&PricingEngine::default(), &sample_request()).unwrap();
        let text = render(&result, OutputFormat::Text).unwrap();
        assert!(text.contains("CHAIR"));
        assert!(text.contains("Grand total"));
    }

    #[test]
    fn test_duplicate_lines_fail_with_context() {
        let request = CartRequest::from_json(
            r#"{ "items": [
                { "id": "A", "unitPriceCents": 100, "quantity": 1 },
                { "id": "A", "unitPriceCents": 100, "quantity": 1 }
            ] }"#,
        )
        .unwrap();
        let err = price(&PricingEngine::default(), &request).unwrap_err();
        assert_eq!(err.to_string(), "pricing cart");
        assert!(format!("{:#}", err).contains("line id 'A' already exists"));
    }

    #[test]
    fn test_demo_cart() {
        // MUG 5_000 (bulk 750) + TEA 1_798; after bulk 6_048; loyalty 302;
        // final 5_746; weight 1.6 kg → 320; expedited 15% of 6_798 → 1_020
        let request = CartRequest::from_json(include_str!("../../../demos/cart.json")).unwrap();
        let result = price(&PricingEngine::default(), &request).unwrap();

        assert_eq!(result.final_total().cents(), 5_746);
        assert_eq!(result.shipment().expedited_surcharge().cents(), 1_020);
        assert_eq!(result.shipment().total_shipping().cents(), 700 + 320 + 1_020);
        assert_eq!(result.grand_total().cents(), 5_746 + 2_040);
    }

    #[test]
    fn test_run_reports_missing_input_file() {
        let config = CliConfig {
            input: InputSource::File(PathBuf::from("/nonexistent/cart.json")),
            policy_path: None,
            format: OutputFormat::Json,
            log_filter: "warn".to_string(),
        };
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("opening cart request"));
    }
}
