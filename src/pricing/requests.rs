//! Request DTOs for pricing API endpoints.
//!
//! Enum fields arrive as plain strings so unknown values surface as
//! `PricingError::InvalidInput` rather than an extractor rejection.

use serde::Deserialize;

/// Request to quote a price (query string or JSON body)
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    #[serde(default = "default_discipline")]
    pub discipline: String,
    #[serde(default = "default_pages")]
    pub pages: i64,
    #[serde(default = "default_urgency")]
    pub urgency: String,
}

fn default_discipline() -> String {
    "tech".to_string()
}

fn default_pages() -> i64 {
    5
}

fn default_urgency() -> String {
    "1m".to_string()
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self {
            discipline: default_discipline(),
            pages: default_pages(),
            urgency: default_urgency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_request_defaults() {
        let req: QuoteRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.discipline, "tech");
        assert_eq!(req.pages, 5);
        assert_eq!(req.urgency, "1m");
    }

    #[test]
    fn test_quote_request_accepts_out_of_range_pages() {
        let req: QuoteRequest =
            serde_json::from_str(r#"{"discipline":"non-tech","pages":-4,"urgency":"48h"}"#).unwrap();
        assert_eq!(req.pages, -4);
        assert_eq!(req.discipline, "non-tech");
    }
}
