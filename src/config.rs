//! Application configuration
//!
//! Loaded from `.env` (if present) and the process environment.

use anyhow::{anyhow, Result};

use crate::order::contact::{ContactChannel, DEFAULT_WECHAT_PROMPT};
use crate::pricing::PolicyPreset;

/// Server and site configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Brand shown in page titles and the order message header
    pub brand_name: String,
    /// ISO code used in JSON money values
    pub currency: String,
    /// Symbol used in rendered prices
    pub currency_symbol: String,
    pub pricing_policy: PolicyPreset,
    pub contact: ContactChannel,
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            brand_name: "Giant Writers".to_string(),
            currency: "USD".to_string(),
            currency_symbol: "$".to_string(),
            pricing_policy: PolicyPreset::default(),
            contact: ContactChannel::WeChat {
                wechat_id: "GiantWriters".to_string(),
                prompt: DEFAULT_WECHAT_PROMPT.to_string(),
            },
            static_dir: "static".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` and the environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(host) = lookup("HOST") {
            cfg.host = host;
        }
        if let Some(port) = lookup("PORT") {
            cfg.port = port
                .parse()
                .map_err(|_| anyhow!("PORT must be a port number, got '{}'", port))?;
        }
        if let Some(brand) = lookup("BRAND_NAME") {
            cfg.brand_name = brand;
        }
        if let Some(currency) = lookup("CURRENCY") {
            cfg.currency = currency;
        }
        if let Some(symbol) = lookup("CURRENCY_SYMBOL") {
            cfg.currency_symbol = symbol;
        }
        if let Some(policy) = lookup("PRICING_POLICY") {
            cfg.pricing_policy = policy.parse().map_err(|e: String| anyhow!(e))?;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            cfg.static_dir = dir;
        }

        // Contact channel
        let channel = lookup("CONTACT_CHANNEL").unwrap_or_else(|| "wechat".to_string());
        cfg.contact = match channel.trim().to_ascii_lowercase().as_str() {
            "wechat" => ContactChannel::WeChat {
                wechat_id: lookup("WECHAT_ID").unwrap_or_else(|| "GiantWriters".to_string()),
                prompt: lookup("WECHAT_PROMPT").unwrap_or_else(|| DEFAULT_WECHAT_PROMPT.to_string()),
            },
            "whatsapp" => {
                let phone = lookup("WHATSAPP_NUMBER")
                    .ok_or_else(|| anyhow!("WHATSAPP_NUMBER is required when CONTACT_CHANNEL=whatsapp"))?;
                ContactChannel::whatsapp(&phone)?
            }
            other => {
                return Err(anyhow!(
                    "unknown CONTACT_CHANNEL '{}' (expected wechat or whatsapp)",
                    other
                ))
            }
        };

        Ok(cfg)
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
        assert_eq!(cfg.pricing_policy, PolicyPreset::TieredDiscount);
        assert_eq!(cfg.currency_symbol, "$");
        assert!(matches!(cfg.contact, ContactChannel::WeChat { .. }));
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("PRICING_POLICY", "flat-bonus"),
            ("BRAND_NAME", "Essay Giants"),
            ("CURRENCY", "CNY"),
            ("CURRENCY_SYMBOL", "¥"),
            ("WECHAT_ID", "essaygiants"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr(), "127.0.0.1:8081");
        assert_eq!(cfg.pricing_policy, PolicyPreset::FlatBonus);
        assert_eq!(cfg.brand_name, "Essay Giants");
        assert_eq!(cfg.currency, "CNY");
        match cfg.contact {
            ContactChannel::WeChat { wechat_id, prompt } => {
                assert_eq!(wechat_id, "essaygiants");
                assert_eq!(prompt, DEFAULT_WECHAT_PROMPT);
            }
            other => panic!("unexpected channel {:?}", other),
        }
    }

    #[test]
    fn test_whatsapp_channel() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("CONTACT_CHANNEL", "WhatsApp"),
            ("WHATSAPP_NUMBER", "+1 (555) 010-2030"),
        ]))
        .unwrap();

        match cfg.contact {
            ContactChannel::WhatsApp { phone } => assert_eq!(phone, "15550102030"),
            other => panic!("unexpected channel {:?}", other),
        }
    }

    #[test]
    fn test_whatsapp_requires_number() {
        let err = AppConfig::from_lookup(lookup_from(&[("CONTACT_CHANNEL", "whatsapp")])).unwrap_err();
        assert!(err.to_string().contains("WHATSAPP_NUMBER"));
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("PRICING_POLICY", "cheapest")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("CONTACT_CHANNEL", "fax")])).is_err());
    }
}
