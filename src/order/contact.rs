//! Contact channel policy for the "order" button.
//!
//! There is no order processing: the button either opens a WhatsApp chat
//! pre-filled with the order summary, or tells the visitor to use WeChat.

use anyhow::{anyhow, Result};
use serde::Serialize;

pub const DEFAULT_WECHAT_PROMPT: &str = "Please scan the WeChat QR code to contact us";

/// Where order requests are sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactChannel {
    /// `phone` holds digits only, as wa.me expects
    WhatsApp { phone: String },
    WeChat { wechat_id: String, prompt: String },
}

/// What the browser should do after "Order now"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderAction {
    OpenLink { url: String },
    ShowPrompt { message: String },
}

impl ContactChannel {
    /// WhatsApp channel from a human-formatted number
    pub fn whatsapp(number: &str) -> Result<Self> {
        let phone: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
        if phone.is_empty() {
            return Err(anyhow!("WhatsApp number '{}' contains no digits", number));
        }
        Ok(ContactChannel::WhatsApp { phone })
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContactChannel::WhatsApp { .. } => "whatsapp",
            ContactChannel::WeChat { .. } => "wechat",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContactChannel::WhatsApp { .. } => "WhatsApp",
            ContactChannel::WeChat { .. } => "WeChat",
        }
    }

    /// Action for an order carrying `message`
    pub fn order_action(&self, message: &str) -> OrderAction {
        match self {
            ContactChannel::WhatsApp { phone } => OrderAction::OpenLink {
                url: whatsapp_link(phone, Some(message)),
            },
            ContactChannel::WeChat { prompt, .. } => OrderAction::ShowPrompt {
                message: prompt.clone(),
            },
        }
    }

    /// Text encoded in the contact QR code
    pub fn qr_payload(&self) -> String {
        match self {
            ContactChannel::WhatsApp { phone } => whatsapp_link(phone, None),
            ContactChannel::WeChat { wechat_id, .. } => wechat_id.clone(),
        }
    }
}

/// Build a `wa.me` deep link, optionally pre-filled with `text`.
pub fn whatsapp_link(phone: &str, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("https://wa.me/{}?text={}", phone, percent_encode(text)),
        None => format!("https://wa.me/{}", phone),
    }
}

/// Percent-encode for a query value, spaces as `%20`.
///
/// `byte_serialize` writes spaces as `+` and literal pluses as `%2B`, so the
/// substitution below cannot touch a real `+`.
fn percent_encode(text: &str) -> String {
    url::form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
