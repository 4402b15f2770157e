//! Landing page route handlers

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;
use std::time::Instant;

use crate::cache::AppCache;
use crate::calculator::CalculatorState;
use crate::error::Result;
use crate::models::LandingContent;
use crate::order::message::format_amount;
use crate::order::qr;
use crate::order::ContactChannel;
use crate::pricing::requests::QuoteRequest;
use crate::pricing::services::parse_request;
use crate::pricing::{AdjustmentKind, Discipline, PricingInput, Urgency, MAX_PAGES, MIN_PAGES};
use crate::AppState;

use super::contact::contact_qr_png;

/// One radio/select option
#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Calculator controls and result panel, ready for rendering
#[derive(Debug, Clone)]
pub struct CalculatorView {
    pub pages: u32,
    pub min_pages: u32,
    pub max_pages: u32,
    pub discipline_options: Vec<OptionView>,
    pub urgency_options: Vec<OptionView>,
    pub currency_symbol: String,
    pub final_price: u32,
    pub per_page: String,
    pub base_rate: String,
    pub urgency_multiplier: String,
    pub deadline_label: &'static str,
    pub has_adjustment: bool,
    pub adjustment_label: &'static str,
    pub adjustment_percent: u32,
    pub animating: bool,
}

impl CalculatorView {
    pub fn from_state(calc: &CalculatorState, currency_symbol: &str) -> Self {
        let input = calc.input();
        let result = calc.result();

        Self {
            pages: input.pages,
            min_pages: MIN_PAGES,
            max_pages: MAX_PAGES,
            discipline_options: Discipline::ALL
                .iter()
                .map(|d| OptionView {
                    value: d.as_str(),
                    label: d.short_label(),
                    selected: *d == input.discipline,
                })
                .collect(),
            urgency_options: Urgency::ALL
                .iter()
                .map(|u| OptionView {
                    value: u.as_str(),
                    label: u.label(),
                    selected: *u == input.urgency,
                })
                .collect(),
            currency_symbol: currency_symbol.to_string(),
            final_price: result.final_price,
            per_page: format!("{:.2}", result.per_page),
            base_rate: format_amount(result.base_rate),
            urgency_multiplier: format_amount(result.urgency_multiplier),
            deadline_label: input.urgency.deadline_label(),
            has_adjustment: result.volume.kind != AdjustmentKind::None,
            adjustment_label: result.volume.kind.label(),
            adjustment_percent: result.volume.percent,
            animating: calc.is_animating(),
        }
    }
}

/// Landing page template
#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate<'a> {
    content: &'a LandingContent,
    calc: CalculatorView,
    seo_title: String,
    contact_name: &'static str,
    contact_prompt: String,
    is_wechat: bool,
    qr_data_uri: String,
}

/// Calculator result fragment
#[derive(Template)]
#[template(path = "partials/calculator_result.html")]
struct CalculatorFragmentTemplate {
    calc: CalculatorView,
}

/// Homepage handler.
///
/// Query parameters prefill the calculator, so the form works without
/// JavaScript.
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<QuoteRequest>,
) -> Result<Html<String>> {
    let (input, _) = parse_request(&query)?;
    let html = cached_landing_page(&state, input).await?;
    Ok(Html(String::clone(&html)))
}

/// Calculator fragment handler.
///
/// Called by the page on every control change with the full triple; the
/// result is recomputed from scratch and rendered with the pulse class.
pub async fn calculator_fragment(
    State(state): State<AppState>,
    Query(query): Query<QuoteRequest>,
) -> Result<Html<String>> {
    let (input, _) = parse_request(&query)?;

    let mut calc = CalculatorState::with_input(state.engine.clone(), input);
    calc.recompute_at(Instant::now());

    let template = CalculatorFragmentTemplate {
        calc: CalculatorView::from_state(&calc, &state.config.currency_symbol),
    };
    Ok(Html(template.render()?))
}

/// Rendered landing page for `input`, from cache when possible
pub async fn cached_landing_page(state: &AppState, input: PricingInput) -> Result<Arc<String>> {
    let key = AppCache::landing_key(&input);

    if let Some(cached) = state.cache.pages.get(&key).await {
        tracing::debug!("Cache HIT for landing page: {}", key);
        return Ok(cached);
    }

    tracing::debug!("Cache MISS for landing page: {}", key);
    let html = Arc::new(render_landing_page(state, input).await?);
    state.cache.pages.insert(key, html.clone()).await;
    Ok(html)
}

async fn render_landing_page(state: &AppState, input: PricingInput) -> Result<String> {
    let calc = CalculatorState::with_input(state.engine.clone(), input);
    let png = contact_qr_png(state).await?;

    let (is_wechat, contact_prompt) = match &state.config.contact {
        ContactChannel::WeChat { prompt, .. } => (true, prompt.clone()),
        ContactChannel::WhatsApp { .. } => (
            false,
            "Tap \"Order now\" to send your quote to us on WhatsApp".to_string(),
        ),
    };

    let template = LandingTemplate {
        content: &state.content,
        calc: CalculatorView::from_state(&calc, &state.config.currency_symbol),
        seo_title: state.content.seo_title(),
        contact_name: state.config.contact.display_name(),
        contact_prompt,
        is_wechat,
        qr_data_uri: qr::data_uri(&png),
    };

    Ok(template.render()?)
}
