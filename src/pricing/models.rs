//! Domain types for the pricing calculator.
//!
//! Every enum here is a flat lookup table: wire value, display label, and
//! (for urgency) the indicative turnaround. Prices live in [`super::policy`].

use chrono::Duration;
use std::fmt;
use std::str::FromStr;

use super::services::PricingError;

/// Smallest page count the slider allows
pub const MIN_PAGES: u32 = 1;

/// Largest page count the slider allows
pub const MAX_PAGES: u32 = 50;

/// Subject-matter category of the writing task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    Technical,
    NonTechnical,
}

impl Discipline {
    pub const ALL: [Discipline; 2] = [Discipline::Technical, Discipline::NonTechnical];

    /// Wire value used in query strings and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::Technical => "tech",
            Discipline::NonTechnical => "non-tech",
        }
    }

    /// Label used in the order message
    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Technical => "Technical (STEM, Engineering, IT, Math)",
            Discipline::NonTechnical => "Non-Technical (Arts, Business, Literature, History)",
        }
    }

    /// Label used on the calculator toggle
    pub fn short_label(&self) -> &'static str {
        match self {
            Discipline::Technical => "Technical",
            Discipline::NonTechnical => "Non-Technical",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discipline {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tech" | "technical" => Ok(Discipline::Technical),
            "non-tech" | "non-technical" | "nontech" => Ok(Discipline::NonTechnical),
            other => Err(PricingError::InvalidInput {
                field: "discipline".to_string(),
                value: other.to_string(),
                expected: "tech, non-tech".to_string(),
            }),
        }
    }
}

/// Requested delivery timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    Rush48h,
    Priority1Week,
    Standard1Month,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Rush48h, Urgency::Priority1Week, Urgency::Standard1Month];

    /// Wire value used in query strings and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Rush48h => "48h",
            Urgency::Priority1Week => "1w",
            Urgency::Standard1Month => "1m",
        }
    }

    /// Selector label, including the surcharge hint
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Rush48h => "48 Hours (+50%)",
            Urgency::Priority1Week => "1 Week (+25%)",
            Urgency::Standard1Month => "1 Month (Standard)",
        }
    }

    /// Deadline label without the surcharge hint
    pub fn deadline_label(&self) -> &'static str {
        match self {
            Urgency::Rush48h => "48 Hours",
            Urgency::Priority1Week => "1 Week",
            Urgency::Standard1Month => "1 Month",
        }
    }

    /// Indicative turnaround used for the `due_by` estimate
    pub fn turnaround(&self) -> Duration {
        match self {
            Urgency::Rush48h => Duration::hours(48),
            Urgency::Priority1Week => Duration::days(7),
            Urgency::Standard1Month => Duration::days(30),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "48h" | "rush" => Ok(Urgency::Rush48h),
            "1w" | "priority" => Ok(Urgency::Priority1Week),
            "1m" | "standard" => Ok(Urgency::Standard1Month),
            other => Err(PricingError::InvalidInput {
                field: "urgency".to_string(),
                value: other.to_string(),
                expected: "48h, 1w, 1m".to_string(),
            }),
        }
    }
}

/// The calculator's input triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PricingInput {
    pub discipline: Discipline,
    pub pages: u32,
    pub urgency: Urgency,
}

impl PricingInput {
    /// Build an input, clamping `pages` into the slider range
    pub fn new(discipline: Discipline, pages: i64, urgency: Urgency) -> Self {
        Self {
            discipline,
            pages: clamp_pages(pages),
            urgency,
        }
    }
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            discipline: Discipline::Technical,
            pages: 5,
            urgency: Urgency::Standard1Month,
        }
    }
}

/// Clamp an untrusted page count into `[MIN_PAGES, MAX_PAGES]`
pub fn clamp_pages(pages: i64) -> u32 {
    pages.clamp(MIN_PAGES as i64, MAX_PAGES as i64) as u32
}
