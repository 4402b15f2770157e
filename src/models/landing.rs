//! Landing page content models
//!
//! Static copy for the sections around the calculator. None of it affects
//! pricing.

use serde::Serialize;

/// A feature card
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// A customer testimonial
#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub program: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// Star string for the rating, e.g. "★★★★★"
    pub fn stars(&self) -> String {
        "★".repeat(self.rating.min(5) as usize)
    }
}

/// A headline number in the stats strip
#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Everything on the landing page except the calculator
#[derive(Debug, Clone, Serialize)]
pub struct LandingContent {
    pub site_name: String,
    pub tagline: String,
    pub seo_description: String,
    pub stats: Vec<Stat>,
    pub features: Vec<Feature>,
    pub testimonials: Vec<Testimonial>,
}

impl LandingContent {
    pub fn for_brand(brand_name: &str) -> Self {
        Self {
            site_name: brand_name.to_string(),
            ..Self::default()
        }
    }

    /// Page title, e.g. "Giant Writers | Academic Writing Help"
    pub fn seo_title(&self) -> String {
        format!("{} | Academic Writing Help", self.site_name)
    }
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            site_name: "Giant Writers".to_string(),
            tagline: "Expert academic writing, priced in seconds".to_string(),
            seo_description:
                "Essays, reports and theses written by subject specialists. Get an instant price for your assignment."
                    .to_string(),
            stats: vec![
                Stat { value: "12,000+", label: "Papers delivered" },
                Stat { value: "98%", label: "On-time delivery" },
                Stat { value: "4.9/5", label: "Average rating" },
                Stat { value: "350+", label: "Subject experts" },
            ],
            features: vec![
                Feature {
                    icon: "🎓",
                    title: "Graduate-level writers",
                    body: "Every order is matched with a writer holding a degree in your field.",
                },
                Feature {
                    icon: "🛡️",
                    title: "Original work",
                    body: "Written from scratch and checked for plagiarism before delivery.",
                },
                Feature {
                    icon: "⏰",
                    title: "Deadlines kept",
                    body: "From 48-hour rush jobs to month-long projects, delivered on schedule.",
                },
                Feature {
                    icon: "🔒",
                    title: "Confidential",
                    body: "Your details and your paper are never shared.",
                },
                Feature {
                    icon: "✍️",
                    title: "Free revisions",
                    body: "Unlimited revisions within 14 days of delivery.",
                },
                Feature {
                    icon: "💬",
                    title: "Direct chat",
                    body: "Talk to your writer and our support team at any time.",
                },
            ],
            testimonials: vec![
                Testimonial {
                    name: "Lina W.",
                    program: "MSc Computer Science",
                    quote: "The algorithms report was clear, well-referenced and two days early.",
                    rating: 5,
                },
                Testimonial {
                    name: "James K.",
                    program: "BA History",
                    quote: "Great research and a writer who actually listened to my tutor's feedback.",
                    rating: 5,
                },
                Testimonial {
                    name: "Mei C.",
                    program: "MBA",
                    quote: "Rush order on a case study and it still read like I wrote it on a good day.",
                    rating: 4,
                },
            ],
        }
    }
}
