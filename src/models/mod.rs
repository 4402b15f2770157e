//! Page content models

pub mod landing;

pub use landing::{Feature, LandingContent, Stat, Testimonial};
