//! The landing-page footer block.
//!
//! The footer is stateless: a fixed contact strip, the subscribe form, and
//! the copyright notice, rendered from an embedded template. It exposes no
//! other contract than "render".

use chrono::{Datelike, Local};
use serde::Serialize;
use tera::{Context, Tera};

const FOOTER_TEMPLATE: &str = include_str!("../../templates/footer.html");

/// A single entry in the footer's contact strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEntry {
    pub icon: String,
    pub heading: String,
    pub detail: String,
}

impl ContactEntry {
    fn new(icon: &str, heading: &str, detail: &str) -> Self {
        Self {
            icon: icon.to_string(),
            heading: heading.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Everything the footer template interpolates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterContent {
    pub contacts: Vec<ContactEntry>,
    pub logo_path: String,
    pub subscribe_heading: String,
    pub subscribe_blurb: String,
    pub copyright_year: i32,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            contacts: vec![
                ContactEntry::new("fas fa-map-marker-alt", "Find us", "Đại Học FPT Đà Nẵng"),
                ContactEntry::new("fas fa-phone", "Call us", "0964106456"),
                ContactEntry::new("far fa-envelope-open", "Mail us", "TYFcompany@gmail.com"),
            ],
            logo_path: "/images/logo.png".to_string(),
            subscribe_heading: "Subscribe".to_string(),
            subscribe_blurb: "Don’t miss to subscribe to our new feeds, kindly fill the form below."
                .to_string(),
            copyright_year: Local::now().year(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FooterError {
    #[error("footer template failed to render")]
    Template(#[from] tera::Error),
}

/// Render the footer block to an HTML fragment.
pub fn render_footer(content: &FooterContent) -> Result<String, FooterError> {
    let mut engine = Tera::default();
    engine.add_raw_template("footer.html", FOOTER_TEMPLATE)?;
    let context = Context::from_serialize(content)?;
    Ok(engine.render("footer.html", &context)?)
}
