//! Display data for the hero carousel.

use serde::{Deserialize, Serialize};

/// One slide of the hero carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderImage {
    pub url: String,
    pub alt: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
