use serde::{Deserialize, Serialize};

use crate::types::{HarmBlockThreshold, HarmCategory};

/// A per-category safety threshold attached to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    /// The harm category this setting applies to.
    pub category: HarmCategory,

    /// The blocking threshold for that category.
    pub threshold: HarmBlockThreshold,
}

impl SafetySetting {
    /// Creates a safety setting for one category.
    pub fn new(category: HarmCategory, threshold: HarmBlockThreshold) -> Self {
        Self {
            category,
            threshold,
        }
    }

    /// The permissive policy this crate sends on every request: all four
    /// harm categories thresholded to block only high-severity content.
    pub fn block_only_high() -> Vec<SafetySetting> {
        HarmCategory::all()
            .into_iter()
            .map(|category| SafetySetting::new(category, HarmBlockThreshold::BlockOnlyHigh))
            .collect()
    }
}
