//! Daily verse content item

use serde::{Deserialize, Serialize};

/// A scripture verse shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    /// Book, chapter and verse (e.g., "Psalm 100:1")
    pub reference: String,

    /// Verse text as displayed
    pub text: String,
}

impl Verse {
    pub fn new(reference: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            text: text.into(),
        }
    }
}
