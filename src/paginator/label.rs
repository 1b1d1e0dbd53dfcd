//! "Showing 11 – 20 of 100 records" style range labels.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Wording of the range label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RangeLabel {
    /// Text before the numbers
    pub prefix: String,

    /// What the rows are called
    pub noun: String,
}

impl Default for RangeLabel {
    fn default() -> Self {
        Self {
            prefix: "Showing".to_string(),
            noun: "records".to_string(),
        }
    }
}

impl RangeLabel {
    pub fn format(&self, page_index: usize, page_size: usize, length: usize) -> String {
        if length == 0 || page_size == 0 {
            return format!("{} 0 of {} {}", self.prefix, length, self.noun);
        }

        let start = page_index * page_size;
        // A page past the end still reports a full page.
        let end = if start < length {
            (start + page_size).min(length)
        } else {
            start + page_size
        };
        format!("{} {} – {} of {} {}", self.prefix, start + 1, end, length, self.noun)
    }
}
