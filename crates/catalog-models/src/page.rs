use serde::{Deserialize, Serialize};

use crate::detail::DetailRecord;
use crate::summary::SummaryRecord;

/// One page of a listing as returned by the catalog API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub items: Vec<SummaryRecord>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub has_more: bool,
}

fn first_page() -> u32 {
    1
}

impl PageResult {
    /// The degraded result for any transport or decode failure
    pub fn failed() -> Self {
        Self {
            success: false,
            items: Vec::new(),
            page: 1,
            has_more: false,
        }
    }
}

/// Outcome of a detail lookup. `success` with no `data` means not found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DetailResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DetailRecord>,
}

impl DetailResult {
    pub fn failed() -> Self {
        Self { success: false, data: None }
    }

    pub fn found(data: DetailRecord) -> Self {
        Self { success: true, data: Some(data) }
    }

    /// The record, if the lookup succeeded and produced one
    pub fn into_record(self) -> Option<DetailRecord> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}
