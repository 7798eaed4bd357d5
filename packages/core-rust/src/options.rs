use serde::{Deserialize, Serialize};

/// Pagination parameters forwarded untouched to the management APIs.
///
/// Zero / `false` fields are omitted from the query string so the remote
/// side applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    /// 1-based page to return.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub page_num: u32,
    /// Number of items per page.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub items_per_page: u32,
    /// Ask the server to include `totalCount` in list responses.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub include_count: bool,
}

impl ListOptions {
    #[must_use]
    pub fn page(page_num: u32, items_per_page: u32) -> Self {
        Self {
            page_num,
            items_per_page,
            include_count: false,
        }
    }

    #[must_use]
    pub fn with_count(mut self) -> Self {
        self.include_count = true;
        self
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &u32) -> bool {
    *n == 0
}
