use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Standard response envelope: `{success, data}` on the happy path,
/// `{success: false, message}` on failure.
#[derive(Serialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), message: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { success: false, data: None, message: Some(message.into()) }
    }
}

/// Pagination metadata attached to every paged response.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub total: u64,
    pub page: u32,
    pub pages: u32,
    pub limit: u32,
}

impl PageMeta {
    pub fn new(total: u64, page: u32, limit: u32) -> Self {
        let pages = if total == 0 { 0 } else { total.div_ceil(limit as u64) as u32 };
        Self { total, page, pages, limit }
    }
}

/// One page of results plus its metadata.
#[derive(Serialize, Debug)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::PageMeta;

    #[test]
    fn page_meta_rounds_up() {
        let m = PageMeta::new(15, 1, 10);
        assert_eq!(m.pages, 2);
        let m = PageMeta::new(20, 1, 10);
        assert_eq!(m.pages, 2);
    }

    #[test]
    fn page_meta_empty_has_zero_pages() {
        assert_eq!(PageMeta::new(0, 1, 10).pages, 0);
    }
}
