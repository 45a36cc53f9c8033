//! Pagination query parameters and page metadata.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// Upper bound on `per_page`; larger requests are rejected, not clamped.
pub const MAX_PER_PAGE: u32 = 100;

/// Default page size when `per_page` is absent.
pub const DEFAULT_PER_PAGE: u32 = 3;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl PageParams {
    /// Validates pagination parameters.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `per_page`: 3
    ///
    /// # Validation
    ///
    /// - `page` must be > 0
    /// - `per_page` must be between 1 and 100
    ///
    /// # Returns
    ///
    /// `(page, per_page)` as SQL-ready integers.
    pub fn validate(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);

        if page == 0 {
            return Err("page must be greater than 0".to_string());
        }

        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(format!("per_page must be between 1 and {MAX_PER_PAGE}"));
        }

        Ok((i64::from(page), i64::from(per_page)))
    }
}

/// Pagination metadata returned alongside a page of items.
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub pages: i64,
    pub per_page: i64,
}

impl PageMeta {
    /// Builds metadata for a page, rounding the page count up.
    ///
    /// `per_page` is always >= 1 and `total` >= 0 here, so the rounding
    /// expression cannot overflow or divide by zero.
    pub fn new(total: i64, page: i64, per_page: i64) -> Self {
        Self {
            total,
            page,
            pages: (total + per_page - 1) / per_page,
            per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, per_page: Option<u32>) -> PageParams {
        PageParams { page, per_page }
    }

    #[test]
    fn test_defaults() {
        let (page, per_page) = params(None, None).validate().unwrap();
        assert_eq!(page, 1);
        assert_eq!(per_page, 3);
    }

    #[test]
    fn test_explicit_values() {
        let (page, per_page) = params(Some(4), Some(25)).validate().unwrap();
        assert_eq!(page, 4);
        assert_eq!(per_page, 25);
    }

    #[test]
    fn test_page_zero_is_error() {
        assert!(params(Some(0), None).validate().is_err());
    }

    #[test]
    fn test_per_page_bounds() {
        assert!(params(None, Some(0)).validate().is_err());
        assert!(params(None, Some(1)).validate().is_ok());
        assert!(params(None, Some(100)).validate().is_ok());
        assert!(params(None, Some(101)).validate().is_err());
    }

    #[test]
    fn test_query_string_parsing() {
        let p: PageParams = serde_json::from_str(r#"{"page": "2", "per_page": "10"}"#).unwrap();
        assert_eq!(p.page, Some(2));
        assert_eq!(p.per_page, Some(10));
    }

    #[test]
    fn test_page_meta_rounds_up() {
        let meta = PageMeta::new(7, 1, 3);
        assert_eq!(meta.pages, 3);

        let meta = PageMeta::new(6, 1, 3);
        assert_eq!(meta.pages, 2);

        let meta = PageMeta::new(0, 1, 3);
        assert_eq!(meta.pages, 0);

        let meta = PageMeta::new(1, 1, 100);
        assert_eq!(meta.pages, 1);

        let meta = PageMeta::new(i64::from(u32::MAX), 1, 100);
        assert_eq!(meta.pages, 42_949_673);
    }
}
