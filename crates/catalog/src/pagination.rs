//! 1-based page requests and paginated responses.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 12;
/// Upper bound on `page_size`; larger requests are rejected, not clamped.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Requested page of a listing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Build a validated page request.
    pub fn new(page: u32, page_size: u32) -> DomainResult<Self> {
        let req = Self { page, page_size };
        req.validate()?;
        Ok(req)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.page < 1 {
            return Err(DomainError::validation("page must be at least 1"));
        }
        if self.page_size < 1 {
            return Err(DomainError::validation("pageSize must be at least 1"));
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(DomainError::validation(format!(
                "pageSize must not exceed {MAX_PAGE_SIZE}"
            )));
        }
        Ok(())
    }

    /// Index range `[(page-1)*size, page*size)` clamped to `len`.
    ///
    /// Pages past the end produce an empty range.
    pub fn bounds(&self, len: usize) -> core::ops::Range<usize> {
        let size = self.page_size as usize;
        let start = (self.page as usize)
            .saturating_sub(1)
            .saturating_mul(size)
            .min(len);
        let end = start.saturating_add(size).min(len);
        start..end
    }

    pub fn total_pages(&self, total: usize) -> u32 {
        total.div_ceil(self.page_size as usize) as u32
    }
}

/// One page of a filtered listing plus the totals needed to navigate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// Filtered count before pagination.
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Page `request` out of the full, already-ordered result set.
    pub fn from_slice(all: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        Self {
            items: all[request.bounds(all.len())].to_vec(),
            total: all.len() as u64,
            page: request.page,
            page_size: request.page_size,
            total_pages: request.total_pages(all.len()),
        }
    }

    /// A response with no items, used as a safe default.
    pub fn empty(request: PageRequest) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: request.page,
            page_size: request.page_size,
            total_pages: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self::empty(PageRequest::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_oversized_pages() {
        assert!(PageRequest::new(0, 12).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE + 1).is_err());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE).is_ok());
    }

    #[test]
    fn second_page_of_seven_has_two_items() {
        let all: Vec<u32> = (1..=7).collect();
        let page = PaginatedResponse::from_slice(&all, PageRequest::new(2, 5).unwrap());
        assert_eq!(page.items, vec![6, 7]);
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn pages_past_the_end_are_empty_not_errors() {
        let all: Vec<u32> = (1..=7).collect();
        let page = PaginatedResponse::from_slice(&all, PageRequest::new(9, 5).unwrap());
        assert!(page.items.is_empty());
        assert_eq!(page.total, 7);
        assert_eq!(page.page, 9);
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let req = PageRequest::new(u32::MAX, MAX_PAGE_SIZE).unwrap();
        assert_eq!(req.bounds(10), 10..10);
    }

    #[test]
    fn total_pages_is_ceiling() {
        let req = PageRequest::new(1, 12).unwrap();
        assert_eq!(req.total_pages(0), 0);
        assert_eq!(req.total_pages(12), 1);
        assert_eq!(req.total_pages(13), 2);
        assert_eq!(req.total_pages(50), 5);
    }

    #[test]
    fn default_is_first_page_of_twelve() {
        let empty: PaginatedResponse<u8> = PaginatedResponse::default();
        assert_eq!((empty.page, empty.page_size, empty.total_pages), (1, 12, 0));
        assert!(!empty.has_previous());
    }

    #[test]
    fn serializes_camel_case() {
        let page = PaginatedResponse::from_slice(&[1u8], PageRequest::default());
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pageSize"], 12);
        assert_eq!(json["totalPages"], 1);
    }
}
