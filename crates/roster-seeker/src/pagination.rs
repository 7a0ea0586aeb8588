//! Fixed-size paging with boundary clamping.

use std::ops::Range;

use crate::error::{Result, SeekerError};
use crate::value::parse_number;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Position of one page within a sequence of `total` items.
///
/// Page numbers are 1-based. A sequence always has at least one page, even
/// when empty.
///
/// # Example
///
/// ```
/// use roster_seeker::Page;
///
/// let page = Page::new(250, 100, 5);
/// assert_eq!(page.number, 3);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.range(), 200..250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number, clamped into `1..=total_pages`.
    pub number: usize,
    /// Number of pages, never less than one.
    pub total_pages: usize,
    /// Index of the first item on the page.
    pub start: usize,
    /// Index one past the last item on the page.
    pub end: usize,
    /// Length of the whole sequence.
    pub total: usize,
}

impl Page {
    /// Locates `page` within `total` items, clamping out-of-range page numbers.
    ///
    /// A page size of zero is treated as one.
    pub fn new(total: usize, page_size: usize, page: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total, page_size);
        let number = page.clamp(1, total_pages);
        let start = (number - 1) * page_size;
        let end = (start + page_size).min(total);
        Page {
            number,
            total_pages,
            start: start.min(total),
            end,
            total,
        }
    }

    /// The item indices on this page.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` on page one.
    pub fn is_first(&self) -> bool {
        self.number == 1
    }

    /// Returns `true` on the last page.
    pub fn is_last(&self) -> bool {
        self.number == self.total_pages
    }

    /// Returns `true` when more than one page exists.
    pub fn has_pagination(&self) -> bool {
        self.total_pages > 1
    }

    /// Slices this page out of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}

/// Page count for `total` items: `max(1, ceil(total / page_size))`.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a requested page number into `1..=total_pages`.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let max = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    // Bounded by `max`, which came from a usize.
    requested.clamp(1, max) as usize
}

/// One page of items plus where it sits in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paged<'a, T> {
    /// Items on the page.
    pub visible: &'a [T],
    /// Page position.
    pub page: Page,
}

/// Slices `items` into the requested page.
///
/// ```
/// use roster_seeker::paginate;
///
/// let items: Vec<u32> = (0..250).collect();
/// let paged = paginate(&items, 100, 3);
/// assert_eq!(paged.visible.len(), 50);
/// assert_eq!(paged.visible[0], 200);
/// ```
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> Paged<'_, T> {
    let page = Page::new(items.len(), page_size, page);
    Paged {
        visible: page.slice(items),
        page,
    }
}

/// Parses a page number typed by a user.
///
/// Blank and non-numeric text is rejected. Fractional pages round down;
/// clamping is left to the caller.
///
/// ```
/// use roster_seeker::parse_page_input;
///
/// assert_eq!(parse_page_input(" 3 ").unwrap(), 3);
/// assert_eq!(parse_page_input("2.5").unwrap(), 2);
/// assert!(parse_page_input("").is_err());
/// assert!(parse_page_input("three").is_err());
/// ```
pub fn parse_page_input(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SeekerError::InvalidPageInput(input.to_string()));
    }
    let n = parse_number(trimmed);
    if n.is_nan() {
        return Err(SeekerError::InvalidPageInput(input.to_string()));
    }
    // Float-to-int casts saturate, so infinities land on the i64 bounds.
    Ok(n.floor() as i64)
}
