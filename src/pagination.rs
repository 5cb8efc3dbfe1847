//! Page requests, page responses and the total-count planner.

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Zero-based page index plus a positive page size.
///
/// The row offset `page * size` always fits an SQL `i64` offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Result<Self, TypeConstraintError> {
        if size == 0 {
            return Err(TypeConstraintError::ZeroPageSize);
        }
        page.checked_mul(size)
            .and_then(|offset| i64::try_from(offset).ok())
            .ok_or(TypeConstraintError::PageOutOfRange)?;
        Ok(Self { page, size })
    }

    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of rows preceding this page.
    pub const fn offset(&self) -> usize {
        self.page * self.size
    }
}

/// How a paged search obtains its total element count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountStrategy {
    /// Always issue the count over the full member/team join.
    Always,
    /// Always issue a count, joining teams only when a predicate needs them.
    JoinReduced,
    /// Skip the count when the fetched page already proves the total.
    #[default]
    SkipWhenPossible,
}

/// Outcome of [`decide_count_strategy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountDecision {
    /// The total is known without a count query.
    Skip { total: usize },
    /// A separate count query is required.
    Run,
}

/// Decides whether a count query is needed after fetching `fetched` rows for
/// `request`.
///
/// Only a short first page proves the total: with a zero offset and fewer
/// rows than the page size, nothing exists beyond what was fetched. A full
/// page or any later page may have more rows elsewhere.
pub fn decide_count_strategy(request: &PageRequest, fetched: usize) -> CountDecision {
    if request.offset() == 0 && fetched < request.size() {
        CountDecision::Skip { total: fetched }
    } else {
        CountDecision::Run
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
    pub total_pages: usize,
    pub page: usize,
    pub size: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: usize) -> Self {
        Self {
            content,
            total_elements,
            total_pages: total_elements.div_ceil(request.size()),
            page: request.page(),
            size: request.size(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Converts the content while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
        }
    }
}
