use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;
use crate::models::config::PageLimits;
use crate::pagination::{CountStrategy, PageRequest};

/// Pagination parameters shared by the paged member endpoints.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PageParams {
    /// Zero-based page index.
    pub page: Option<usize>,
    #[validate(range(min = 1))]
    pub size: Option<usize>,
}

impl PageParams {
    /// Validates the parameters and applies the configured defaults.
    pub fn into_page_request(self, limits: &PageLimits) -> Result<PageRequest, FormError> {
        self.validate()?;

        let size = self.size.unwrap_or(limits.default_size);
        if size > limits.max_size {
            return Err(FormError::PageSizeTooLarge {
                requested: size,
                max: limits.max_size,
            });
        }

        Ok(PageRequest::new(self.page.unwrap_or(0), size)?)
    }
}

/// Count strategy selector for the consolidated `/members` endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct CountParams {
    pub count: Option<CountStrategy>,
}

impl CountParams {
    pub fn strategy(&self) -> CountStrategy {
        self.count.unwrap_or_default()
    }
}
