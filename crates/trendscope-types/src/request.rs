//! Validated fetch request.

use chrono::NaiveDate;

use crate::RequestError;

/// Date format accepted on input and used on output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single keyword/date pair to fetch. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    keyword: String,
    target_date: NaiveDate,
}

impl FetchRequest {
    /// Creates a request for an already-parsed date.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::EmptyKeyword`] if the keyword is blank.
    pub fn new(keyword: impl Into<String>, target_date: NaiveDate) -> Result<Self, RequestError> {
        let keyword = keyword.into();
        if keyword.trim().is_empty() {
            return Err(RequestError::EmptyKeyword);
        }
        Ok(Self {
            keyword,
            target_date,
        })
    }

    /// Creates a request from a `YYYY-MM-DD` date string.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword is blank or the date is malformed.
    pub fn parse(keyword: impl Into<String>, date: &str) -> Result<Self, RequestError> {
        let target_date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| {
            RequestError::InvalidDate {
                input: date.to_string(),
            }
        })?;
        Self::new(keyword, target_date)
    }

    /// Returns the search keyword.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns the target date.
    #[must_use]
    pub const fn target_date(&self) -> NaiveDate {
        self.target_date
    }
}
