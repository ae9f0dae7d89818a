use crate::database::SortOrder;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::str::FromStr;
use thiserror::Error;

/// How the total of a page is obtained.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CountStrategy {
    /// Always run a second query for the total.
    Always,
    /// Skip the count query when the content already determines the total.
    Elide,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Id,
    Username,
    Age,
    TeamName,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sort {
    pub by: SortBy,
    pub order: SortOrder,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid sort `{0}`, expected `property[,asc|desc]`")]
pub struct InvalidSortError(String);

/// Largest row offset that can be bound into a query.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Page {page} of size {size} starts beyond the last addressable row")]
pub struct PageOutOfRangeError {
    page: u64,
    size: u64,
}

impl FromStr for Sort {
    type Err = InvalidSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidSortError(s.to_owned());
        let mut parts = s.split(',').map(str::trim);
        let by = match parts.next().ok_or_else(err)? {
            "id" => SortBy::Id,
            "username" => SortBy::Username,
            "age" => SortBy::Age,
            "teamName" => SortBy::TeamName,
            _ => return Err(err()),
        };
        let order = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => SortOrder::Ascending,
            Some("desc") => SortOrder::Descending,
            Some(_) => return Err(err()),
        };
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Sort { by, order })
    }
}

impl Display for Sort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let by = match self.by {
            SortBy::Id => "id",
            SortBy::Username => "username",
            SortBy::Age => "age",
            SortBy::TeamName => "teamName",
        };
        let order = match self.order {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        };
        write!(f, "{},{}", by, order)
    }
}

serde_plain::derive_deserialize_from_fromstr!(Sort, "a sort of the form `property[,asc|desc]`");
serde_plain::derive_serialize_from_display!(Sort);

/// A window of `size` rows starting at `offset`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    offset: u64,
    size: u64,
    pub sort: Sort,
}

impl PageRequest {
    /// The zero based page `page` of `size` rows. Offsets past
    /// [`MAX_OFFSET`] are clamped to it.
    pub fn of(page: u64, size: u64) -> Self {
        Self::at_offset(page.saturating_mul(size), size)
    }

    /// Like [`Self::of`] but rejects pages starting past [`MAX_OFFSET`].
    pub fn checked(page: u64, size: u64) -> Result<Self, PageOutOfRangeError> {
        match page.checked_mul(size) {
            Some(offset) if offset <= MAX_OFFSET => Ok(Self::at_offset(offset, size)),
            _ => Err(PageOutOfRangeError { page, size }),
        }
    }

    pub fn at_offset(offset: u64, size: u64) -> Self {
        assert!(size > 0, "page size must be positive");
        Self {
            offset: offset.min(MAX_OFFSET),
            size,
            sort: Sort::default(),
        }
    }

    pub fn sorted(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn number(&self) -> u64 {
        self.offset / self.size
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    /// A page over `total` rows. A total that contradicts the content of a
    /// short page is replaced with the one the content proves.
    pub fn new(content: Vec<T>, request: PageRequest, total: u64) -> Self {
        let len = content.len() as u64;
        let total = if len > 0 && request.offset.saturating_add(request.size) > total {
            request.offset.saturating_add(len)
        } else {
            total
        };
        Self {
            content,
            total,
            request,
        }
    }

    /// Builds the page, only awaiting `count` when the content cannot
    /// determine the total by itself.
    pub async fn with_count<F, Fut, E>(
        content: Vec<T>,
        request: PageRequest,
        count: F,
    ) -> Result<Self, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<u64, E>>,
    {
        match Self::derived_total(content.len() as u64, &request) {
            Some(total) => Ok(Self::new(content, request, total)),
            None => {
                let total = count().await?;
                Ok(Self::new(content, request, total))
            }
        }
    }

    /// The total implied by the content length, if there is one.
    fn derived_total(len: u64, request: &PageRequest) -> Option<u64> {
        if request.offset == 0 {
            (len < request.size).then_some(len)
        } else {
            (len != 0 && len < request.size).then_some(request.offset.saturating_add(len))
        }
    }

    pub fn number(&self) -> u64 {
        self.request.number()
    }

    pub fn size(&self) -> u64 {
        self.request.size
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.request.size)
    }

    pub fn is_first(&self) -> bool {
        self.request.offset == 0
    }

    pub fn is_last(&self) -> bool {
        self.request.offset.saturating_add(self.request.size) >= self.total
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }
}
