use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A catalog entry. Constructed through [`Book::new`], which enforces the
/// required fields; once stored, a book is never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: u64,
    pub isbn: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub author: String,
    pub publisher: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input payload for creating a book. `isbn`, `title` and `author` are
/// required; the rest is optional metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub isbn: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub author: String,
    pub publisher: Option<String>,
    pub publication_date: Option<NaiveDate>,
}

impl Book {
    /// Validates the required fields and builds a record with the given id.
    /// The id is assigned by the store, not by callers.
    pub(super) fn new(id: u64, input: NewBook) -> Result<Self, CatalogError> {
        let isbn = input.isbn.trim().to_string();
        let title = input.title.trim().to_string();
        let author = input.author.trim().to_string();

        if isbn.is_empty() {
            return Err(CatalogError::MissingField("isbn"));
        }
        if !(10..=13).contains(&isbn.len()) {
            return Err(CatalogError::InvalidIsbn(isbn));
        }
        if title.is_empty() {
            return Err(CatalogError::MissingField("title"));
        }
        if author.is_empty() {
            return Err(CatalogError::MissingField("author"));
        }

        let now = Utc::now();
        Ok(Book {
            id,
            isbn,
            title,
            subtitle: input.subtitle,
            author,
            publisher: input.publisher,
            publication_date: input.publication_date,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("required field '{0}' is missing or blank")]
    MissingField(&'static str),
    #[error("ISBN '{0}' must be 10-13 characters")]
    InvalidIsbn(String),
    #[error("a book with ISBN '{0}' already exists")]
    DuplicateIsbn(String),
}

/// Field a result page can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Title,
    Author,
    PublicationDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Sort {
            field: SortField::Id,
            direction: SortDirection::Asc,
        }
    }
}

impl Sort {
    /// Parses a `field` or `field,desc` query-string value, matching the
    /// usual `sort=title,desc` convention.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let mut parts = raw.splitn(2, ',').map(str::trim);

        let field = match parts.next().unwrap_or_default() {
            "" | "id" => SortField::Id,
            "title" => SortField::Title,
            "author" => SortField::Author,
            "publication_date" | "publicationDate" => SortField::PublicationDate,
            other => return Err(format!("unknown sort field '{}'", other)),
        };

        let direction = match parts.next() {
            None | Some("") | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => return Err(format!("unknown sort direction '{}'", other)),
        };

        Ok(Sort { field, direction })
    }
}

/// Zero-based pagination request, passed through to the store verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub sort: Sort,
}

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, size: usize, sort: Sort) -> Self {
        PageRequest {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort,
        }
    }
}

/// One page of results plus the bookkeeping the original repository layer
/// provided (total count, total pages, element count).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: usize) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            total_elements.div_ceil(request.size)
        };
        Page {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
