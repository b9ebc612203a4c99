use super::types::{Book, CatalogError, NewBook, Page, PageRequest, SortDirection, SortField};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Concurrent in-memory book store.
///
/// Plays the role of the repository layer: it owns the matching semantics
/// (case-preserving substring containment over title and author), row
/// deduplication across OR branches, and pagination bookkeeping. Callers
/// describe *which* rows they want through one of the fixed retrieval
/// operations; no filtering happens above this layer.
pub struct BookStore {
    books: DashMap<u64, Book>,
    /// ISBN → book id. Uniqueness is claimed through this map's entry
    /// lock, so concurrent inserts of the same ISBN cannot both win.
    isbn_index: DashMap<String, u64>,
    next_id: AtomicU64,
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore {
    pub fn new() -> Self {
        BookStore {
            books: DashMap::new(),
            isbn_index: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Validates and stores a new book, assigning the next numeric id.
    /// ISBNs are unique across the catalog: the ISBN is claimed through
    /// the index entry before the book becomes visible, so of two racing
    /// inserts with the same ISBN exactly one succeeds.
    pub fn insert(&self, input: NewBook) -> Result<Book, CatalogError> {
        let id = self.next_id.fetch_add(1, AtomicOrdering::Relaxed);
        let book = Book::new(id, input)?;

        match self.isbn_index.entry(book.isbn.clone()) {
            Entry::Occupied(_) => return Err(CatalogError::DuplicateIsbn(book.isbn)),
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
        }

        self.books.insert(id, book.clone());
        Ok(book)
    }

    pub fn get(&self, id: u64) -> Option<Book> {
        self.books.get(&id).map(|entry| entry.clone())
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<Book> {
        let id = *self.isbn_index.get(isbn)?;
        self.get(id)
    }

    pub fn count(&self) -> usize {
        self.books.len()
    }

    // --- Retrieval operations ---
    //
    // One operation per query shape. Each scans every row exactly once, so
    // a row matching through several OR branches still appears once.

    /// All rows, paginated.
    pub fn find_all(&self, page: &PageRequest) -> Page<Book> {
        self.select(page, |_| true)
    }

    /// Rows whose title or author contains `term`.
    pub fn find_by_term(&self, term: &str, page: &PageRequest) -> Page<Book> {
        self.select(page, |book| contains_term(book, term))
    }

    /// Rows whose title or author contains `first` or `second`.
    pub fn find_by_terms_or(&self, first: &str, second: &str, page: &PageRequest) -> Page<Book> {
        self.select(page, |book| {
            contains_term(book, first) || contains_term(book, second)
        })
    }

    /// Rows whose title and author are both free of every excluded term.
    pub fn find_excluding(&self, excluded: &[String], page: &PageRequest) -> Page<Book> {
        self.select(page, |book| excludes_all(book, excluded))
    }

    /// Rows containing `term` that are free of every excluded term.
    pub fn find_by_term_excluding(
        &self,
        term: &str,
        excluded: &[String],
        page: &PageRequest,
    ) -> Page<Book> {
        self.select(page, |book| {
            contains_term(book, term) && excludes_all(book, excluded)
        })
    }

    /// Rows containing `first` or `second` that are free of every excluded term.
    pub fn find_by_terms_or_excluding(
        &self,
        first: &str,
        second: &str,
        excluded: &[String],
        page: &PageRequest,
    ) -> Page<Book> {
        self.select(page, |book| {
            (contains_term(book, first) || contains_term(book, second))
                && excludes_all(book, excluded)
        })
    }

    /// Filters, sorts and paginates in one pass over the map. DashMap
    /// iteration order is arbitrary, so ordering comes entirely from the
    /// sort spec (ties broken by id for determinism).
    fn select(&self, page: &PageRequest, predicate: impl Fn(&Book) -> bool) -> Page<Book> {
        let mut matches: Vec<Book> = self
            .books
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.clone())
            .collect();

        matches.sort_by(|a, b| compare_books(a, b, page.sort.field, page.sort.direction));

        let total = matches.len();
        let content: Vec<Book> = matches
            .into_iter()
            .skip(page.page.saturating_mul(page.size))
            .take(page.size)
            .collect();

        Page::new(content, page, total)
    }
}

/// Case-preserving substring containment over title and author.
fn contains_term(book: &Book, term: &str) -> bool {
    book.title.contains(term) || book.author.contains(term)
}

/// True when neither title nor author contains any of the excluded terms.
fn excludes_all(book: &Book, excluded: &[String]) -> bool {
    excluded
        .iter()
        .all(|term| !book.title.contains(term.as_str()) && !book.author.contains(term.as_str()))
}

fn compare_books(a: &Book, b: &Book, field: SortField, direction: SortDirection) -> Ordering {
    let ordering = match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Title => a.title.cmp(&b.title),
        SortField::Author => a.author.cmp(&b.author),
        // Books without a publication date sort after dated ones.
        SortField::PublicationDate => match (a.publication_date, b.publication_date) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    };

    let ordering = match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    };

    ordering.then(a.id.cmp(&b.id))
}
