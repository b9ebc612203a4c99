//! Catalog Module Tests
//!
//! Validates record construction, the retrieval operations, and the
//! sorting/pagination bookkeeping.
//!
//! ## Test Scopes
//! - **Book**: Required-field validation at construction time.
//! - **Store**: Insertion, lookups, the fixed retrieval operations and
//!   their matching semantics.
//! - **Pagination**: Page math, sorting, clamping and defaults.

#[cfg(test)]
mod tests {
    use crate::catalog::store::BookStore;
    use crate::catalog::types::{
        CatalogError, NewBook, Page, PageRequest, Sort, SortDirection, SortField,
        MAX_PAGE_SIZE,
    };
    use chrono::NaiveDate;

    fn new_book(isbn: &str, title: &str, author: &str) -> NewBook {
        NewBook {
            isbn: isbn.to_string(),
            title: title.to_string(),
            subtitle: None,
            author: author.to_string(),
            publisher: None,
            publication_date: None,
        }
    }

    fn populated_store() -> BookStore {
        let store = BookStore::new();
        store
            .insert(new_book("9780000000011", "Effective Java", "Joshua Bloch"))
            .unwrap();
        store
            .insert(new_book("9780000000028", "Clean Code", "Robert C. Martin"))
            .unwrap();
        store
            .insert(new_book("9780000000035", "Fluent Python", "Luciano Ramalho"))
            .unwrap();
        store
    }

    // ============================================================
    // BOOK CONSTRUCTION TESTS
    // ============================================================

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let store = populated_store();
        let ids: Vec<u64> = store
            .find_all(&PageRequest::default())
            .content
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_rejects_blank_isbn() {
        let store = BookStore::new();
        let err = store.insert(new_book("   ", "Title", "Author")).unwrap_err();
        assert_eq!(err, CatalogError::MissingField("isbn"));
    }

    #[test]
    fn test_insert_rejects_short_isbn() {
        let store = BookStore::new();
        let err = store.insert(new_book("123", "Title", "Author")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidIsbn(_)));
    }

    #[test]
    fn test_insert_rejects_blank_title() {
        let store = BookStore::new();
        let err = store
            .insert(new_book("9780000000011", "  ", "Author"))
            .unwrap_err();
        assert_eq!(err, CatalogError::MissingField("title"));
    }

    #[test]
    fn test_insert_rejects_blank_author() {
        let store = BookStore::new();
        let err = store
            .insert(new_book("9780000000011", "Title", ""))
            .unwrap_err();
        assert_eq!(err, CatalogError::MissingField("author"));
    }

    #[test]
    fn test_insert_rejects_duplicate_isbn() {
        let store = populated_store();
        let err = store
            .insert(new_book("9780000000011", "Another", "Somebody"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIsbn(_)));
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_insert_rejects_duplicate_isbn_under_contention() {
        // Racing inserts of one ISBN must produce exactly one winner;
        // the claim happens through the index entry lock, not a
        // check-then-insert.
        use std::sync::{Arc, Barrier};

        for _ in 0..20 {
            let store = Arc::new(BookStore::new());
            let barrier = Arc::new(Barrier::new(8));

            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let store = store.clone();
                    let barrier = barrier.clone();
                    std::thread::spawn(move || {
                        barrier.wait();
                        store
                            .insert(new_book("9780000000011", "Title", &format!("Author {}", i)))
                            .is_ok()
                    })
                })
                .collect();

            let successes = handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .filter(|&ok| ok)
                .count();
            assert_eq!(successes, 1);
            assert_eq!(store.count(), 1);
        }
    }

    #[test]
    fn test_insert_trims_fields() {
        let store = BookStore::new();
        let book = store
            .insert(new_book(" 9780000000011 ", "  Clean Code  ", " Robert C. Martin "))
            .unwrap();
        assert_eq!(book.isbn, "9780000000011");
        assert_eq!(book.title, "Clean Code");
        assert_eq!(book.author, "Robert C. Martin");
    }

    // ============================================================
    // LOOKUP TESTS
    // ============================================================

    #[test]
    fn test_get_by_id() {
        let store = populated_store();
        let book = store.get(2).unwrap();
        assert_eq!(book.title, "Clean Code");
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_find_by_isbn() {
        let store = populated_store();
        let book = store.find_by_isbn("9780000000035").unwrap();
        assert_eq!(book.title, "Fluent Python");
        assert!(store.find_by_isbn("0000000000").is_none());
    }

    // ============================================================
    // RETRIEVAL OPERATION TESTS
    // ============================================================

    #[test]
    fn test_find_by_term_matches_title_and_author() {
        let store = populated_store();
        let page = PageRequest::default();

        let by_title = store.find_by_term("Clean", &page);
        assert_eq!(by_title.total_elements, 1);

        let by_author = store.find_by_term("Bloch", &page);
        assert_eq!(by_author.total_elements, 1);
        assert_eq!(by_author.content[0].title, "Effective Java");
    }

    #[test]
    fn test_find_by_term_is_substring_containment() {
        let store = populated_store();
        let results = store.find_by_term("ean", &PageRequest::default());
        assert_eq!(results.total_elements, 1);
        assert_eq!(results.content[0].title, "Clean Code");
    }

    #[test]
    fn test_find_by_terms_or_deduplicates() {
        let store = populated_store();
        // "Effective Java" matches both "Java" (title) and "Bloch" (author)
        // but must appear once.
        let results = store.find_by_terms_or("Java", "Bloch", &PageRequest::default());
        assert_eq!(results.total_elements, 1);
    }

    #[test]
    fn test_find_excluding_checks_title_and_author() {
        let store = populated_store();
        let excluded = vec!["Java".to_string(), "Martin".to_string()];
        let results = store.find_excluding(&excluded, &PageRequest::default());
        assert_eq!(results.total_elements, 1);
        assert_eq!(results.content[0].title, "Fluent Python");
    }

    #[test]
    fn test_find_by_term_excluding() {
        let store = populated_store();
        let excluded = vec!["Effective".to_string()];
        let results = store.find_by_term_excluding("Java", &excluded, &PageRequest::default());
        assert_eq!(results.total_elements, 0);
    }

    #[test]
    fn test_find_by_terms_or_excluding() {
        let store = populated_store();
        let excluded = vec!["Python".to_string()];
        let results =
            store.find_by_terms_or_excluding("Java", "Fluent", &excluded, &PageRequest::default());
        assert_eq!(results.total_elements, 1);
        assert_eq!(results.content[0].title, "Effective Java");
    }

    // ============================================================
    // SORTING TESTS
    // ============================================================

    #[test]
    fn test_sort_by_title_descending() {
        let store = populated_store();
        let page = PageRequest::new(
            0,
            10,
            Sort {
                field: SortField::Title,
                direction: SortDirection::Desc,
            },
        );
        let results = store.find_all(&page);
        let titles: Vec<&str> = results.content.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Fluent Python", "Effective Java", "Clean Code"]);
    }

    #[test]
    fn test_sort_undated_books_come_last() {
        let store = BookStore::new();
        let mut dated = new_book("9780000000011", "Dated", "Author A");
        dated.publication_date = NaiveDate::from_ymd_opt(2020, 1, 1);
        store.insert(dated).unwrap();
        store
            .insert(new_book("9780000000028", "Undated", "Author B"))
            .unwrap();

        let page = PageRequest::new(
            0,
            10,
            Sort {
                field: SortField::PublicationDate,
                direction: SortDirection::Asc,
            },
        );
        let results = store.find_all(&page);
        let titles: Vec<&str> = results.content.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dated", "Undated"]);
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(Sort::parse("title,desc").unwrap().field, SortField::Title);
        assert_eq!(
            Sort::parse("title,desc").unwrap().direction,
            SortDirection::Desc
        );
        assert_eq!(Sort::parse("author").unwrap().field, SortField::Author);
        assert_eq!(Sort::parse("id,asc").unwrap(), Sort::default());
        assert!(Sort::parse("isbn").is_err());
        assert!(Sort::parse("title,sideways").is_err());
    }

    // ============================================================
    // PAGINATION TESTS
    // ============================================================

    #[test]
    fn test_pagination_bookkeeping() {
        let store = populated_store();
        let page = PageRequest::new(0, 2, Sort::default());
        let first = store.find_all(&page);
        assert_eq!(first.content.len(), 2);
        assert_eq!(first.total_elements, 3);
        assert_eq!(first.total_pages, 2);

        let page = PageRequest::new(1, 2, Sort::default());
        let second = store.find_all(&page);
        assert_eq!(second.content.len(), 1);
        assert_eq!(second.page, 1);
    }

    #[test]
    fn test_pagination_out_of_range_page_is_empty() {
        let store = populated_store();
        let page = PageRequest::new(5, 2, Sort::default());
        let results = store.find_all(&page);
        assert!(results.content.is_empty());
        assert_eq!(results.total_elements, 3);
    }

    #[test]
    fn test_pagination_huge_page_number_does_not_overflow() {
        let store = populated_store();
        let page = PageRequest::new(usize::MAX, 100, Sort::default());
        let results = store.find_all(&page);
        assert!(results.content.is_empty());
        assert_eq!(results.total_elements, 3);
    }

    #[test]
    fn test_page_request_clamps_size() {
        let oversized = PageRequest::new(0, 10_000, Sort::default());
        assert_eq!(oversized.size, MAX_PAGE_SIZE);

        let zero = PageRequest::new(0, 0, Sort::default());
        assert_eq!(zero.size, 1);
    }

    #[test]
    fn test_empty_page_has_zero_pages() {
        let store = BookStore::new();
        let results = store.find_all(&PageRequest::default());
        assert_eq!(results.total_pages, 0);
        assert_eq!(results.total_elements, 0);
    }

    #[test]
    fn test_page_map_preserves_bookkeeping() {
        let store = populated_store();
        let page: Page<String> = store
            .find_all(&PageRequest::default())
            .map(|book| book.title);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.content[0], "Effective Java");
    }
}
