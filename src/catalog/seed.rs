use super::store::BookStore;
use super::types::NewBook;

use chrono::NaiveDate;

/// Populates the catalog with sample data on startup. Skipped when the
/// store already holds books, so restarts behind a shared store stay
/// idempotent.
pub fn load_sample_books(store: &BookStore) {
    if store.count() > 0 {
        return;
    }

    for (isbn, title, subtitle, author, publisher, date) in sample_books() {
        let book = NewBook {
            isbn: isbn.to_string(),
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
            author: author.to_string(),
            publisher: publisher.map(str::to_string),
            publication_date: date,
        };
        if let Err(e) = store.insert(book) {
            tracing::warn!("Skipping sample book {}: {}", isbn, e);
        }
    }

    tracing::info!("Loaded {} sample books", store.count());
}

type SampleBook = (
    &'static str,
    &'static str,
    Option<&'static str>,
    &'static str,
    Option<&'static str>,
    Option<NaiveDate>,
);

fn sample_books() -> Vec<SampleBook> {
    vec![
        (
            "9780132350884",
            "Clean Code",
            Some("A Handbook of Agile Software Craftsmanship"),
            "Robert C. Martin",
            Some("Prentice Hall"),
            NaiveDate::from_ymd_opt(2008, 8, 1),
        ),
        (
            "9780134685991",
            "Effective Java",
            None,
            "Joshua Bloch",
            Some("Addison-Wesley"),
            NaiveDate::from_ymd_opt(2018, 1, 6),
        ),
        (
            "9781617292545",
            "Spring Boot in Action",
            None,
            "Craig Walls",
            Some("Manning"),
            NaiveDate::from_ymd_opt(2015, 12, 1),
        ),
        (
            "9781617291999",
            "Java 8 in Action",
            Some("Lambdas, Streams, and Functional-Style Programming"),
            "Raoul-Gabriel Urma",
            Some("Manning"),
            NaiveDate::from_ymd_opt(2014, 8, 28),
        ),
        (
            "9780596007126",
            "Head First Design Patterns",
            Some("A Brain-Friendly Guide"),
            "Eric Freeman",
            Some("O'Reilly"),
            NaiveDate::from_ymd_opt(2004, 10, 25),
        ),
        (
            "9780134757599",
            "Refactoring",
            Some("Improving the Design of Existing Code"),
            "Martin Fowler",
            Some("Addison-Wesley"),
            NaiveDate::from_ymd_opt(2018, 11, 19),
        ),
        (
            "9780735619678",
            "Code Complete",
            Some("A Practical Handbook of Software Construction"),
            "Steve McConnell",
            Some("Microsoft Press"),
            NaiveDate::from_ymd_opt(2004, 6, 9),
        ),
        (
            "9780135957059",
            "The Pragmatic Programmer",
            Some("Your Journey to Mastery"),
            "David Thomas",
            Some("Addison-Wesley"),
            NaiveDate::from_ymd_opt(2019, 9, 13),
        ),
        (
            "9780134853987",
            "Effective Python",
            Some("90 Specific Ways to Write Better Python"),
            "Brett Slatkin",
            Some("Addison-Wesley"),
            NaiveDate::from_ymd_opt(2019, 11, 15),
        ),
        (
            "9781491946008",
            "Fluent Python",
            Some("Clear, Concise, and Effective Programming"),
            "Luciano Ramalho",
            Some("O'Reilly"),
            NaiveDate::from_ymd_opt(2015, 8, 20),
        ),
        (
            "9781593279288",
            "Python Crash Course",
            Some("A Hands-On, Project-Based Introduction to Programming"),
            "Eric Matthes",
            Some("No Starch Press"),
            NaiveDate::from_ymd_opt(2019, 5, 3),
        ),
        (
            "9781491952023",
            "JavaScript: The Definitive Guide",
            None,
            "David Flanagan",
            Some("O'Reilly"),
            NaiveDate::from_ymd_opt(2020, 5, 14),
        ),
        (
            "9781593279509",
            "Eloquent JavaScript",
            Some("A Modern Introduction to Programming"),
            "Marijn Haverbeke",
            Some("No Starch Press"),
            NaiveDate::from_ymd_opt(2018, 12, 4),
        ),
        (
            "9781718500457",
            "The Rust Programming Language",
            None,
            "Steve Klabnik",
            Some("No Starch Press"),
            NaiveDate::from_ymd_opt(2019, 8, 12),
        ),
        (
            "9781617294136",
            "Spring in Action",
            None,
            "Craig Walls",
            Some("Manning"),
            NaiveDate::from_ymd_opt(2018, 10, 5),
        ),
        (
            "9780984782857",
            "Cracking the Coding Interview",
            Some("189 Programming Questions and Solutions"),
            "Gayle Laakmann McDowell",
            Some("CareerCup"),
            NaiveDate::from_ymd_opt(2015, 7, 1),
        ),
        (
            "9781492056300",
            "Java Tutorial for Beginners",
            None,
            "James Hart",
            Some("O'Reilly"),
            NaiveDate::from_ymd_opt(2021, 3, 15),
        ),
        (
            "9781492051367",
            "Programming TypeScript",
            Some("Making Your JavaScript Applications Scale"),
            "Boris Cherny",
            Some("O'Reilly"),
            NaiveDate::from_ymd_opt(2019, 5, 28),
        ),
    ]
}
