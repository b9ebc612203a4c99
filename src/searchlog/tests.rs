//! Search Log Module Tests
//!
//! Validates keyword normalization, counting and popularity ranking.

#[cfg(test)]
mod tests {
    use crate::searchlog::service::SearchLogService;

    // ============================================================
    // RECORDING TESTS
    // ============================================================

    #[test]
    fn test_record_counts_searches() {
        let log = SearchLogService::new();
        log.record("java");
        log.record("java");
        log.record("python");

        let top = log.top_keywords(10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].keyword, "java");
        assert_eq!(top[0].search_count, 2);
    }

    #[test]
    fn test_record_normalizes_keywords() {
        let log = SearchLogService::new();
        log.record("Java");
        log.record("  java  ");
        log.record("JAVA");

        let top = log.top_keywords(10);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].keyword, "java");
        assert_eq!(top[0].search_count, 3);
    }

    #[test]
    fn test_record_ignores_blank_keywords() {
        let log = SearchLogService::new();
        log.record("");
        log.record("   ");
        assert!(log.top_keywords(10).is_empty());
    }

    // ============================================================
    // RANKING TESTS
    // ============================================================

    #[test]
    fn test_top_keywords_ordered_by_count() {
        let log = SearchLogService::new();
        for _ in 0..3 {
            log.record("rust");
        }
        for _ in 0..2 {
            log.record("java");
        }
        log.record("python");

        let top = log.top_keywords(10);
        let keywords: Vec<&str> = top.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["rust", "java", "python"]);
    }

    #[test]
    fn test_top_keywords_respects_limit() {
        let log = SearchLogService::new();
        log.record("a");
        log.record("b");
        log.record("c");
        assert_eq!(log.top_keywords(2).len(), 2);
    }

    #[test]
    fn test_popular_keywords_filters_by_min_count() {
        let log = SearchLogService::new();
        for _ in 0..5 {
            log.record("rust");
        }
        log.record("java");

        let popular = log.popular_keywords(2, 10);
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].keyword, "rust");
    }

    #[test]
    fn test_popular_keywords_with_threshold_one_matches_top() {
        let log = SearchLogService::new();
        log.record("rust");
        log.record("java");
        assert_eq!(log.popular_keywords(1, 10).len(), log.top_keywords(10).len());
    }
}
