//! Article search service for the journal search screens.
use anyhow::Result;
use log::info;
use shared::{AdvancedSearchRequest, ArticleResultRow};
use std::sync::Arc;

use crate::domain::commands::search::ArticleSearchResult;
use crate::domain::models::article::{AdvancedSearchCriteria, ArticleRecord};
use crate::storage::{ArticleStorage, Connection};

/// Runs plain and advanced searches over the article catalogue
#[derive(Clone)]
pub struct ArticleSearchService<C: Connection> {
    article_repository: C::ArticleRepository,
}

impl<C: Connection> ArticleSearchService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let article_repository = connection.create_article_repository();
        Self { article_repository }
    }

    /// Plain search over every text field; a blank term returns the whole catalogue
    pub fn search(&self, term: &str) -> Result<ArticleSearchResult> {
        let catalogue = self.article_repository.list_articles()?;
        let searched_count = catalogue.len();

        let articles: Vec<ArticleRecord> = catalogue
            .into_iter()
            .filter(|article| article.matches_search(term))
            .collect();

        info!("Search for {:?} matched {} of {} articles", term, articles.len(), searched_count);
        Ok(ArticleSearchResult { articles, searched_count })
    }

    /// Conjunctive multi-field search from the advanced search form
    pub fn advanced_search(&self, request: &AdvancedSearchRequest) -> Result<ArticleSearchResult> {
        let criteria = AdvancedSearchCriteria::from_request(request);
        let catalogue = self.article_repository.list_articles()?;
        let searched_count = catalogue.len();

        let articles: Vec<ArticleRecord> = catalogue
            .into_iter()
            .filter(|article| article.matches_advanced_search(&criteria))
            .collect();

        info!(
            "Advanced search {:?} matched {} of {} articles",
            criteria,
            articles.len(),
            searched_count
        );
        Ok(ArticleSearchResult { articles, searched_count })
    }

    /// Format articles as rows of the results table
    pub fn format_results(&self, articles: &[ArticleRecord]) -> Vec<ArticleResultRow> {
        articles
            .iter()
            .map(|article| ArticleResultRow {
                title: article.title().to_string(),
                authors: article.authors().to_string(),
                journal_name: article.journal_name().to_string(),
                publication_type: article.publication_type().label().to_string(),
                year: article.year().to_string(),
                keywords: article.keywords().collect::<Vec<_>>().join(", "),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::article::PublicationType;
    use crate::storage::memory::sample_data::sample_articles;
    use crate::storage::memory::test_utils::TestHelper;
    use crate::storage::MemoryConnection;

    fn create_test_service() -> ArticleSearchService<MemoryConnection> {
        ArticleSearchService::new(TestHelper::with_sample_data().connection)
    }

    fn titles(result: &ArticleSearchResult) -> Vec<&str> {
        result.articles.iter().map(|a| a.title()).collect()
    }

    #[test]
    fn test_blank_search_returns_whole_catalogue() {
        let service = create_test_service();
        let result = service.search("").unwrap();

        assert_eq!(result.articles, sample_articles());
        assert_eq!(result.searched_count, result.articles.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let service = create_test_service();
        let upper = service.search("TOURISM").unwrap();
        let lower = service.search("tourism").unwrap();

        assert_eq!(titles(&upper), titles(&lower));
        assert!(upper.articles.len() >= 2);
    }

    #[test]
    fn test_search_covid_finds_pandemic_article() {
        let service = create_test_service();
        let result = service.search("covid").unwrap();

        assert!(!result.articles.is_empty());
        assert!(result
            .articles
            .iter()
            .any(|a| a.keywords().any(|k| k == "pandemic")));
    }

    #[test]
    fn test_search_without_matches() {
        let service = create_test_service();
        let result = service.search("zzz-nonexistent").unwrap();

        assert!(result.articles.is_empty());
        assert_eq!(result.summary("\"zzz-nonexistent\""), "0 of 8 articles match \"zzz-nonexistent\"");
    }

    #[test]
    fn test_search_keeps_catalogue_order() {
        let service = create_test_service();
        let result = service.search("tourism").unwrap();
        let catalogue: Vec<String> = sample_articles()
            .iter()
            .filter(|a| a.matches_search("tourism"))
            .map(|a| a.title().to_string())
            .collect();

        assert_eq!(titles(&result), catalogue);
    }

    #[test]
    fn test_blank_advanced_search_returns_everything_in_order() {
        let service = create_test_service();
        let result = service.advanced_search(&AdvancedSearchRequest::default()).unwrap();

        assert_eq!(result.articles, sample_articles());
    }

    #[test]
    fn test_advanced_search_impossible_year_range_is_empty() {
        let service = create_test_service();
        let request = AdvancedSearchRequest {
            year_from: "2024".to_string(),
            year_to: "2015".to_string(),
            ..Default::default()
        };

        assert!(service.advanced_search(&request).unwrap().articles.is_empty());
    }

    #[test]
    fn test_advanced_search_malformed_years_are_ignored() {
        let service = create_test_service();
        let request = AdvancedSearchRequest {
            year_from: "last year".to_string(),
            year_to: "20x4".to_string(),
            ..Default::default()
        };

        assert_eq!(service.advanced_search(&request).unwrap().articles.len(), sample_articles().len());
    }

    #[test]
    fn test_advanced_search_combines_fields() {
        let service = create_test_service();
        let request = AdvancedSearchRequest {
            title: "tourism".to_string(),
            year_from: "2020".to_string(),
            publication_type: "Journal Article".to_string(),
            ..Default::default()
        };

        let result = service.advanced_search(&request).unwrap();
        assert_eq!(titles(&result), vec!["Sustainable Tourism Recovery in Coastal Provinces"]);
    }

    #[test]
    fn test_advanced_search_by_type() {
        let service = create_test_service();
        let request = AdvancedSearchRequest {
            publication_type: "Thesis".to_string(),
            ..Default::default()
        };

        let result = service.advanced_search(&request).unwrap();
        assert_eq!(result.articles.len(), 1);
        assert_eq!(result.articles[0].publication_type(), PublicationType::Thesis);
    }

    #[test]
    fn test_format_results() {
        let service = create_test_service();
        let result = service.search("rice yield").unwrap();
        let rows = service.format_results(&result.articles);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, "2023");
        assert_eq!(rows[0].publication_type, "Journal Article");
        assert_eq!(rows[0].keywords, "agriculture, forecasting, machine learning");
    }
}
