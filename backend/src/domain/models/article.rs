//! Domain model for a journal article and the filters applied to it.
use log::debug;
use serde::{Deserialize, Serialize};
use shared::{AdvancedSearchRequest, ALL_PUBLICATION_TYPES};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicationType {
    JournalArticle,
    ConferencePaper,
    Thesis,
    BookChapter,
    Review,
}

impl PublicationType {
    pub const ALL: [PublicationType; 5] = [
        PublicationType::JournalArticle,
        PublicationType::ConferencePaper,
        PublicationType::Thesis,
        PublicationType::BookChapter,
        PublicationType::Review,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PublicationType::JournalArticle => "Journal Article",
            PublicationType::ConferencePaper => "Conference Paper",
            PublicationType::Thesis => "Thesis",
            PublicationType::BookChapter => "Book Chapter",
            PublicationType::Review => "Review",
        }
    }

    /// Choices for the publication type selector, "All" first
    pub fn selector_options() -> Vec<String> {
        std::iter::once(ALL_PUBLICATION_TYPES)
            .chain(Self::ALL.iter().map(|t| t.label()))
            .map(str::to_string)
            .collect()
    }
}

/// An article in the library catalogue. Fields are fixed once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    title: String,
    authors: String,
    journal_name: String,
    publication_type: PublicationType,
    year: i32,
    keywords: BTreeSet<String>,
}

impl ArticleRecord {
    pub fn new<I, S>(
        title: &str,
        authors: &str,
        journal_name: &str,
        publication_type: PublicationType,
        year: i32,
        keywords: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.to_string(),
            authors: authors.to_string(),
            journal_name: journal_name.to_string(),
            publication_type,
            year,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn journal_name(&self) -> &str {
        &self.journal_name
    }

    pub fn publication_type(&self) -> PublicationType {
        self.publication_type
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Plain search: the term (case-insensitive) occurs in the title, authors,
    /// journal, publication type or any keyword. A blank term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        contains_ignore_case(&self.title, &needle)
            || contains_ignore_case(&self.authors, &needle)
            || contains_ignore_case(&self.journal_name, &needle)
            || contains_ignore_case(self.publication_type.label(), &needle)
            || self.keywords.iter().any(|k| contains_ignore_case(k, &needle))
    }

    /// Advanced search: every criterion that is set must hold.
    pub fn matches_advanced_search(&self, criteria: &AdvancedSearchCriteria) -> bool {
        if let Some(title) = &criteria.title {
            if !contains_ignore_case(&self.title, title) {
                return false;
            }
        }
        if let Some(author) = &criteria.author {
            if !contains_ignore_case(&self.authors, author) {
                return false;
            }
        }
        if let Some(journal) = &criteria.journal {
            if !contains_ignore_case(&self.journal_name, journal) {
                return false;
            }
        }
        if let Some(label) = &criteria.publication_type {
            if self.publication_type.label() != label.as_str() {
                return false;
            }
        }
        if let Some(from) = criteria.year_from {
            if self.year < from {
                return false;
            }
        }
        if let Some(to) = criteria.year_to {
            if self.year > to {
                return false;
            }
        }
        true
    }
}

/// Parsed advanced-search form. Unset fields (`None`) do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvancedSearchCriteria {
    /// Lower-cased title fragment
    pub title: Option<String>,
    /// Lower-cased author fragment
    pub author: Option<String>,
    /// Lower-cased journal fragment
    pub journal: Option<String>,
    /// Exact publication type label
    pub publication_type: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

impl AdvancedSearchCriteria {
    pub fn from_request(request: &AdvancedSearchRequest) -> Self {
        let publication_type = match request.publication_type.trim() {
            "" | ALL_PUBLICATION_TYPES => None,
            label => Some(label.to_string()),
        };

        Self {
            title: normalize_fragment(&request.title),
            author: normalize_fragment(&request.author),
            journal: normalize_fragment(&request.journal),
            publication_type,
            year_from: parse_year_bound(&request.year_from),
            year_to: parse_year_bound(&request.year_to),
        }
    }
}

fn normalize_fragment(fragment: &str) -> Option<String> {
    let trimmed = fragment.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Blank or malformed bounds mean "no bound" rather than an error.
pub fn parse_year_bound(input: &str) -> Option<i32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i32>() {
        Ok(year) => Some(year),
        Err(e) => {
            debug!("Ignoring unparsable year bound {:?}: {}", trimmed, e);
            None
        }
    }
}

/// `needle` must already be lower-cased
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
