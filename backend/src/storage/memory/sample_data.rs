//! Sample catalogue and statements used to seed the in-memory storage.
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::ExamPeriod;

use crate::domain::models::article::{ArticleRecord, PublicationType};
use crate::domain::models::statement::{AccountStatement, FeeBreakdown};

/// Student with an unpaid first-semester statement
pub const SAMPLE_STUDENT_ID: &str = "2021-00123";

/// Student with a smaller statement and no exam-period dues configured
pub const SAMPLE_TRANSFEREE_ID: &str = "2023-00456";

pub fn sample_articles() -> Vec<ArticleRecord> {
    vec![
        ArticleRecord::new(
            "Sustainable Tourism Recovery in Coastal Provinces",
            "Reyes, M.; Santos, J.",
            "Asia Pacific Journal of Tourism Research",
            PublicationType::JournalArticle,
            2022,
            ["tourism", "sustainability", "coastal management"],
        ),
        ArticleRecord::new(
            "Online Learning Readiness of College Students During the COVID-19 Pandemic",
            "Dela Cruz, A.; Mendoza, R.",
            "Philippine Journal of Education",
            PublicationType::JournalArticle,
            2021,
            ["covid-19", "pandemic", "online learning", "higher education"],
        ),
        ArticleRecord::new(
            "Heritage Sites and Visitor Satisfaction: A Structural Model",
            "Garcia, L.",
            "International Journal of Hospitality Management",
            PublicationType::JournalArticle,
            2019,
            ["heritage", "tourism", "visitor satisfaction"],
        ),
        ArticleRecord::new(
            "Machine Learning Approaches to Rice Yield Forecasting",
            "Villanueva, P.; Tan, K.",
            "Computers and Electronics in Agriculture",
            PublicationType::JournalArticle,
            2023,
            ["machine learning", "agriculture", "forecasting"],
        ),
        ArticleRecord::new(
            "A Low-Cost IoT Flood Monitoring System for Barangay Use",
            "Bautista, E.; Ramos, C.",
            "Proceedings of the IEEE Region 10 Conference",
            PublicationType::ConferencePaper,
            2020,
            ["iot", "disaster risk reduction", "sensors"],
        ),
        ArticleRecord::new(
            "Financial Literacy Among Working Students in Metro Manila",
            "Aquino, F.",
            "University Graduate School Repository",
            PublicationType::Thesis,
            2018,
            ["financial literacy", "working students"],
        ),
        ArticleRecord::new(
            "Community-Based Ecotourism: Lessons from Palawan",
            "Navarro, S.; Lim, D.",
            "Tourism in Southeast Asia: Emerging Perspectives",
            PublicationType::BookChapter,
            2017,
            ["ecotourism", "community development"],
        ),
        ArticleRecord::new(
            "Mental Health Interventions for University Students: A Systematic Review",
            "Castillo, H.; Domingo, T.",
            "Journal of American College Health",
            PublicationType::Review,
            2024,
            ["mental health", "students", "systematic review"],
        ),
    ]
}

pub fn sample_statements() -> Vec<AccountStatement> {
    vec![
        AccountStatement::new(SAMPLE_STUDENT_ID)
            .with_fee(FeeBreakdown::new("Tuition Fee (21 units)", Decimal::new(1_050_000, 2), posted(2024, 8, 5)))
            .with_fee(FeeBreakdown::new("Miscellaneous Fee", Decimal::new(320_000, 2), posted(2024, 8, 5)))
            .with_fee(FeeBreakdown::new("Laboratory Fee", Decimal::new(130_000, 2), posted(2024, 8, 5)))
            .with_fee(FeeBreakdown::new("Library Fee", Decimal::new(50_000, 2), None))
            .with_period_due(ExamPeriod::Prelim, Decimal::new(500_000, 2))
            .with_period_due(ExamPeriod::Midterm, Decimal::new(500_000, 2))
            .with_period_due(ExamPeriod::Final, Decimal::new(550_000, 2)),
        AccountStatement::new(SAMPLE_TRANSFEREE_ID)
            .with_fee(FeeBreakdown::new("Tuition Fee (12 units)", Decimal::new(600_000, 2), posted(2024, 8, 12)))
            .with_fee(FeeBreakdown::new("Transfer Credential Evaluation", Decimal::new(75_000, 2), posted(2024, 8, 12))),
    ]
}

fn posted(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sample_statement_dues_cover_fees() {
        let statements = sample_statements();
        let main = &statements[0];
        let dues: Decimal = ExamPeriod::ALL.iter().map(|p| main.get_exam_period_due(*p)).sum();
        assert_eq!(main.total_fees(), dec!(15500.00));
        assert_eq!(dues, main.total_fees());
    }

    #[test]
    fn test_sample_catalogue_has_one_pandemic_article() {
        let pandemic: Vec<_> = sample_articles()
            .into_iter()
            .filter(|a| a.keywords().any(|k| k == "pandemic"))
            .collect();
        assert_eq!(pandemic.len(), 1);
    }
}
