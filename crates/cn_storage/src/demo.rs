use chrono::NaiveDate;
use cn_core::{Article, ArticleStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}

/// The demo article set the dashboards browse until a real data store
/// exists.
pub fn demo_articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".to_string(),
            title: "Zohran Momdani Recent Election Win".to_string(),
            excerpt: "Socialist candidate secures historic victory in municipal elections \
                      with groundswell of grassroots support"
                .to_string(),
            category: "Politics".to_string(),
            date: date(2025, 11, 24),
            views: 15420,
            likes: 3200,
            status: ArticleStatus::Published,
        },
        Article {
            id: "2".to_string(),
            title: "AI Breakthroughs in Medical Imaging".to_string(),
            excerpt: "New deep learning model achieves 99.2% accuracy in detecting rare \
                      diseases early"
                .to_string(),
            category: "Technology".to_string(),
            date: date(2025, 11, 23),
            views: 8900,
            likes: 2100,
            status: ArticleStatus::Published,
        },
        Article {
            id: "3".to_string(),
            title: "Climate Summit Reaches Historic Agreement".to_string(),
            excerpt: "Nations pledge to cut carbon emissions by 50% within the next decade"
                .to_string(),
            category: "Environment".to_string(),
            date: date(2025, 11, 22),
            views: 12300,
            likes: 2800,
            status: ArticleStatus::Published,
        },
        Article {
            id: "4".to_string(),
            title: "Space Agency Announces Mars Colony Timeline".to_string(),
            excerpt: "First crewed mission planned for 2030 with permanent settlement by 2035"
                .to_string(),
            category: "Science".to_string(),
            date: date(2025, 11, 21),
            views: 24500,
            likes: 5600,
            status: ArticleStatus::Published,
        },
        Article {
            id: "5".to_string(),
            title: "Quantum Computing Reaches New Milestone".to_string(),
            excerpt: "Researchers achieve quantum advantage in practical real-world applications"
                .to_string(),
            category: "Technology".to_string(),
            date: date(2025, 11, 20),
            views: 10200,
            likes: 2400,
            status: ArticleStatus::Published,
        },
        Article {
            id: "6".to_string(),
            title: "Revolutionary Cancer Treatment Shows Promise".to_string(),
            excerpt: "New immunotherapy approach demonstrates 85% success rate in clinical \
                      trials"
                .to_string(),
            category: "Health".to_string(),
            date: date(2025, 11, 19),
            views: 18700,
            likes: 4100,
            status: ArticleStatus::Published,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_ids_are_unique() {
        let articles = demo_articles();
        let ids: HashSet<&str> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), articles.len());
    }

    #[test]
    fn demo_dates_descend_with_ids() {
        let articles = demo_articles();
        for pair in articles.windows(2) {
            assert!(pair[0].date > pair[1].date);
        }
    }
}
