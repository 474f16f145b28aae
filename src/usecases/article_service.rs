//! Article catalog: built-in Hausa articles with category and search filtering.

use crate::domain::{Article, ArticleCategory};
use tracing::debug;

/// The static catalog.
const CATALOG: [Article; 3] = [
    Article {
        id: 1,
        title: "Abinci Mai Gina Jiki Ga Uwa Mai Ciki",
        excerpt: "Menene abinci masu muhimmanci don lafiyar ku da ta jariri a lokacin ciki?",
        category: ArticleCategory::Nutrition,
        content: "A lokacin ciki, cin abinci mai gina jiki yana da muhimmanci ga lafiyar ku \
da ta jariri.\n\n\
Abubuwan Gina Jiki Masu Muhimmanci:\n\
• Folic Acid - don hana cututtukan kwakwalwa\n\
• Ƙarfe - don haɓakar jini\n\
• Calcium - don ƙashi mai ƙarfi\n\
• Protein - don ci gaban jariri",
        read_time: "5 min",
        date: "15 Janairu 2024",
        icon: "🍎",
    },
    Article {
        id: 2,
        title: "Alamun Farko na Ciki",
        excerpt: "Menene alamun da za ku iya gani a farkon ciki?",
        category: ArticleCategory::Symptoms,
        content: "Alamun farko na ciki na iya bambanta daga mace zuwa mace, amma akwai wasu \
na gama gari: jinkirin haila, gajiya, motsin zuciya da yawan fitsari.",
        read_time: "3 min",
        date: "10 Janairu 2024",
        icon: "🤰",
    },
    Article {
        id: 3,
        title: "Yadda Ake Kula da Jariri Bayan Haihuwa",
        excerpt: "Dabarun kula da jariri na farko na watanni",
        category: ArticleCategory::BabyCare,
        content: "Kula da jariri bayan haihuwa yana buƙatar haƙuri da ƙwarewa.",
        read_time: "7 min",
        date: "5 Janairu 2024",
        icon: "👶",
    },
];

/// Article service. Filters the static catalog; no I/O.
#[derive(Debug, Default)]
pub struct ArticleService;

impl ArticleService {
    pub fn new() -> Self {
        Self
    }

    /// List articles, optionally restricted to a category, optionally filtered
    /// by a case-insensitive search over title and excerpt.
    pub fn list(&self, category: Option<ArticleCategory>, search: &str) -> Vec<&'static Article> {
        let term = search.trim().to_lowercase();
        let results: Vec<&Article> = CATALOG
            .iter()
            .filter(|a| category.is_none_or(|c| a.category == c))
            .filter(|a| {
                term.is_empty()
                    || a.title.to_lowercase().contains(&term)
                    || a.excerpt.to_lowercase().contains(&term)
            })
            .collect();
        debug!(
            category = ?category,
            search = %term,
            count = results.len(),
            "filtered articles"
        );
        results
    }

    pub fn find(&self, id: u32) -> Option<&'static Article> {
        CATALOG.iter().find(|a| a.id == id)
    }

    /// Hausa section title for the current filter. None = all articles.
    pub fn section_title(&self, category: Option<ArticleCategory>) -> &'static str {
        category.map_or("Duka Labarai", |c| c.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all() {
        let svc = ArticleService::new();
        assert_eq!(svc.list(None, "").len(), 3);
        assert_eq!(svc.section_title(None), "Duka Labarai");
    }

    #[test]
    fn test_filter_by_category() {
        let svc = ArticleService::new();
        let nutrition = svc.list(Some(ArticleCategory::Nutrition), "");
        assert_eq!(nutrition.len(), 1);
        assert_eq!(nutrition[0].id, 1);

        // No postpartum articles in the catalog yet.
        assert!(svc.list(Some(ArticleCategory::Postpartum), "").is_empty());
    }

    #[test]
    fn test_search_matches_title_and_excerpt_case_insensitive() {
        let svc = ArticleService::new();
        let by_title = svc.list(None, "JARIRI");
        assert_eq!(by_title.len(), 2); // title of #3, excerpt of #1

        let by_excerpt = svc.list(None, "farkon ciki");
        assert_eq!(by_excerpt.len(), 1);
        assert_eq!(by_excerpt[0].id, 2);
    }

    #[test]
    fn test_search_combines_with_category() {
        let svc = ArticleService::new();
        let hits = svc.list(Some(ArticleCategory::BabyCare), "jariri");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);

        assert!(svc.list(Some(ArticleCategory::Nutrition), "jariri").len() == 1);
        assert!(svc.list(Some(ArticleCategory::Symptoms), "jariri").is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let svc = ArticleService::new();
        assert_eq!(svc.find(2).unwrap().title, "Alamun Farko na Ciki");
        assert!(svc.find(99).is_none());
    }
}
