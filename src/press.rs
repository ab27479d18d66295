//! Press releases: mock data, search, and load-more pagination.

use crate::i18n::Language;
use chrono::{Datelike, NaiveDate};

/// How many releases a fresh page shows.
pub const INITIAL_VISIBLE: usize = 4;

/// How many more releases each "Load More" reveals.
pub const LOAD_MORE_STEP: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressCategory {
    CompanyNews,
    ProductLaunches,
    Events,
    Awards,
    Partnerships,
}

impl PressCategory {
    pub const ALL: [PressCategory; 5] = [
        PressCategory::CompanyNews,
        PressCategory::ProductLaunches,
        PressCategory::Events,
        PressCategory::Awards,
        PressCategory::Partnerships,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PressCategory::CompanyNews => "companyNews",
            PressCategory::ProductLaunches => "productLaunches",
            PressCategory::Events => "events",
            PressCategory::Awards => "awards",
            PressCategory::Partnerships => "partnerships",
        }
    }

    pub fn from_key(key: &str) -> Option<PressCategory> {
        PressCategory::ALL.into_iter().find(|c| c.key() == key)
    }
}

pub struct PressRelease {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// ISO date, validated by the catalog tests.
    pub date: &'static str,
    pub category: PressCategory,
    pub image: &'static str,
    pub url: &'static str,
}

impl PressRelease {
    pub fn date(&self) -> NaiveDate {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").expect("catalog dates are ISO formatted")
    }

    /// The release date written out in the given language, e.g.
    /// "November 15, 2023" or "15 novembre 2023".
    pub fn formatted_date(&self, language: Language) -> String {
        let date = self.date();
        let month = month_name(language, date.month());
        match language.code() {
            "en" => format!("{} {}, {}", month, date.day(), date.year()),
            "es" | "pt" => format!("{} de {} de {}", date.day(), month, date.year()),
            _ => format!("{} {} {}", date.day(), month, date.year()),
        }
    }
}

fn month_name(language: Language, month: u32) -> &'static str {
    let names: &[&str; 12] = match language.code() {
        "it" => &[
            "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
            "settembre", "ottobre", "novembre", "dicembre",
        ],
        "fr" => &[
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
            "octobre", "novembre", "décembre",
        ],
        "es" => &[
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
            "octubre", "noviembre", "diciembre",
        ],
        "pt" => &[
            "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto",
            "setembro", "outubro", "novembro", "dezembro",
        ],
        _ => &[
            "January", "February", "March", "April", "May", "June", "July", "August", "September",
            "October", "November", "December",
        ],
    };
    names[(month - 1) as usize]
}

pub fn all() -> &'static [PressRelease] {
    PRESS_RELEASES
}

/// Press page state: search term, category filter, and how many filtered
/// releases are currently visible.
#[derive(Debug, Clone)]
pub struct PressQuery {
    pub search: String,
    pub category: Option<PressCategory>,
    visible: usize,
}

impl Default for PressQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            visible: INITIAL_VISIBLE,
        }
    }
}

impl PressQuery {
    /// Build from raw query-string values. Unknown categories mean "all";
    /// a visible count below the initial one is bumped back up.
    pub fn from_keys(search: Option<&str>, category: Option<&str>, visible: Option<usize>) -> Self {
        Self {
            search: search.unwrap_or_default().to_string(),
            category: category.and_then(PressCategory::from_key),
            visible: visible.unwrap_or(INITIAL_VISIBLE).max(INITIAL_VISIBLE),
        }
    }

    /// Switch the category filter. Resets the visible count so the new
    /// selection starts from the first page.
    pub fn set_category(&mut self, key: &str) {
        self.category = PressCategory::from_key(key);
        self.visible = INITIAL_VISIBLE;
    }

    /// Reveal the next batch of releases.
    pub fn load_more(&mut self) {
        self.visible += LOAD_MORE_STEP;
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    /// All releases matching the search term (title or excerpt,
    /// case-insensitively) and the category filter.
    pub fn results(&self) -> Vec<&'static PressRelease> {
        let needle = self.search.to_lowercase();
        PRESS_RELEASES
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.title.to_lowercase().contains(&needle)
                    || r.excerpt.to_lowercase().contains(&needle)
            })
            .filter(|r| match self.category {
                Some(category) => r.category == category,
                None => true,
            })
            .collect()
    }

    /// The visible slice of [`results`](Self::results).
    pub fn visible_results(&self) -> Vec<&'static PressRelease> {
        let mut results = self.results();
        results.truncate(self.visible);
        results
    }

    /// Whether a "Load More" affordance should be offered.
    pub fn has_more(&self) -> bool {
        self.results().len() > self.visible
    }
}

static PRESS_RELEASES: &[PressRelease] = &[
    PressRelease {
        id: 1,
        title: "Derown Technology Unveils New Fabric Spreader with AI-Powered Precision",
        excerpt: "Our latest innovation combines cutting-edge artificial intelligence with \
                  precision engineering to revolutionize fabric spreading operations.",
        date: "2023-11-15",
        category: PressCategory::ProductLaunches,
        image: "/press-release-1.jpg",
        url: "/press/derown-unveils-new-fabric-spreader",
    },
    PressRelease {
        id: 2,
        title: "Derown Technology Expands Operations to South America",
        excerpt: "We are excited to announce our expansion into the South American market with \
                  a new office in São Paulo, Brazil.",
        date: "2023-10-22",
        category: PressCategory::CompanyNews,
        image: "/press-release-2.jpg",
        url: "/press/derown-expands-to-south-america",
    },
    PressRelease {
        id: 3,
        title: "Derown Technology to Showcase Latest Innovations at ITMA 2023",
        excerpt: "Visit our booth at ITMA 2023 to experience our latest textile machinery \
                  innovations and Industry 4.0 solutions.",
        date: "2023-09-05",
        category: PressCategory::Events,
        image: "/press-release-3.jpg",
        url: "/press/derown-at-itma-2023",
    },
    PressRelease {
        id: 4,
        title: "Derown Technology Wins Innovation Award for Sustainable Manufacturing",
        excerpt: "Our commitment to sustainable manufacturing practices has been recognized \
                  with the prestigious Industry Innovation Award.",
        date: "2023-08-17",
        category: PressCategory::Awards,
        image: "/press-release-4.jpg",
        url: "/press/derown-wins-innovation-award",
    },
    PressRelease {
        id: 5,
        title: "Derown Technology Partners with Leading Textile Manufacturer",
        excerpt: "We are proud to announce our strategic partnership with TextileTech Inc. to \
                  develop next-generation fabric handling solutions.",
        date: "2023-07-28",
        category: PressCategory::Partnerships,
        image: "/press-release-5.jpg",
        url: "/press/derown-partners-with-textiletech",
    },
    PressRelease {
        id: 6,
        title: "Derown Technology Launches New IoT Dashboard for Remote Monitoring",
        excerpt: "Our new IoT dashboard allows textile manufacturers to monitor their machinery \
                  performance and production metrics from anywhere in the world.",
        date: "2023-06-14",
        category: PressCategory::ProductLaunches,
        image: "/press-release-6.jpg",
        url: "/press/derown-launches-iot-dashboard",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(releases: &[&PressRelease]) -> Vec<u32> {
        releases.iter().map(|r| r.id).collect()
    }

    // ==================== Catalog Tests ====================

    #[test]
    fn test_catalog_has_six_releases() {
        assert_eq!(all().len(), 6);
    }

    #[test]
    fn test_all_dates_parse() {
        for release in all() {
            let date = release.date();
            assert_eq!(date.year(), 2023);
        }
    }

    // ==================== Filtering Tests ====================

    #[test]
    fn test_default_query_shows_first_four() {
        let query = PressQuery::default();
        assert_eq!(query.results().len(), 6);
        assert_eq!(ids(&query.visible_results()), vec![1, 2, 3, 4]);
        assert!(query.has_more());
    }

    #[test]
    fn test_search_matches_title_and_excerpt() {
        let query = PressQuery {
            search: "itma".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&query.results()), vec![3]);

        let query = PressQuery {
            search: "são paulo".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&query.results()), vec![2]);
    }

    #[test]
    fn test_category_filter() {
        let query = PressQuery {
            category: Some(PressCategory::ProductLaunches),
            ..Default::default()
        };
        assert_eq!(ids(&query.results()), vec![1, 6]);
        assert!(!query.has_more());
    }

    #[test]
    fn test_search_and_category_intersect() {
        let query = PressQuery {
            search: "iot".to_string(),
            category: Some(PressCategory::ProductLaunches),
            ..Default::default()
        };
        assert_eq!(ids(&query.results()), vec![6]);

        let query = PressQuery {
            search: "iot".to_string(),
            category: Some(PressCategory::Awards),
            ..Default::default()
        };
        assert!(query.results().is_empty());
    }

    // ==================== Pagination Tests ====================

    #[test]
    fn test_load_more_extends_visible_slice() {
        let mut query = PressQuery::default();
        query.load_more();
        assert_eq!(query.visible(), 8);
        assert_eq!(query.visible_results().len(), 6);
        assert!(!query.has_more());
    }

    #[test]
    fn test_set_category_resets_visible_count() {
        let mut query = PressQuery::default();
        query.load_more();
        assert_eq!(query.visible(), 8);

        query.set_category("companyNews");
        assert_eq!(query.visible(), INITIAL_VISIBLE);
        assert_eq!(query.category, Some(PressCategory::CompanyNews));
    }

    #[test]
    fn test_set_category_all_resets_too() {
        let mut query = PressQuery::default();
        query.load_more();

        query.set_category("all");
        assert!(query.category.is_none());
        assert_eq!(query.visible(), INITIAL_VISIBLE);
    }

    #[test]
    fn test_from_keys_clamps_visible_to_initial() {
        let query = PressQuery::from_keys(None, None, Some(1));
        assert_eq!(query.visible(), INITIAL_VISIBLE);
    }

    // ==================== Date Formatting Tests ====================

    #[test]
    fn test_english_date_format() {
        let release = &all()[0];
        assert_eq!(
            release.formatted_date(Language::ENGLISH),
            "November 15, 2023"
        );
    }

    #[test]
    fn test_localized_date_formats() {
        let release = &all()[0];
        let italian = Language::from_code("it").unwrap();
        assert_eq!(release.formatted_date(italian), "15 novembre 2023");

        let spanish = Language::from_code("es").unwrap();
        assert_eq!(release.formatted_date(spanish), "15 de noviembre de 2023");
    }
}
