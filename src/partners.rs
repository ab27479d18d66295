//! Partner directory: mock data and search/filtering.

/// Partner category keys, as used in filter query strings and dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerCategory {
    Manufacturers,
    Distributors,
    Technology,
    Research,
}

impl PartnerCategory {
    pub const ALL: [PartnerCategory; 4] = [
        PartnerCategory::Manufacturers,
        PartnerCategory::Distributors,
        PartnerCategory::Technology,
        PartnerCategory::Research,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PartnerCategory::Manufacturers => "manufacturers",
            PartnerCategory::Distributors => "distributors",
            PartnerCategory::Technology => "technology",
            PartnerCategory::Research => "research",
        }
    }

    pub fn from_key(key: &str) -> Option<PartnerCategory> {
        PartnerCategory::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// World region a partner operates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Europe,
    NorthAmerica,
    Asia,
    SouthAmerica,
    Africa,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Europe,
        Region::NorthAmerica,
        Region::Asia,
        Region::SouthAmerica,
        Region::Africa,
        Region::Oceania,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Region::Europe => "europe",
            Region::NorthAmerica => "northAmerica",
            Region::Asia => "asia",
            Region::SouthAmerica => "southAmerica",
            Region::Africa => "africa",
            Region::Oceania => "oceania",
        }
    }

    pub fn from_key(key: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.key() == key)
    }
}

pub struct Partner {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: PartnerCategory,
    pub region: Region,
    pub logo: &'static str,
    pub website: &'static str,
}

pub fn all() -> &'static [Partner] {
    PARTNERS
}

/// Directory query: free-text search plus category and region filters.
/// `None` means "all" on either categorical axis.
#[derive(Debug, Default, Clone)]
pub struct PartnerQuery {
    pub search: String,
    pub category: Option<PartnerCategory>,
    pub region: Option<Region>,
}

impl PartnerQuery {
    pub fn from_keys(search: Option<&str>, category: Option<&str>, region: Option<&str>) -> Self {
        Self {
            search: search.unwrap_or_default().to_string(),
            category: category.and_then(PartnerCategory::from_key),
            region: region.and_then(Region::from_key),
        }
    }

    /// Partners whose name or description contains the search term
    /// (case-insensitively) and that match both categorical filters.
    pub fn apply(&self) -> Vec<&'static Partner> {
        let needle = self.search.to_lowercase();
        PARTNERS
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .filter(|p| match self.category {
                Some(category) => p.category == category,
                None => true,
            })
            .filter(|p| match self.region {
                Some(region) => p.region == region,
                None => true,
            })
            .collect()
    }
}

static PARTNERS: &[Partner] = &[
    Partner {
        id: 1,
        name: "TextileTech Inc.",
        description: "Leading manufacturer of textile machinery components and systems.",
        category: PartnerCategory::Manufacturers,
        region: Region::NorthAmerica,
        logo: "/partner-logo-1.jpg",
        website: "https://example.com/textiletech",
    },
    Partner {
        id: 2,
        name: "FabricSolutions GmbH",
        description: "Innovative fabric handling solutions and automation systems.",
        category: PartnerCategory::Manufacturers,
        region: Region::Europe,
        logo: "/partner-logo-2.jpg",
        website: "https://example.com/fabricsolutions",
    },
    Partner {
        id: 3,
        name: "Global Textile Distributors",
        description: "Worldwide distribution network for textile machinery and equipment.",
        category: PartnerCategory::Distributors,
        region: Region::Asia,
        logo: "/partner-logo-3.jpg",
        website: "https://example.com/gtd",
    },
    Partner {
        id: 4,
        name: "TechFabric Systems",
        description: "Software and IoT solutions for textile manufacturing.",
        category: PartnerCategory::Technology,
        region: Region::Europe,
        logo: "/partner-logo-4.jpg",
        website: "https://example.com/techfabric",
    },
    Partner {
        id: 5,
        name: "Textile Research Institute",
        description: "Leading research institution focused on textile innovation and sustainability.",
        category: PartnerCategory::Research,
        region: Region::Europe,
        logo: "/partner-logo-5.jpg",
        website: "https://example.com/tri",
    },
    Partner {
        id: 6,
        name: "American Fabric Association",
        description: "Industry association promoting textile manufacturing excellence.",
        category: PartnerCategory::Research,
        region: Region::NorthAmerica,
        logo: "/partner-logo-6.jpg",
        website: "https://example.com/afa",
    },
    Partner {
        id: 7,
        name: "Asian Textile Solutions",
        description: "Comprehensive textile machinery and service provider across Asia.",
        category: PartnerCategory::Distributors,
        region: Region::Asia,
        logo: "/partner-logo-7.jpg",
        website: "https://example.com/ats",
    },
    Partner {
        id: 8,
        name: "DataFabric AI",
        description: "Artificial intelligence and machine learning solutions for textile manufacturing.",
        category: PartnerCategory::Technology,
        region: Region::NorthAmerica,
        logo: "/partner-logo-8.jpg",
        website: "https://example.com/datafabric",
    },
    Partner {
        id: 9,
        name: "South American Textile Network",
        description: "Distribution and service network across South America.",
        category: PartnerCategory::Distributors,
        region: Region::SouthAmerica,
        logo: "/partner-logo-9.jpg",
        website: "https://example.com/satn",
    },
    Partner {
        id: 10,
        name: "African Textile Initiative",
        description: "Supporting textile manufacturing growth across African markets.",
        category: PartnerCategory::Distributors,
        region: Region::Africa,
        logo: "/partner-logo-10.jpg",
        website: "https://example.com/ati",
    },
    Partner {
        id: 11,
        name: "Oceania Fabric Technologies",
        description: "Textile technology solutions for Australia and New Zealand.",
        category: PartnerCategory::Technology,
        region: Region::Oceania,
        logo: "/partner-logo-11.jpg",
        website: "https://example.com/oft",
    },
    Partner {
        id: 12,
        name: "European Textile University",
        description: "Academic institution specializing in textile engineering and innovation.",
        category: PartnerCategory::Research,
        region: Region::Europe,
        logo: "/partner-logo-12.jpg",
        website: "https://example.com/etu",
    },
];
