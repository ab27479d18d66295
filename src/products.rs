//! Product catalog: mock data and filtering.
//!
//! The catalog is a fixed table; a real deployment would source it from a
//! CMS or API, which is out of scope here.

/// Machine category. Keys are the stable identifiers used in filter query
/// strings and translation dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    FabricSpreaders,
    CuttingTables,
    LoadingSystems,
    Cradles,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::FabricSpreaders,
        Category::CuttingTables,
        Category::LoadingSystems,
        Category::Cradles,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::FabricSpreaders => "fabricSpreaders",
            Category::CuttingTables => "cuttingTables",
            Category::LoadingSystems => "loadingSystems",
            Category::Cradles => "cradles",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Industry sector a machine is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sector {
    Apparel,
    Upholstery,
    TechnicalFabrics,
}

impl Sector {
    pub const ALL: [Sector; 3] = [Sector::Apparel, Sector::Upholstery, Sector::TechnicalFabrics];

    pub fn key(self) -> &'static str {
        match self {
            Sector::Apparel => "apparel",
            Sector::Upholstery => "upholstery",
            Sector::TechnicalFabrics => "technicalFabrics",
        }
    }

    pub fn from_key(key: &str) -> Option<Sector> {
        Sector::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// One row of a product's technical specification table.
pub struct Specification {
    pub name: &'static str,
    pub value: &'static str,
}

pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub category: Category,
    pub sectors: &'static [Sector],
    pub image: &'static str,
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    pub gallery: &'static [&'static str],
    pub specifications: &'static [Specification],
    pub features: &'static [&'static str],
    pub applications: &'static [&'static str],
    pub related: &'static [u32],
}

/// The full catalog.
pub fn all() -> &'static [Product] {
    PRODUCTS
}

/// Look up a product by id.
pub fn find(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// The products listed as related to the given one, in listed order.
pub fn related(product: &Product) -> Vec<&'static Product> {
    product.related.iter().filter_map(|id| find(*id)).collect()
}

/// Catalog filter. `None` means "all" for either axis.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductFilter {
    pub category: Option<Category>,
    pub sector: Option<Sector>,
}

impl ProductFilter {
    /// Build a filter from raw query-string keys. `"all"`, missing, and
    /// unrecognized keys all mean no filtering on that axis.
    pub fn from_keys(category: Option<&str>, sector: Option<&str>) -> Self {
        Self {
            category: category.and_then(Category::from_key),
            sector: sector.and_then(Sector::from_key),
        }
    }

    /// Products matching the category (equality) and sector (membership).
    pub fn apply(self) -> Vec<&'static Product> {
        PRODUCTS
            .iter()
            .filter(|p| match self.category {
                Some(category) => p.category == category,
                None => true,
            })
            .filter(|p| match self.sector {
                Some(sector) => p.sectors.contains(&sector),
                None => true,
            })
            .collect()
    }
}

static PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Fabric Spreader XL-2000",
        category: Category::FabricSpreaders,
        sectors: &[Sector::Apparel, Sector::Upholstery],
        image: "/product-spreader-1.jpg",
        description: "High-precision fabric spreading machine with advanced tension control for various fabric types.",
        long_description: Some(
            "The Fabric Spreader XL-2000 is our flagship spreading machine designed for \
             high-volume production environments. It combines precision engineering with \
             advanced technology to deliver consistent, high-quality spreading results \
             across a wide range of fabric types.",
        ),
        gallery: &[
            "/product-spreader-1-detail-1.jpg",
            "/product-spreader-1-detail-2.jpg",
            "/product-spreader-1-detail-3.jpg",
        ],
        specifications: &[
            Specification { name: "Maximum Spreading Width", value: "2000 mm" },
            Specification { name: "Maximum Roll Diameter", value: "600 mm" },
            Specification { name: "Maximum Roll Weight", value: "100 kg" },
            Specification { name: "Spreading Speed", value: "Up to 100 m/min" },
            Specification { name: "Power Supply", value: "380V, 3-phase, 50/60 Hz" },
            Specification { name: "Dimensions (L×W×H)", value: "3200 × 2500 × 1200 mm" },
            Specification { name: "Weight", value: "850 kg" },
        ],
        features: &[
            "Automatic tension control system",
            "Programmable spreading patterns",
            "Touch screen interface with intuitive controls",
            "EtherCAT communication for Industry 4.0 integration",
            "Remote diagnostics and maintenance",
            "Energy-efficient design",
            "Low noise operation",
        ],
        applications: &[
            "Apparel manufacturing",
            "Upholstery production",
            "Automotive textiles",
            "Home textiles",
        ],
        related: &[2, 5, 7],
    },
    Product {
        id: 2,
        name: "Cutting Table CT-5000",
        category: Category::CuttingTables,
        sectors: &[Sector::Apparel, Sector::TechnicalFabrics],
        image: "/product-table-1.jpg",
        description: "Robust cutting table with vacuum system for precise cutting operations.",
        long_description: None,
        gallery: &[],
        specifications: &[],
        features: &[],
        applications: &[],
        related: &[1, 6, 8],
    },
    Product {
        id: 3,
        name: "Automatic Loading System ALS-3000",
        category: Category::LoadingSystems,
        sectors: &[Sector::Upholstery, Sector::TechnicalFabrics],
        image: "/product-loading-1.jpg",
        description: "Automated fabric roll loading system for increased efficiency and reduced manual handling.",
        long_description: None,
        gallery: &[],
        specifications: &[],
        features: &[],
        applications: &[],
        related: &[4, 7, 8],
    },
    Product {
        id: 4,
        name: "Fabric Cradle FC-1000",
        category: Category::Cradles,
        sectors: &[Sector::Apparel, Sector::Upholstery, Sector::TechnicalFabrics],
        image: "/product-cradle-1.jpg",
        description: "Sturdy fabric roll cradle system for safe and efficient fabric storage.",
        long_description: None,
        gallery: &[],
        specifications: &[],
        features: &[],
        applications: &[],
        related: &[3, 7, 8],
    },
    Product {
        id: 5,
        name: "Compact Spreader CS-1500",
        category: Category::FabricSpreaders,
        sectors: &[Sector::Apparel],
        image: "/product-spreader-2.jpg",
        description: "Compact fabric spreader designed for smaller production facilities with limited space.",
        long_description: None,
        gallery: &[],
        specifications: &[],
        features: &[],
        applications: &[],
        related: &[1, 2, 6],
    },
    Product {
        id: 6,
        name: "Heavy-Duty Cutting Table HDT-8000",
        category: Category::CuttingTables,
        sectors: &[Sector::Upholstery, Sector::TechnicalFabrics],
        image: "/product-table-2.jpg",
        description: "Heavy-duty cutting table designed for thick and technical fabrics.",
        long_description: None,
        gallery: &[],
        specifications: &[],
        features: &[],
        applications: &[],
        related: &[2, 3, 5],
    },
    Product {
        id: 7,
        name: "Multi-Roll Loading System MLS-5000",
        category: Category::LoadingSystems,
        sectors: &[Sector::Apparel, Sector::Upholstery],
        image: "/product-loading-2.jpg",
        description: "Advanced loading system capable of handling multiple fabric rolls simultaneously.",
        long_description: None,
        gallery: &[],
        specifications: &[],
        features: &[],
        applications: &[],
        related: &[1, 3, 4],
    },
    Product {
        id: 8,
        name: "Adjustable Cradle System ACS-2000",
        category: Category::Cradles,
        sectors: &[Sector::TechnicalFabrics],
        image: "/product-cradle-2.jpg",
        description: "Adjustable cradle system for various fabric roll sizes and weights.",
        long_description: None,
        gallery: &[],
        specifications: &[],
        features: &[],
        applications: &[],
        related: &[3, 4, 6],
    },
];
