use crate::i18n::TranslationSet;
use crate::pages::layout::{self, PageContext};
use crate::products::{Category, Product, ProductFilter, Sector};
use maud::{html, Markup};

pub(super) struct ProductsStrings {
    pub page_title: &'static str,
    pub page_subtitle: &'static str,
    pub all_categories: &'static str,
    pub fabric_spreaders: &'static str,
    pub cutting_tables: &'static str,
    pub loading_systems: &'static str,
    pub cradles: &'static str,
    pub all_sectors: &'static str,
    pub apparel: &'static str,
    pub upholstery: &'static str,
    pub technical_fabrics: &'static str,
    pub filter_by: &'static str,
    pub category: &'static str,
    pub sector: &'static str,
    pub discover_product: &'static str,
    pub no_results: &'static str,
}

static EN: ProductsStrings = ProductsStrings {
    page_title: "Our Products",
    page_subtitle: "Explore our range of high-quality textile machinery",
    all_categories: "All Categories",
    fabric_spreaders: "Fabric Spreaders",
    cutting_tables: "Cutting Tables",
    loading_systems: "Loading Systems",
    cradles: "Cradles",
    all_sectors: "All Sectors",
    apparel: "Apparel",
    upholstery: "Upholstery",
    technical_fabrics: "Technical Fabrics",
    filter_by: "Filter By",
    category: "Category",
    sector: "Sector",
    discover_product: "Discover the Product",
    no_results: "No products match your selected filters. Please try different criteria.",
};

static STRINGS: TranslationSet<ProductsStrings> = TranslationSet::new(&[("en", &EN)]);

impl ProductsStrings {
    pub(super) fn category_label(&self, category: Category) -> &'static str {
        match category {
            Category::FabricSpreaders => self.fabric_spreaders,
            Category::CuttingTables => self.cutting_tables,
            Category::LoadingSystems => self.loading_systems,
            Category::Cradles => self.cradles,
        }
    }

    fn sector_label(&self, sector: Sector) -> &'static str {
        match sector {
            Sector::Apparel => self.apparel,
            Sector::Upholstery => self.upholstery,
            Sector::TechnicalFabrics => self.technical_fabrics,
        }
    }
}

pub(super) fn strings(ctx: &PageContext) -> &'static ProductsStrings {
    STRINGS.resolve(ctx.language)
}

/// Link that keeps the other filter axis while switching this one.
fn filter_href(category: Option<Category>, sector: Option<Sector>) -> String {
    let category = category.map(Category::key).unwrap_or("all");
    let sector = sector.map(Sector::key).unwrap_or("all");
    format!("/products?category={category}&sector={sector}")
}

pub fn render(ctx: &PageContext, filter: ProductFilter) -> Markup {
    let t = strings(ctx);
    let visible = filter.apply();

    let content = html! {
        section .page-header {
            h1 { (t.page_title) }
            p .lead { (t.page_subtitle) }
        }

        section .section {
            h5 { (t.filter_by) }

            h6 { (t.category) }
            nav .filters {
                a .selected[filter.category.is_none()]
                    href=(filter_href(None, filter.sector)) { (t.all_categories) }
                @for category in Category::ALL {
                    a .selected[filter.category == Some(category)]
                        href=(filter_href(Some(category), filter.sector)) {
                        (t.category_label(category))
                    }
                }
            }

            h6 { (t.sector) }
            nav .filters {
                a .selected[filter.sector.is_none()]
                    href=(filter_href(filter.category, None)) { (t.all_sectors) }
                @for sector in Sector::ALL {
                    a .selected[filter.sector == Some(sector)]
                        href=(filter_href(filter.category, Some(sector))) {
                        (t.sector_label(sector))
                    }
                }
            }

            @if visible.is_empty() {
                p .no-results { (t.no_results) }
            } @else {
                div .card-grid {
                    @for product in &visible {
                        (product_card(product, t))
                    }
                }
            }
        }
    };

    layout::page(ctx, t.page_title, "/products", content)
}

fn product_card(product: &Product, t: &ProductsStrings) -> Markup {
    html! {
        div .card {
            img src=(product.image) alt=(product.name);
            h5 { (product.name) }
            p { (product.description) }
            a .btn-outline href={ "/products/" (product.id) } { (t.discover_product) }
        }
    }
}
