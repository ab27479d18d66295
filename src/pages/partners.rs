use crate::i18n::TranslationSet;
use crate::pages::layout::{self, PageContext};
use crate::partners::{PartnerCategory, PartnerQuery, Region};
use maud::{html, Markup};

struct PartnersStrings {
    page_title: &'static str,
    page_subtitle: &'static str,
    search_placeholder: &'static str,
    search_button: &'static str,
    all_categories: &'static str,
    manufacturers: &'static str,
    distributors: &'static str,
    technology: &'static str,
    research: &'static str,
    all_regions: &'static str,
    europe: &'static str,
    north_america: &'static str,
    asia: &'static str,
    south_america: &'static str,
    africa: &'static str,
    oceania: &'static str,
    no_results: &'static str,
    visit_website: &'static str,
}

static EN: PartnersStrings = PartnersStrings {
    page_title: "Our Partners",
    page_subtitle: "Collaborating with industry leaders to drive innovation",
    search_placeholder: "Search partners...",
    search_button: "Search",
    all_categories: "All Categories",
    manufacturers: "Manufacturers",
    distributors: "Distributors",
    technology: "Technology Partners",
    research: "Research Institutions",
    all_regions: "All Regions",
    europe: "Europe",
    north_america: "North America",
    asia: "Asia",
    south_america: "South America",
    africa: "Africa",
    oceania: "Oceania",
    no_results: "No partners found matching your search criteria.",
    visit_website: "Visit Website",
};

static STRINGS: TranslationSet<PartnersStrings> = TranslationSet::new(&[("en", &EN)]);

impl PartnersStrings {
    fn category_label(&self, category: PartnerCategory) -> &'static str {
        match category {
            PartnerCategory::Manufacturers => self.manufacturers,
            PartnerCategory::Distributors => self.distributors,
            PartnerCategory::Technology => self.technology,
            PartnerCategory::Research => self.research,
        }
    }

    fn region_label(&self, region: Region) -> &'static str {
        match region {
            Region::Europe => self.europe,
            Region::NorthAmerica => self.north_america,
            Region::Asia => self.asia,
            Region::SouthAmerica => self.south_america,
            Region::Africa => self.africa,
            Region::Oceania => self.oceania,
        }
    }
}

fn filter_href(
    query: &PartnerQuery,
    category: Option<PartnerCategory>,
    region: Option<Region>,
) -> String {
    let params = serde_urlencoded::to_string([
        ("q", query.search.as_str()),
        ("category", category.map(PartnerCategory::key).unwrap_or("all")),
        ("region", region.map(Region::key).unwrap_or("all")),
    ])
    .expect("query string serializes");
    format!("/partners?{params}")
}

pub fn render(ctx: &PageContext, query: &PartnerQuery) -> Markup {
    let t = STRINGS.resolve(ctx.language);
    let visible = query.apply();

    let content = html! {
        section .page-header {
            h1 { (t.page_title) }
            p .lead { (t.page_subtitle) }
        }

        section .section {
            form .search method="get" action="/partners" {
                input type="text" name="q" value=(query.search)
                    placeholder=(t.search_placeholder);
                @if let Some(category) = query.category {
                    input type="hidden" name="category" value=(category.key());
                }
                @if let Some(region) = query.region {
                    input type="hidden" name="region" value=(region.key());
                }
                button type="submit" { (t.search_button) }
            }

            nav .filters {
                a .selected[query.category.is_none()]
                    href=(filter_href(query, None, query.region)) { (t.all_categories) }
                @for category in PartnerCategory::ALL {
                    a .selected[query.category == Some(category)]
                        href=(filter_href(query, Some(category), query.region)) {
                        (t.category_label(category))
                    }
                }
            }

            nav .filters {
                a .selected[query.region.is_none()]
                    href=(filter_href(query, query.category, None)) { (t.all_regions) }
                @for region in Region::ALL {
                    a .selected[query.region == Some(region)]
                        href=(filter_href(query, query.category, Some(region))) {
                        (t.region_label(region))
                    }
                }
            }

            @if visible.is_empty() {
                p .no-results { (t.no_results) }
            } @else {
                div .card-grid {
                    @for partner in &visible {
                        div .card {
                            img src=(partner.logo) alt=(partner.name);
                            h5 { (partner.name) }
                            p { (partner.description) }
                            small {
                                (t.category_label(partner.category))
                                " · "
                                (t.region_label(partner.region))
                            }
                            p {
                                a href=(partner.website) target="_blank" rel="noopener noreferrer" {
                                    (t.visit_website)
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    layout::page(ctx, t.page_title, "/partners", content)
}
