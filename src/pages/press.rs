use crate::i18n::TranslationSet;
use crate::pages::layout::{self, PageContext};
use crate::press::{PressCategory, PressQuery, LOAD_MORE_STEP};
use maud::{html, Markup};

struct PressStrings {
    page_title: &'static str,
    page_subtitle: &'static str,
    search_placeholder: &'static str,
    search_button: &'static str,
    all_categories: &'static str,
    company_news: &'static str,
    product_launches: &'static str,
    events: &'static str,
    awards: &'static str,
    partnerships: &'static str,
    read_more: &'static str,
    no_results: &'static str,
    load_more: &'static str,
}

static EN: PressStrings = PressStrings {
    page_title: "Press Releases",
    page_subtitle: "Latest news and announcements from Derown Technology",
    search_placeholder: "Search press releases...",
    search_button: "Search",
    all_categories: "All Categories",
    company_news: "Company News",
    product_launches: "Product Launches",
    events: "Events & Exhibitions",
    awards: "Awards & Recognition",
    partnerships: "Partnerships",
    read_more: "Read More",
    no_results: "No press releases found matching your search criteria.",
    load_more: "Load More",
};

static STRINGS: TranslationSet<PressStrings> = TranslationSet::new(&[("en", &EN)]);

impl PressStrings {
    fn category_label(&self, category: PressCategory) -> &'static str {
        match category {
            PressCategory::CompanyNews => self.company_news,
            PressCategory::ProductLaunches => self.product_launches,
            PressCategory::Events => self.events,
            PressCategory::Awards => self.awards,
            PressCategory::Partnerships => self.partnerships,
        }
    }
}

/// Category links carry the search term but never a visible count, so
/// switching categories starts back at the first page.
fn category_href(query: &PressQuery, category: Option<PressCategory>) -> String {
    let key = category.map(PressCategory::key).unwrap_or("all");
    let params = serde_urlencoded::to_string([("q", query.search.as_str()), ("category", key)])
        .expect("query string serializes");
    format!("/press?{params}")
}

fn load_more_href(query: &PressQuery) -> String {
    let key = query.category.map(PressCategory::key).unwrap_or("all");
    let visible = (query.visible() + LOAD_MORE_STEP).to_string();
    let params = serde_urlencoded::to_string([
        ("q", query.search.as_str()),
        ("category", key),
        ("visible", visible.as_str()),
    ])
    .expect("query string serializes");
    format!("/press?{params}")
}

pub fn render(ctx: &PageContext, query: &PressQuery) -> Markup {
    let t = STRINGS.resolve(ctx.language);
    let visible = query.visible_results();

    let content = html! {
        section .page-header {
            h1 { (t.page_title) }
            p .lead { (t.page_subtitle) }
        }

        section .section {
            form .search method="get" action="/press" {
                input type="text" name="q" value=(query.search)
                    placeholder=(t.search_placeholder);
                @if let Some(category) = query.category {
                    input type="hidden" name="category" value=(category.key());
                }
                button type="submit" { (t.search_button) }
            }

            nav .filters {
                a .selected[query.category.is_none()]
                    href=(category_href(query, None)) { (t.all_categories) }
                @for category in PressCategory::ALL {
                    a .selected[query.category == Some(category)]
                        href=(category_href(query, Some(category))) {
                        (t.category_label(category))
                    }
                }
            }

            @if visible.is_empty() {
                p .no-results { (t.no_results) }
            } @else {
                div .card-grid {
                    @for release in &visible {
                        div .card {
                            small .date { (release.formatted_date(ctx.language)) }
                            h5 { (release.title) }
                            p { (release.excerpt) }
                            a href=(release.url) { (t.read_more) " →" }
                        }
                    }
                }
                @if query.has_more() {
                    p .load-more {
                        a .btn-outline href=(load_more_href(query)) { (t.load_more) }
                    }
                }
            }
        }
    };

    layout::page(ctx, t.page_title, "/press", content)
}
