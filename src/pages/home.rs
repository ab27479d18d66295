use crate::i18n::TranslationSet;
use crate::pages::layout::{self, PageContext};
use maud::{html, Markup};

struct HomeStrings {
    hero_title: &'static str,
    hero_subtitle: &'static str,
    discover_products: &'static str,
    contact_us: &'static str,
    products_title: &'static str,
    products_subtitle: &'static str,
    software_title: &'static str,
    software_subtitle: &'static str,
    featured_products: [&'static str; 4],
    software_features: [&'static str; 4],
    learn_more: &'static str,
}

static EN: HomeStrings = HomeStrings {
    hero_title: "Innovative Textile Machinery & Industry 4.0 Solutions",
    hero_subtitle: "Transforming the textile industry with cutting-edge technology and \
                    sustainable solutions",
    discover_products: "Discover Our Products",
    contact_us: "Contact Us",
    products_title: "Our Products",
    products_subtitle: "Explore our range of high-quality textile machinery",
    software_title: "Software Solutions",
    software_subtitle: "Industry 4.0 technology for the modern manufacturing environment",
    featured_products: ["Fabric Spreaders", "Cutting Tables", "Loading Systems", "Cradles"],
    software_features: [
        "EtherCAT Technology",
        "IoT Dashboards",
        "AI Vision Systems",
        "Remote Diagnostics",
    ],
    learn_more: "Learn More",
};

static STRINGS: TranslationSet<HomeStrings> = TranslationSet::new(&[("en", &EN)]);

pub fn render(ctx: &PageContext) -> Markup {
    let t = STRINGS.resolve(ctx.language);

    let content = html! {
        section .page-header .hero {
            h1 { (t.hero_title) }
            p .lead { (t.hero_subtitle) }
            p {
                a .btn-primary href="/products" { (t.discover_products) }
                " "
                a .btn-outline href="/contact" { (t.contact_us) }
            }
        }

        section .section {
            h2 { (t.products_title) }
            p { (t.products_subtitle) }
            div .card-grid {
                @for name in t.featured_products {
                    div .card {
                        h5 { (name) }
                        a href="/products" { (t.learn_more) }
                    }
                }
            }
        }

        section .section {
            h2 { (t.software_title) }
            p { (t.software_subtitle) }
            div .card-grid {
                @for name in t.software_features {
                    div .card {
                        h5 { (name) }
                        a href="/software" { (t.learn_more) }
                    }
                }
            }
        }
    };

    layout::page(ctx, t.hero_title, "/", content)
}
