use crate::i18n::TranslationSet;
use crate::pages::layout::{self, PageContext};
use crate::pages::products as products_page;
use crate::products::{self, Product};
use maud::{html, Markup};

struct DetailStrings {
    back_to_products: &'static str,
    specifications: &'static str,
    features: &'static str,
    applications: &'static str,
    request_info: &'static str,
    related_products: &'static str,
    not_found: &'static str,
    not_found_message: &'static str,
}

static EN: DetailStrings = DetailStrings {
    back_to_products: "Back to Products",
    specifications: "Specifications",
    features: "Features",
    applications: "Applications",
    request_info: "Request Information",
    related_products: "Related Products",
    not_found: "Product not found",
    not_found_message: "The product you are looking for does not exist or has been removed.",
};

static STRINGS: TranslationSet<DetailStrings> = TranslationSet::new(&[("en", &EN)]);

pub fn render(ctx: &PageContext, product: &Product) -> Markup {
    let t = STRINGS.resolve(ctx.language);
    let catalog_t = products_page::strings(ctx);
    let related = products::related(product);

    let content = html! {
        section .page-header {
            p { a href="/products" { "← " (t.back_to_products) } }
            h1 { (product.name) }
            p .lead { (catalog_t.category_label(product.category)) }
        }

        section .section {
            img src=(product.image) alt=(product.name);
            @if !product.gallery.is_empty() {
                div .gallery {
                    @for image in product.gallery {
                        img src=(image) alt=(product.name);
                    }
                }
            }

            p { (product.long_description.unwrap_or(product.description)) }
            p { a .btn-primary href="/contact" { (t.request_info) } }
        }

        @if !product.specifications.is_empty() {
            section .section {
                h4 { (t.specifications) }
                table .specifications {
                    tbody {
                        @for spec in product.specifications {
                            tr {
                                th { (spec.name) }
                                td { (spec.value) }
                            }
                        }
                    }
                }
            }
        }

        @if !product.features.is_empty() {
            section .section {
                h4 { (t.features) }
                ul {
                    @for feature in product.features {
                        li { (feature) }
                    }
                }
            }
        }

        @if !product.applications.is_empty() {
            section .section {
                h4 { (t.applications) }
                ul {
                    @for application in product.applications {
                        li { (application) }
                    }
                }
            }
        }

        @if !related.is_empty() {
            section .section {
                h4 { (t.related_products) }
                div .card-grid {
                    @for related_product in &related {
                        div .card {
                            h5 { (related_product.name) }
                            p { (related_product.description) }
                            a href={ "/products/" (related_product.id) } {
                                (catalog_t.discover_product)
                            }
                        }
                    }
                }
            }
        }
    };

    layout::page(ctx, product.name, "/products", content)
}

/// Shown for product ids that are not in the catalog.
pub fn render_not_found(ctx: &PageContext) -> Markup {
    let t = STRINGS.resolve(ctx.language);

    let content = html! {
        section .page-header {
            h1 { (t.not_found) }
            p .lead { (t.not_found_message) }
            p { a .btn-primary href="/products" { (t.back_to_products) } }
        }
    };

    layout::page(ctx, t.not_found, "/products", content)
}
