//! Shared document chrome: header with navigation and language switcher,
//! footer, and the cookie-consent banner.

use crate::i18n::{Language, LanguageRegistry, TranslationSet};
use crate::prefs::ConsentState;
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Everything a page needs from the shared providers to render.
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    pub language: Language,
    pub consent: ConsentState,
}

struct HeaderStrings {
    home: &'static str,
    company: &'static str,
    products: &'static str,
    software: &'static str,
    press: &'static str,
    partners: &'static str,
    contact: &'static str,
}

static HEADER_EN: HeaderStrings = HeaderStrings {
    home: "Home",
    company: "Company",
    products: "Products",
    software: "Software",
    press: "Press Releases",
    partners: "Partners",
    contact: "Contact",
};

static HEADER: TranslationSet<HeaderStrings> = TranslationSet::new(&[("en", &HEADER_EN)]);

struct FooterStrings {
    quick_links: &'static str,
    contact_us: &'static str,
    privacy_policy: &'static str,
    cookie_policy: &'static str,
    copyright: &'static str,
}

static FOOTER_EN: FooterStrings = FooterStrings {
    quick_links: "Quick Links",
    contact_us: "Contact Us",
    privacy_policy: "Privacy Policy",
    cookie_policy: "Cookie Policy",
    copyright: "© 2023 Derown Technology. All rights reserved.",
};

static FOOTER: TranslationSet<FooterStrings> = TranslationSet::new(&[("en", &FOOTER_EN)]);

struct BannerStrings {
    title: &'static str,
    message: &'static str,
    accept: &'static str,
    learn_more: &'static str,
}

static BANNER_EN: BannerStrings = BannerStrings {
    title: "Cookie Consent",
    message: "We use cookies to enhance your experience on our website. By continuing to \
              browse, you agree to our use of cookies.",
    accept: "Accept",
    learn_more: "Learn More",
};

static BANNER: TranslationSet<BannerStrings> = TranslationSet::new(&[("en", &BANNER_EN)]);

/// Wrap page content in the full HTML document.
pub fn page(ctx: &PageContext, title: &str, current_path: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(ctx.language.code()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " — Derown Technology" }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                (header(ctx, current_path))
                main .main-content {
                    (content)
                }
                (footer(ctx))
                @if ctx.consent == ConsentState::Unset {
                    (consent_banner(ctx, current_path))
                }
            }
        }
    }
}

fn header(ctx: &PageContext, current_path: &str) -> Markup {
    let t = HEADER.resolve(ctx.language);
    let nav_items = [
        ("/", t.home),
        ("/company", t.company),
        ("/products", t.products),
        ("/software", t.software),
        ("/press", t.press),
        ("/partners", t.partners),
        ("/contact", t.contact),
    ];

    html! {
        header .site-header {
            a .brand href="/" { "Derown Technology" }
            nav .site-nav {
                ul {
                    @for (path, label) in nav_items {
                        li {
                            a .active[current_path == path] href=(path) {
                                (label)
                            }
                        }
                    }
                }
            }
            (language_switcher(ctx, current_path))
        }
    }
}

/// The language dropdown. Each entry is a small POST form so switching
/// works without any client scripting; the server redirects back.
fn language_switcher(ctx: &PageContext, current_path: &str) -> Markup {
    html! {
        details .language-switcher {
            summary { (ctx.language.code().to_uppercase()) }
            ul {
                @for lang in LanguageRegistry::get().list() {
                    li {
                        form method="post" action="/language" {
                            input type="hidden" name="code" value=(lang.code);
                            input type="hidden" name="redirect" value=(current_path);
                            button .active[lang.code == ctx.language.code()] type="submit" {
                                (lang.name)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn footer(ctx: &PageContext) -> Markup {
    let t = FOOTER.resolve(ctx.language);
    let nav = HEADER.resolve(ctx.language);

    html! {
        footer .site-footer {
            div .footer-links {
                h5 { (t.quick_links) }
                ul {
                    li { a href="/" { (nav.home) } }
                    li { a href="/company" { (nav.company) } }
                    li { a href="/products" { (nav.products) } }
                    li { a href="/software" { (nav.software) } }
                    li { a href="/press" { (nav.press) } }
                    li { a href="/partners" { (nav.partners) } }
                }
            }
            div .footer-contact {
                h5 { (t.contact_us) }
                p { "123 Technology Park, Industrial Zone, 12345 City, Country" }
                p { "+1 (123) 456-7890" }
                p { "info@derowntech.com" }
            }
            div .footer-legal {
                a href="/privacy-policy" { (t.privacy_policy) }
                a href="/cookie-policy" { (t.cookie_policy) }
                p .copyright { (t.copyright) }
            }
        }
    }
}

fn consent_banner(ctx: &PageContext, current_path: &str) -> Markup {
    let t = BANNER.resolve(ctx.language);

    html! {
        div .cookie-consent {
            div {
                h5 { (t.title) }
                p { (t.message) }
            }
            div .cookie-consent-actions {
                a .btn-outline href="/cookie-policy" { (t.learn_more) }
                form method="post" action="/consent/accept" {
                    input type="hidden" name="redirect" value=(current_path);
                    button .btn-accept type="submit" { (t.accept) }
                }
            }
        }
    }
}

static STYLESHEET: &str = r#"
:root { --primary: #1a4d7c; --accent: #3f7601; --light: #f8f9fa; --dark: #212529; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: var(--dark); }
a { color: var(--primary); }
.site-header { display: flex; align-items: center; gap: 2rem; padding: 1rem 2rem;
  border-bottom: 1px solid #e3e6e8; }
.brand { font-weight: 700; font-size: 1.25rem; text-decoration: none; }
.site-nav ul { display: flex; gap: 1.25rem; list-style: none; margin: 0; padding: 0; }
.site-nav a { text-decoration: none; }
.site-nav a.active { color: var(--accent); font-weight: 600; }
.language-switcher { margin-left: auto; position: relative; }
.language-switcher summary { cursor: pointer; }
.language-switcher ul { position: absolute; right: 0; list-style: none; margin: 0;
  padding: 0.5rem; background: #fff; border: 1px solid #e3e6e8; }
.language-switcher button { background: none; border: 0; cursor: pointer; padding: 0.25rem 0.5rem; }
.language-switcher button.active { font-weight: 700; }
.main-content { min-height: 60vh; }
.page-header { background: var(--light); padding: 3rem 2rem; margin-bottom: 2rem; }
.page-header h1 { color: var(--primary); margin: 0 0 0.5rem; }
.section { padding: 0 2rem 2rem; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
  gap: 1.5rem; }
.card { border: 1px solid #e3e6e8; border-radius: 0.5rem; padding: 1.25rem; }
.filters { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; }
.filters a { padding: 0.25rem 0.75rem; border: 1px solid var(--primary);
  border-radius: 1rem; text-decoration: none; }
.filters a.selected { background: var(--primary); color: #fff; }
.field-error { color: #b02a37; font-size: 0.875rem; }
.alert-success { background: #d1e7dd; padding: 0.75rem 1rem; border-radius: 0.25rem; }
.alert-error { background: #f8d7da; padding: 0.75rem 1rem; border-radius: 0.25rem; }
.honeypot-field { display: none; }
.site-footer { display: flex; flex-wrap: wrap; gap: 3rem; padding: 2rem;
  background: var(--dark); color: #fff; margin-top: 3rem; }
.site-footer a { color: #cfd8dc; }
.site-footer ul { list-style: none; padding: 0; }
.cookie-consent { position: fixed; inset: auto 0 0 0; display: flex; flex-wrap: wrap;
  justify-content: space-between; align-items: center; gap: 1rem; padding: 1rem 2rem;
  background: var(--dark); color: #fff; }
.cookie-consent-actions { display: flex; gap: 0.75rem; align-items: center; }
.cookie-consent .btn-outline { color: #fff; border: 1px solid #fff; padding: 0.4rem 1rem;
  border-radius: 0.25rem; text-decoration: none; }
.cookie-consent .btn-accept { background: var(--accent); border: 0; color: #fff;
  padding: 0.5rem 1.25rem; border-radius: 0.25rem; cursor: pointer; }
"#;
