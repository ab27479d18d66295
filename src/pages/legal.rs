//! Privacy-policy and cookie-policy pages.

use crate::i18n::TranslationSet;
use crate::pages::layout::{self, PageContext};
use maud::{html, Markup};

struct PrivacyStrings {
    page_title: &'static str,
    last_updated: &'static str,
    introduction: &'static str,
    intro_text: &'static str,
    information_we_collect: &'static str,
    information_text: &'static str,
    info_types: [&'static str; 5],
    how_we_use: &'static str,
    how_we_use_text: &'static str,
    use_cases: [&'static str; 3],
    data_security: &'static str,
    data_security_text: &'static str,
    your_rights: &'static str,
    your_rights_text: &'static str,
    rights: [&'static str; 7],
    contact_us: &'static str,
    contact_text: &'static str,
    company_name: &'static str,
    company_address: &'static str,
    company_email: &'static str,
    company_phone: &'static str,
}

static PRIVACY_EN: PrivacyStrings = PrivacyStrings {
    page_title: "Privacy Policy",
    last_updated: "Last Updated: January 1, 2023",
    introduction: "Introduction",
    intro_text: "At Derown Technology, we respect your privacy and are committed to protecting \
                 your personal data. This privacy policy will inform you about how we look \
                 after your personal data when you visit our website and tell you about your \
                 privacy rights and how the law protects you.",
    information_we_collect: "Information We Collect",
    information_text: "We may collect, use, store and transfer different kinds of personal data \
                       about you which we have grouped together as follows:",
    info_types: [
        "Identity Data includes first name, last name, username or similar identifier.",
        "Contact Data includes billing address, delivery address, email address and telephone \
         numbers.",
        "Technical Data includes internet protocol (IP) address, your login data, browser type \
         and version, time zone setting and location, browser plug-in types and versions, \
         operating system and platform, and other technology on the devices you use to access \
         this website.",
        "Usage Data includes information about how you use our website, products and services.",
        "Marketing and Communications Data includes your preferences in receiving marketing \
         from us and our third parties and your communication preferences.",
    ],
    how_we_use: "How We Use Your Information",
    how_we_use_text: "We will only use your personal data when the law allows us to. Most \
                      commonly, we will use your personal data in the following circumstances:",
    use_cases: [
        "Where we need to perform the contract we are about to enter into or have entered into \
         with you.",
        "Where it is necessary for our legitimate interests (or those of a third party) and \
         your interests and fundamental rights do not override those interests.",
        "Where we need to comply with a legal obligation.",
    ],
    data_security: "Data Security",
    data_security_text: "We have put in place appropriate security measures to prevent your \
                         personal data from being accidentally lost, used or accessed in an \
                         unauthorized way, altered or disclosed. In addition, we limit access \
                         to your personal data to those employees, agents, contractors and \
                         other third parties who have a business need to know.",
    your_rights: "Your Rights",
    your_rights_text: "Under certain circumstances, you have rights under data protection laws \
                       in relation to your personal data, including the right to:",
    rights: [
        "Request access to your personal data.",
        "Request correction of your personal data.",
        "Request erasure of your personal data.",
        "Object to processing of your personal data.",
        "Request restriction of processing your personal data.",
        "Request transfer of your personal data.",
        "Right to withdraw consent.",
    ],
    contact_us: "Contact Us",
    contact_text: "If you have any questions about this privacy policy or our privacy \
                   practices, please contact us at:",
    company_name: "Derown Technology",
    company_address: "123 Technology Park, Industrial Zone, 12345 City, Country",
    company_email: "privacy@derowntech.com",
    company_phone: "+1 (123) 456-7890",
};

static PRIVACY: TranslationSet<PrivacyStrings> = TranslationSet::new(&[("en", &PRIVACY_EN)]);

struct CookieStrings {
    page_title: &'static str,
    last_updated: &'static str,
    introduction: &'static str,
    intro_text: &'static str,
    what_are_cookies: &'static str,
    what_are_cookies_text: &'static str,
    why_we_use: &'static str,
    why_we_use_text: &'static str,
    types_of_cookies: &'static str,
    cookie_types: [&'static str; 4],
    how_to_manage: &'static str,
    how_to_manage_text: &'static str,
    updates: &'static str,
    updates_text: &'static str,
    questions: &'static str,
    questions_text: &'static str,
    contact_email: &'static str,
    reset_consent: &'static str,
    reset_consent_text: &'static str,
}

static COOKIE_EN: CookieStrings = CookieStrings {
    page_title: "Cookie Policy",
    last_updated: "Last Updated: January 1, 2023",
    introduction: "Introduction",
    intro_text: "This Cookie Policy explains how Derown Technology uses cookies and similar \
                 technologies to recognize you when you visit our website. It explains what \
                 these technologies are and why we use them, as well as your rights to control \
                 our use of them.",
    what_are_cookies: "What Are Cookies",
    what_are_cookies_text: "Cookies are small data files that are placed on your computer or \
                            mobile device when you visit a website. Cookies are widely used by \
                            website owners in order to make their websites work, or to work \
                            more efficiently, as well as to provide reporting information.",
    why_we_use: "Why We Use Cookies",
    why_we_use_text: "We use first-party and third-party cookies for several reasons. Some \
                      cookies are required for technical reasons in order for our website to \
                      operate, and we refer to these as \"essential\" or \"strictly necessary\" \
                      cookies. Other cookies also enable us to track and target the interests \
                      of our users to enhance the experience on our website. Third parties \
                      serve cookies through our website for advertising, analytics and other \
                      purposes.",
    types_of_cookies: "Types of Cookies We Use",
    cookie_types: [
        "Essential Cookies: These cookies are strictly necessary to provide you with services \
         available through our website and to use some of its features, such as access to \
         secure areas.",
        "Performance Cookies: These cookies are used to enhance the performance and \
         functionality of our website but are non-essential to their use. However, without \
         these cookies, certain functionality may become unavailable.",
        "Analytics Cookies: These cookies collect information that is used either in aggregate \
         form to help us understand how our website is being used or how effective our \
         marketing campaigns are, or to help us customize our website for you.",
        "Marketing Cookies: These cookies are used to make advertising messages more relevant \
         to you. They perform functions like preventing the same ad from continuously \
         reappearing, ensuring that ads are properly displayed, and in some cases selecting \
         advertisements that are based on your interests.",
    ],
    how_to_manage: "How to Manage Cookies",
    how_to_manage_text: "You can set your browser to refuse all or some browser cookies, or to \
                         alert you when websites set or access cookies. If you disable or \
                         refuse cookies, please note that some parts of this website may become \
                         inaccessible or not function properly.",
    updates: "Updates to This Cookie Policy",
    updates_text: "We may update this Cookie Policy from time to time in order to reflect, for \
                   example, changes to the cookies we use or for other operational, legal or \
                   regulatory reasons. Please therefore re-visit this Cookie Policy regularly \
                   to stay informed about our use of cookies and related technologies.",
    questions: "Questions and Contact Information",
    questions_text: "If you have any questions about our use of cookies or other technologies, \
                     please email us at:",
    contact_email: "cookies@derowntech.com",
    reset_consent: "Reset cookie preferences",
    reset_consent_text: "You can withdraw or change your cookie decision at any time. The \
                         consent banner will be shown again on your next page.",
};

static COOKIE: TranslationSet<CookieStrings> = TranslationSet::new(&[("en", &COOKIE_EN)]);

pub fn render_privacy_policy(ctx: &PageContext) -> Markup {
    let t = PRIVACY.resolve(ctx.language);

    let content = html! {
        section .page-header {
            h1 { (t.page_title) }
            p .lead { (t.last_updated) }
        }

        section .section {
            h2 { (t.introduction) }
            p { (t.intro_text) }

            h2 { (t.information_we_collect) }
            p { (t.information_text) }
            ul {
                @for item in t.info_types {
                    li { (item) }
                }
            }

            h2 { (t.how_we_use) }
            p { (t.how_we_use_text) }
            ul {
                @for item in t.use_cases {
                    li { (item) }
                }
            }

            h2 { (t.data_security) }
            p { (t.data_security_text) }

            h2 { (t.your_rights) }
            p { (t.your_rights_text) }
            ul {
                @for item in t.rights {
                    li { (item) }
                }
            }

            h2 { (t.contact_us) }
            p { (t.contact_text) }
            address {
                p { (t.company_name) }
                p { (t.company_address) }
                p { (t.company_email) }
                p { (t.company_phone) }
            }
        }
    };

    layout::page(ctx, t.page_title, "/privacy-policy", content)
}

pub fn render_cookie_policy(ctx: &PageContext) -> Markup {
    let t = COOKIE.resolve(ctx.language);

    let content = html! {
        section .page-header {
            h1 { (t.page_title) }
            p .lead { (t.last_updated) }
        }

        section .section {
            h2 { (t.introduction) }
            p { (t.intro_text) }

            h2 { (t.what_are_cookies) }
            p { (t.what_are_cookies_text) }

            h2 { (t.why_we_use) }
            p { (t.why_we_use_text) }

            h2 { (t.types_of_cookies) }
            ul {
                @for item in t.cookie_types {
                    li { (item) }
                }
            }

            h2 { (t.how_to_manage) }
            p { (t.how_to_manage_text) }
            p { (t.reset_consent_text) }
            form method="post" action="/consent/reset" {
                input type="hidden" name="redirect" value="/cookie-policy";
                button .btn-outline type="submit" { (t.reset_consent) }
            }

            h2 { (t.updates) }
            p { (t.updates_text) }

            h2 { (t.questions) }
            p { (t.questions_text) }
            p { a href={ "mailto:" (t.contact_email) } { (t.contact_email) } }
        }
    };

    layout::page(ctx, t.page_title, "/cookie-policy", content)
}
