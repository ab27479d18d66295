use crate::i18n::TranslationSet;
use crate::pages::layout::{self, PageContext};
use maud::{html, Markup};

struct CompanyStrings {
    page_title: &'static str,
    about_title: &'static str,
    about_text_1: &'static str,
    about_text_2: &'static str,
    history_title: &'static str,
    history_text: &'static str,
    values_title: &'static str,
    values: [(&'static str, &'static str); 4],
    social_title: &'static str,
    social_text: &'static str,
    initiatives_title: &'static str,
    initiatives: [&'static str; 4],
}

static EN: CompanyStrings = CompanyStrings {
    page_title: "Our Company",
    about_title: "About Derown Technology",
    about_text_1: "Derown Technology is a leading provider of innovative textile machinery and \
                   Industry 4.0 solutions. With decades of experience in the textile industry, \
                   we have established ourselves as pioneers in developing cutting-edge \
                   technology that enhances productivity, quality, and sustainability.",
    about_text_2: "Our commitment to excellence and continuous innovation has made us a trusted \
                   partner for textile manufacturers worldwide. We work closely with our clients \
                   to understand their unique challenges and provide tailored solutions that \
                   meet their specific needs.",
    history_title: "Our History",
    history_text: "Founded in 1985, Derown Technology began as a small engineering workshop \
                   specializing in textile machinery repairs. Over the years, we have grown \
                   into a global company with a comprehensive range of products and services. \
                   Our journey has been marked by significant technological breakthroughs and \
                   a steadfast commitment to quality and customer satisfaction.",
    values_title: "Our Values",
    values: [
        (
            "Sustainability",
            "We are committed to developing environmentally friendly solutions that reduce \
             waste and energy consumption.",
        ),
        (
            "Innovation",
            "We continuously invest in research and development to stay at the forefront of \
             technological advancements.",
        ),
        (
            "Partnership",
            "We build long-term relationships with our clients based on trust, transparency, \
             and mutual success.",
        ),
        (
            "People",
            "We value our team members and foster a culture of collaboration, diversity, and \
             continuous learning.",
        ),
    ],
    social_title: "Social Responsibility",
    social_text: "At Derown Technology, we believe in giving back to the communities where we \
                  operate. We support various social initiatives focused on education, \
                  environmental conservation, and community development.",
    initiatives_title: "Our Initiatives",
    initiatives: [
        "Educational programs for underprivileged children",
        "Reforestation projects in areas affected by deforestation",
        "Clean water initiatives in developing countries",
        "Support for local artisans and traditional textile crafts",
    ],
};

static STRINGS: TranslationSet<CompanyStrings> = TranslationSet::new(&[("en", &EN)]);

pub fn render(ctx: &PageContext) -> Markup {
    let t = STRINGS.resolve(ctx.language);

    let content = html! {
        section .page-header {
            h1 { (t.page_title) }
        }

        section .section {
            h2 { (t.about_title) }
            p { (t.about_text_1) }
            p { (t.about_text_2) }
        }

        section .section {
            h2 { (t.history_title) }
            p { (t.history_text) }
        }

        section .section {
            h2 { (t.values_title) }
            div .card-grid {
                @for (title, text) in t.values {
                    div .card {
                        h5 { (title) }
                        p { (text) }
                    }
                }
            }
        }

        section .section {
            h2 { (t.social_title) }
            p { (t.social_text) }
            h3 { (t.initiatives_title) }
            ul {
                @for initiative in t.initiatives {
                    li { (initiative) }
                }
            }
        }
    };

    layout::page(ctx, t.page_title, "/company", content)
}
