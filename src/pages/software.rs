use crate::i18n::TranslationSet;
use crate::pages::layout::{self, PageContext};
use maud::{html, Markup};

struct SoftwareStrings {
    page_title: &'static str,
    page_subtitle: &'static str,
    intro_title: &'static str,
    intro_text_1: &'static str,
    intro_text_2: &'static str,
    solutions: [(&'static str, &'static str); 4],
    features_title: &'static str,
    features: [&'static str; 8],
    benefits_title: &'static str,
    benefits: [(&'static str, &'static str); 4],
    contact_title: &'static str,
    contact_text: &'static str,
    contact_button: &'static str,
}

static EN: SoftwareStrings = SoftwareStrings {
    page_title: "Software Solutions",
    page_subtitle: "Industry 4.0 technology for the modern manufacturing environment",
    intro_title: "Transforming Textile Manufacturing",
    intro_text_1: "At Derown Technology, we are at the forefront of the Industry 4.0 revolution \
                   in textile manufacturing. Our software solutions integrate seamlessly with \
                   our machinery to create a connected, intelligent production environment.",
    intro_text_2: "From real-time monitoring and predictive maintenance to AI-powered quality \
                   control and remote diagnostics, our digital solutions help manufacturers \
                   optimize their operations, reduce downtime, and improve product quality.",
    solutions: [
        (
            "EtherCAT Technology",
            "Our machines utilize EtherCAT (Ethernet for Control Automation Technology) for \
             real-time control and communication. This industrial protocol ensures high-speed, \
             precise synchronization of all machine components, resulting in improved \
             performance and reliability.",
        ),
        (
            "IoT Dashboards",
            "Our IoT dashboards provide real-time visibility into your production metrics and \
             machine performance. Monitor key parameters, track productivity, and identify \
             bottlenecks from anywhere, on any device.",
        ),
        (
            "AI Vision Systems",
            "Our advanced vision systems use artificial intelligence to detect defects, analyze \
             patterns, and ensure consistent quality. These systems can identify issues that \
             might be missed by the human eye, reducing waste and improving product quality.",
        ),
        (
            "Remote Diagnostics",
            "Our remote diagnostic capabilities allow our technicians to troubleshoot and \
             resolve issues without the need for on-site visits. This reduces downtime and \
             ensures your machines are operating at peak efficiency.",
        ),
    ],
    features_title: "Key Features",
    features: [
        "Real-time monitoring and control",
        "Predictive maintenance alerts",
        "Production analytics and reporting",
        "Energy consumption optimization",
        "Quality control automation",
        "Remote software updates",
        "Multi-device accessibility",
        "Secure data transmission and storage",
    ],
    benefits_title: "Benefits",
    benefits: [
        ("Increased Efficiency", "Optimize production processes and reduce waste"),
        (
            "Improved Quality",
            "Ensure consistent product quality through automated monitoring",
        ),
        (
            "Reduced Downtime",
            "Identify and resolve issues before they cause production delays",
        ),
        (
            "Data-Driven Decisions",
            "Make informed decisions based on comprehensive production data",
        ),
    ],
    contact_title: "Ready to Transform Your Production?",
    contact_text: "Contact us today to learn how our software solutions can help you optimize \
                   your textile manufacturing operations.",
    contact_button: "Get in Touch",
};

static STRINGS: TranslationSet<SoftwareStrings> = TranslationSet::new(&[("en", &EN)]);

pub fn render(ctx: &PageContext) -> Markup {
    let t = STRINGS.resolve(ctx.language);

    let content = html! {
        section .page-header {
            h1 { (t.page_title) }
            p .lead { (t.page_subtitle) }
        }

        section .section {
            h2 { (t.intro_title) }
            p { (t.intro_text_1) }
            p { (t.intro_text_2) }
        }

        section .section {
            div .card-grid {
                @for (title, text) in t.solutions {
                    div .card {
                        h5 { (title) }
                        p { (text) }
                    }
                }
            }
        }

        section .section {
            h2 { (t.features_title) }
            ul {
                @for feature in t.features {
                    li { (feature) }
                }
            }
        }

        section .section {
            h2 { (t.benefits_title) }
            div .card-grid {
                @for (title, text) in t.benefits {
                    div .card {
                        h5 { (title) }
                        p { (text) }
                    }
                }
            }
        }

        section .section {
            h2 { (t.contact_title) }
            p { (t.contact_text) }
            a .btn-primary href="/contact" { (t.contact_button) }
        }
    };

    layout::page(ctx, t.page_title, "/software", content)
}
