use crate::contact::{ContactForm, FieldError, ValidationErrors};
use crate::i18n::TranslationSet;
use crate::pages::layout::{self, PageContext};
use maud::{html, Markup};

/// Outcome banner shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    None,
    Success,
    Error,
}

struct ContactStrings {
    page_title: &'static str,
    page_subtitle: &'static str,
    form_title: &'static str,
    name_label: &'static str,
    name_placeholder: &'static str,
    email_label: &'static str,
    email_placeholder: &'static str,
    phone_label: &'static str,
    phone_placeholder: &'static str,
    company_label: &'static str,
    company_placeholder: &'static str,
    subject_label: &'static str,
    subject_placeholder: &'static str,
    message_label: &'static str,
    message_placeholder: &'static str,
    submit_button: &'static str,
    contact_info_title: &'static str,
    address: &'static str,
    phone: &'static str,
    email: &'static str,
    hours_title: &'static str,
    hours_weekday: &'static str,
    hours_weekend: &'static str,
    hours_closed: &'static str,
    form_success: &'static str,
    form_error: &'static str,
    required_field: &'static str,
    invalid_email: &'static str,
    invalid_phone: &'static str,
}

static EN: ContactStrings = ContactStrings {
    page_title: "Contact Us",
    page_subtitle: "We would love to hear from you",
    form_title: "Send us a message",
    name_label: "Your Name",
    name_placeholder: "Enter your full name",
    email_label: "Email Address",
    email_placeholder: "Enter your email address",
    phone_label: "Phone Number",
    phone_placeholder: "Enter your phone number",
    company_label: "Company",
    company_placeholder: "Enter your company name",
    subject_label: "Subject",
    subject_placeholder: "What is this regarding?",
    message_label: "Message",
    message_placeholder: "How can we help you?",
    submit_button: "Send Message",
    contact_info_title: "Contact Information",
    address: "123 Technology Park, Industrial Zone, 12345 City, Country",
    phone: "+1 (123) 456-7890",
    email: "info@derowntech.com",
    hours_title: "Business Hours",
    hours_weekday: "Monday - Friday: 9:00 AM - 6:00 PM",
    hours_weekend: "Saturday: 10:00 AM - 2:00 PM",
    hours_closed: "Sunday: Closed",
    form_success: "Your message has been sent successfully. We will get back to you soon!",
    form_error: "There was an error sending your message. Please try again later.",
    required_field: "This field is required",
    invalid_email: "Please enter a valid email address",
    invalid_phone: "Please enter a valid phone number",
};

static STRINGS: TranslationSet<ContactStrings> = TranslationSet::new(&[("en", &EN)]);

impl ContactStrings {
    fn error_message(&self, error: FieldError) -> &'static str {
        match error {
            FieldError::Required => self.required_field,
            FieldError::InvalidEmail => self.invalid_email,
            FieldError::InvalidPhone => self.invalid_phone,
        }
    }
}

pub fn render(
    ctx: &PageContext,
    form: &ContactForm,
    errors: &ValidationErrors,
    status: ContactStatus,
) -> Markup {
    let t = STRINGS.resolve(ctx.language);

    let field_error = |error: Option<FieldError>| -> Markup {
        html! {
            @if let Some(error) = error {
                div .field-error { (t.error_message(error)) }
            }
        }
    };

    let content = html! {
        section .page-header {
            h1 { (t.page_title) }
            p .lead { (t.page_subtitle) }
        }

        section .section .contact-grid {
            div .contact-form {
                h2 { (t.form_title) }

                @if status == ContactStatus::Success {
                    div .alert-success role="alert" { (t.form_success) }
                }
                @if status == ContactStatus::Error {
                    div .alert-error role="alert" { (t.form_error) }
                }

                form method="post" action="/contact" {
                    // Decoy field, invisible to humans.
                    div .honeypot-field aria-hidden="true" {
                        input type="text" name="honeypot" value=(form.honeypot)
                            tabindex="-1" autocomplete="off";
                    }

                    div .form-field {
                        label for="name" { (t.name_label) " *" }
                        input type="text" id="name" name="name" value=(form.name)
                            placeholder=(t.name_placeholder);
                        (field_error(errors.name))
                    }

                    div .form-field {
                        label for="email" { (t.email_label) " *" }
                        input type="email" id="email" name="email" value=(form.email)
                            placeholder=(t.email_placeholder);
                        (field_error(errors.email))
                    }

                    div .form-field {
                        label for="phone" { (t.phone_label) }
                        input type="tel" id="phone" name="phone" value=(form.phone)
                            placeholder=(t.phone_placeholder);
                        (field_error(errors.phone))
                    }

                    div .form-field {
                        label for="company" { (t.company_label) }
                        input type="text" id="company" name="company" value=(form.company)
                            placeholder=(t.company_placeholder);
                    }

                    div .form-field {
                        label for="subject" { (t.subject_label) }
                        input type="text" id="subject" name="subject" value=(form.subject)
                            placeholder=(t.subject_placeholder);
                    }

                    div .form-field {
                        label for="message" { (t.message_label) " *" }
                        textarea id="message" name="message" rows="5"
                            placeholder=(t.message_placeholder) {
                            (form.message)
                        }
                        (field_error(errors.message))
                    }

                    button .btn-primary type="submit" { (t.submit_button) }
                }
            }

            aside .contact-info {
                h3 { (t.contact_info_title) }
                p { (t.address) }
                p { (t.phone) }
                p { (t.email) }

                h5 { (t.hours_title) }
                p { (t.hours_weekday) }
                p { (t.hours_weekend) }
                p { (t.hours_closed) }
            }
        }
    };

    layout::page(ctx, t.page_title, "/contact", content)
}
