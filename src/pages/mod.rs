//! HTML views, one module per page.
//!
//! Each page owns its translation dictionaries: a struct with the page's
//! closed key set, an English instance, and a `TranslationSet` the page
//! resolves against the current language. English is the only bundled
//! language today; the sets are the extension point for the others.

mod company;
mod contact;
mod home;
mod layout;
mod legal;
mod partners;
mod press;
mod product_detail;
mod products;
mod software;

pub use contact::ContactStatus;
pub use layout::PageContext;

pub use company::render as company;
pub use contact::render as contact;
pub use home::render as home;
pub use legal::render_cookie_policy as cookie_policy;
pub use legal::render_privacy_policy as privacy_policy;
pub use partners::render as partners;
pub use press::render as press;
pub use product_detail::render as product_detail;
pub use product_detail::render_not_found as product_not_found;
pub use products::render as products;
pub use software::render as software;
