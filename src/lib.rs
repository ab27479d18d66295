//! Corporate website for Derown Technology.
//!
//! A single-process axum application serving the company profile, product
//! catalog, press releases, partner directory, contact form, and legal
//! pages. The only durable state is the visitor's two preferences — UI
//! language and cookie consent — kept in a JSON key-value store. All
//! catalog content is fixed mock data.

pub mod analytics;
pub mod config;
pub mod contact;
pub mod i18n;
pub mod pages;
pub mod partners;
pub mod prefs;
pub mod press;
pub mod products;
pub mod server;
pub mod storage;
