//! Rendering for the static landing pages.
//!
//! Templates are embedded at compile time and registered once in a global
//! environment. The render functions take no input and always produce the
//! same markup.

use minijinja::{context, Environment};
use std::sync::OnceLock;

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.add_template("kids", include_str!("../../../templates/pages/kids.html"))
            .expect("embedded kids template is valid");
        env.add_template(
            "new_arrivals",
            include_str!("../../../templates/pages/new_arrivals.html"),
        )
        .expect("embedded new_arrivals template is valid");
        env.add_template("sale", include_str!("../../../templates/pages/sale.html"))
            .expect("embedded sale template is valid");
        env
    })
}

fn render(name: &str) -> Result<String, minijinja::Error> {
    environment().get_template(name)?.render(context! {})
}

/// Kids' Collection landing page
pub fn kids_collection() -> Result<String, minijinja::Error> {
    render("kids")
}

/// New Arrivals landing page
pub fn new_arrivals() -> Result<String, minijinja::Error> {
    render("new_arrivals")
}

/// Sale & Discounts landing page
pub fn sale() -> Result<String, minijinja::Error> {
    render("sale")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kids_page_contains_heading() {
        let markup = kids_collection().unwrap();
        assert!(markup.contains("Kids' Collection"));
    }

    #[test]
    fn new_arrivals_page_contains_heading() {
        let markup = new_arrivals().unwrap();
        assert!(markup.contains("New Arrivals"));
    }

    #[test]
    fn sale_page_contains_heading() {
        let markup = sale().unwrap();
        assert!(markup.contains("Sale &amp; Discounts"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(kids_collection().unwrap(), kids_collection().unwrap());
    }
}
