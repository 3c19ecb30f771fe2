//! Price sanitization applied to responses before they reach the caller.

use crate::api::models::{SearchResponse, UIProduct};

/// Strips every character that is not an ASCII digit or a period.
///
/// Backend prices arrive as display text (`"₹48,990"`, `"1,234.50"`); the
/// output contains only `[0-9.]`. Total and idempotent.
pub fn sanitize_price(price: &str) -> String {
    price.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Returns the product with its price sanitized; every other field is
/// untouched.
pub fn normalize_product(mut product: UIProduct) -> UIProduct {
    product.price = sanitize_price(&product.price);
    product
}

/// Returns the response with every result's price sanitized.
///
/// Length and order of `results` are preserved; `summary`, `debug`, and
/// `top_k` pass through as received.
pub fn normalize_response(mut response: SearchResponse) -> SearchResponse {
    response.results = response.results.into_iter().map(normalize_product).collect();
    response
}
