//! Output formatting for search results (table, JSON, markdown, CSV).

use crate::api::models::{SearchResponse, UIProduct};
use crate::config::OutputFormat;

/// Formats search results for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a full response, including the backend summary where the
    /// format has room for one.
    pub fn format_response(&self, response: &SearchResponse) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(response)
                .unwrap_or_else(|_| "{}".to_string()),
            OutputFormat::Csv => self.format_products(&response.results),
            OutputFormat::Table | OutputFormat::Markdown => {
                let mut output = self.format_products(&response.results);
                if !response.summary.is_empty() {
                    output.push_str("\n\n");
                    if self.format == OutputFormat::Markdown {
                        output.push_str(&format!("> {}", response.summary));
                    } else {
                        output.push_str(&format!("Summary: {}", response.summary));
                    }
                }
                output
            }
        }
    }

    /// Formats a list of products without the response envelope.
    pub fn format_products(&self, products: &[UIProduct]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    // JSON formatting

    fn json_products(&self, products: &[UIProduct]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_products(&self, products: &[UIProduct]) -> String {
        let price_width = 12;
        let rating_width = 8;
        let reviews_width = 8;
        let source_width = 10;
        let name_width = 50;

        let mut lines = Vec::new();

        // Header
        lines.push(format!(
            "{:<price_width$}  {:<rating_width$}  {:<reviews_width$}  {:<source_width$}  {}",
            "Price", "Rating", "Reviews", "Source", "Name"
        ));
        lines.push(format!(
            "{:-<price_width$}  {:-<rating_width$}  {:-<reviews_width$}  {:-<source_width$}  {:-<name_width$}",
            "", "", "", "", ""
        ));

        // Rows
        for product in products {
            let price_str = if product.price.is_empty() {
                "N/A".to_string()
            } else {
                product.price.clone()
            };

            let rating_str = match product.rating {
                Some(r) => format!("{:.1}", r),
                None => "N/A".to_string(),
            };

            let reviews_str = match product.review_count {
                Some(n) => n.to_string(),
                None => "N/A".to_string(),
            };

            let name = if product.name.len() > name_width {
                format!("{}...", &product.name[..name_width - 3])
            } else {
                product.name.clone()
            };

            lines.push(format!(
                "{:>price_width$}  {:>rating_width$}  {:>reviews_width$}  {:<source_width$}  {}",
                price_str, rating_str, reviews_str, product.source, name
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_products(&self, products: &[UIProduct]) -> String {
        let mut lines = Vec::new();

        lines.push("| Price | Rating | Source | Name |".to_string());
        lines.push("|-------|--------|--------|------|".to_string());

        for product in products {
            let price_str = if product.price.is_empty() {
                "N/A".to_string()
            } else {
                product.price.clone()
            };

            let rating_str = match product.rating {
                Some(r) => format!("{:.1}", r),
                None => "N/A".to_string(),
            };

            let name = if product.name.len() > 40 {
                format!("{}...", &product.name[..37])
            } else {
                product.name.clone()
            };

            lines.push(format!(
                "| {} | {} | {} | [{}]({}) |",
                price_str, rating_str, product.source, name, product.link
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", products.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "name,price,rating,reviews,source,category,link".to_string()
    }

    fn csv_products(&self, products: &[UIProduct]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            let rating =
                product.rating.map(|r| r.to_string()).unwrap_or_default();
            let reviews =
                product.review_count.map(|n| n.to_string()).unwrap_or_default();

            let name = Self::csv_escape(&product.name);
            let category =
                product.category.as_ref().map(|c| Self::csv_escape(c)).unwrap_or_default();

            lines.push(format!(
                "{},{},{},{},{},{},{}",
                name, product.price, rating, reviews, product.source, category, product.link
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
