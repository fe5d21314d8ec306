//! Product records and the synthetic catalogue shown on the dashboard.

/// A single catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// 1-based, unique within the catalogue
    pub id: u32,
    pub name: String,
    pub subtitle: String,
    /// Drives the check / cross status glyph
    pub ok: bool,
}

impl Product {
    fn numbered(id: u32) -> Self {
        Self {
            id,
            name: format!("Product {}", id),
            subtitle: format!("Product {}", id),
            ok: id % 2 == 0,
        }
    }
}

/// Build the catalogue: `Product 1` through `Product {count}`.
pub fn generate_products(count: usize) -> Vec<Product> {
    (1..=last_id(count)).map(Product::numbered).collect()
}

/// Highest id for a catalogue of `count` products, capped at the id range.
fn last_id(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Indices of products whose name contains `query`, ignoring case.
///
/// A blank query (after trimming) selects the whole catalogue. Matching itself
/// uses the untrimmed query, so `" 25"` only matches names with a space before
/// the digits.
pub fn filter_products(products: &[Product], query: &str) -> Vec<usize> {
    if query.trim().is_empty() {
        return (0..products.len()).collect();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .enumerate()
        .filter(|(_, p)| p.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_numbers_from_one() {
        let products = generate_products(4);
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].name, "Product 1");
        assert_eq!(products[0].subtitle, "Product 1");
        assert!(!products[0].ok);
        assert!(products[1].ok);
        assert_eq!(products[3].name, "Product 4");
    }

    #[test]
    fn test_last_id_saturates() {
        assert_eq!(last_id(0), 0);
        assert_eq!(last_id(25_000), 25_000);
        assert_eq!(last_id(u32::MAX as usize), u32::MAX);
        assert_eq!(last_id(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_generate_empty() {
        assert!(generate_products(0).is_empty());
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let products = generate_products(10);
        assert_eq!(filter_products(&products, ""), (0..10).collect::<Vec<_>>());
        assert_eq!(filter_products(&products, "   "), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let products = generate_products(20);
        let hits = filter_products(&products, "pRoDuCt 1");
        let names: Vec<&str> = hits.iter().map(|&i| products[i].name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Product 1", "Product 10", "Product 11", "Product 12", "Product 13",
                "Product 14", "Product 15", "Product 16", "Product 17", "Product 18",
                "Product 19",
            ]
        );
    }

    #[test]
    fn test_filter_uses_untrimmed_query() {
        let products = generate_products(30);
        // Leading space still has to match literally
        let hits = filter_products(&products, " 25");
        assert_eq!(hits.len(), 1);
        assert_eq!(products[hits[0]].name, "Product 25");

        assert!(filter_products(&products, "25 ").is_empty());
    }

    #[test]
    fn test_filter_no_match() {
        let products = generate_products(100);
        assert!(filter_products(&products, "widget").is_empty());
    }

    #[test]
    fn test_full_catalogue_exact_lookup() {
        let products = generate_products(25_000);
        let hits = filter_products(&products, "25000");
        assert_eq!(hits.len(), 1);
        assert_eq!(products[hits[0]].name, "Product 25000");
    }
}
