//! Catalog loading from the products JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use storefront_core::catalog::{Catalog, Product};

/// Read and parse a products file.
///
/// The file holds a JSON array of product records. Duplicate ids are
/// rejected so cart and lookup by id stay unambiguous.
pub fn load(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    let catalog = parse(&content)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))?;

    tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse catalog JSON.
pub fn parse(json: &str) -> Result<Catalog> {
    let products: Vec<Product> = serde_json::from_str(json).context("Invalid product JSON")?;
    Ok(Catalog::try_new(products)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"[
        {"id": 1, "name": "Bateria 13 placas", "price": 320.0, "discount": 10,
         "release_date": "15/03/2023", "platforms": ["BATERIA"], "genres": ["BATERIAS LIVIANOS"]},
        {"id": 2, "name": "Aceite 20W50", "price": 45.5,
         "release_date": "2023-04-01", "platforms": ["ACEITE"]}
    ]"#;

    #[test]
    fn test_parse_sample() {
        let catalog = parse(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find(ProductId::new(1)).unwrap().has_discount());
        assert!(catalog.get(ProductId::new(2)).unwrap().genres.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 1.0, "release_date": "2023-01-01"},
            {"id": 1, "name": "B", "price": 2.0, "release_date": "2023-01-02"}
        ]"#;
        assert!(parse(json).is_err());
    }

    #[test]
    fn test_oversized_discount_does_not_block_catalog() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 1.0, "discount": 300, "release_date": "2023-01-01"},
            {"id": 2, "name": "B", "price": 2.0, "discount": 7.5, "release_date": "2023-01-02"}
        ]"#;
        let catalog = parse(json).unwrap();
        assert_eq!(catalog.find(ProductId::new(1)).unwrap().discount.percent(), 100);
        assert_eq!(catalog.find(ProductId::new(2)).unwrap().discount.percent(), 8);
    }

    #[test]
    fn test_bad_date_rejected() {
        let json = r#"[{"id": 1, "name": "A", "price": 1.0, "release_date": "someday"}]"#;
        assert!(parse(json).is_err());
    }

    #[test]
    fn test_bundled_sample_catalog() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/products.json");
        let catalog = load(&path).unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.by_platform("BATERIA").len(), 4);
        assert!(catalog.all_genres().contains("CVT"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, SAMPLE).unwrap();

        assert_eq!(load(&path).unwrap().len(), 2);

        let err = load(&dir.path().join("missing.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read catalog"));
    }
}
