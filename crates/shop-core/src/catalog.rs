//! # Product Catalog
//!
//! Read-only product records for the storefront.
//! Products are loaded from `config/products.toml`.

use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Prices are whole Norwegian kroner; conversion to øre happens only
/// when building the payment processor's request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Unit price in whole NOK (never negative)
    pub price: i64,

    /// Image URL
    pub image: String,

    /// Category label (e.g. "Klassisk", "Premium")
    pub category: String,

    /// Whether this product is available for purchase
    #[serde(default = "default_true")]
    pub in_stock: bool,

    /// Weight label (e.g. "500g")
    pub weight: String,

    /// Ordered list of ingredient names
    #[serde(default)]
    pub ingredients: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Create a product with the required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: String::new(),
            in_stock: true,
            weight: String::new(),
            ingredients: Vec::new(),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Builder: set image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into();
        self
    }

    /// Builder: set category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder: set weight label
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Builder: set stock flag
    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }
}

/// Product catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Add a product to the catalog
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Find a product by ID
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Get all in-stock products
    pub fn in_stock_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.in_stock)
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Get number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let product = Product::new("1", "Klassisk Sauerkraut", 89)
            .with_description("Tradisjonell sauerkraut")
            .with_category("Klassisk")
            .with_weight("500g");

        assert_eq!(product.id, "1");
        assert_eq!(product.price, 89);
        assert_eq!(product.weight, "500g");
        assert!(product.in_stock);
    }

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = Catalog::new();
        catalog.add(Product::new("1", "Klassisk", 89));
        catalog.add(Product::new("2", "Krydret", 99).with_stock(false));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("1").unwrap().name, "Klassisk");
        assert!(catalog.get("missing").is_none());
        assert_eq!(catalog.in_stock_products().count(), 1);
    }

    #[test]
    fn test_catalog_from_toml() {
        let toml_str = r#"
            [[products]]
            id = "1"
            name = "Klassisk Sauerkraut"
            description = "Tradisjonell sauerkraut"
            price = 89
            image = "https://example.com/kraut.jpg"
            category = "Klassisk"
            inStock = true
            weight = "500g"
            ingredients = ["Norsk hvitløk", "Havsalt"]
        "#;

        let catalog = Catalog::from_toml(toml_str).unwrap();
        assert_eq!(catalog.len(), 1);

        let product = catalog.get("1").unwrap();
        assert_eq!(product.price, 89);
        assert_eq!(product.ingredients.len(), 2);
        assert_eq!(product.ingredients[0], "Norsk hvitløk");
    }

    #[test]
    fn test_product_json_field_names() {
        let product = Product::new("1", "Klassisk", 89);
        let json = serde_json::to_value(&product).unwrap();

        // The storefront JSON uses camelCase
        assert!(json.get("inStock").is_some());
        assert!(json.get("in_stock").is_none());
    }
}
