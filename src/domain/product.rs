use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Product {
    pub id: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Image URL.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    pub price: i32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: i32,
}

impl NewProduct {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        price: i32,
    ) -> Self {
        Self {
            title: title.into().trim().to_string(),
            description: description.into().trim().to_string(),
            image: image.into().trim().to_string(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_trims_text_fields() {
        let product = NewProduct::new(" Lamp ", "Bright\n", " http://img ", 12);
        assert_eq!(product.title, "Lamp");
        assert_eq!(product.description, "Bright");
        assert_eq!(product.image, "http://img");
        assert_eq!(product.price, 12);
    }

    #[test]
    fn empty_text_fields_are_omitted_from_json() {
        let product = Product {
            id: 3,
            title: "Lamp".into(),
            price: 40,
            ..Product::default()
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 3, "title": "Lamp", "price": 40 })
        );
    }
}
