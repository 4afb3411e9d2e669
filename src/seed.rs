//! Synthetic product records for populating an empty catalog.

use uuid::Uuid;

use crate::domain::product::NewProduct;

const WORDS: &[&str] = &[
    "amber", "anchor", "basket", "blanket", "bottle", "candle", "canvas", "cedar", "clock",
    "copper", "cotton", "desk", "garden", "glass", "harbor", "jacket", "kettle", "lamp", "leather",
    "linen", "maple", "marble", "mirror", "pillow", "pocket", "quartz", "river", "saddle", "shoe",
    "silver", "stone", "table", "timber", "velvet", "wallet", "willow", "window", "wool",
];

fn word() -> &'static str {
    WORDS[rand::random_range(0..WORDS.len())]
}

fn sentence() -> String {
    let len = rand::random_range(5..10);
    let text = (0..len).map(|_| word()).collect::<Vec<_>>().join(" ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

fn paragraph() -> String {
    let len = rand::random_range(3..6);
    (0..len).map(|_| sentence()).collect::<Vec<_>>().join(" ")
}

/// Generates `count` products with a one-word title, a paragraph of
/// description, a placeholder image URL and a price in `10..100`.
pub fn generate_products(count: usize) -> Vec<NewProduct> {
    (0..count)
        .map(|_| {
            NewProduct::new(
                word(),
                paragraph(),
                format!("http://lorempixel.com/200/200?{}", Uuid::new_v4().simple()),
                rand::random_range(10..100),
            )
        })
        .collect()
}
