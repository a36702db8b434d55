//! # Table Rendering
//!
//! Products, cart entries and orders rendered with `tabled`.
//!
//! ```text
//! ╭────────────┬──────────┬───────┬──────────╮
//! │ Product ID │ Name     │ Price │ Quantity │
//! ├────────────┼──────────┼───────┼──────────┤
//! │ P002       │ Notebook │ 50.00 │ 2        │
//! ╰────────────┴──────────┴───────┴──────────╯
//! ```

use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use shopfront_core::{CartEntry, Order, Product};

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Product ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Product ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Quantity")]
    quantity: i64,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        ProductRow {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price().to_string(),
        }
    }
}

impl From<&CartEntry> for EntryRow {
    fn from(entry: &CartEntry) -> Self {
        EntryRow {
            id: entry.product.id.clone(),
            name: entry.product.name.clone(),
            price: entry.product.price().to_string(),
            quantity: entry.quantity,
        }
    }
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());
    table.to_string()
}

/// Renders the catalog in catalog order.
pub fn product_table(products: &[Product]) -> String {
    render(products.iter().map(ProductRow::from).collect())
}

/// Renders cart or order lines in insertion order.
pub fn entry_table(entries: &[CartEntry]) -> String {
    render(entries.iter().map(EntryRow::from).collect())
}

/// Renders one order: header fields followed by its line items.
pub fn order_summary(order: &Order) -> String {
    format!(
        "Order ID: {}\nPlaced At: {}\nTotal Amount: {}\nPayment Method: {}\nOrder Details:\n{}",
        order.id,
        order.placed_at.format("%Y-%m-%d %H:%M:%S UTC"),
        order.total(),
        order.method_label(),
        entry_table(&order.items),
    )
}
