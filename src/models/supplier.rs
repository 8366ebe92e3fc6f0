//! Supplier statistics report records.
//!
//! Field names and keys follow the statistics API one to one. Absent keys
//! fall back to the field type's default.

use serde::{Deserialize, Serialize};

/// A supply (income) delivered to a warehouse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Income {
    /// Supply number
    pub income_id: i64,
    /// Supplier's document number
    pub number: String,
    /// Date the supply was registered
    pub date: String,
    /// Date and time of the last update
    pub last_change_date: String,
    /// Supplier's article
    pub supplier_article: String,
    /// Size
    pub tech_size: String,
    /// Barcode
    pub barcode: String,
    /// Number of items
    pub quantity: i64,
    /// Total price of the supply
    pub total_price: i64,
    /// Date the supply was accepted
    pub date_close: String,
    /// Receiving warehouse
    pub warehouse_name: String,
    /// Wildberries article
    pub nm_id: i64,
    /// Acceptance status
    pub status: String,
}

/// Stock held at a warehouse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stock {
    /// Date and time of the last update
    pub last_change_date: String,
    /// Warehouse name
    pub warehouse_name: String,
    /// Supplier's article
    pub supplier_article: String,
    /// Wildberries article
    pub nm_id: i64,
    /// Barcode
    pub barcode: String,
    /// Items available for sale
    pub quantity: i64,
    /// Items on the way to customers
    pub in_way_to_client: i64,
    /// Items being returned to the warehouse
    pub in_way_from_client: i64,
    /// Total items, including those in transit
    pub quantity_full: i64,
    /// Category
    pub category: String,
    /// Subject
    pub subject: String,
    /// Brand
    pub brand: String,
    /// Size
    pub tech_size: String,
    /// Price
    #[serde(rename = "Price")]
    pub price: i64,
    /// Discount percent
    #[serde(rename = "Discount")]
    pub discount: i64,
    /// Whether the item is in a supply contract
    pub is_supply: bool,
    /// Whether the item is sold on commission
    pub is_realization: bool,
    /// Sorting center code
    #[serde(rename = "SCCode")]
    pub sc_code: String,
}

/// A customer order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    /// Date and time of the order
    pub date: String,
    /// Date and time of the last update
    pub last_change_date: String,
    /// Shipping warehouse
    pub warehouse_name: String,
    /// Warehouse type
    pub warehouse_type: String,
    /// Country
    pub country_name: String,
    /// Federal district
    pub oblast_okrug_name: String,
    /// Region
    pub region_name: String,
    /// Supplier's article
    pub supplier_article: String,
    /// Wildberries article
    pub nm_id: i64,
    /// Barcode
    pub barcode: String,
    /// Category
    pub category: String,
    /// Subject
    pub subject: String,
    /// Brand
    pub brand: String,
    /// Size
    pub tech_size: String,
    /// Supply number
    #[serde(rename = "incomeID")]
    pub income_id: i64,
    /// Whether the item is in a supply contract
    pub is_supply: bool,
    /// Whether the item is sold on commission
    pub is_realization: bool,
    /// Price before discounts
    pub total_price: i64,
    /// Supplier discount percent
    pub discount_percent: i64,
    /// Marketplace discount percent
    pub spp: i64,
    /// Price paid by the customer
    pub finished_price: i64,
    /// Price with the supplier discount
    pub price_with_disc: i64,
    /// Whether the order was cancelled
    pub is_cancel: bool,
    /// Cancellation date
    pub cancel_date: String,
    /// Order type
    pub order_type: String,
    /// Sticker id
    pub sticker: String,
    /// Cart number
    pub g_number: String,
    /// Unique order id
    pub srid: String,
}

/// A sale or a return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sale {
    /// Date and time of the sale
    pub date: String,
    /// Date and time of the last update
    pub last_change_date: String,
    /// Shipping warehouse
    pub warehouse_name: String,
    /// Warehouse type
    pub warehouse_type: String,
    /// Country
    pub country_name: String,
    /// Federal district
    pub oblast_okrug_name: String,
    /// Region
    pub region_name: String,
    /// Supplier's article
    pub supplier_article: String,
    /// Wildberries article
    pub nm_id: i64,
    /// Barcode
    pub barcode: String,
    /// Category
    pub category: String,
    /// Subject
    pub subject: String,
    /// Brand
    pub brand: String,
    /// Size
    pub tech_size: String,
    /// Supply number
    #[serde(rename = "incomeID")]
    pub income_id: i64,
    /// Whether the item is in a supply contract
    pub is_supply: bool,
    /// Whether the item is sold on commission
    pub is_realization: bool,
    /// Price before discounts
    pub total_price: i64,
    /// Supplier discount percent
    pub discount_percent: i64,
    /// Marketplace discount percent
    pub spp: i64,
    /// Amount paid by the customer
    pub payment_sale_amount: i64,
    /// Amount due to the supplier
    pub for_pay: f64,
    /// Price paid by the customer
    pub finished_price: i64,
    /// Price with the supplier discount
    pub price_with_disc: i64,
    /// Sale id; prefix `S` for sales, `R` for returns
    #[serde(rename = "saleID")]
    pub sale_id: String,
    /// Order type
    pub order_type: String,
    /// Sticker id
    pub sticker: String,
    /// Cart number
    pub g_number: String,
    /// Unique order id
    pub srid: String,
}
