//! Fetch the seller profile and the supplier statistics reports.
//!
//! Run with: WILDBERRIES_TOKEN=... cargo run --example fetch_reports

use std::time::Duration;

use wildberries_rs::{ClientConfig, WildberriesClient};

#[tokio::main]
async fn main() -> wildberries_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = WildberriesClient::new(
        ClientConfig::from_env().with_timeout(Duration::from_secs(60)),
    )?;

    let seller = client.income().seller_info().await?;
    println!("Seller: {} ({})", seller.data.name, seller.data.trade_mark);

    let supplier = client.supplier();

    let incomes = supplier.incomes().await?;
    println!("\nIncomes (HTTP {}): {}", incomes.response.status(), incomes.data.len());
    for income in incomes.data.iter().take(5) {
        println!(
            "  #{} {} x{} -> {} [{}]",
            income.income_id,
            income.supplier_article,
            income.quantity,
            income.warehouse_name,
            income.status
        );
    }

    let stocks = supplier.stocks().await?;
    println!("\nStock rows: {}", stocks.data.len());
    for stock in stocks.data.iter().take(5) {
        println!(
            "  {} @ {}: {} available, {} in transit",
            stock.supplier_article,
            stock.warehouse_name,
            stock.quantity,
            stock.in_way_to_client + stock.in_way_from_client
        );
    }

    match supplier.orders().await {
        Ok(orders) => println!("\nOrders: {}", orders.data.len()),
        Err(err) => match err.response() {
            Some(response) => println!("\nOrders failed with HTTP {}: {}", response.status(), response.text()),
            None => println!("\nOrders failed: {err}"),
        },
    }

    let sales = supplier.sales().await?;
    let total: f64 = sales.data.iter().map(|s| s.for_pay).sum();
    println!("Sales: {} (for pay: {:.2})", sales.data.len(), total);

    println!("\nDone!");
    Ok(())
}
