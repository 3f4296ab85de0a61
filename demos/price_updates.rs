//! Price timeline update example

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use pricing_core::{PriceBook, PriceKey, PriceRecordBuilder};

fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid date")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("🏷️  Pricing Core - Price Updates Example\n");

    let milk = PriceKey::new("milk-1l", 1, 10);
    let mut book = PriceBook::new();

    // 1. Regular price for the whole month
    println!("📅 Loading the January price list...");
    book.apply(&[PriceRecordBuilder::for_key(milk.clone())
        .id("regular")
        .period(day(1), day(31))
        .value(BigDecimal::from(120))
        .build()?])?;
    print_timeline(&book, &milk);

    // 2. A promotion in the middle of the month splits the regular price
    println!("💸 Applying a mid-month promotion...");
    book.apply(&[PriceRecordBuilder::for_key(milk.clone())
        .id("promo")
        .period(day(10), day(15))
        .value(BigDecimal::from(99))
        .build()?])?;
    print_timeline(&book, &milk);

    // 3. Extending the promotion with the same value widens it
    println!("➕ Extending the promotion...");
    book.apply(&[PriceRecordBuilder::for_key(milk.clone())
        .id("promo-ext")
        .period(day(14), day(20))
        .value(BigDecimal::from(99))
        .build()?])?;
    print_timeline(&book, &milk);

    // 4. Invalid updates are rejected and the book stays as it was
    println!("🚫 Trying an update with a negative price...");
    let broken = PriceRecordBuilder::for_key(milk.clone())
        .period(day(1), day(2))
        .build()
        .map(|mut price| {
            price.value = BigDecimal::from(-1);
            price
        })?;
    match book.apply(&[broken]) {
        Ok(()) => println!("  unexpectedly accepted"),
        Err(err) => println!("  ✓ Rejected: {}", err),
    }
    println!();

    if let Some(price) = book.price_at(&milk, day(16)) {
        println!("🔎 Price on day 16: {} ({})", price.value, price.id);
    }

    Ok(())
}

fn print_timeline(book: &PriceBook, key: &PriceKey) {
    for price in book.timeline(key) {
        println!(
            "  {} → {}  {:>6}  ({})",
            price.begin.date(),
            price.end.date(),
            price.value,
            price.id
        );
    }
    println!();
}
