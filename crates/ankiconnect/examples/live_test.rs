//! Live test against a running Anki instance.
//!
//! Run with: cargo run --example live_test
//!
//! This test is SAFE - it only reads existing data and creates/deletes
//! a temporary test deck for write operations.
//!
//! Set `RUST_LOG=ankiconnect=debug` to see each request.

use ankiconnect::AnkiClient;
use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;

const TEST_DECK: &str = "AnkiconnectTest";

#[tokio::main]
async fn main() -> ankiconnect::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = AnkiClient::new()?;

    println!("=== AnkiConnect Live Test ===\n");

    // ========== DECKS (READ-ONLY) ==========
    println!("--- Deck Actions ---");

    let decks = client.decks().get_all().await?;
    println!("[OK] Decks: {:?}", decks);

    if let Some(first) = decks.first() {
        let stats = client.decks().stats(&[first.as_str()]).await?;
        for stat in stats.values() {
            println!(
                "[OK] {}: {} new, {} learning, {} review",
                stat.name, stat.new_count, stat.learn_count, stat.review_count
            );
        }

        let since = Utc::now() - Duration::days(30);
        let reviews = client.decks().get_reviews_after(first, since).await?;
        println!("[OK] {} reviews in {} over the last 30 days", reviews.len(), first);
    }

    // ========== CARDS (READ-ONLY) ==========
    println!("\n--- Card Actions ---");

    let cards = client.cards().get("is:due").await?;
    println!("[OK] {} cards due", cards.len());
    for card in cards.iter().take(5) {
        println!(
            "     card {} in {} (interval {}, reps {})",
            card.card_id, card.deck_name, card.interval, card.reps
        );
    }

    match client.cards().get_reviews("rated:1").await {
        Ok(history) => println!("[OK] Review history for {} cards", history.len()),
        Err(e) => println!("[SKIP] getReviewsOfCards unavailable: {}", e),
    }

    // ========== DECKS (WRITE) ==========
    println!("\n--- Deck Write Actions ---");

    client.decks().create(TEST_DECK).await?;
    println!("[OK] Created {}", TEST_DECK);

    client.decks().delete(TEST_DECK).await?;
    println!("[OK] Deleted {}", TEST_DECK);

    println!("\n=== Done ===");
    Ok(())
}
