//! Livenet deployment script for the English auction
//!
//! Deploys one EnglishAuction contract; the deployer becomes the seller.
//!
//! Run with: cargo run --bin deploy_livenet --features livenet --release

use odra::casper_types::U512;
use odra::host::Deployer;
use odra::prelude::Addressable;
use english_auction::{EnglishAuction, EnglishAuctionInitArgs};

const DEFAULT_ITEM_NAME: &str = "Rare Painting";
const DEFAULT_START_PRICE: u64 = 100_000_000; // 0.1 CSPR in motes
const DEFAULT_DURATION_MINUTES: u64 = 3;

fn main() {
    // Load the Casper livenet environment
    let env = odra_casper_livenet_env::env();

    // Caller is the deployer and seller
    let seller = env.caller();
    println!("Seller address: {}", seller.to_string());

    // Auction terms from environment, falling back to the demo listing
    let item_name = std::env::var("AUCTION_ITEM_NAME")
        .unwrap_or_else(|_| DEFAULT_ITEM_NAME.to_string());
    let start_price = match std::env::var("AUCTION_START_PRICE") {
        Ok(motes) => U512::from_dec_str(&motes).expect("Invalid AUCTION_START_PRICE"),
        Err(_) => U512::from(DEFAULT_START_PRICE),
    };
    let duration_minutes = match std::env::var("AUCTION_DURATION_MINUTES") {
        Ok(minutes) => minutes.parse::<u64>().expect("Invalid AUCTION_DURATION_MINUTES"),
        Err(_) => DEFAULT_DURATION_MINUTES,
    };
    println!("Item: {}", item_name);
    println!("Start price: {} motes", start_price);
    println!("Duration: {} minutes", duration_minutes);

    println!("\n=== Deploying EnglishAuction ===");
    env.set_gas(300_000_000_000u64); // 300 CSPR gas

    let init_args = EnglishAuctionInitArgs {
        item_name,
        start_price,
        duration_minutes,
    };

    let auction = EnglishAuction::deploy(&env, init_args);
    let auction_address = auction.address();
    println!("EnglishAuction deployed at: {}", auction_address.to_string());

    // Verify deployment
    let details = auction.get_auction_details();
    println!("\n=== Deployment Summary ===");
    println!("EnglishAuction: {}", auction_address.to_string());
    println!("Seller: {}", auction.get_seller().to_string());
    println!("End time (ms): {}", details.end_time);
    println!("\nDeployment complete!");
}
