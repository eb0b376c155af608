//! Bid on a deployed English auction
//!
//! Places a bid from the livenet caller, then prints the auction state and
//! the caller's pending returns.
//!
//! Run with: cargo run --bin bid_livenet --features livenet --release

use std::str::FromStr;

use odra::casper_types::U512;
use odra::host::HostRefLoader;
use odra::prelude::Address;
use english_auction::EnglishAuction;

fn main() {
    let env = odra_casper_livenet_env::env();
    let caller = env.caller();

    println!("=== Bidding on Deployed Auction ===\n");
    println!("Caller: {}", caller.to_string());

    let auction_address = std::env::var("AUCTION_ADDRESS")
        .expect("AUCTION_ADDRESS env var must be set");
    let bid_motes = std::env::var("BID_AMOUNT")
        .expect("BID_AMOUNT env var must be set (in motes)");

    let auction_addr = Address::from_str(&auction_address).expect("Invalid EnglishAuction address");
    let bid_amount = U512::from_dec_str(&bid_motes).expect("Invalid BID_AMOUNT");

    let auction = EnglishAuction::load(&env, auction_addr);

    // Current state
    println!("\n--- Auction Details ---");
    let details = auction.get_auction_details();
    println!("Item: {}", details.item_name);
    println!("Start price: {}", details.start_price);
    println!("Highest bid: {}", details.highest_bid);
    println!("Highest bidder: {:?}", details.highest_bidder);
    println!("Ended: {}", details.ended);

    // Place bid
    println!("\n--- Bidding {} motes ---", bid_amount);
    env.set_gas(10_000_000_000u64); // 10 CSPR gas

    match auction.with_tokens(bid_amount).try_bid() {
        Ok(()) => println!("SUCCESS! Bid accepted"),
        Err(err) => println!("Bid rejected: {:?}", err),
    }

    println!("\n--- After Bidding ---");
    println!("Highest bid: {}", auction.get_highest_bid());
    println!("Highest bidder: {:?}", auction.get_highest_bidder());
    println!("My pending returns: {}", auction.get_pending_returns(caller));
}
