//! Test utilities and helpers for English auction tests

use odra::casper_types::U512;
use odra::host::{Deployer, HostEnv};
use odra::prelude::*;

use english_auction::{EnglishAuction, EnglishAuctionHostRef, EnglishAuctionInitArgs};

/// Constants for testing
pub const CSPR: u64 = 1_000_000_000; // 1 CSPR in motes (9 decimals)
pub const MINUTE_MS: u64 = 60 * 1000;
pub const ITEM_NAME: &str = "Test Item";
pub const DURATION_MINUTES: u64 = 5;
pub const AUCTION_DURATION_MS: u64 = DURATION_MINUTES * MINUTE_MS;

/// Amount of whole CSPR in motes
pub fn cspr(amount: u64) -> U512 {
    U512::from(amount * CSPR)
}

/// Deploy an auction from `seller`
pub fn deploy_auction(
    env: &HostEnv,
    seller: Address,
    item_name: &str,
    start_price: U512,
    duration_minutes: u64,
) -> EnglishAuctionHostRef {
    env.set_caller(seller);
    EnglishAuction::deploy(
        env,
        EnglishAuctionInitArgs {
            item_name: item_name.to_string(),
            start_price,
            duration_minutes,
        },
    )
}

/// Fresh "Test Item" auction: 1 CSPR start price, 5 minutes
///
/// Returns (env, auction, seller, bidder1, bidder2)
pub fn setup() -> (HostEnv, EnglishAuctionHostRef, Address, Address, Address) {
    let env = odra_test::env();

    let seller = env.get_account(0);
    let bidder1 = env.get_account(1);
    let bidder2 = env.get_account(2);

    let auction = deploy_auction(&env, seller, ITEM_NAME, cspr(1), DURATION_MINUTES);

    (env, auction, seller, bidder1, bidder2)
}

/// Move block time past the auction deadline
pub fn advance_past_deadline(env: &HostEnv) {
    env.advance_block_time(AUCTION_DURATION_MS + 1);
}
