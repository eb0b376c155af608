//! Bid tests for the English auction

mod test_utils;

use odra::casper_types::U512;
use odra::host::HostRef;
use odra::prelude::*;

use english_auction::errors::Error;
use english_auction::events::NewBid;

use test_utils::*;

#[test]
fn test_first_bid() {
    // Bidder bids 2 CSPR → highest bid 2, highest bidder recorded
    let (env, mut auction, _seller, bidder1, _bidder2) = setup();

    env.set_caller(bidder1);
    auction.with_tokens(cspr(2)).bid();

    assert_eq!(auction.get_highest_bid(), cspr(2), "Highest bid is incorrect");
    assert_eq!(auction.get_highest_bidder(), Some(bidder1), "Highest bidder is incorrect");
}

#[test]
fn test_higher_bid_replaces_leader() {
    let (env, mut auction, _seller, bidder1, bidder2) = setup();

    env.set_caller(bidder1);
    auction.with_tokens(cspr(2)).bid();

    env.set_caller(bidder2);
    auction.with_tokens(cspr(3)).bid();

    assert_eq!(auction.get_highest_bid(), cspr(3), "Highest bid not updated correctly");
    assert_eq!(auction.get_highest_bidder(), Some(bidder2), "Highest bidder not updated correctly");
    assert_eq!(
        auction.get_pending_returns(bidder1),
        cspr(2),
        "Outbid bidder should be owed their bid"
    );
}

#[test]
fn test_lower_bid_rejected() {
    // Lower bid → revert "There already is a higher or equal bid", state unchanged
    let (env, mut auction, _seller, bidder1, bidder2) = setup();

    env.set_caller(bidder1);
    auction.with_tokens(cspr(2)).bid();

    env.set_caller(bidder2);
    let result = auction.with_tokens(cspr(1)).try_bid();

    assert!(result.is_err(), "Lower bid should fail");
    assert_eq!(
        result.unwrap_err(),
        Error::BidTooLow.into(),
        "Should revert with BidTooLow error"
    );
    assert_eq!(auction.get_highest_bid(), cspr(2));
    assert_eq!(auction.get_highest_bidder(), Some(bidder1));
    assert_eq!(auction.get_pending_returns(bidder1), U512::zero());
}

#[test]
fn test_equal_bid_rejected() {
    let (env, mut auction, _seller, bidder1, bidder2) = setup();

    env.set_caller(bidder1);
    auction.with_tokens(cspr(2)).bid();

    env.set_caller(bidder2);
    let result = auction.with_tokens(cspr(2)).try_bid();

    assert_eq!(result.unwrap_err(), Error::BidTooLow.into());
    assert_eq!(auction.get_highest_bidder(), Some(bidder1));
}

#[test]
fn test_first_bid_below_start_price() {
    let (env, mut auction, _seller, bidder1, _bidder2) = setup();

    env.set_caller(bidder1);
    let result = auction.with_tokens(U512::from(CSPR / 2)).try_bid();

    assert_eq!(result.unwrap_err(), Error::BidTooLow.into());
    assert_eq!(auction.get_highest_bid(), U512::zero());
    assert_eq!(auction.get_highest_bidder(), None);
}

#[test]
fn test_first_bid_at_start_price() {
    let (env, mut auction, _seller, bidder1, _bidder2) = setup();

    env.set_caller(bidder1);
    auction.with_tokens(cspr(1)).bid();

    assert_eq!(auction.get_highest_bid(), cspr(1));
}

#[test]
fn test_seller_cannot_bid() {
    let (env, mut auction, seller, _bidder1, _bidder2) = setup();

    env.set_caller(seller);
    let result = auction.with_tokens(cspr(2)).try_bid();

    assert_eq!(
        result.unwrap_err(),
        Error::SellerCannotBid.into(),
        "Seller should not be able to bid on their own auction"
    );
}

#[test]
fn test_bid_after_deadline() {
    // Bid exactly at end time → revert "AuctionExpired"
    let (env, mut auction, _seller, bidder1, _bidder2) = setup();

    env.advance_block_time(AUCTION_DURATION_MS);

    env.set_caller(bidder1);
    let result = auction.with_tokens(cspr(2)).try_bid();

    assert_eq!(
        result.unwrap_err(),
        Error::AuctionExpired.into(),
        "Should revert with AuctionExpired error"
    );
}

#[test]
fn test_bid_after_close() {
    let (env, mut auction, seller, bidder1, _bidder2) = setup();

    advance_past_deadline(&env);
    env.set_caller(seller);
    auction.end_auction();

    env.set_caller(bidder1);
    let result = auction.with_tokens(cspr(2)).try_bid();

    assert_eq!(
        result.unwrap_err(),
        Error::AuctionClosed.into(),
        "Should revert with AuctionClosed error"
    );
}

#[test]
fn test_rejected_bid_keeps_funds_with_bidder() {
    let (env, mut auction, _seller, bidder1, bidder2) = setup();

    env.set_caller(bidder1);
    auction.with_tokens(cspr(2)).bid();

    env.set_caller(bidder2);
    let _ = auction.with_tokens(cspr(1)).try_bid();

    assert_eq!(
        env.balance_of(&auction.address()),
        cspr(2),
        "Contract should only hold the accepted bid"
    );
}

#[test]
fn test_bids_are_escrowed() {
    let (env, mut auction, _seller, bidder1, bidder2) = setup();

    env.set_caller(bidder1);
    auction.with_tokens(cspr(2)).bid();
    env.set_caller(bidder2);
    auction.with_tokens(cspr(3)).bid();

    // Highest bid plus pending returns
    assert_eq!(env.balance_of(&auction.address()), cspr(5));
}

#[test]
fn test_bid_emits_event() {
    let (env, mut auction, _seller, bidder1, _bidder2) = setup();

    env.set_caller(bidder1);
    auction.with_tokens(cspr(2)).bid();

    let expected_event = NewBid {
        bidder: bidder1,
        amount: cspr(2),
    };
    assert!(
        env.emitted_event(&auction, expected_event),
        "Should emit NewBid event"
    );
}
