use soroban_sdk::Address;

use rental_lib::{Item, MarketError, RatingPolicy, MAX_SCORE, RATING_SCALE};

/// Folds one score into the item's running average.
///
/// Only the current leaser may rate, so the window closes when the item is
/// returned. `rating`, `rating_total` and `num_reviews` move together.
pub fn rate(
    item: &mut Item,
    rater: &Address,
    score: u32,
    policy: RatingPolicy,
) -> Result<(), MarketError> {
    if item.current_leaser.as_ref() != Some(rater) {
        return Err(MarketError::Unauthorized);
    }
    let score = accept_score(score, policy)?;

    let total = item
        .rating_total
        .checked_add(score as u64)
        .ok_or(MarketError::InvalidRating)?;
    let count = item
        .num_reviews
        .checked_add(1)
        .ok_or(MarketError::InvalidRating)?;

    item.rating = average_tenths(total, count);
    item.rating_total = total;
    item.num_reviews = count;
    Ok(())
}

fn accept_score(score: u32, policy: RatingPolicy) -> Result<u32, MarketError> {
    if score <= MAX_SCORE {
        return Ok(score);
    }
    match policy {
        RatingPolicy::Reject => Err(MarketError::InvalidRating),
        RatingPolicy::Clamp => Ok(MAX_SCORE),
    }
}

/// `total / count` in tenths of a star, halves rounded up.
pub fn average_tenths(total: u64, count: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    let num = total * RATING_SCALE;
    let den = count as u64;
    ((2 * num + den) / (2 * den)) as u32
}
