use crate::error::Error;
use crate::types::Post;

pub struct TipCalculator;

impl TipCalculator {
    /// Fold one tip into a post's counters
    ///
    /// Both counters only grow; a failed add leaves the post untouched.
    pub fn apply_tip(post: &mut Post, amount: i128) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        let tip_count = post.tip_count.checked_add(1).ok_or(Error::Overflow)?;
        let total_tips = post.total_tips.checked_add(amount).ok_or(Error::Overflow)?;

        post.tip_count = tip_count;
        post.total_tips = total_tips;
        Ok(())
    }

    /// Average tip, rounded down
    ///
    /// A zero count is a caller error, not an average of zero. Totals are
    /// never negative, so truncating division is the floor.
    pub fn average_tip(total_tips: i128, tip_count: u64) -> Result<i128, Error> {
        if total_tips < 0 {
            return Err(Error::InvalidAmount);
        }
        if tip_count == 0 {
            return Err(Error::DivisionByZero);
        }
        total_tips
            .checked_div(tip_count as i128)
            .ok_or(Error::Overflow)
    }
}
