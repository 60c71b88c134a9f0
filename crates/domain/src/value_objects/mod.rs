//! Value objects describing lottery variants.

mod lottery;
mod number_range;
mod rules;

pub use lottery::{Lottery, LotteryKey, Prize};
pub use number_range::{NumberRange, PickBounds};
pub use rules::LotteryRules;
