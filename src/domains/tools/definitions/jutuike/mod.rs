//! Jutuike promotion tools.

mod promo_list;

pub use promo_list::{JutuikePromoListParams, JutuikePromoListTool};
