//! Pure pricing logic lives here; nothing in this tree touches Dioxus.

pub mod form;
pub mod input;
pub mod pricing;

#[allow(unused_imports)]
pub use form::{Field, PricingForm};
#[allow(unused_imports)]
pub use input::{parse_value, percent_to_fraction, sanitize};
#[allow(unused_imports)]
pub use pricing::{
    compute_pricing, margin_indicator, MarginIndicator, MarginStatus, PricingInputs, PricingResult,
};
