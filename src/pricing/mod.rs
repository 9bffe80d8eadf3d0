//! Gold-price calculator: lenient field parsing, live reformatting and the
//! gold/wage/profit/tax/final derivation.

mod engine;
mod formula;
mod surface;

pub use engine::{PricingConfig, PricingEngine, normalize_field};
pub use formula::{
    DEFAULT_TAX_RATE, DerivedPrice, DerivedPriceDisplay, PriceField, PriceInputs, compute,
    compute_with_tax_rate,
};
pub use surface::{FormSurface, MemoryFormSurface, OutputTarget};
