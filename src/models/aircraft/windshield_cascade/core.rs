//! Windshield sizing cascade.
//!
//! The cascade couples three disciplines in a fixed feed-forward chain:
//! windshield size drives heat load, heat load drives cooling-system
//! weight, and weight plus size drive fuel burn. Every relation is affine,
//! so the chain is solved by direct substitution in stage order; there is
//! no branching and nothing to iterate on.

mod cascade;
mod cooling;
mod performance;
mod result;
mod sweep;
mod thermal;

pub use cascade::Cascade;
pub use cooling::Cooling;
pub use performance::Performance;
pub use result::CascadeResult;
pub use sweep::{SweepGrid, SweepGridError, SweepTable};
pub use thermal::Thermal;
