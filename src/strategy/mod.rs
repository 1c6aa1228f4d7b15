//! Strategy construction and validation.
//!
//! - `validate`: the coverage check every strategy must pass before simulation
//! - `builders`: one-stop / two-stop constructors that validate eagerly

pub mod builders;
pub mod validate;

pub use builders::*;
pub use validate::*;
