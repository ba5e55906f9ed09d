mod error;
mod vector;

#[cfg(feature = "macros")]
mod static_vector_macros;

pub use error::{CapacityError, StaticVectorError};
pub use vector::{IntoIter, StaticVector};
