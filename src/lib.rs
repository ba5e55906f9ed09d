//! Fixed-capacity vectors with inline storage.
//!
//! [`StaticVector<T, N>`] keeps up to `N` elements inside the value itself:
//! no heap allocation, no reallocation, and the capacity never changes. It is
//! meant for transient, single-owner buffers on hot paths, such as per-frame
//! or per-call scratch lists.
//!
//! Overflowing the capacity or reaching outside the occupied prefix is a
//! caller bug and panics. Checked variants (`try_at`, `push_within_capacity`,
//! `emplace_within_capacity`, `TryFrom`) return errors instead.
//!
//! ```
//! use static_vector::StaticVector;
//!
//! let mut hits: StaticVector<u32, 4> = StaticVector::new();
//! hits.push_back(7);
//! hits.emplace_back(|| 9);
//! assert_eq!(hits, &[7, 9]);
//! ```
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` for the error types and
//!   `std::io::Write` for `StaticVector<u8, N>`. Disable it for `no_std`.
//! - `macros` (default): the [`static_vec!`] constructor macro.
#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod static_vector;

pub use static_vector::*;
