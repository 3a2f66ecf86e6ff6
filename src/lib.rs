//! Arithmetic core for a Goldilocks-field proof system: the 64-bit prime
//! field p = 2^64 - 2^32 + 1, its cubic extension, the precomputed
//! primitive-root-of-unity registry, and the radix-2 NTT built on them.
//!
//! Everything is a pure value computation over immutable inputs; the only
//! shared state is the read-only root table. Higher layers (hashing,
//! Merkle authentication, serialization, polynomial algebra) consume these
//! types but live elsewhere.

pub mod error;
pub mod fields;
pub mod polynomials;

pub use error::FieldError;
pub use fields::field::FieldElement;
pub use fields::field3::Field3;
