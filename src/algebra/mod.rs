//! Verse-set algebra over [`Pericope`](crate::core::pericope::Pericope) values.
//!
//! - [`set_ops`]: union, intersection, subtraction, complement, normalization,
//!   expansion and contraction. Every result is rebuilt through
//!   `Pericope::from_addresses`, so it is always in canonical form.
//! - [`math`]: containment, adjacency and ordering predicates, gaps, continuity
//!   runs, density and per-chapter counts.
//!
//! Operations on pericopes from different books never fail. They fall back to a
//! fixed default instead: union and subtract return the left operand, intersection
//! returns an empty pericope and every predicate answers `false`.

pub mod math;
pub mod set_ops;
