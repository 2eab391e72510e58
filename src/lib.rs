//! Two-pointer scan algorithms over integer sequences.
//!
//! This crate provides the classic closing-cursor ("pincer") algorithms: in-place
//! reversal, sorted pair-sum search, zero relocation, and triplet-sum search.
//! Each one walks a slice with two cursors instead of nested loops, which is what
//! keeps the linear ones at O(N) and the triplet search at O(N²).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  two_sum.rs  │◀────│ three_sum.rs │
//! │ (Pair,      │     │ (pair search │     │ (fix + pair  │
//! │  Triplet)   │     │  on sorted)  │     │  delegation) │
//! └─────────────┘     └──────┬───────┘     └──────┬───────┘
//!                            │                    │
//! ┌─────────────┐            ▼                    ▼
//! │  reverse.rs │     ┌─────────────────────────────────┐
//! │  (in-place) │     │          contracts.rs           │
//! └─────────────┘     │  (debug-mode postcondition      │
//! ┌─────────────┐     │   checks, free in release)      │
//! │move_zeroes.rs────▶│                                 │
//! │  (in-place) │     └─────────────────────────────────┘
//! └─────────────┘
//! ```
//!
//! # Mutation discipline
//!
//! In-place algorithms ([`reverse`], [`move_zeroes`]) take `&mut [i64]` and
//! return nothing; the caller already owns the slice. Search algorithms
//! ([`two_sum`], [`three_sum`]) borrow immutably and report their answer as an
//! `Option` - `None` means no qualifying pair or triplet exists. Formatting
//! (`"a , b"`) lives on the result types' `Display` impls, not in the
//! algorithms.
//!
//! # Sortedness
//!
//! [`two_sum`] and [`three_sum`] are only correct on input sorted in
//! non-decreasing order. The precondition is not validated: on unsorted input
//! the scan simply misses pairs it walked past, with no signal. Callers that
//! want the check can use [`contracts::is_sorted`].
//!
//! # Usage
//!
//! ```
//! use pincer::{reverse, two_sum, Pair};
//!
//! let mut seq = [0, 1, 2, 3, 4];
//! reverse(&mut seq);
//! assert_eq!(seq, [4, 3, 2, 1, 0]);
//!
//! let sorted = [0, 1, 2, 3, 4];
//! assert_eq!(two_sum(&sorted, 5), Some(Pair([1, 4])));
//! ```

// Module declarations
pub mod contracts;
mod move_zeroes;
mod reverse;
mod three_sum;
mod two_sum;
mod types;

// Re-exports for public API
pub use move_zeroes::move_zeroes;
pub use reverse::reverse;
pub use three_sum::three_sum;
pub use two_sum::two_sum;
pub use types::{Pair, Triplet};
