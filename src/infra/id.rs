//! Time-ordered identifiers (UUIDv7).
//!
//! `Uuid` orders by its raw bytes, compared unsigned, so a v7 id generated
//! later always sorts after an earlier one. Sort ids with their own `Ord`;
//! never through a signed split of the two 64-bit halves.

use uuid::Uuid;

/// Generate a new primary key for an `orders` row.
///
/// Ids produced by the same process are strictly increasing, even within
/// the same millisecond.
pub fn new_order_id() -> Uuid {
    Uuid::now_v7()
}
