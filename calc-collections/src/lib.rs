//! Containers used by the calculator core.
//!
//! - [`List`] is a doubly linked sequence. Operations at either end are `O(1)`, and indexed access
//!   walks from whichever end is closer to the index.
//! - [`ArrayMap`] is an associative store backed by a growable array of key-value pairs, with
//!   linear-time lookup. It is meant for small maps, such as the variables of a calculator
//!   session.
//!
//! Both containers report misuse (an out-of-range index, a missing key, removing from an empty
//! list) as a [`CollectionError`] rather than panicking.
//!
//! Neither container has a notion of a "null" element or key. Use [`Option`] when absent values
//! need to be stored; `None` compares equal to `None` and to nothing else, which is exactly what
//! [`List::index_of`] and [`ArrayMap::contains_key`] rely on.

pub mod array_map;
pub mod error;
pub mod list;

pub use array_map::ArrayMap;
pub use error::CollectionError;
pub use list::List;
