//! Slice layout: deterministic randomness, division points, segments and lookup.

pub(crate) mod divisions;
pub(crate) mod locate;
pub(crate) mod random;
pub(crate) mod segments;
