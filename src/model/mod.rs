// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Data model shared by the recurrence, the tree builder and the labeler.
//!
//! - Triple: three consecutive terms, immutable
//! - Sequence: seeds plus derived terms, append-only

pub mod sequence;
pub mod triple;

pub use sequence::Sequence;
pub use triple::Triple;
