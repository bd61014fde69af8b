//! Mount Olympus and Zeus.
//!
//! Sixteen foundations start with the Aces and Twos of both decks and build
//! up in suit by twos; nine rows build down in suit by twos. Zeus differs
//! only in dealing four rows at the start.

mod game;

pub use game::{register, MountOlympus, MOUNT_OLYMPUS_ID, ZEUS_ID};
