//! Picture Gallery and Great Wheel.
//!
//! Both games share one table: an Ace foundation, rows of tableaux pinned to
//! a base rank, and eight rows fed by the talon.

pub mod great_wheel;
pub mod layout;
pub mod picture_gallery;

pub use great_wheel::GreatWheel;
pub use picture_gallery::PictureGallery;
