// SPDX-License-Identifier: MPL-2.0
//! Canvas-based widgets: the slide stage, the cursor follower, and the
//! clickable pixel star.

pub mod follower;
pub mod pixel_star;
pub mod slide_stage;

pub use follower::FollowerDot;
pub use pixel_star::PixelStar;
pub use slide_stage::{SlideLayer, SlideStage};
