// SPDX-License-Identifier: MPL-2.0
//! Animation primitives: the spring filter, pointer-derived effects, and the
//! per-pagination slide transition.

pub mod pointer;
pub mod spring;
pub mod transition;

pub use pointer::PointerTracker;
pub use spring::{Spring, SpringParams};
pub use transition::SlideTransition;
