// SPDX-License-Identifier: MPL-2.0
//! UI layer: design tokens, reusable widget programs, and centralized styles.

pub mod design_tokens;
pub mod styles;
pub mod widgets;
