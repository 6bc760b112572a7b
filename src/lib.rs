//! # pictool
//!
//! In-place pixel transforms over RGBA image buffers.
//!
//! The buffer is an [`imgref::ImgVec`] of [`rgb::RGBA8`] (aliased as
//! [`Image`]). Every transform takes it first, mutates or inspects it, and
//! returns `true` if the pixels changed, which tells the caller whether the
//! image needs re-encoding.
//!
//! ## Transforms
//!
//! - [`mono`] — greyscale, or sepia tone
//! - [`flip`] — mirror left-right or top-bottom
//! - [`transpose`] — swap rows and columns
//! - [`rotate`] — 90° left or right
//! - [`dered`] — zero the red channel
//! - [`display`] / [`render`] — print the pixels (never modifies)
//!
//! [`Plugin`] selects one of these by name with `key=value` arguments.
//!
//! ## Non-Goals
//!
//! - Decoding or encoding image files (use zenbitmaps for that)
//! - Parallel or SIMD processing
//! - Colour management beyond the documented brightness formula
//!
//! ## Usage
//!
//! ```
//! use pictool::{Plugin, RGBA8, from_rows, rotate, to_rows};
//!
//! let red = RGBA8::new(255, 0, 0, 255);
//! let blue = RGBA8::new(0, 0, 255, 255);
//! let mut image = from_rows(&[vec![red, blue]])?;
//!
//! assert!(rotate(&mut image, false));
//! assert_eq!(to_rows(&image), vec![vec![blue], vec![red]]);
//!
//! let plugin: Plugin = "mono sepia=true".parse()?;
//! assert!(plugin.apply(&mut image));
//! # Ok::<(), pictool::PictoolError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod color;
mod display;
mod error;
mod geometry;
mod limits;
mod plugin;

// Re-exports
pub use buffer::{Image, from_rows, from_rows_with_limits, to_rows};
pub use color::{brightness, dered, mono};
#[cfg(feature = "std")]
pub use display::display;
pub use display::{pixel_text, render};
pub use error::PictoolError;
pub use geometry::{flip, rotate, transpose};
pub use imgref::ImgVec;
pub use limits::Limits;
pub use plugin::Plugin;
pub use rgb::RGBA8;
