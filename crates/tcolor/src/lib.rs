//! # tcolor
//!
//! tcolor parses, adjusts, and formats the colors of the web. It accepts
//! hashed hexadecimal notation, the `rgb()`, `rgba()`, `hsl()`, `hsla()`,
//! `hsv()`, and `hsva()` functions, the CSS color names, as well as structured
//! [`Components`], and it remembers which of these notations a color came in,
//! so that formatting the color produces the same notation again.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! tcolor's main abstractions are:
//!
//!   * [`Color`] is an **immutable color value**. It stores red, green, and
//!     blue coordinates in unit range together with an alpha channel and the
//!     [`Format`] it was created from. Its methods derive HSL and HSV views and
//!     implement transforms, which always return new colors.
//!   * [`ColorInput`] and [`Components`] describe **everything a color can be
//!     made from**, i.e., another color, a string, or a record with red, green,
//!     blue or hue, saturation, lightness/value coordinates. Coordinates are
//!     [`Component`]s, i.e., either plain numbers or percentages.
//!   * [`Format`] is the closed set of **notations**: `hex`, `rgb`, `hsl`,
//!     `hsv`, and `name`.
//!   * The [`names`] module holds the **table of color names**.
//!
//!
//! ## 2. Parse, Adjust, Format
//!
//! ```
//! # use tcolor::{color, Format};
//! let coral = color("#ff7f50");
//! assert_eq!(coral.to_string(), "#ff7f50");
//!
//! let darker = coral.darken(20.0);
//! assert_eq!(darker.to_string(), "#e93f00");
//! assert_eq!(darker.to_format_string(Some(Format::Hsl)), "hsl(16,100%,46%)");
//!
//! let ghost = coral.with_alpha(0.5);
//! assert_eq!(ghost.to_string(), "rgba(255,127,80,0.5)");
//! ```
//!
//! Construction never fails. Input that none of the grammar's rules recognize
//! results in opaque black, formatted as hex. Code that needs to tell the
//! difference uses [`Color::parse`] or `str::parse` instead, which report a
//! [`ColorFormatError`](error::ColorFormatError).
//!
//!
//! ## 3. Optional Features
//!
//! tcolor supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls tcolor's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! tcolor reports colors it fails to parse through the
//! [log](https://crates.io/crates/log) facade, at debug level. It does not
//! install a logger.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

extern crate alloc;

mod core;
pub mod error;
pub mod names;
mod object;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{Component, ColorSpace, Format};
pub use object::{color, Color, ColorInput, Components, Hsla, Hsva, Options, Rgba};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn tcolor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(core::close_enough, m)?)?;

    m.add_class::<Color>()?;
    m.add_class::<ColorSpace>()?;
    m.add_class::<Format>()?;
    m.add_class::<Hsla>()?;
    m.add_class::<Hsva>()?;
    m.add_class::<Rgba>()?;

    Ok(())
}
