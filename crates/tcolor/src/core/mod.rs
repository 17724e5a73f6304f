mod conversion;
mod equality;
mod math;
mod ryb;
mod space;
mod string;

// conversion
pub(crate) use conversion::{clamp, convert, from_24bit, to_24bit};

// equality
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_channels;

// math
pub use math::Component;
pub(crate) use math::{from_unit, number_length, to_unit, wrap_hue, FloatExt};

// ryb
pub(crate) use ryb::{rgb_to_ryb_hue, ryb_to_rgb_hue};

// space
pub use space::{ColorSpace, Format};

// string
pub(crate) use string::{format, parse, Notation};
