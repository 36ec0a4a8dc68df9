//! Element configuration
//!
//! Both ends of the link must be built from the same values here; the wire
//! format carries no layout information. Packing pays off for narrow value
//! ranges: every halving of the range saves one bit per element, while
//! ranges past a few hundred values mostly erase the gain.

/// Array element type, unsigned integers only.
pub type Elem = u16;

/// Number of elements in one telemetry record.
pub const ELEM_COUNT: usize = 4;

/// Minimum value of an element (inclusive).
pub const ELEM_MIN: Elem = 0;

/// Maximum value of an element (inclusive).
pub const ELEM_MAX: Elem = 1000;
