use derive_more::{Display, Error};

/// The error returned when a position counted from the end of a list doesn't refer to one of its
/// elements, either because it is 0 or because it is greater than the list's length.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("position {n} from the end is out of range for a list with {len} elements")]
pub struct OutOfRange {
    /// The rejected position, where 1 is the last element.
    pub n: usize,
    /// The length of the list at the time of the failure.
    pub len: usize,
}
