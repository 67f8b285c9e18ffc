use thiserror::Error;

#[derive(Error, Debug, PartialEq, Copy, Clone)]
/// An error produced when converting a fractional quantity into an exact one.
pub enum QuantityError {
    /// The value is NaN or infinite.
    #[error("Quantity ({0}) is not finite")]
    NotFinite(f64),
    /// The value does not fit in the target payload type.
    #[error("Quantity ({0}) is out of range of the target type")]
    OutOfRange(f64),
    /// The value is not close enough to an integer.
    #[error("Quantity ({0}) is not an integer")]
    NotInteger(f64),
}
