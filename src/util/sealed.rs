/// Restricts implementations of the crate's marker traits ([`PathChar`](crate::path::PathChar),
/// [`Dialect`](crate::path::Dialect)) to the types defined here.
pub trait Sealed {}
