//! invoke helper

/// Receives the value built by a nested builder.
pub trait Invoke<A> {
	type Result;

	fn invoke(self, arg: A) -> Self::Result;
}

/// Returns the built value as is.
pub struct Identity;

impl<A> Invoke<A> for Identity {
	type Result = A;

	fn invoke(self, arg: A) -> A { arg }
}
