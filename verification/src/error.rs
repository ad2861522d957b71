use crate::compact::Compact;
use storage::Error as DBError;

#[derive(Debug, PartialEq, Display)]
/// All possible difficulty verification errors
pub enum Error {
	/// nBits do not match difficulty rules
	#[display(fmt = "Invalid difficulty: expected {}, got {}", expected, actual)]
	Difficulty { expected: Compact, actual: Compact },
	/// Exponential retarget series did not converge
	#[display(fmt = "Difficulty series diverged for p = {}, q = {}", p, q)]
	MulExp { p: i64, q: i64 },
	/// Database error
	#[display(fmt = "Database error: {}", _0)]
	Database(DBError),
}

impl From<DBError> for Error {
	fn from(err: DBError) -> Self {
		Error::Database(err)
	}
}

impl From<Error> for String {
	fn from(e: Error) -> String {
		format!("{}", e)
	}
}
