use crate::hash::H256;

#[derive(Debug, PartialEq, Display)]
pub enum Error {
	/// Header parent is not in the store
	#[display(fmt = "Block parent is unknown: {}", _0)]
	UnknownParent(H256),
	/// Parent is stored at a height other than child height - 1
	#[display(fmt = "Block parent {} is stored at inconsistent height", _0)]
	InconsistentParent(H256),
	/// Header is already in the store
	#[display(fmt = "Block is already known: {}", _0)]
	DuplicateBlock(H256),
	/// Parent is stored at the greatest possible height
	#[display(fmt = "Block parent {} is at the greatest possible height", _0)]
	HeightOverflow(H256),
}

impl From<Error> for String {
	fn from(e: Error) -> String {
		format!("{}", e)
	}
}
