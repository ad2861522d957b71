mod compact;
mod policy;
mod replay;

pub use self::compact::compact;
pub use self::policy::policy;
pub use self::replay::replay;
