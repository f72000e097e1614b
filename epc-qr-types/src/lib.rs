mod amount;
mod character_set;
mod version;

pub use amount::Amount;
pub use character_set::CharacterSet;
pub use version::Version;
