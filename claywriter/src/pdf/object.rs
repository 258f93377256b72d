pub mod array;
pub mod indirect;
pub mod name;
pub mod stream;
pub mod string;

pub use array::Array;
pub use indirect::{IndirectObject, Reference};
pub use name::Name;
pub use stream::Stream;
pub use string::CwString;
