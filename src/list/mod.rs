#[allow(clippy::module_inception)]
mod list;
pub use list::List;
mod cursor;
pub use cursor::CursorMut;
mod iter;
pub use iter::{IntoIter, Iter};
mod sequence;
