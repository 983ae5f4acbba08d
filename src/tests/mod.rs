mod sequence;
pub use sequence::{test_reserve, test_sequence};
