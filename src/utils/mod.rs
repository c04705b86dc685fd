pub mod sequence;
pub mod value;

pub use sequence::first_or_zero;
pub use value::SampleValue;
