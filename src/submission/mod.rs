pub mod extractor;
pub mod fields;

pub use extractor::ValidJson;
pub use fields::Validate;
