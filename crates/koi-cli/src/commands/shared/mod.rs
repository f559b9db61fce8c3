pub mod parse;
pub mod period;
pub mod submit;
