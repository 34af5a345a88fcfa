pub mod chunk;
pub mod compare;
