pub mod algorithms;
pub mod codec;

pub use codec::Codec;
