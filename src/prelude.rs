//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use hipku::prelude::*;
//!
//! let haiku = encode("127.0.0.1").unwrap();
//! assert_eq!(detect_family(&haiku), Family::V4);
//! assert_eq!(decode(&haiku).unwrap(), "127.0.0.1");
//! ```

pub use crate::{
    Address, Codec, DecodeError, Family, FormatError, SchemaTable, decode, decode_as,
    detect_family, encode, encode_address,
};
