// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library packs the location of Telegram media into compact file
//! identifiers, and builds the media records that carry them.
//!
//! A file identifier is a URL-safe token which can be stored anywhere and
//! later turned back into the data center, id and access hash needed to
//! download the file again:
//!
//! ```
//! use grammers_file_id::{FileKind, decode, encode};
//!
//! let token = encode(FileKind::Animation as i32, 2, 123456789012345, -987654321098765);
//! assert_eq!(decode(&token).unwrap(), (10, 2, 123456789012345, -987654321098765));
//! ```
//!
//! Media records such as [`types::Animation`] are built from the
//! [`raw`] objects produced by the deserializer.
pub mod errors;
mod file_id;
pub mod raw;
pub mod types;

pub use errors::DecodeError;
pub use file_id::{FILE_ID_LEN, FileId, FileKind, decode, encode};
