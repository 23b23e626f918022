// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::raw::RawPhotoSize;

/// Size of the JPEG header and footer that stripped thumbnails omit.
const STRIPPED_OVERHEAD: usize = 622;

/// A thumbnail of some media.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "impl-serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub struct PhotoSize {
    /// Thumbnail type, as used by the server to tell sizes apart (e.g. `"m"`).
    pub photo_type: String,
    pub width: i32,
    pub height: i32,
    /// Size of the thumbnail in bytes.
    pub file_size: usize,
}

impl PhotoSize {
    /// Returns `None` for empty sizes, which carry nothing worth showing.
    pub fn from_raw(size: &RawPhotoSize) -> Option<Self> {
        Some(match size {
            RawPhotoSize::Empty { .. } => return None,
            RawPhotoSize::Size { r#type, w, h, size } => Self {
                photo_type: r#type.clone(),
                width: *w,
                height: *h,
                file_size: usize::try_from(*size).unwrap_or(0),
            },
            RawPhotoSize::Cached {
                r#type, w, h, bytes,
            } => Self {
                photo_type: r#type.clone(),
                width: *w,
                height: *h,
                file_size: bytes.len(),
            },
            RawPhotoSize::Stripped { r#type, bytes } => Self {
                photo_type: r#type.clone(),
                width: 0,
                height: 0,
                file_size: stripped_size(bytes),
            },
        })
    }
}

// Stripped thumbnails are `0x01, height, width, body...`.
fn stripped_size(bytes: &[u8]) -> usize {
    if bytes.len() < 3 || bytes[0] != 0x01 {
        0
    } else {
        bytes.len() + STRIPPED_OVERHEAD
    }
}
