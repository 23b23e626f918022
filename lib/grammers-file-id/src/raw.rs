// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Raw protocol objects, as handed over by the deserializer.
//!
//! Only the members needed to build media records are modelled. Members the
//! protocol marks as optional are `Option`s, and attributes are a list that
//! may or may not contain a given kind, so consumers must pick a default.

/// A document as sent by the server.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "impl-serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub struct RawDocument {
    pub id: i64,
    pub access_hash: i64,
    #[cfg_attr(feature = "impl-serde", serde(with = "serde_bytes"))]
    pub file_reference: Vec<u8>,
    pub date: i32,
    pub mime_type: String,
    pub size: i64,
    pub thumbs: Option<Vec<RawPhotoSize>>,
    pub dc_id: i32,
    pub attributes: Vec<RawDocumentAttribute>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "impl-serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub enum RawDocumentAttribute {
    ImageSize {
        w: i32,
        h: i32,
    },
    Animated,
    Video {
        round_message: bool,
        supports_streaming: bool,
        duration: i32,
        w: i32,
        h: i32,
    },
    Audio {
        voice: bool,
        duration: i32,
        title: Option<String>,
        performer: Option<String>,
    },
    Filename {
        file_name: String,
    },
    HasStickers,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "impl-serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub enum RawPhotoSize {
    Empty {
        r#type: String,
    },
    Size {
        r#type: String,
        w: i32,
        h: i32,
        size: i32,
    },
    Cached {
        r#type: String,
        w: i32,
        h: i32,
        #[cfg_attr(feature = "impl-serde", serde(with = "serde_bytes"))]
        bytes: Vec<u8>,
    },
    Stripped {
        r#type: String,
        #[cfg_attr(feature = "impl-serde", serde(with = "serde_bytes"))]
        bytes: Vec<u8>,
    },
}
