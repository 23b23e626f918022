// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use chrono::{DateTime, Utc};

use super::{ClientId, PhotoSize};
use crate::errors::DecodeError;
use crate::file_id::{FileId, FileKind};
use crate::raw::{RawDocument, RawDocumentAttribute};

/// An animation file (GIF or H.264/MPEG-4 AVC video without sound).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "impl-serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub struct Animation {
    /// Token which can be used to download or reuse the file.
    pub file_id: String,
    /// Width as defined by the sender, or `0` if unknown.
    pub width: i32,
    /// Height as defined by the sender, or `0` if unknown.
    pub height: i32,
    /// Duration in seconds as defined by the sender, or `0` if unknown.
    pub duration: i32,
    pub thumb: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    /// Date the animation was sent, in Unix time.
    pub date: Option<i32>,
    pub client: Option<ClientId>,
    pub raw: RawDocument,
}

impl Animation {
    pub fn from_raw(document: RawDocument, client: Option<ClientId>) -> Self {
        let file_id = FileId::new(
            FileKind::Animation,
            document.dc_id,
            document.id,
            document.access_hash,
        );

        let (width, height, duration) = document
            .attributes
            .iter()
            .find_map(|attr| match attr {
                RawDocumentAttribute::Video {
                    w, h, duration, ..
                } => Some((*w, *h, *duration)),
                _ => None,
            })
            .unwrap_or_else(|| {
                log::debug!(
                    "animation {} has no video attribute; using empty dimensions",
                    document.id
                );
                (0, 0, 0)
            });

        let file_name = document.attributes.iter().find_map(|attr| match attr {
            RawDocumentAttribute::Filename { file_name } => Some(file_name.clone()),
            _ => None,
        });

        let thumb = document
            .thumbs
            .as_ref()
            .and_then(|thumbs| thumbs.iter().find_map(PhotoSize::from_raw));

        Self {
            file_id: file_id.to_token(),
            width,
            height,
            duration,
            thumb,
            file_name,
            mime_type: if document.mime_type.is_empty() {
                None
            } else {
                Some(document.mime_type.clone())
            },
            file_size: Some(document.size),
            date: Some(document.date),
            client,
            raw: document,
        }
    }

    /// Unpack the stored token into the coordinates needed to fetch the file.
    pub fn to_file_id(&self) -> Result<FileId, DecodeError> {
        self.file_id.parse()
    }

    /// The date on which the animation was sent, if known and representable.
    pub fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.date
            .and_then(|date| DateTime::<Utc>::from_timestamp(date as i64, 0))
    }

    /// Whether the document is flagged as a GIF-like animation, rather than a
    /// video which merely happens to be shown as one.
    pub fn is_animated(&self) -> bool {
        self.raw
            .attributes
            .iter()
            .any(|attr| matches!(attr, RawDocumentAttribute::Animated))
    }
}
