// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use snafu::{ResultExt, ensure};

use crate::errors::{DecodeError, InvalidLengthSnafu, InvalidTokenSnafu};

/// Size in bytes of a packed file identifier.
pub const FILE_ID_LEN: usize = 24;

/// The kind of media a file identifier points to.
///
/// The numbering is shared with the Bot API, so identifiers produced here
/// carry the same discriminator other clients expect.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileKind {
    Thumbnail = 0,
    ChatPhoto = 1,
    Photo = 2,
    Voice = 3,
    Video = 4,
    Document = 5,
    Encrypted = 6,
    Temp = 7,
    Sticker = 8,
    Audio = 9,
    Animation = 10,
    EncryptedThumbnail = 11,
    Wallpaper = 12,
    VideoNote = 13,
}

impl TryFrom<i32> for FileKind {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Thumbnail,
            1 => Self::ChatPhoto,
            2 => Self::Photo,
            3 => Self::Voice,
            4 => Self::Video,
            5 => Self::Document,
            6 => Self::Encrypted,
            7 => Self::Temp,
            8 => Self::Sticker,
            9 => Self::Audio,
            10 => Self::Animation,
            11 => Self::EncryptedThumbnail,
            12 => Self::Wallpaper,
            13 => Self::VideoNote,
            _ => return Err(value),
        })
    }
}

impl From<FileKind> for i32 {
    fn from(kind: FileKind) -> Self {
        kind as i32
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Thumbnail => "Thumbnail",
            Self::ChatPhoto => "ChatPhoto",
            Self::Photo => "Photo",
            Self::Voice => "Voice",
            Self::Video => "Video",
            Self::Document => "Document",
            Self::Encrypted => "Encrypted",
            Self::Temp => "Temp",
            Self::Sticker => "Sticker",
            Self::Audio => "Audio",
            Self::Animation => "Animation",
            Self::EncryptedThumbnail => "EncryptedThumbnail",
            Self::Wallpaper => "Wallpaper",
            Self::VideoNote => "VideoNote",
        })
    }
}

/// The coordinates needed to fetch a remote file.
///
/// A file identifier is packed into a fixed 24-byte record (two
/// little-endian `i32` followed by two little-endian `i64`) and shared as
/// unpadded URL-safe base64, so the token can be used inside JSON, URLs or
/// file names as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId {
    /// Media discriminator. Usually one of [`FileKind`], but unknown values are kept.
    pub kind: i32,
    /// Data center where the file is stored.
    pub dc_id: i32,
    /// Identifier of the file within its data center.
    pub id: i64,
    /// Capability required to fetch the file.
    pub access_hash: i64,
}

impl FileId {
    pub fn new(kind: impl Into<i32>, dc_id: i32, id: i64, access_hash: i64) -> Self {
        Self {
            kind: kind.into(),
            dc_id,
            id,
            access_hash,
        }
    }

    /// The typed media kind, if the discriminator is a known one.
    pub fn file_kind(&self) -> Option<FileKind> {
        FileKind::try_from(self.kind).ok()
    }

    /// Serialize the identifier into its packed binary record.
    pub fn to_bytes(&self) -> [u8; FILE_ID_LEN] {
        let mut res = [0; FILE_ID_LEN];
        res[0..4].copy_from_slice(&self.kind.to_le_bytes());
        res[4..8].copy_from_slice(&self.dc_id.to_le_bytes());
        res[8..16].copy_from_slice(&self.id.to_le_bytes());
        res[16..24].copy_from_slice(&self.access_hash.to_le_bytes());
        res
    }

    /// Deserialize a packed binary record.
    ///
    /// Only the 24-byte shape is understood. Any other length is rejected
    /// rather than guessed at.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, DecodeError> {
        ensure!(
            buf.len() == FILE_ID_LEN,
            InvalidLengthSnafu {
                expected: FILE_ID_LEN,
                got: buf.len(),
            }
        );

        Ok(Self {
            kind: i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
            dc_id: i32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
            id: i64::from_le_bytes([
                buf[8], buf[9], buf[10], buf[11], buf[12], buf[13], buf[14], buf[15],
            ]),
            access_hash: i64::from_le_bytes([
                buf[16], buf[17], buf[18], buf[19], buf[20], buf[21], buf[22], buf[23],
            ]),
        })
    }

    /// Encode the identifier into its URL-safe token.
    pub fn to_token(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.to_bytes())
    }

    /// Decode a token previously produced by [`FileId::to_token`].
    pub fn from_token(token: &str) -> Result<Self, DecodeError> {
        let res = URL_SAFE_NO_PAD
            .decode(token)
            .context(InvalidTokenSnafu { token })
            .and_then(|buf| Self::from_bytes(&buf));

        if let Err(e) = &res {
            log::trace!("rejected file identifier: {}", e);
        }
        res
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_token())
    }
}

impl FromStr for FileId {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

/// Pack the coordinates of a remote file into a URL-safe token.
///
/// The result is always 32 characters long and only contains
/// `A-Z`, `a-z`, `0-9`, `-` and `_`.
pub fn encode(kind: i32, dc_id: i32, id: i64, access_hash: i64) -> String {
    FileId::new(kind, dc_id, id, access_hash).to_token()
}

/// Unpack a token produced by [`encode`] into `(kind, dc_id, id, access_hash)`.
pub fn decode(token: &str) -> Result<(i32, i32, i64, i64), DecodeError> {
    let file_id = FileId::from_token(token)?;
    Ok((
        file_id.kind,
        file_id.dc_id,
        file_id.id,
        file_id.access_hash,
    ))
}

#[cfg(feature = "impl-serde")]
impl serde::Serialize for FileId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "impl-serde")]
impl<'de> serde::Deserialize<'de> for FileId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_token(&token).map_err(serde::de::Error::custom)
    }
}
