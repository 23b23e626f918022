// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use grammers_file_id::raw::{RawDocument, RawDocumentAttribute};
use grammers_file_id::types::Animation;
use grammers_file_id::{DecodeError, FileId, FileKind, decode, encode};

fn sample_coordinates() -> Vec<(i32, i32, i64, i64)> {
    vec![
        (10, 2, 123456789012345, -987654321098765),
        (0, 0, 0, 0),
        (2, 1, -1, -1),
        (5, 5, i64::MIN, i64::MAX),
        (i32::MIN, i32::MAX, i64::MAX, i64::MIN),
        (13, 4, 5433270178402912345, -3214109876543210987),
    ]
}

#[test]
fn round_trip() {
    for (kind, dc_id, id, access_hash) in sample_coordinates() {
        let token = encode(kind, dc_id, id, access_hash);
        assert_eq!(decode(&token), Ok((kind, dc_id, id, access_hash)));
    }
}

#[test]
fn concrete_animation_token() {
    let token = encode(10, 2, 123456789012345, -987654321098765);
    assert_eq!(token, "CgAAAAIAAAB53w2GSHAAAPOvB8-7ffz_");
    assert_eq!(
        decode(&token).unwrap(),
        (10, 2, 123456789012345, -987654321098765)
    );
}

#[test]
fn encoding_is_deterministic() {
    for (kind, dc_id, id, access_hash) in sample_coordinates() {
        assert_eq!(
            encode(kind, dc_id, id, access_hash),
            encode(kind, dc_id, id, access_hash)
        );
    }
}

#[test]
fn tokens_are_url_safe() {
    for (kind, dc_id, id, access_hash) in sample_coordinates() {
        let token = encode(kind, dc_id, id, access_hash);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "unexpected character in {token}"
        );
    }
}

#[test]
fn negative_values_keep_their_sign() {
    let file_id: FileId = encode(9, 3, -42, -7_000_000_000_000).parse().unwrap();
    assert_eq!(file_id.id, -42);
    assert_eq!(file_id.access_hash, -7_000_000_000_000);
    assert_eq!(file_id.file_kind(), Some(FileKind::Audio));
}

#[test]
fn invalid_characters_are_rejected() {
    let token = encode(10, 2, 123456789012345, -987654321098765);

    for bad in ["+", "/", "*", " ", "é"] {
        let mut corrupt = token.clone();
        corrupt.insert_str(5, bad);
        assert!(
            matches!(decode(&corrupt), Err(DecodeError::InvalidToken { .. })),
            "{corrupt:?} should not decode"
        );
    }
}

#[test]
fn padding_is_rejected() {
    // 24 bytes never need padding, and the alphabet has no `=`.
    let token = encode(1, 1, 1, 1);
    assert!(decode(&format!("{token}=")).is_err());
    assert!(decode(&format!("{token}==")).is_err());
}

#[test]
fn wrong_lengths_are_rejected() {
    let token = encode(10, 2, 123456789012345, -987654321098765);

    // 28 characters are valid base64 for 21 bytes.
    assert_eq!(
        decode(&token[..28]),
        Err(DecodeError::InvalidLength {
            expected: 24,
            got: 21
        })
    );
    // 36 characters are valid base64 for 27 bytes.
    assert_eq!(
        decode(&format!("{token}AAAA")),
        Err(DecodeError::InvalidLength {
            expected: 24,
            got: 27
        })
    );
    assert!(decode("").is_err());
    assert!(decode(&token[..31]).is_err());
}

#[test]
fn file_id_display_matches_encode() {
    let file_id = FileId::new(FileKind::Sticker, 1, 99, -99);
    assert_eq!(file_id.to_string(), encode(8, 1, 99, -99));
    assert_eq!(FileId::from_bytes(&file_id.to_bytes()), Ok(file_id));
}

#[test]
fn animation_token_can_be_decoded() {
    let document = RawDocument {
        id: 123456789012345,
        access_hash: -987654321098765,
        date: 1_536_000_000,
        mime_type: "video/mp4".into(),
        size: 1024,
        dc_id: 2,
        attributes: vec![RawDocumentAttribute::Video {
            round_message: false,
            supports_streaming: false,
            duration: 2,
            w: 64,
            h: 64,
        }],
        ..Default::default()
    };

    let animation = Animation::from_raw(document, None);
    assert_eq!(animation.file_id, "CgAAAAIAAAB53w2GSHAAAPOvB8-7ffz_");
    assert_eq!(
        decode(&animation.file_id).unwrap(),
        (10, 2, 123456789012345, -987654321098765)
    );
}

#[test]
fn codec_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FileId>();
    assert_send_sync::<Animation>();
    assert_send_sync::<DecodeError>();

    let handles = (0..4i64)
        .map(|i| {
            std::thread::spawn(move || {
                let token = encode(FileKind::Document as i32, 1, i, -i);
                decode(&token).unwrap()
            })
        })
        .collect::<Vec<_>>();

    for (i, handle) in handles.into_iter().enumerate() {
        let i = i as i64;
        assert_eq!(handle.join().unwrap(), (5, 1, i, -i));
    }
}

#[cfg(feature = "impl-serde")]
#[test]
fn file_id_serializes_as_token() {
    let file_id = FileId::new(FileKind::Animation, 2, 123456789012345, -987654321098765);
    let json = serde_json::to_string(&file_id).unwrap();
    assert_eq!(json, "\"CgAAAAIAAAB53w2GSHAAAPOvB8-7ffz_\"");
    assert_eq!(serde_json::from_str::<FileId>(&json).unwrap(), file_id);
    assert!(serde_json::from_str::<FileId>("\"AAAA\"").is_err());
}
