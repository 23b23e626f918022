// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use snafu::Snafu;

/// The error type returned when a file identifier cannot be unpacked.
#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum DecodeError {
    /// The token is not valid unpadded URL-safe base64.
    #[snafu(display("file identifier {token:?} is not valid url-safe base64"))]
    InvalidToken {
        token: String,
        source: base64::DecodeError,
    },

    /// The token decoded fine, but not into a record of the expected size.
    #[snafu(display("file identifier should be {expected} bytes long, but got {got}"))]
    InvalidLength { expected: usize, got: usize },
}
