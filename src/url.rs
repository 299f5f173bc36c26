// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+
// | Author: Sean Kerr <sean@code-box.org>                                                         |
// +-----------------------------------------------------------------------------------------------+

//! Request target classification.
//!
//! [`parse_url_char()`](fn.parse_url_char.html) classifies request target bytes one at a time,
//! and is shared by the HTTP/1.x parser and [`parse_url()`](fn.parse_url.html). Host spans found
//! by the classifier are split into user information, host and port by a second pass in
//! [`host`](host/index.html).

pub mod host;

#[cfg(test)]
mod test;

use crate::byte::{ is_alpha, is_url_char, is_userinfo_char };
use crate::http1::ParserError;

use std::fmt;

/// Number of URL fields.
const FIELD_COUNT: usize = 7;

/// URL classifier states.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum UrlState {
    /// An invalid byte was found.
    Dead,

    /// Skipping spaces before the URL.
    SpacesBeforeUrl,

    /// Parsing schema.
    Schema,

    /// Parsing the first `/` after the schema.
    SchemaSlash,

    /// Parsing the second `/` after the schema.
    SchemaSlashSlash,

    /// Parsing the first byte of the authority.
    ServerStart,

    /// Parsing authority.
    Server,

    /// Parsing authority after user information.
    ServerWithAt,

    /// Parsing path.
    Path,

    /// Parsing the first byte of the query string.
    QueryStringStart,

    /// Parsing query string.
    QueryString,

    /// Parsing the first byte of the fragment.
    FragmentStart,

    /// Parsing fragment.
    Fragment
}

/// Classify `byte` within a request target, given the classification of the previous byte.
///
/// Returns `UrlState::Dead` when `byte` is not allowed.
pub fn parse_url_char(state: UrlState, byte: u8) -> UrlState {
    if byte == b' ' || byte == b'\r' || byte == b'\n' {
        return UrlState::Dead;
    }

    if cfg!(feature = "strict") && (byte == b'\t' || byte == 0x0C) {
        return UrlState::Dead;
    }

    match state {
        UrlState::SpacesBeforeUrl => {
            // proxied requests are followed by a schema of an absolute URI, everything else is
            // a path or `*`
            if byte == b'/' || byte == b'*' {
                return UrlState::Path;
            }

            if is_alpha(byte) {
                return UrlState::Schema;
            }
        },
        UrlState::Schema => {
            if is_alpha(byte) {
                return state;
            }

            if byte == b':' {
                return UrlState::SchemaSlash;
            }
        },
        UrlState::SchemaSlash => {
            if byte == b'/' {
                return UrlState::SchemaSlashSlash;
            }
        },
        UrlState::SchemaSlashSlash => {
            if byte == b'/' {
                return UrlState::ServerStart;
            }
        },
        UrlState::ServerStart | UrlState::Server | UrlState::ServerWithAt => {
            if state == UrlState::ServerWithAt && byte == b'@' {
                return UrlState::Dead;
            }

            if byte == b'/' {
                return UrlState::Path;
            }

            if byte == b'?' {
                return UrlState::QueryStringStart;
            }

            if byte == b'@' {
                return UrlState::ServerWithAt;
            }

            if is_userinfo_char(byte) || byte == b'[' || byte == b']' {
                return UrlState::Server;
            }
        },
        UrlState::Path => {
            if is_url_char(byte) {
                return state;
            }

            match byte {
                b'?' => return UrlState::QueryStringStart,
                b'#' => return UrlState::FragmentStart,
                _    => {}
            }
        },
        UrlState::QueryStringStart | UrlState::QueryString => {
            if is_url_char(byte) {
                return UrlState::QueryString;
            }

            match byte {
                // allow extra '?' in query string
                b'?' => return UrlState::QueryString,
                b'#' => return UrlState::FragmentStart,
                _    => {}
            }
        },
        UrlState::FragmentStart => {
            if is_url_char(byte) {
                return UrlState::Fragment;
            }

            match byte {
                b'?' => return UrlState::Fragment,
                b'#' => return state,
                _    => {}
            }
        },
        UrlState::Fragment => {
            if is_url_char(byte) || byte == b'?' || byte == b'#' {
                return state;
            }
        },
        UrlState::Dead => {}
    }

    UrlState::Dead
}

/// URL fields.
#[derive(Clone,Copy,Debug,Eq,Hash,PartialEq)]
#[repr(u8)]
pub enum UrlField {
    /// Schema, such as `http`.
    Schema,

    /// Host name or IPv6 address, without brackets.
    Host,

    /// Port.
    Port,

    /// Path.
    Path,

    /// Query string, without the leading `?`.
    Query,

    /// Fragment, without the leading `#`.
    Fragment,

    /// User information, without the trailing `@`.
    UserInfo
}

impl UrlField {
    /// Retrieve the bit of this field within [`UrlParts::field_set()`](struct.UrlParts.html#method.field_set).
    pub fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl fmt::Display for UrlField {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(match *self {
            UrlField::Schema   => "schema",
            UrlField::Host     => "host",
            UrlField::Port     => "port",
            UrlField::Path     => "path",
            UrlField::Query    => "query",
            UrlField::Fragment => "fragment",
            UrlField::UserInfo => "userinfo"
        })
    }
}

/// Location of a URL field within the parsed URL.
#[derive(Clone,Copy,Debug,Default,Eq,PartialEq)]
pub struct Span {
    /// Field offset.
    pub offset: usize,

    /// Field length.
    pub length: usize
}

impl Span {
    /// Retrieve the bytes of this span within `url`, or `None` when `url` is too short.
    pub fn slice<'a>(&self, url: &'a [u8]) -> Option<&'a [u8]> {
        url.get(self.offset..self.offset + self.length)
    }
}

/// Fields found by [`parse_url()`](fn.parse_url.html).
#[derive(Clone,Copy,Debug,Default,Eq,PartialEq)]
pub struct UrlParts {
    /// Field locations, indexed by `UrlField`.
    field_data: [Span; FIELD_COUNT],

    /// Present fields.
    field_set: u8,

    /// Decoded port.
    port: u16
}

impl UrlParts {
    /// Create a new `UrlParts` without any fields.
    pub fn new() -> UrlParts {
        UrlParts::default()
    }

    /// Retrieve the bit set of present fields, see [`UrlField::bit()`](enum.UrlField.html#method.bit).
    pub fn field_set(&self) -> u8 {
        self.field_set
    }

    /// Indicates that `field` is present.
    pub fn has(&self, field: UrlField) -> bool {
        self.field_set & field.bit() == field.bit()
    }

    /// Retrieve the location of `field`.
    pub fn span(&self, field: UrlField) -> Option<Span> {
        if self.has(field) {
            Some(self.field_data[field as usize])
        } else {
            None
        }
    }

    /// Retrieve the bytes of `field` within `url`, which must be the parsed URL.
    pub fn get<'a>(&self, field: UrlField, url: &'a [u8]) -> Option<&'a [u8]> {
        self.span(field).and_then(|span| span.slice(url))
    }

    /// Retrieve the decoded port.
    pub fn port(&self) -> Option<u16> {
        if self.has(UrlField::Port) {
            Some(self.port)
        } else {
            None
        }
    }

    /// Extend `field` by one byte at `index`, starting it when it is not the field that was
    /// extended last.
    fn extend(&mut self, field: UrlField, index: usize, previous: Option<UrlField>) {
        if previous == Some(field) {
            self.field_data[field as usize].length += 1;
        } else {
            self.field_data[field as usize] = Span{ offset: index, length: 1 };
            self.field_set                |= field.bit();
        }
    }
}

/// Split `url` into its fields.
///
/// When `is_connect` is `true`, `url` is a `CONNECT` request target, and must consist of a host
/// and port only.
///
/// # Errors
///
/// - `ParserError::InvalidUrl` for bytes the classifier rejects, a schema without a host, an empty
///   `url`, or a `CONNECT` target that is not `host:port`.
/// - `ParserError::InvalidHost` or `ParserError::InvalidPort` when the host span cannot be split.
/// - `ParserError::InvalidPort` for ports above `65535`.
pub fn parse_url(url: &[u8], is_connect: bool) -> Result<UrlParts, ParserError> {
    if url.is_empty() {
        return Err(ParserError::InvalidUrl);
    }

    let mut found_at = false;
    let mut parts    = UrlParts::new();
    let mut previous = None;
    let mut state    = if is_connect {
        UrlState::ServerStart
    } else {
        UrlState::SpacesBeforeUrl
    };

    for (index, byte) in url.iter().enumerate() {
        state = parse_url_char(state, *byte);

        let field = match state {
            UrlState::Dead => {
                return Err(ParserError::InvalidUrl);
            },

            // delimiters
            UrlState::SchemaSlash
            | UrlState::SchemaSlashSlash
            | UrlState::ServerStart
            | UrlState::QueryStringStart
            | UrlState::FragmentStart => {
                continue;
            },

            UrlState::Schema => UrlField::Schema,
            UrlState::ServerWithAt => {
                found_at = true;

                UrlField::Host
            },
            UrlState::Server => UrlField::Host,
            UrlState::Path => UrlField::Path,
            UrlState::QueryString => UrlField::Query,
            UrlState::Fragment => UrlField::Fragment,
            UrlState::SpacesBeforeUrl => {
                return Err(ParserError::InvalidInternalState);
            }
        };

        parts.extend(field, index, previous);

        previous = Some(field);
    }

    // a schema requires a host, so `http:///path` fails
    if parts.has(UrlField::Schema) && !parts.has(UrlField::Host) {
        return Err(ParserError::InvalidUrl);
    }

    if parts.has(UrlField::Host) {
        host::parse_host(url, &mut parts, found_at)?;
    }

    if is_connect && parts.field_set != UrlField::Host.bit() | UrlField::Port.bit() {
        return Err(ParserError::InvalidUrl);
    }

    if let Some(digits) = parts.get(UrlField::Port, url) {
        let mut port: u32 = 0;

        // digits have been verified by the host decomposer
        for byte in digits {
            port = port * 10 + u32::from(byte - b'0');

            if port > 0xFFFF {
                return Err(ParserError::InvalidPort);
            }
        }

        parts.port = port as u16;
    }

    Ok(parts)
}
