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

use std::{ error, fmt };

/// Error names and descriptions, in `ParserError` discriminant order.
static ERRORS: [(&str, &str); 32] = [
    ("CB_message_begin",        "the on_message_begin callback failed"),
    ("CB_url",                  "the on_url callback failed"),
    ("CB_header_field",         "the on_header_field callback failed"),
    ("CB_header_value",         "the on_header_value callback failed"),
    ("CB_headers_complete",     "the on_headers_complete callback failed"),
    ("CB_body",                 "the on_body callback failed"),
    ("CB_message_complete",     "the on_message_complete callback failed"),
    ("CB_status",               "the on_status callback failed"),
    ("CB_chunk_header",         "the on_chunk_header callback failed"),
    ("CB_chunk_complete",       "the on_chunk_complete callback failed"),
    ("INVALID_EOF_STATE",       "stream ended at an unexpected time"),
    ("HEADER_OVERFLOW",         "too many header bytes seen; overflow detected"),
    ("CLOSED_CONNECTION",       "data received after completed connection: close message"),
    ("INVALID_VERSION",         "invalid HTTP version"),
    ("INVALID_STATUS",          "invalid HTTP status code"),
    ("INVALID_METHOD",          "invalid HTTP method"),
    ("INVALID_URL",             "invalid URL"),
    ("INVALID_HOST",            "invalid host"),
    ("INVALID_PORT",            "invalid port"),
    ("INVALID_PATH",            "invalid path"),
    ("INVALID_QUERY_STRING",    "invalid query string"),
    ("INVALID_FRAGMENT",        "invalid fragment"),
    ("LF_EXPECTED",             "LF character expected"),
    ("INVALID_HEADER_TOKEN",    "invalid character in header"),
    ("INVALID_CONTENT_LENGTH",  "invalid character in content-length header"),
    ("UNEXPECTED_CONTENT_LENGTH", "unexpected content-length header"),
    ("INVALID_CHUNK_SIZE",      "invalid character in chunk size header"),
    ("INVALID_CONSTANT",        "invalid constant string"),
    ("INVALID_INTERNAL_STATE",  "encountered unexpected internal state"),
    ("STRICT",                  "strict mode assertion failed"),
    ("PAUSED",                  "parser is paused"),
    ("UNKNOWN",                 "an unknown error occurred")
];

/// Parser errors.
///
/// Every error except `Paused` is sticky: once set, all further calls to
/// [`Parser::execute()`](struct.Parser.html#method.execute) return `0` until the parser is
/// re-initialized.
#[derive(Clone,Copy,Eq,Hash,PartialEq)]
#[repr(u8)]
pub enum ParserError {
    // ---------------------------------------------------------------------------------------------
    // CALLBACK ERRORS
    // ---------------------------------------------------------------------------------------------

    /// `on_message_begin()` failed.
    MessageBeginCallback,

    /// `on_url()` failed.
    UrlCallback,

    /// `on_header_field()` failed.
    HeaderFieldCallback,

    /// `on_header_value()` failed.
    HeaderValueCallback,

    /// `on_headers_complete()` failed.
    HeadersCompleteCallback,

    /// `on_body()` failed.
    BodyCallback,

    /// `on_message_complete()` failed.
    MessageCompleteCallback,

    /// `on_status()` failed.
    StatusCallback,

    /// `on_chunk_header()` failed.
    ChunkHeaderCallback,

    /// `on_chunk_complete()` failed.
    ChunkCompleteCallback,

    // ---------------------------------------------------------------------------------------------
    // PARSING ERRORS
    // ---------------------------------------------------------------------------------------------

    /// The stream ended within a message.
    InvalidEofState,

    /// The header section exceeded the maximum header size.
    HeaderOverflow,

    /// Data was received after a message that closes the connection.
    ClosedConnection,

    /// Invalid HTTP version.
    InvalidVersion,

    /// Invalid status code.
    InvalidStatus,

    /// Invalid request method.
    InvalidMethod,

    /// Invalid request URL.
    InvalidUrl,

    /// Invalid URL host.
    InvalidHost,

    /// Invalid URL port.
    InvalidPort,

    /// Invalid URL path.
    InvalidPath,

    /// Invalid URL query string.
    InvalidQueryString,

    /// Invalid URL fragment.
    InvalidFragment,

    /// A CR was not followed by a LF.
    LfExpected,

    /// Invalid header field or value byte.
    InvalidHeaderToken,

    /// Invalid or overflowing content length.
    InvalidContentLength,

    /// Duplicate content length, or content length together with chunked transfer encoding.
    UnexpectedContentLength,

    /// Invalid chunk size.
    InvalidChunkSize,

    /// Invalid constant within the request or status line.
    InvalidConstant,

    /// The parser reached a state it cannot handle.
    InvalidInternalState,

    /// A strict mode check failed.
    Strict,

    // ---------------------------------------------------------------------------------------------
    // CONTROL
    // ---------------------------------------------------------------------------------------------

    /// The parser is paused.
    Paused,

    /// Unknown error.
    Unknown
}

impl ParserError {
    /// Retrieve the short name of this error.
    pub fn name(&self) -> &'static str {
        ERRORS[*self as usize].0
    }

    /// Retrieve the description of this error.
    pub fn description(&self) -> &'static str {
        ERRORS[*self as usize].1
    }

    /// Indicates that this error is a callback failure.
    pub fn is_callback(&self) -> bool {
        (*self as u8) <= (ParserError::ChunkCompleteCallback as u8)
    }
}

/// Retrieve the short name of `error`.
pub fn error_name(error: ParserError) -> &'static str {
    error.name()
}

/// Retrieve the description of `error`.
pub fn error_description(error: ParserError) -> &'static str {
    error.description()
}

impl error::Error for ParserError {
}

impl fmt::Debug for ParserError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "<ParserError::{}: {}>",
            self.name(),
            self.description()
        )
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.description())
    }
}
