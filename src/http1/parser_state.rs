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

//! HTTP 1.x parser states.

use crate::url::UrlState;

/// Parser states.
///
/// States up to and including `HeadersDone` belong to the header section, and every byte parsed
/// within them counts toward the maximum header size.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum ParserState {
    /// A message that closes the connection has been parsed. Only CR and LF are allowed.
    Dead,

    /// Waiting for the first byte of a request or response.
    StartRequestOrResponse,

    /// Detecting a response or a `HEAD` request after the leading `H`.
    ResponseOrRequestH,

    // ---------------------------------------------------------------------------------------------
    // RESPONSE LINE STATES
    // ---------------------------------------------------------------------------------------------

    /// Waiting for the first byte of a response.
    StartResponse,

    /// Parsing `HTTP/` byte 2.
    ResponseH,

    /// Parsing `HTTP/` byte 3.
    ResponseHt,

    /// Parsing `HTTP/` byte 4.
    ResponseHtt,

    /// Parsing `HTTP/` byte 5.
    ResponseHttp,

    /// Parsing response HTTP major version.
    ResponseVersionMajor,

    /// Parsing response HTTP version dot.
    ResponseVersionDot,

    /// Parsing response HTTP minor version.
    ResponseVersionMinor,

    /// Parsing the space after the response HTTP version.
    ResponseVersionEnd,

    /// Parsing the first status code digit.
    ResponseFirstStatusCode,

    /// Parsing the remaining status code digits.
    ResponseStatusCode,

    /// Parsing the start of the status.
    ResponseStatusStart,

    /// Parsing status.
    ResponseStatus,

    /// Parsing the LF after the status.
    ResponseLineAlmostDone,

    // ---------------------------------------------------------------------------------------------
    // REQUEST LINE STATES
    // ---------------------------------------------------------------------------------------------

    /// Waiting for the first byte of a request.
    StartRequest,

    /// Parsing request method.
    RequestMethod,

    /// Parsing request URL.
    RequestUrl(UrlState),

    /// Parsing the spaces after the request URL, and the first byte of the HTTP version.
    RequestHttpStart,

    /// Parsing `HTTP/` byte 2.
    RequestHttpH,

    /// Parsing `HTTP/` byte 3.
    RequestHttpHt,

    /// Parsing `HTTP/` byte 4.
    RequestHttpHtt,

    /// Parsing `HTTP/` byte 5.
    RequestHttpHttp,

    /// Parsing `ICE/` byte 2.
    RequestHttpI,

    /// Parsing `ICE/` byte 3.
    RequestHttpIc,

    /// Parsing request HTTP major version.
    RequestVersionMajor,

    /// Parsing request HTTP version dot.
    RequestVersionDot,

    /// Parsing request HTTP minor version.
    RequestVersionMinor,

    /// Parsing the CR or LF after the request HTTP version.
    RequestVersionEnd,

    /// Parsing the LF after the request line.
    RequestLineAlmostDone,

    // ---------------------------------------------------------------------------------------------
    // HEADER STATES
    // ---------------------------------------------------------------------------------------------

    /// Parsing the first byte of a header field, or the end of the header section.
    HeaderFieldStart,

    /// Parsing header field.
    HeaderField,

    /// Discarding white space before a header value.
    HeaderValueDiscardWs,

    /// Parsing the LF of an empty header value line.
    HeaderValueDiscardWsAlmostDone,

    /// Detecting a folded continuation of an empty header value.
    HeaderValueDiscardLws,

    /// Parsing the first byte of a header value.
    HeaderValueStart,

    /// Parsing header value.
    HeaderValue,

    /// Detecting a folded continuation of a header value.
    HeaderValueLws,

    /// Parsing the LF after a header value.
    HeaderAlmostDone,

    // ---------------------------------------------------------------------------------------------
    // CHUNK SIZE STATES
    // ---------------------------------------------------------------------------------------------

    /// Parsing the first chunk size digit.
    ChunkSizeStart,

    /// Parsing chunk size.
    ChunkSize,

    /// Skipping chunk parameters.
    ChunkParameters,

    /// Parsing the LF after the chunk size line.
    ChunkSizeAlmostDone,

    // ---------------------------------------------------------------------------------------------
    // END OF HEADER STATES
    // ---------------------------------------------------------------------------------------------

    /// Parsing the LF that ends the header section.
    HeadersAlmostDone,

    /// Deciding how the body is framed.
    HeadersDone,

    // ---------------------------------------------------------------------------------------------
    // BODY STATES
    // ---------------------------------------------------------------------------------------------

    /// Parsing chunk data.
    ChunkData,

    /// Parsing the CR after chunk data.
    ChunkDataAlmostDone,

    /// Parsing the LF after chunk data.
    ChunkDataDone,

    /// Parsing a body with a known length.
    BodyIdentity,

    /// Parsing a body that ends with the stream.
    BodyIdentityEof,

    /// The message has been parsed.
    MessageDone
}

impl ParserState {
    /// Indicates that this state belongs to the header section.
    pub fn is_header(&self) -> bool {
        match *self {
            ParserState::ChunkData
            | ParserState::ChunkDataAlmostDone
            | ParserState::ChunkDataDone
            | ParserState::BodyIdentity
            | ParserState::BodyIdentityEof
            | ParserState::MessageDone => false,
            _ => true
        }
    }
}

/// Header classifier states.
///
/// These track which of the protocol relevant headers is being parsed, and which token of its
/// value is being matched.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum HeaderState {
    /// A header with no special meaning.
    General,

    /// Matched `c`.
    C,

    /// Matched `co`.
    Co,

    /// Matched `con`.
    Con,

    /// Matching `connection`.
    MatchingConnection,

    /// Matching `proxy-connection`.
    MatchingProxyConnection,

    /// Matching `content-length`.
    MatchingContentLength,

    /// Matching `transfer-encoding`.
    MatchingTransferEncoding,

    /// Matching `upgrade`.
    MatchingUpgrade,

    /// Matched `connection` or `proxy-connection`.
    Connection,

    /// Matched `content-length`.
    ContentLength,

    /// Parsing content length digits.
    ContentLengthNum,

    /// Parsing trailing content length white space.
    ContentLengthWs,

    /// Matched `transfer-encoding`.
    TransferEncoding,

    /// Matched `upgrade`.
    Upgrade,

    /// Waiting for the next transfer coding.
    MatchingTransferEncodingTokenStart,

    /// Matching the `chunked` transfer coding.
    MatchingTransferEncodingChunked,

    /// Skipping a transfer coding other than `chunked`.
    MatchingTransferEncodingToken,

    /// Waiting for the next connection token.
    MatchingConnectionTokenStart,

    /// Matching the `keep-alive` connection token.
    MatchingConnectionKeepAlive,

    /// Matching the `close` connection token.
    MatchingConnectionClose,

    /// Matching the `upgrade` connection token.
    MatchingConnectionUpgrade,

    /// Skipping an unknown connection token.
    MatchingConnectionToken,

    /// Matched the `chunked` transfer coding.
    TransferEncodingChunked,

    /// Matched the `keep-alive` connection token.
    ConnectionKeepAlive,

    /// Matched the `close` connection token.
    ConnectionClose,

    /// Matched the `upgrade` connection token.
    ConnectionUpgrade
}
