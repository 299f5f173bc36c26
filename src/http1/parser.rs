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

//! HTTP 1.x parser.

mod body;
mod chunked;
mod header;
mod request;
mod response;

use crate::fsm::ParserValue;
use crate::http1::flags::Flags;
use crate::http1::http_handler::{ Flow, HttpHandler };
use crate::http1::method::Method;
use crate::http1::parser_error::ParserError;
use crate::http1::parser_state::{ HeaderState, ParserState };
use crate::http1::parser_type::ParserType;
use crate::url::UrlState;

use tracing::{ debug, trace };

/// Default maximum header section size, including the request or status line.
pub const MAX_HEADER_SIZE: u32 = 80 * 1024;

/// Content length sentinel for a message without a content length.
const NO_CONTENT_LENGTH: u64 = u64::MAX;

/// Spans that are reported through data callbacks.
#[derive(Clone,Copy,Debug,PartialEq)]
pub(crate) enum Mark {
    /// Body data.
    Body,

    /// Header field.
    HeaderField,

    /// Header value.
    HeaderValue,

    /// Response status reason.
    Status,

    /// Request URL.
    Url
}

/// Stream details for a single call to `Parser::execute()`.
pub(crate) struct ParserContext<'a> {
    /// Current byte.
    pub(crate) byte: u8,

    /// Pending span.
    pub(crate) mark: Option<Mark>,

    /// Pending span start index.
    pub(crate) mark_index: usize,

    /// Stream being parsed.
    pub(crate) stream: &'a [u8],

    /// Index of the byte after the current byte.
    pub(crate) stream_index: usize
}

impl<'a> ParserContext<'a> {
    /// Create a new `ParserContext` that resumes span `mark` at the start of `stream`.
    fn new(stream: &'a [u8], mark: Option<Mark>) -> ParserContext<'a> {
        ParserContext{
            byte:         0,
            mark:         mark,
            mark_index:   0,
            stream:       stream,
            stream_index: 0
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// HTTP 1.x parser.
///
/// A `Parser` holds the state of a single connection. Stream data is handed to
/// [`execute()`](#method.execute) as it arrives, in pieces of any size, and parsed fields are
/// reported to a [`HttpHandler`](trait.HttpHandler.html) implementation.
pub struct Parser {
    /// Remaining body or chunk length, or the parsed content length.
    content_length: u64,

    /// Current error.
    error: Option<ParserError>,

    /// Message flags.
    flags: Flags,

    /// Header classifier state.
    header_state: HeaderState,

    /// Header section bytes read.
    header_bytes_read: u32,

    /// HTTP major version.
    http_major: u8,

    /// HTTP minor version.
    http_minor: u8,

    /// Match index for methods, header names and header value tokens.
    index: usize,

    /// Skip the header value byte check.
    lenient_headers: bool,

    /// Maximum header section size.
    max_header_size: u32,

    /// Request method.
    method: Option<Method>,

    /// Parser type.
    parser_type: ParserType,

    /// Current state.
    state: ParserState,

    /// Status code.
    status_code: u16,

    /// Indicates that the connection changes protocol after the current message.
    upgrade: bool
}

impl Parser {
    /// Create a new `Parser` of type `parser_type`.
    pub fn new(parser_type: ParserType) -> Parser {
        let mut parser = Parser{
            content_length:    NO_CONTENT_LENGTH,
            error:             None,
            flags:             Flags::empty(),
            header_state:      HeaderState::General,
            header_bytes_read: 0,
            http_major:        0,
            http_minor:        0,
            index:             0,
            lenient_headers:   false,
            max_header_size:   MAX_HEADER_SIZE,
            method:            None,
            parser_type:       parser_type,
            state:             ParserState::StartRequestOrResponse,
            status_code:       0,
            upgrade:           false
        };

        parser.init(parser_type);
        parser
    }

    /// Reset this `Parser` to parse a new connection of type `parser_type`.
    ///
    /// Configuration set by [`set_lenient_headers()`](#method.set_lenient_headers) and
    /// [`set_max_header_size()`](#method.set_max_header_size) is kept.
    pub fn init(&mut self, parser_type: ParserType) {
        self.content_length    = NO_CONTENT_LENGTH;
        self.error             = None;
        self.flags             = Flags::empty();
        self.header_state      = HeaderState::General;
        self.header_bytes_read = 0;
        self.http_major        = 0;
        self.http_minor        = 0;
        self.index             = 0;
        self.method            = None;
        self.parser_type       = parser_type;
        self.status_code       = 0;
        self.upgrade           = false;
        self.state             = self.start_state();
    }

    /// Parse `stream`, and report the parsed fields to `handler`.
    ///
    /// Returns the number of bytes consumed. This is less than `stream.len()` when the parser
    /// stopped early:
    ///
    /// - An error was found, and [`error()`](#method.error) returns it. The error is sticky, and
    ///   every further call returns `0` until [`init()`](#method.init) is called.
    /// - A callback paused the parser. Calls return `0` until [`pause(false)`](#method.pause) is
    ///   called, after which the unconsumed bytes must be supplied again.
    /// - The message upgraded the connection, and the remaining bytes belong to another protocol.
    ///
    /// An empty `stream` signals the end of the stream. A body that ends with the stream is
    /// completed, and a message that is cut short fails with `ParserError::InvalidEofState`.
    pub fn execute<T: HttpHandler>(&mut self, handler: &mut T, stream: &[u8]) -> usize {
        if self.error.is_some() {
            return 0;
        }

        if stream.is_empty() {
            return self.finish(handler);
        }

        // spans that were pending at the end of the previous stream continue at index 0
        let mark = match self.state {
            ParserState::HeaderField => Some(Mark::HeaderField),
            ParserState::HeaderValue => Some(Mark::HeaderValue),
            ParserState::ResponseStatus => Some(Mark::Status),
            ParserState::RequestUrl(UrlState::SpacesBeforeUrl) => None,
            ParserState::RequestUrl(_) => Some(Mark::Url),
            _ => None
        };

        let mut context = ParserContext::new(stream, mark);
        let mut replay  = false;

        loop {
            if !replay {
                if bs_available!(context) == 0 {
                    break;
                }

                bs_next!(context);

                if self.state.is_header() && self.count_header_bytes(1) {
                    let index = context.stream_index - 1;

                    self.fail(ParserError::HeaderOverflow, index);

                    return index;
                }
            }

            match self.dispatch(handler, &mut context) {
                ParserValue::Continue => {
                    replay = false;
                },
                ParserValue::Replay => {
                    replay = true;
                },
                ParserValue::Exit(consumed) => {
                    return consumed;
                }
            }
        }

        match self.flush(handler, &mut context) {
            ParserValue::Exit(consumed) => consumed,
            _ => stream.len()
        }
    }

    /// Pause or resume this `Parser`.
    ///
    /// Pausing outside of a callback makes every call to [`execute()`](#method.execute) return
    /// `0` until the parser is resumed. This must not be called while the parser is in an error
    /// state.
    pub fn pause(&mut self, paused: bool) {
        match self.error {
            None | Some(ParserError::Paused) => {
                debug!(paused = paused, "toggling pause");

                self.error = if paused {
                    Some(ParserError::Paused)
                } else {
                    None
                };
            },
            Some(error) => {
                debug_assert!(false, "attempting to pause parser in error state {}", error.name());
            }
        }
    }

    /// Indicates that the connection may be used for another message after the current one.
    pub fn should_keep_alive(&self) -> bool {
        if self.http_major > 0 && self.http_minor > 0 {
            // HTTP/1.1
            if self.flags.contains(Flags::CONNECTION_CLOSE) {
                return false;
            }
        } else if !self.flags.contains(Flags::CONNECTION_KEEP_ALIVE) {
            // HTTP/1.0 or earlier
            return false;
        }

        !self.needs_eof()
    }

    /// Indicates that the message body ends with the stream.
    pub(crate) fn needs_eof(&self) -> bool {
        if self.parser_type == ParserType::Request {
            return false;
        }

        if self.status_code / 100 == 1
        || self.status_code == 204
        || self.status_code == 304
        || self.flags.contains(Flags::SKIP_BODY) {
            return false;
        }

        !self.flags.contains(Flags::CHUNKED) && self.content_length == NO_CONTENT_LENGTH
    }

    /// Indicates that the terminating zero length chunk has been parsed, along with its
    /// trailers.
    pub fn is_final_chunk(&self) -> bool {
        self.state == ParserState::MessageDone
    }

    /// Retrieve the remaining body length, or the chunk length while parsing a chunk.
    ///
    /// Returns `u64::MAX` when no content length has been found.
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    /// Retrieve the current error.
    pub fn error(&self) -> Option<ParserError> {
        self.error
    }

    /// Retrieve the message flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Retrieve the number of header section bytes read.
    pub fn header_bytes_read(&self) -> u32 {
        self.header_bytes_read
    }

    /// Retrieve the header classifier state.
    pub fn header_state(&self) -> HeaderState {
        self.header_state
    }

    /// Retrieve the HTTP major version.
    pub fn http_major(&self) -> u8 {
        self.http_major
    }

    /// Retrieve the HTTP minor version.
    pub fn http_minor(&self) -> u8 {
        self.http_minor
    }

    /// Indicates that the parser is paused.
    pub fn is_paused(&self) -> bool {
        self.error == Some(ParserError::Paused)
    }

    /// Indicates that the connection changes protocol after the current message.
    pub fn is_upgrade(&self) -> bool {
        self.upgrade
    }

    /// Indicates that the header value byte check is skipped.
    pub fn lenient_headers(&self) -> bool {
        self.lenient_headers
    }

    /// Retrieve the maximum header section size.
    pub fn max_header_size(&self) -> u32 {
        self.max_header_size
    }

    /// Retrieve the request method.
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// Retrieve the parser type.
    ///
    /// A `ParserType::Both` parser switches to the type of the first message it finds.
    pub fn parser_type(&self) -> ParserType {
        self.parser_type
    }

    /// Skip the header value byte check.
    pub fn set_lenient_headers(&mut self, lenient: bool) {
        self.lenient_headers = lenient;
    }

    /// Set the maximum header section size.
    pub fn set_max_header_size(&mut self, size: u32) {
        self.max_header_size = size;
    }

    /// Retrieve the current state.
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Retrieve the status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    // ---------------------------------------------------------------------------------------------
    // INTERNAL
    // ---------------------------------------------------------------------------------------------

    /// Prepare for a new message.
    fn begin_message(&mut self) {
        self.flags          = Flags::empty();
        self.content_length = NO_CONTENT_LENGTH;

        trace!(parser_type = ?self.parser_type, state = ?self.state, "message begin");
    }

    /// Add `length` header section bytes, and indicate that the maximum has been exceeded.
    fn count_header_bytes(&mut self, length: usize) -> bool {
        let length = if length > u32::MAX as usize {
            u32::MAX
        } else {
            length as u32
        };

        self.header_bytes_read = self.header_bytes_read.saturating_add(length);
        self.header_bytes_read > self.max_header_size
    }

    /// Retrieve the number of header section bytes that may still be read.
    fn header_budget(&self) -> usize {
        self.max_header_size.saturating_sub(self.header_bytes_read) as usize
    }

    /// Main state dispatcher.
    fn dispatch<T: HttpHandler>(&mut self, handler: &mut T, context: &mut ParserContext)
    -> ParserValue {
        match self.state {
            ParserState::Dead                           => self.dead(context),
            ParserState::StartRequestOrResponse         => self.start_request_or_response(handler, context),
            ParserState::ResponseOrRequestH             => self.response_or_request_h(context),

            // response line
            ParserState::StartResponse                  => self.start_response(handler, context),
            ParserState::ResponseH                      => self.constant(context, b'T', ParserState::ResponseHt),
            ParserState::ResponseHt                     => self.constant(context, b'T', ParserState::ResponseHtt),
            ParserState::ResponseHtt                    => self.constant(context, b'P', ParserState::ResponseHttp),
            ParserState::ResponseHttp                   => self.constant(context, b'/', ParserState::ResponseVersionMajor),
            ParserState::ResponseVersionMajor           => self.response_version_major(context),
            ParserState::ResponseVersionDot             => self.response_version_dot(context),
            ParserState::ResponseVersionMinor           => self.response_version_minor(context),
            ParserState::ResponseVersionEnd             => self.response_version_end(context),
            ParserState::ResponseFirstStatusCode        => self.response_first_status_code(context),
            ParserState::ResponseStatusCode             => self.response_status_code(context),
            ParserState::ResponseStatusStart            => self.response_status_start(context),
            ParserState::ResponseStatus                 => self.response_status(handler, context),
            ParserState::ResponseLineAlmostDone         => self.response_line_almost_done(context),

            // request line
            ParserState::StartRequest                   => self.start_request(handler, context),
            ParserState::RequestMethod                  => self.request_method(context),
            ParserState::RequestUrl(state)              => self.request_url(handler, context, state),
            ParserState::RequestHttpStart               => self.request_http_start(context),
            ParserState::RequestHttpH                   => self.constant(context, b'T', ParserState::RequestHttpHt),
            ParserState::RequestHttpHt                  => self.constant(context, b'T', ParserState::RequestHttpHtt),
            ParserState::RequestHttpHtt                 => self.constant(context, b'P', ParserState::RequestHttpHttp),
            ParserState::RequestHttpI                   => self.constant(context, b'C', ParserState::RequestHttpIc),
            ParserState::RequestHttpIc                  => self.constant(context, b'E', ParserState::RequestHttpHttp),
            ParserState::RequestHttpHttp                => self.constant(context, b'/', ParserState::RequestVersionMajor),
            ParserState::RequestVersionMajor            => self.request_version_major(context),
            ParserState::RequestVersionDot              => self.request_version_dot(context),
            ParserState::RequestVersionMinor            => self.request_version_minor(context),
            ParserState::RequestVersionEnd              => self.request_version_end(context),
            ParserState::RequestLineAlmostDone          => self.request_line_almost_done(context),

            // headers
            ParserState::HeaderFieldStart               => self.header_field_start(context),
            ParserState::HeaderField                    => self.header_field(handler, context),
            ParserState::HeaderValueDiscardWs           => self.header_value_discard_ws(context),
            ParserState::HeaderValueDiscardWsAlmostDone => self.header_value_discard_ws_almost_done(context),
            ParserState::HeaderValueDiscardLws          => self.header_value_discard_lws(handler, context),
            ParserState::HeaderValueStart               => self.header_value_start(context),
            ParserState::HeaderValue                    => self.header_value(handler, context),
            ParserState::HeaderValueLws                 => self.header_value_lws(context),
            ParserState::HeaderAlmostDone               => self.header_almost_done(context),
            ParserState::HeadersAlmostDone              => self.headers_almost_done(handler, context),
            ParserState::HeadersDone                    => self.headers_done(handler, context),

            // chunked
            ParserState::ChunkSizeStart                 => self.chunk_size_start(context),
            ParserState::ChunkSize                      => self.chunk_size(context),
            ParserState::ChunkParameters                => self.chunk_parameters(context),
            ParserState::ChunkSizeAlmostDone            => self.chunk_size_almost_done(handler, context),
            ParserState::ChunkData                      => self.chunk_data(context),
            ParserState::ChunkDataAlmostDone            => self.chunk_data_almost_done(handler, context),
            ParserState::ChunkDataDone                  => self.chunk_data_done(handler, context),

            // body
            ParserState::BodyIdentity                   => self.body_identity(handler, context),
            ParserState::BodyIdentityEof                => self.body_identity_eof(context),
            ParserState::MessageDone                    => self.message_done(handler, context)
        }
    }

    /// Finish the current message, and move on to the next one.
    fn end_message(&mut self) {
        self.header_bytes_read = 0;
        self.state             = self.new_message();

        trace!(keep_alive = self.should_keep_alive(), state = ?self.state, "message complete");
    }

    /// Set error `error` at stream index `index`.
    fn fail(&mut self, error: ParserError, index: usize) {
        debug!(error = error.name(), index = index, state = ?self.state, "parser error");

        self.error = Some(error);
    }

    /// Handle the end of the stream.
    fn finish<T: HttpHandler>(&mut self, handler: &mut T) -> usize {
        match self.state {
            ParserState::BodyIdentityEof => {
                self.end_message();

                match handler.on_message_complete(&*self) {
                    Flow::Continue => {},
                    Flow::Pause => {
                        self.set_paused(0);
                    },
                    Flow::Error => {
                        self.fail(ParserError::MessageCompleteCallback, 0);
                    }
                }
            },
            ParserState::Dead
            | ParserState::StartRequestOrResponse
            | ParserState::StartRequest
            | ParserState::StartResponse => {},
            _ => {
                self.fail(ParserError::InvalidEofState, 0);
            }
        }

        0
    }

    /// Report the span that is pending at the end of the stream.
    fn flush<T: HttpHandler>(&mut self, handler: &mut T, context: &mut ParserContext)
    -> ParserValue {
        let consumed = context.stream.len();

        match context.mark {
            Some(Mark::Body) => {
                callback_data!(self, handler, context, Mark::Body, on_body,
                               ParserError::BodyCallback, consumed, bs_slice!(context));
            },
            Some(Mark::HeaderField) => {
                callback_data!(self, handler, context, Mark::HeaderField, on_header_field,
                               ParserError::HeaderFieldCallback, consumed, bs_slice!(context));
            },
            Some(Mark::HeaderValue) => {
                callback_data!(self, handler, context, Mark::HeaderValue, on_header_value,
                               ParserError::HeaderValueCallback, consumed, bs_slice!(context));
            },
            Some(Mark::Status) => {
                callback_data!(self, handler, context, Mark::Status, on_status,
                               ParserError::StatusCallback, consumed, bs_slice!(context));
            },
            Some(Mark::Url) => {
                callback_data!(self, handler, context, Mark::Url, on_url,
                               ParserError::UrlCallback, consumed, bs_slice!(context));
            },
            None => {}
        }

        ParserValue::Continue
    }

    /// Retrieve the state that follows a complete message.
    fn new_message(&self) -> ParserState {
        if cfg!(feature = "strict") && !self.should_keep_alive() {
            ParserState::Dead
        } else {
            self.start_state()
        }
    }

    /// Pause this parser from within a callback, having consumed `consumed` bytes.
    fn set_paused(&mut self, consumed: usize) {
        debug!(consumed = consumed, state = ?self.state, "callback paused parser");

        self.error = Some(ParserError::Paused);
    }

    /// Retrieve the state that begins a message of the current type.
    fn start_state(&self) -> ParserState {
        match self.parser_type {
            ParserType::Request  => ParserState::StartRequest,
            ParserType::Response => ParserState::StartResponse,
            ParserType::Both     => ParserState::StartRequestOrResponse
        }
    }

    // ---------------------------------------------------------------------------------------------
    // CONNECTION STATES
    // ---------------------------------------------------------------------------------------------

    /// Match byte `expected` of the `HTTP/` or `ICE/` constant, and continue with `next`.
    #[inline]
    fn constant(&mut self, context: &mut ParserContext, expected: u8, next: ParserState)
    -> ParserValue {
        strict_check!(self, context, context.byte != expected);
        transition!(self, next);
    }

    #[inline]
    fn dead(&mut self, context: &mut ParserContext) -> ParserValue {
        if context.byte == b'\r' || context.byte == b'\n' {
            return ParserValue::Continue;
        }

        exit_error!(self, context, ParserError::ClosedConnection);
    }

    #[inline]
    fn start_request_or_response<T: HttpHandler>(&mut self, handler: &mut T,
                                                 context: &mut ParserContext)
    -> ParserValue {
        if context.byte == b'\r' || context.byte == b'\n' {
            return ParserValue::Continue;
        }

        self.begin_message();

        if context.byte == b'H' {
            self.state = ParserState::ResponseOrRequestH;

            callback!(self, handler, on_message_begin, ParserError::MessageBeginCallback,
                      context.stream_index);

            ParserValue::Continue
        } else {
            self.parser_type = ParserType::Request;

            replay!(self, ParserState::StartRequest);
        }
    }

    #[inline]
    fn response_or_request_h(&mut self, context: &mut ParserContext) -> ParserValue {
        match context.byte {
            b'T' => {
                self.parser_type = ParserType::Response;

                transition!(self, ParserState::ResponseHt);
            },
            b'E' => {
                self.parser_type = ParserType::Request;
                self.method      = Some(Method::Head);
                self.index       = 2;

                transition!(self, ParserState::RequestMethod);
            },
            _ => {
                exit_error!(self, context, ParserError::InvalidConstant);
            }
        }
    }
}
