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

//! Header section states, and the classifier that recognizes the headers and value tokens that
//! affect framing.
//!
//! Names and tokens are matched one byte at a time against their lower-cased spelling, so
//! classification never requires a complete name or value.

use crate::byte::{ is_digit, is_header_char, is_strict_token, lower, token };
use crate::fsm::ParserValue;
use crate::http1::flags::Flags;
use crate::http1::http_handler::{ HeadersFlow, HttpHandler };
use crate::http1::method::Method;
use crate::http1::parser::{ Mark, Parser, ParserContext, NO_CONTENT_LENGTH };
use crate::http1::parser_error::ParserError;
use crate::http1::parser_state::{ HeaderState, ParserState };
use crate::http1::parser_type::ParserType;

const CHUNKED: &[u8] = b"chunked";
const CLOSE: &[u8] = b"close";
const CONNECTION: &[u8] = b"connection";
const CONTENT_LENGTH: &[u8] = b"content-length";
const KEEP_ALIVE: &[u8] = b"keep-alive";
const PROXY_CONNECTION: &[u8] = b"proxy-connection";
const TRANSFER_ENCODING: &[u8] = b"transfer-encoding";
const UPGRADE: &[u8] = b"upgrade";

/// Match `byte` against `name` at `index`.
///
/// Returns `mismatch` when `byte` does not match, `matched` when it is the last byte of `name`,
/// and `matching` otherwise.
fn match_name(name: &[u8], index: usize, byte: u8, matching: HeaderState,
              matched: HeaderState, mismatch: HeaderState)
-> HeaderState {
    if name.get(index) != Some(&byte) {
        mismatch
    } else if index == name.len() - 1 {
        matched
    } else {
        matching
    }
}

/// Retrieve the header state for the first byte of a connection token.
fn connection_token(byte: u8) -> Option<HeaderState> {
    match byte {
        b'k' => Some(HeaderState::MatchingConnectionKeepAlive),
        b'c' => Some(HeaderState::MatchingConnectionClose),
        b'u' => Some(HeaderState::MatchingConnectionUpgrade),
        _    => None
    }
}

/// Retrieve the header state for the first byte of a transfer coding.
fn transfer_coding(byte: u8) -> HeaderState {
    match byte {
        b'c'               => HeaderState::MatchingTransferEncodingChunked,
        b' ' | b'\t' | b',' => HeaderState::MatchingTransferEncodingTokenStart,
        _                  => HeaderState::MatchingTransferEncodingToken
    }
}

impl Parser {
    /// Classify header field byte `byte`, with lower-cased token value `token`.
    fn classify_field(&mut self, token: u8, byte: u8) {
        let state = self.header_state;

        self.header_state = match state {
            HeaderState::General => HeaderState::General,
            HeaderState::C => {
                self.index += 1;

                if token == b'o' {
                    HeaderState::Co
                } else {
                    HeaderState::General
                }
            },
            HeaderState::Co => {
                self.index += 1;

                if token == b'n' {
                    HeaderState::Con
                } else {
                    HeaderState::General
                }
            },
            HeaderState::Con => {
                self.index += 1;

                match token {
                    b'n' => HeaderState::MatchingConnection,
                    b't' => HeaderState::MatchingContentLength,
                    _    => HeaderState::General
                }
            },
            HeaderState::MatchingConnection => {
                self.index += 1;

                match_name(CONNECTION, self.index, token, state, HeaderState::Connection,
                           HeaderState::General)
            },
            HeaderState::MatchingProxyConnection => {
                self.index += 1;

                match_name(PROXY_CONNECTION, self.index, token, state, HeaderState::Connection,
                           HeaderState::General)
            },
            HeaderState::MatchingContentLength => {
                self.index += 1;

                match_name(CONTENT_LENGTH, self.index, token, state, HeaderState::ContentLength,
                           HeaderState::General)
            },
            HeaderState::MatchingTransferEncoding => {
                self.index += 1;

                match_name(TRANSFER_ENCODING, self.index, token, state,
                           HeaderState::TransferEncoding, HeaderState::General)
            },
            HeaderState::MatchingUpgrade => {
                self.index += 1;

                match_name(UPGRADE, self.index, token, state, HeaderState::Upgrade,
                           HeaderState::General)
            },
            HeaderState::Connection
            | HeaderState::ContentLength
            | HeaderState::TransferEncoding
            | HeaderState::Upgrade => {
                // non-strict tokens allow trailing spaces
                if byte == b' ' {
                    state
                } else {
                    HeaderState::General
                }
            },
            _ => HeaderState::General
        };
    }

    /// Classify header value byte `byte`.
    fn classify_value(&mut self, byte: u8) -> Result<(), ParserError> {
        let lowered = lower(byte);
        let state   = self.header_state;

        self.header_state = match state {
            HeaderState::General => HeaderState::General,
            HeaderState::ContentLength | HeaderState::ContentLengthNum => {
                if byte == b' ' {
                    if state == HeaderState::ContentLength {
                        state
                    } else {
                        HeaderState::ContentLengthWs
                    }
                } else if !is_digit(byte) {
                    return Err(ParserError::InvalidContentLength);
                } else if (u64::MAX - 10) / 10 < self.content_length {
                    return Err(ParserError::InvalidContentLength);
                } else {
                    self.content_length = self.content_length * 10 + u64::from(byte - b'0');

                    HeaderState::ContentLengthNum
                }
            },
            HeaderState::ContentLengthWs => {
                if byte == b' ' {
                    state
                } else {
                    return Err(ParserError::InvalidContentLength);
                }
            },
            HeaderState::MatchingTransferEncodingTokenStart => {
                self.index = 0;

                transfer_coding(lowered)
            },
            HeaderState::MatchingTransferEncodingChunked => {
                if byte == b',' {
                    HeaderState::MatchingTransferEncodingTokenStart
                } else {
                    self.index += 1;

                    match_name(CHUNKED, self.index, lowered, state,
                               HeaderState::TransferEncodingChunked,
                               HeaderState::MatchingTransferEncodingToken)
                }
            },
            HeaderState::MatchingTransferEncodingToken => {
                if byte == b',' {
                    HeaderState::MatchingTransferEncodingTokenStart
                } else {
                    state
                }
            },
            HeaderState::MatchingConnectionTokenStart => {
                if let Some(next) = connection_token(lowered) {
                    next
                } else if is_strict_token(lowered) {
                    HeaderState::MatchingConnectionToken
                } else if lowered == b' ' || lowered == b'\t' {
                    state
                } else {
                    HeaderState::General
                }
            },
            HeaderState::MatchingConnectionKeepAlive => {
                self.index += 1;

                match_name(KEEP_ALIVE, self.index, lowered, state,
                           HeaderState::ConnectionKeepAlive, HeaderState::MatchingConnectionToken)
            },
            HeaderState::MatchingConnectionClose => {
                self.index += 1;

                match_name(CLOSE, self.index, lowered, state, HeaderState::ConnectionClose,
                           HeaderState::MatchingConnectionToken)
            },
            HeaderState::MatchingConnectionUpgrade => {
                self.index += 1;

                match_name(UPGRADE, self.index, lowered, state, HeaderState::ConnectionUpgrade,
                           HeaderState::MatchingConnectionToken)
            },
            HeaderState::MatchingConnectionToken => {
                if byte == b',' {
                    self.index = 0;

                    HeaderState::MatchingConnectionTokenStart
                } else {
                    state
                }
            },
            HeaderState::TransferEncodingChunked => {
                // only a final chunked coding counts
                match byte {
                    b' ' | b'\t' => state,
                    b','         => HeaderState::MatchingTransferEncodingTokenStart,
                    _            => HeaderState::MatchingTransferEncodingToken
                }
            },
            HeaderState::ConnectionKeepAlive
            | HeaderState::ConnectionClose
            | HeaderState::ConnectionUpgrade => {
                if byte == b',' {
                    self.set_connection_flag(state);

                    self.index = 0;

                    HeaderState::MatchingConnectionTokenStart
                } else if byte == b' ' {
                    state
                } else {
                    HeaderState::MatchingConnectionToken
                }
            },
            _ => HeaderState::General
        };

        Ok(())
    }

    /// Set the flag that belongs to a completely matched header value token.
    fn set_connection_flag(&mut self, state: HeaderState) {
        match state {
            HeaderState::ConnectionKeepAlive => {
                self.flags.insert(Flags::CONNECTION_KEEP_ALIVE);
            },
            HeaderState::ConnectionClose => {
                self.flags.insert(Flags::CONNECTION_CLOSE);
            },
            HeaderState::ConnectionUpgrade => {
                self.flags.insert(Flags::CONNECTION_UPGRADE);
            },
            HeaderState::TransferEncodingChunked => {
                self.flags.insert(Flags::CHUNKED);
            },
            _ => {}
        }
    }

    // ---------------------------------------------------------------------------------------------
    // HEADER STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    pub(super) fn header_field_start(&mut self, context: &mut ParserContext) -> ParserValue {
        match context.byte {
            b'\r' => {
                transition!(self, ParserState::HeadersAlmostDone);
            },
            b'\n' => {
                // a bare LF ends the header section as well
                replay!(self, ParserState::HeadersAlmostDone);
            },
            _ => {}
        }

        let token = token(context.byte);

        if token == 0 {
            exit_error!(self, context, ParserError::InvalidHeaderToken);
        }

        mark!(context, Mark::HeaderField);

        self.index        = 0;
        self.header_state = match token {
            b'c' => HeaderState::C,
            b'p' => HeaderState::MatchingProxyConnection,
            b't' => HeaderState::MatchingTransferEncoding,
            b'u' => HeaderState::MatchingUpgrade,
            _    => HeaderState::General
        };

        transition!(self, ParserState::HeaderField);
    }

    #[inline]
    pub(super) fn header_field<T: HttpHandler>(&mut self, handler: &mut T,
                                               context: &mut ParserContext)
    -> ParserValue {
        // the current byte has been counted already
        let start  = context.stream_index - 1;
        let budget = self.header_budget();

        loop {
            let token = token(context.byte);

            if token == 0 {
                break;
            }

            self.classify_field(token, context.byte);

            if bs_available!(context) == 0 {
                count_header_size!(self, context, context.stream_index - 1 - start);

                return ParserValue::Continue;
            }

            bs_next!(context);

            if context.stream_index - 1 - start > budget {
                count_header_size!(self, context, context.stream_index - 1 - start);
            }
        }

        count_header_size!(self, context, context.stream_index - 1 - start);

        if context.byte != b':' {
            exit_error!(self, context, ParserError::InvalidHeaderToken);
        }

        self.state = ParserState::HeaderValueDiscardWs;

        callback_data!(self, handler, context, Mark::HeaderField, on_header_field,
                       ParserError::HeaderFieldCallback, context.stream_index);

        ParserValue::Continue
    }

    #[inline]
    pub(super) fn header_value_discard_ws(&mut self, context: &mut ParserContext) -> ParserValue {
        match context.byte {
            b' ' | b'\t' => {
                ParserValue::Continue
            },
            b'\r' => {
                transition!(self, ParserState::HeaderValueDiscardWsAlmostDone);
            },
            b'\n' => {
                transition!(self, ParserState::HeaderValueDiscardLws);
            },
            _ => {
                replay!(self, ParserState::HeaderValueStart);
            }
        }
    }

    #[inline]
    pub(super) fn header_value_discard_ws_almost_done(&mut self, context: &mut ParserContext)
    -> ParserValue {
        strict_check!(self, context, context.byte != b'\n');
        transition!(self, ParserState::HeaderValueDiscardLws);
    }

    #[inline]
    pub(super) fn header_value_discard_lws<T: HttpHandler>(&mut self, handler: &mut T,
                                                           context: &mut ParserContext)
    -> ParserValue {
        if context.byte == b' ' || context.byte == b'\t' {
            // folded onto the next line before the value began
            transition!(self, ParserState::HeaderValueDiscardWs);
        }

        if self.header_state == HeaderState::ContentLength {
            exit_error!(self, context, ParserError::InvalidContentLength);
        }

        self.set_connection_flag(self.header_state);

        // empty value
        mark!(context, Mark::HeaderValue);

        self.state = ParserState::HeaderFieldStart;

        callback_data!(self, handler, context, Mark::HeaderValue, on_header_value,
                       ParserError::HeaderValueCallback, context.stream_index - 1);

        ParserValue::Replay
    }

    #[inline]
    pub(super) fn header_value_start(&mut self, context: &mut ParserContext) -> ParserValue {
        mark!(context, Mark::HeaderValue);

        self.state = ParserState::HeaderValue;
        self.index = 0;

        let lowered = lower(context.byte);

        match self.header_state {
            HeaderState::Upgrade => {
                self.flags.insert(Flags::UPGRADE);

                self.header_state = HeaderState::General;
            },
            HeaderState::TransferEncoding => {
                self.header_state = transfer_coding(lowered);
            },
            HeaderState::ContentLength => {
                if !is_digit(context.byte) {
                    exit_error!(self, context, ParserError::InvalidContentLength);
                }

                if self.flags.contains(Flags::CONTENT_LENGTH) {
                    exit_error!(self, context, ParserError::UnexpectedContentLength);
                }

                self.flags.insert(Flags::CONTENT_LENGTH);

                self.content_length = u64::from(context.byte - b'0');
                self.header_state   = HeaderState::ContentLengthNum;
            },
            HeaderState::ContentLengthWs
            | HeaderState::MatchingConnectionTokenStart
            | HeaderState::MatchingTransferEncodingTokenStart
            | HeaderState::MatchingTransferEncodingToken
            | HeaderState::TransferEncodingChunked => {
                // continued by a folded line
            },
            HeaderState::MatchingTransferEncodingChunked => {
                // a folded line splits the coding
                self.header_state = HeaderState::MatchingTransferEncodingToken;
            },
            HeaderState::Connection => {
                self.header_state = connection_token(lowered)
                                    .unwrap_or(HeaderState::MatchingConnectionToken);
            },
            _ => {
                self.header_state = HeaderState::General;
            }
        }

        ParserValue::Continue
    }

    #[inline]
    pub(super) fn header_value<T: HttpHandler>(&mut self, handler: &mut T,
                                               context: &mut ParserContext)
    -> ParserValue {
        // the current byte has been counted already
        let start  = context.stream_index - 1;
        let budget = self.header_budget();

        loop {
            match context.byte {
                b'\r' => {
                    self.state = ParserState::HeaderAlmostDone;

                    count_header_size!(self, context, context.stream_index - 1 - start);

                    callback_data!(self, handler, context, Mark::HeaderValue, on_header_value,
                                   ParserError::HeaderValueCallback, context.stream_index);

                    return ParserValue::Continue;
                },
                b'\n' => {
                    self.state = ParserState::HeaderAlmostDone;

                    count_header_size!(self, context, context.stream_index - 1 - start);

                    callback_data!(self, handler, context, Mark::HeaderValue, on_header_value,
                                   ParserError::HeaderValueCallback, context.stream_index - 1);

                    return ParserValue::Replay;
                },
                byte => {
                    if !self.lenient_headers && !is_header_char(byte) {
                        exit_error!(self, context, ParserError::InvalidHeaderToken);
                    }

                    if let Err(error) = self.classify_value(byte) {
                        exit_error!(self, context, error);
                    }
                }
            }

            if bs_available!(context) == 0 {
                count_header_size!(self, context, context.stream_index - 1 - start);

                return ParserValue::Continue;
            }

            bs_next!(context);

            if context.stream_index - 1 - start > budget {
                count_header_size!(self, context, context.stream_index - 1 - start);
            }
        }
    }

    #[inline]
    pub(super) fn header_almost_done(&mut self, context: &mut ParserContext) -> ParserValue {
        if context.byte != b'\n' {
            exit_error!(self, context, ParserError::LfExpected);
        }

        transition!(self, ParserState::HeaderValueLws);
    }

    #[inline]
    pub(super) fn header_value_lws(&mut self, context: &mut ParserContext) -> ParserValue {
        if context.byte == b' ' || context.byte == b'\t' {
            // obsolete line folding
            if self.header_state == HeaderState::ContentLengthNum {
                self.header_state = HeaderState::ContentLengthWs;
            }

            replay!(self, ParserState::HeaderValueStart);
        }

        self.set_connection_flag(self.header_state);

        replay!(self, ParserState::HeaderFieldStart);
    }

    // ---------------------------------------------------------------------------------------------
    // HEADERS COMPLETE STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    pub(super) fn headers_almost_done<T: HttpHandler>(&mut self, handler: &mut T,
                                                      context: &mut ParserContext)
    -> ParserValue {
        strict_check!(self, context, context.byte != b'\n');

        if self.flags.contains(Flags::TRAILING) {
            // end of the trailers that follow the last chunk
            self.state = ParserState::MessageDone;

            callback!(self, handler, on_chunk_complete, ParserError::ChunkCompleteCallback,
                      context.stream_index - 1);

            return ParserValue::Replay;
        }

        if self.flags.contains(Flags::CHUNKED | Flags::CONTENT_LENGTH) {
            exit_error!(self, context, ParserError::UnexpectedContentLength);
        }

        self.state = ParserState::HeadersDone;

        // upgrade is visible from within on_headers_complete()
        self.upgrade = if self.flags.contains(Flags::UPGRADE | Flags::CONNECTION_UPGRADE) {
            // responses only upgrade with 101 Switching Protocols, otherwise the headers just
            // announce support
            self.parser_type == ParserType::Request || self.status_code == 101
        } else {
            self.method == Some(Method::Connect)
        };

        let consumed = context.stream_index - 1;

        match handler.on_headers_complete(&*self) {
            HeadersFlow::Continue => {},
            HeadersFlow::NoBody => {
                self.flags.insert(Flags::SKIP_BODY);
            },
            HeadersFlow::NoBodyUpgrade => {
                self.upgrade = true;

                self.flags.insert(Flags::SKIP_BODY);
            },
            HeadersFlow::Pause => {
                self.set_paused(consumed);

                return ParserValue::Exit(consumed);
            },
            HeadersFlow::Error => {
                self.fail(ParserError::HeadersCompleteCallback, consumed);

                return ParserValue::Exit(consumed);
            }
        }

        ParserValue::Replay
    }

    #[inline]
    pub(super) fn headers_done<T: HttpHandler>(&mut self, handler: &mut T,
                                               context: &mut ParserContext)
    -> ParserValue {
        strict_check!(self, context, context.byte != b'\n');

        self.header_bytes_read = 0;

        let has_body = self.flags.contains(Flags::CHUNKED)
                       || (self.content_length > 0 && self.content_length != NO_CONTENT_LENGTH);

        if self.upgrade
        && (self.method == Some(Method::Connect)
            || self.flags.contains(Flags::SKIP_BODY)
            || !has_body) {
            // the rest of the stream belongs to another protocol
            self.end_message();

            callback!(self, handler, on_message_complete, ParserError::MessageCompleteCallback,
                      context.stream_index);

            return ParserValue::Exit(context.stream_index);
        }

        if self.flags.contains(Flags::SKIP_BODY) {
            self.end_message();
        } else if self.flags.contains(Flags::CHUNKED) {
            // chunked transfer encoding ignores the content length
            transition!(self, ParserState::ChunkSizeStart);
        } else if self.content_length == 0 {
            self.end_message();
        } else if self.content_length != NO_CONTENT_LENGTH {
            transition!(self, ParserState::BodyIdentity);
        } else if self.needs_eof() {
            transition!(self, ParserState::BodyIdentityEof);
        } else {
            // no body
            self.end_message();
        }

        callback!(self, handler, on_message_complete, ParserError::MessageCompleteCallback,
                  context.stream_index);

        ParserValue::Continue
    }
}
