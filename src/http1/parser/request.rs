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

//! Request line states.

use crate::byte::{ is_alpha, is_digit };
use crate::fsm::ParserValue;
use crate::http1::http_handler::HttpHandler;
use crate::http1::method::Method;
use crate::http1::parser::{ Mark, Parser, ParserContext };
use crate::http1::parser_error::ParserError;
use crate::http1::parser_state::ParserState;
use crate::url::{ parse_url_char, UrlState };

impl Parser {
    #[inline]
    pub(super) fn start_request<T: HttpHandler>(&mut self, handler: &mut T,
                                                context: &mut ParserContext)
    -> ParserValue {
        if context.byte == b'\r' || context.byte == b'\n' {
            return ParserValue::Continue;
        }

        self.begin_message();

        if !is_alpha(context.byte) {
            exit_error!(self, context, ParserError::InvalidMethod);
        }

        self.method = Method::guess(context.byte);
        self.index  = 1;

        if self.method.is_none() {
            exit_error!(self, context, ParserError::InvalidMethod);
        }

        self.state = ParserState::RequestMethod;

        callback!(self, handler, on_message_begin, ParserError::MessageBeginCallback,
                  context.stream_index);

        ParserValue::Continue
    }

    #[inline]
    pub(super) fn request_method(&mut self, context: &mut ParserContext) -> ParserValue {
        let method = match self.method {
            Some(method) => method,
            None => exit_error!(self, context, ParserError::InvalidInternalState)
        };

        let name = method.name().as_bytes();

        if context.byte == b' ' && self.index == name.len() {
            self.state = ParserState::RequestUrl(UrlState::SpacesBeforeUrl);
        } else if name.get(self.index) == Some(&context.byte) {
            // matching
        } else if context.byte.is_ascii_uppercase() || context.byte == b'-' {
            match Method::branch(method, self.index, context.byte) {
                Some(method) => {
                    self.method = Some(method);
                },
                None => {
                    exit_error!(self, context, ParserError::InvalidMethod);
                }
            }
        } else {
            exit_error!(self, context, ParserError::InvalidMethod);
        }

        self.index += 1;

        ParserValue::Continue
    }

    #[inline]
    pub(super) fn request_url<T: HttpHandler>(&mut self, handler: &mut T,
                                              context: &mut ParserContext, state: UrlState)
    -> ParserValue {
        match state {
            UrlState::SpacesBeforeUrl => {
                if context.byte == b' ' {
                    return ParserValue::Continue;
                }

                mark!(context, Mark::Url);

                if self.method == Some(Method::Connect) {
                    self.url_char(context, UrlState::ServerStart)
                } else {
                    self.url_char(context, state)
                }
            },
            UrlState::Schema
            | UrlState::SchemaSlash
            | UrlState::SchemaSlashSlash
            | UrlState::ServerStart => {
                // no white space before the authority
                if context.byte == b' ' || context.byte == b'\r' || context.byte == b'\n' {
                    exit_error!(self, context, ParserError::InvalidUrl);
                }

                self.url_char(context, state)
            },
            _ => {
                match context.byte {
                    b' ' => {
                        self.state = ParserState::RequestHttpStart;

                        callback_data!(self, handler, context, Mark::Url, on_url,
                                       ParserError::UrlCallback, context.stream_index);

                        ParserValue::Continue
                    },
                    b'\r' | b'\n' => {
                        // HTTP/0.9
                        self.http_major = 0;
                        self.http_minor = 9;

                        self.state = if context.byte == b'\r' {
                            ParserState::RequestLineAlmostDone
                        } else {
                            ParserState::HeaderFieldStart
                        };

                        callback_data!(self, handler, context, Mark::Url, on_url,
                                       ParserError::UrlCallback, context.stream_index);

                        ParserValue::Continue
                    },
                    _ => {
                        self.url_char(context, state)
                    }
                }
            }
        }
    }

    /// Classify the current URL byte, continuing from `state`.
    #[inline]
    fn url_char(&mut self, context: &mut ParserContext, state: UrlState) -> ParserValue {
        match parse_url_char(state, context.byte) {
            UrlState::Dead => {
                exit_error!(self, context, ParserError::InvalidUrl);
            },
            state => {
                transition!(self, ParserState::RequestUrl(state));
            }
        }
    }

    #[inline]
    pub(super) fn request_http_start(&mut self, context: &mut ParserContext) -> ParserValue {
        match context.byte {
            b' ' => {
                ParserValue::Continue
            },
            b'H' => {
                transition!(self, ParserState::RequestHttpH);
            },
            b'I' if self.method == Some(Method::Source) => {
                transition!(self, ParserState::RequestHttpI);
            },
            _ => {
                exit_error!(self, context, ParserError::InvalidConstant);
            }
        }
    }

    #[inline]
    pub(super) fn request_version_major(&mut self, context: &mut ParserContext) -> ParserValue {
        if !is_digit(context.byte) {
            exit_error!(self, context, ParserError::InvalidVersion);
        }

        self.http_major = context.byte - b'0';

        transition!(self, ParserState::RequestVersionDot);
    }

    #[inline]
    pub(super) fn request_version_dot(&mut self, context: &mut ParserContext) -> ParserValue {
        if context.byte != b'.' {
            exit_error!(self, context, ParserError::InvalidVersion);
        }

        transition!(self, ParserState::RequestVersionMinor);
    }

    #[inline]
    pub(super) fn request_version_minor(&mut self, context: &mut ParserContext) -> ParserValue {
        if !is_digit(context.byte) {
            exit_error!(self, context, ParserError::InvalidVersion);
        }

        self.http_minor = context.byte - b'0';

        transition!(self, ParserState::RequestVersionEnd);
    }

    #[inline]
    pub(super) fn request_version_end(&mut self, context: &mut ParserContext) -> ParserValue {
        match context.byte {
            b'\r' => {
                transition!(self, ParserState::RequestLineAlmostDone);
            },
            b'\n' => {
                transition!(self, ParserState::HeaderFieldStart);
            },
            _ => {
                exit_error!(self, context, ParserError::InvalidVersion);
            }
        }
    }

    #[inline]
    pub(super) fn request_line_almost_done(&mut self, context: &mut ParserContext)
    -> ParserValue {
        if context.byte != b'\n' {
            exit_error!(self, context, ParserError::LfExpected);
        }

        transition!(self, ParserState::HeaderFieldStart);
    }
}
