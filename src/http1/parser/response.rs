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

//! Status line states.

use crate::byte::is_digit;
use crate::fsm::ParserValue;
use crate::http1::http_handler::HttpHandler;
use crate::http1::parser::{ Mark, Parser, ParserContext };
use crate::http1::parser_error::ParserError;
use crate::http1::parser_state::ParserState;

/// Highest status code.
const MAX_STATUS_CODE: u16 = 999;

impl Parser {
    #[inline]
    pub(super) fn start_response<T: HttpHandler>(&mut self, handler: &mut T,
                                                 context: &mut ParserContext)
    -> ParserValue {
        if context.byte == b'\r' || context.byte == b'\n' {
            return ParserValue::Continue;
        }

        self.begin_message();

        if context.byte != b'H' {
            exit_error!(self, context, ParserError::InvalidConstant);
        }

        self.state = ParserState::ResponseH;

        callback!(self, handler, on_message_begin, ParserError::MessageBeginCallback,
                  context.stream_index);

        ParserValue::Continue
    }

    #[inline]
    pub(super) fn response_version_major(&mut self, context: &mut ParserContext) -> ParserValue {
        if !is_digit(context.byte) {
            exit_error!(self, context, ParserError::InvalidVersion);
        }

        self.http_major = context.byte - b'0';

        transition!(self, ParserState::ResponseVersionDot);
    }

    #[inline]
    pub(super) fn response_version_dot(&mut self, context: &mut ParserContext) -> ParserValue {
        if context.byte != b'.' {
            exit_error!(self, context, ParserError::InvalidVersion);
        }

        transition!(self, ParserState::ResponseVersionMinor);
    }

    #[inline]
    pub(super) fn response_version_minor(&mut self, context: &mut ParserContext) -> ParserValue {
        if !is_digit(context.byte) {
            exit_error!(self, context, ParserError::InvalidVersion);
        }

        self.http_minor = context.byte - b'0';

        transition!(self, ParserState::ResponseVersionEnd);
    }

    #[inline]
    pub(super) fn response_version_end(&mut self, context: &mut ParserContext) -> ParserValue {
        if context.byte != b' ' {
            exit_error!(self, context, ParserError::InvalidVersion);
        }

        transition!(self, ParserState::ResponseFirstStatusCode);
    }

    #[inline]
    pub(super) fn response_first_status_code(&mut self, context: &mut ParserContext)
    -> ParserValue {
        if context.byte == b' ' {
            return ParserValue::Continue;
        }

        if !is_digit(context.byte) {
            exit_error!(self, context, ParserError::InvalidStatus);
        }

        self.status_code = u16::from(context.byte - b'0');

        transition!(self, ParserState::ResponseStatusCode);
    }

    #[inline]
    pub(super) fn response_status_code(&mut self, context: &mut ParserContext) -> ParserValue {
        match context.byte {
            b'0'..=b'9' => {
                self.status_code = self.status_code * 10 + u16::from(context.byte - b'0');

                if self.status_code > MAX_STATUS_CODE {
                    exit_error!(self, context, ParserError::InvalidStatus);
                }

                ParserValue::Continue
            },
            b' ' => {
                transition!(self, ParserState::ResponseStatusStart);
            },
            b'\r' | b'\n' => {
                // empty reason phrase
                replay!(self, ParserState::ResponseStatusStart);
            },
            _ => {
                exit_error!(self, context, ParserError::InvalidStatus);
            }
        }
    }

    #[inline]
    pub(super) fn response_status_start(&mut self, context: &mut ParserContext) -> ParserValue {
        mark!(context, Mark::Status);

        self.state = ParserState::ResponseStatus;
        self.index = 0;

        if context.byte == b'\r' || context.byte == b'\n' {
            return ParserValue::Replay;
        }

        ParserValue::Continue
    }

    #[inline]
    pub(super) fn response_status<T: HttpHandler>(&mut self, handler: &mut T,
                                                  context: &mut ParserContext)
    -> ParserValue {
        let next = match context.byte {
            b'\r' => ParserState::ResponseLineAlmostDone,
            b'\n' => ParserState::HeaderFieldStart,
            _     => return ParserValue::Continue
        };

        self.state = next;

        callback_data!(self, handler, context, Mark::Status, on_status,
                       ParserError::StatusCallback, context.stream_index);

        ParserValue::Continue
    }

    #[inline]
    pub(super) fn response_line_almost_done(&mut self, context: &mut ParserContext)
    -> ParserValue {
        strict_check!(self, context, context.byte != b'\n');
        transition!(self, ParserState::HeaderFieldStart);
    }
}
