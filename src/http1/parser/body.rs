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

//! Body states.

use crate::fsm::ParserValue;
use crate::http1::http_handler::HttpHandler;
use crate::http1::parser::{ Mark, Parser, ParserContext };
use crate::http1::parser_error::ParserError;
use crate::http1::parser_state::ParserState;

use std::cmp;

impl Parser {
    #[inline]
    pub(super) fn body_identity<T: HttpHandler>(&mut self, handler: &mut T,
                                                context: &mut ParserContext)
    -> ParserValue {
        // the current byte is the first one read
        let length = cmp::min(self.content_length, (bs_available!(context) + 1) as u64);

        mark!(context, Mark::Body);

        self.content_length -= length;

        bs_jump!(context, (length - 1) as usize);

        if self.content_length > 0 {
            return ParserValue::Continue;
        }

        // the last body byte is the current byte, and it is part of the body
        self.state = ParserState::MessageDone;

        callback_data!(self, handler, context, Mark::Body, on_body, ParserError::BodyCallback,
                       context.stream_index - 1, bs_slice!(context));

        ParserValue::Replay
    }

    #[inline]
    pub(super) fn body_identity_eof(&mut self, context: &mut ParserContext) -> ParserValue {
        mark!(context, Mark::Body);

        let remaining = bs_available!(context);

        bs_jump!(context, remaining);

        ParserValue::Continue
    }

    #[inline]
    pub(super) fn message_done<T: HttpHandler>(&mut self, handler: &mut T,
                                               context: &mut ParserContext)
    -> ParserValue {
        self.end_message();

        callback!(self, handler, on_message_complete, ParserError::MessageCompleteCallback,
                  context.stream_index);

        if self.upgrade {
            // the rest of the stream belongs to another protocol
            return ParserValue::Exit(context.stream_index);
        }

        ParserValue::Continue
    }
}
