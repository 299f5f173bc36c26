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

//! Chunked transfer encoding states.
//!
//! Chunk extensions are skipped. Trailers are parsed by the header states, with
//! `Flags::TRAILING` set.

use crate::byte::unhex;
use crate::fsm::ParserValue;
use crate::http1::flags::Flags;
use crate::http1::http_handler::HttpHandler;
use crate::http1::parser::{ Mark, Parser, ParserContext };
use crate::http1::parser_error::ParserError;
use crate::http1::parser_state::ParserState;

use std::cmp;

use tracing::trace;

/// Append hex digit value `digit` to chunk size `size`.
///
/// Returns `None` when the size would come too close to `u64::MAX`.
fn accumulate_hex(size: u64, digit: u8) -> Option<u64> {
    if (u64::MAX - 16) / 16 < size {
        None
    } else {
        Some(size * 16 + u64::from(digit))
    }
}

impl Parser {
    #[inline]
    pub(super) fn chunk_size_start(&mut self, context: &mut ParserContext) -> ParserValue {
        match unhex(context.byte) {
            Some(digit) => {
                self.content_length = u64::from(digit);

                transition!(self, ParserState::ChunkSize);
            },
            None => {
                exit_error!(self, context, ParserError::InvalidChunkSize);
            }
        }
    }

    #[inline]
    pub(super) fn chunk_size(&mut self, context: &mut ParserContext) -> ParserValue {
        if context.byte == b'\r' {
            transition!(self, ParserState::ChunkSizeAlmostDone);
        }

        let digit = match unhex(context.byte) {
            Some(digit) => digit,
            None => {
                if context.byte == b';' || context.byte == b' ' {
                    transition!(self, ParserState::ChunkParameters);
                }

                exit_error!(self, context, ParserError::InvalidChunkSize);
            }
        };

        match accumulate_hex(self.content_length, digit) {
            Some(size) => {
                self.content_length = size;

                ParserValue::Continue
            },
            None => {
                exit_error!(self, context, ParserError::InvalidContentLength);
            }
        }
    }

    #[inline]
    pub(super) fn chunk_parameters(&mut self, context: &mut ParserContext) -> ParserValue {
        if context.byte == b'\r' {
            transition!(self, ParserState::ChunkSizeAlmostDone);
        }

        ParserValue::Continue
    }

    #[inline]
    pub(super) fn chunk_size_almost_done<T: HttpHandler>(&mut self, handler: &mut T,
                                                         context: &mut ParserContext)
    -> ParserValue {
        strict_check!(self, context, context.byte != b'\n');

        self.header_bytes_read = 0;

        trace!(size = self.content_length, "chunk header");

        if self.content_length == 0 {
            self.flags.insert(Flags::TRAILING);

            self.state = ParserState::HeaderFieldStart;
        } else {
            self.state = ParserState::ChunkData;
        }

        callback!(self, handler, on_chunk_header, ParserError::ChunkHeaderCallback,
                  context.stream_index);

        ParserValue::Continue
    }

    #[inline]
    pub(super) fn chunk_data(&mut self, context: &mut ParserContext) -> ParserValue {
        // the current byte is the first one read
        let length = cmp::min(self.content_length, (bs_available!(context) + 1) as u64);

        mark!(context, Mark::Body);

        self.content_length -= length;

        bs_jump!(context, (length - 1) as usize);

        if self.content_length == 0 {
            self.state = ParserState::ChunkDataAlmostDone;
        }

        ParserValue::Continue
    }

    #[inline]
    pub(super) fn chunk_data_almost_done<T: HttpHandler>(&mut self, handler: &mut T,
                                                         context: &mut ParserContext)
    -> ParserValue {
        strict_check!(self, context, context.byte != b'\r');

        self.state = ParserState::ChunkDataDone;

        callback_data!(self, handler, context, Mark::Body, on_body, ParserError::BodyCallback,
                       context.stream_index);

        ParserValue::Continue
    }

    #[inline]
    pub(super) fn chunk_data_done<T: HttpHandler>(&mut self, handler: &mut T,
                                                  context: &mut ParserContext)
    -> ParserValue {
        strict_check!(self, context, context.byte != b'\n');

        self.header_bytes_read = 0;
        self.state             = ParserState::ChunkSizeStart;

        callback!(self, handler, on_chunk_complete, ParserError::ChunkCompleteCallback,
                  context.stream_index);

        ParserValue::Continue
    }
}
