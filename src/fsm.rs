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

//! Finite state machine macros and enums.
//!
//! Every state function receives the parser, the handler and the current
//! `ParserContext`, and returns a `ParserValue` telling the main loop what to do next. Macros in
//! this module are the only way state functions exit early.

/// State function return values.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum ParserValue {
    /// Continue with the next byte.
    Continue,

    /// Process the current byte again under the newly set state.
    Replay,

    /// Stop parsing, reporting the number of bytes consumed.
    Exit(usize)
}

/// Exit parser with `$error`. The current byte is not consumed.
macro_rules! exit_error {
    ($parser:expr, $context:expr, $error:expr) => ({
        let index = $context.stream_index - 1;

        $parser.fail($error, index);

        return crate::fsm::ParserValue::Exit(index);
    });
}

/// Set state to `$state` and continue with the next byte.
macro_rules! transition {
    ($parser:expr, $state:expr) => ({
        $parser.state = $state;

        return crate::fsm::ParserValue::Continue;
    });
}

/// Set state to `$state` and process the current byte again.
macro_rules! replay {
    ($parser:expr, $state:expr) => ({
        $parser.state = $state;

        return crate::fsm::ParserValue::Replay;
    });
}

/// Exit parser with `ParserError::Strict` when `$condition` holds and the `strict` feature is
/// enabled.
macro_rules! strict_check {
    ($parser:expr, $context:expr, $condition:expr) => ({
        if cfg!(feature = "strict") && $condition {
            exit_error!($parser, $context, crate::http1::ParserError::Strict);
        }
    });
}

/// Add `$length` bytes to the header section size, and exit with `ParserError::HeaderOverflow`
/// once the maximum has been exceeded.
macro_rules! count_header_size {
    ($parser:expr, $context:expr, $length:expr) => ({
        if $parser.count_header_bytes($length) {
            exit_error!($parser, $context, crate::http1::ParserError::HeaderOverflow);
        }
    });
}

/// Begin span `$mark` at the current byte, unless a span is already pending.
macro_rules! mark {
    ($context:expr, $mark:expr) => ({
        if $context.mark.is_none() {
            $context.mark       = Some($mark);
            $context.mark_index = $context.stream_index - 1;
        }
    });
}

/// Convert a callback `Flow` into a parser exit when the handler paused or failed, reporting
/// `$consumed` bytes.
macro_rules! callback_flow {
    ($parser:expr, $flow:expr, $error:expr, $consumed:expr) => ({
        match $flow {
            crate::http1::Flow::Continue => {},
            crate::http1::Flow::Pause => {
                let consumed = $consumed;

                $parser.set_paused(consumed);

                return crate::fsm::ParserValue::Exit(consumed);
            },
            crate::http1::Flow::Error => {
                let consumed = $consumed;

                $parser.fail($error, consumed);

                return crate::fsm::ParserValue::Exit(consumed);
            }
        }
    });
}

/// Execute notification callback `$function`.
///
/// `$consumed` is reported when the handler pauses or fails, which lets the caller decide whether
/// the current byte counts as consumed.
macro_rules! callback {
    ($parser:expr, $handler:expr, $function:ident, $error:expr, $consumed:expr) => ({
        let flow = $handler.$function(&*$parser);

        callback_flow!($parser, flow, $error, $consumed);
    });
}

/// Execute data callback `$function` when span `$mark` is pending, and clear the span.
///
/// The data ends before the current byte, unless an explicit `$slice` is given.
macro_rules! callback_data {
    ($parser:expr, $handler:expr, $context:expr, $mark:expr, $function:ident, $error:expr,
     $consumed:expr) => ({
        callback_data!($parser, $handler, $context, $mark, $function, $error, $consumed,
                       bs_slice_ignore!($context));
    });

    ($parser:expr, $handler:expr, $context:expr, $mark:expr, $function:ident, $error:expr,
     $consumed:expr, $slice:expr) => ({
        if $context.mark == Some($mark) {
            $context.mark = None;

            let flow = $handler.$function(&*$parser, $slice);

            callback_flow!($parser, flow, $error, $consumed);
        }
    });
}
