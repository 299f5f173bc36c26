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

//! HTTP/1.x parser, errors, traits, and types.

mod flags;
mod http_handler;
mod method;
mod parser;
mod parser_error;
mod parser_state;
mod parser_type;
mod status;

#[cfg(test)]
mod test;

pub use crate::http1::flags::Flags;
pub use crate::http1::http_handler::{ Flow, HeadersFlow, HttpHandler };
pub use crate::http1::method::{ method_name, Method };
pub use crate::http1::parser::{ MAX_HEADER_SIZE, Parser };
pub use crate::http1::parser_error::{ error_description, error_name, ParserError };
pub use crate::http1::parser_state::{ HeaderState, ParserState };
pub use crate::http1::parser_type::ParserType;
pub use crate::http1::status::status_reason;
