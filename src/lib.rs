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

//! Incremental, push oriented HTTP/1.x message parser.
//!
//! Stream data is handed to [`Parser::execute()`](http1/struct.Parser.html#method.execute) in
//! whatever pieces it arrives in, and parsed fields are pushed to an
//! [`HttpHandler`](http1/trait.HttpHandler.html) implementation as they are found. Nothing is
//! buffered between calls.
//!
//! ```
//! use http_fsm::handler::DebugHandler;
//! use http_fsm::http1::{ Method, Parser, ParserType };
//!
//! let mut handler = DebugHandler::new();
//! let mut parser  = Parser::new(ParserType::Request);
//! let stream      = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! assert_eq!(parser.execute(&mut handler, stream), stream.len());
//! assert_eq!(parser.method(), Some(Method::Get));
//! assert_eq!(handler.url, b"/index.html");
//! assert_eq!(handler.message_complete_count, 1);
//! ```

#![crate_name = "http_fsm"]

#[macro_use]
extern crate byte_slice;

pub mod byte;

#[macro_use]
mod fsm;

pub mod handler;
pub mod http1;
pub mod url;


/// Crate major version.
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");

/// Crate minor version.
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");

/// Crate patch version.
pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");
