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

use bitflags::bitflags;

bitflags! {
    /// Message flags collected while parsing the header section.
    ///
    /// Flags are cleared at the start of every message.
    #[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
    pub struct Flags: u8 {
        /// `Transfer-Encoding: chunked` was found.
        const CHUNKED = 1 << 0;

        /// `Connection: keep-alive` was found.
        const CONNECTION_KEEP_ALIVE = 1 << 1;

        /// `Connection: close` was found.
        const CONNECTION_CLOSE = 1 << 2;

        /// `Connection: upgrade` was found.
        const CONNECTION_UPGRADE = 1 << 3;

        /// The zero length chunk was found, and trailers are being parsed.
        const TRAILING = 1 << 4;

        /// An `Upgrade` header was found.
        const UPGRADE = 1 << 5;

        /// The handler asked that the body be skipped.
        const SKIP_BODY = 1 << 6;

        /// A `Content-Length` header was found.
        const CONTENT_LENGTH = 1 << 7;
    }
}
