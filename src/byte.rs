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

//! Byte classification tables.
//!
//! All tables are indexed by the byte value and carry no state.

/// Lower-cased HTTP token bytes, or `0` when the byte is not a token byte.
///
/// Space is present in the table so that non-strict builds can accept it within header names.
/// [`token()`](fn.token.html) removes it again when the `strict` feature is enabled.
static TOKENS: [u8; 256] = [

    // NUL SOH STX ETX EOT ENQ ACK BEL BS  TAB
    0,     0,  0,  0,  0,  0,  0,  0,  0,  0,

    // LF  VT  FF  CR  SO  SI  DLE DC1 DC2 DC3
    0,     0,  0,  0,  0,  0,  0,  0,  0,  0,

    // DC4 NAK SYN ETB CAN EM  SUB ESC FS  GS
    0,     0,  0,  0,  0,  0,  0,  0,  0,  0,

    // RS  US
    0,     0,

    // space
    b' ',

    // !   "   #     $     %     &     '      (  )  *
    b'!',  0,  b'#', b'$', b'%', b'&', b'\'', 0, 0, b'*',

    // +   ,   -     .     /
    b'+',  0,  b'-', b'.', 0,

    // 0   1     2     3     4     5     6     7     8     9
    b'0',  b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',

    // :   ;   <   =   >   ?   @
    0,     0,  0,  0,  0,  0,  0,

    // A   B     C     D     E     F     G     H     I     J
    b'a',  b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i', b'j',

    // K   L     M     N     O     P     Q     R     S     T
    b'k',  b'l', b'm', b'n', b'o', b'p', b'q', b'r', b's', b't',

    // U   V     W     X     Y     Z
    b'u',  b'v', b'w', b'x', b'y', b'z',

    // [   \   ]   ^     _     `
    0,     0,  0,  b'^', b'_', b'`',

    // a   b     c     d     e     f     g     h     i     j
    b'a',  b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i', b'j',

    // k   l     m     n     o     p     q     r     s     t
    b'k',  b'l', b'm', b'n', b'o', b'p', b'q', b'r', b's', b't',

    // u   v     w     x     y     z
    b'u',  b'v', b'w', b'x', b'y', b'z',

    // {   |     }   ~
    0,     b'|', 0,  b'~',

    // DEL
    0,

    // 128 - 255
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0

];

/// Hex digit values, or `-1` when the byte is not a hex digit.
static UNHEX: [i8; 256] = [

    // 0 - 47
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,

    // 0   1   2   3   4   5   6   7   8   9
    0,     1,  2,  3,  4,  5,  6,  7,  8,  9,

    // :   ;   <   =   >   ?   @
    -1,    -1, -1, -1, -1, -1, -1,

    // A   B   C   D   E   F
    10,    11, 12, 13, 14, 15,

    // G - `
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,

    // a   b   c   d   e   f
    10,    11, 12, 13, 14, 15,

    // g - DEL
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1,

    // 128 - 255
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1

];

/// Bytes allowed within a request target path, query string or fragment.
///
/// Tab and form feed are only allowed in non-strict builds, and the entries are patched in by
/// [`is_url_char()`](fn.is_url_char.html).
static URL_CHARS: [bool; 256] = [

    // NUL SOH    STX    ETX    EOT    ENQ    ACK    BEL    BS     TAB
    false, false, false, false, false, false, false, false, false, false,

    // LF  VT     FF     CR     SO     SI     DLE    DC1    DC2    DC3
    false, false, false, false, false, false, false, false, false, false,

    // DC4 NAK    SYN    ETB    CAN    EM     SUB    ESC    FS     GS
    false, false, false, false, false, false, false, false, false, false,

    // RS  US
    false, false,

    // space
    false,

    // !   "      #      $      %      &      '      (      )      *
    true,  true,  false, true,  true,  true,  true,  true,  true,  true,

    // +   ,      -      .      /
    true,  true,  true,  true,  true,

    // 0   1      2      3      4      5      6      7      8      9
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // :   ;      <      =      >      ?      @
    true,  true,  true,  true,  true,  false, true,

    // A   B      C      D      E      F      G      H      I      J
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // K   L      M      N      O      P      Q      R      S      T
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // U   V      W      X      Y      Z
    true,  true,  true,  true,  true,  true,

    // [   \      ]      ^      _      `
    true,  true,  true,  true,  true,  true,

    // a   b      c      d      e      f      g      h      i      j
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // k   l      m      n      o      p      q      r      s      t
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // u   v      w      x      y      z
    true,  true,  true,  true,  true,  true,

    // {   |      }      ~
    true,  true,  true,  true,

    // DEL
    false,

    // 128 - 255
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false

];

/// Retrieve the lower-cased token value of `byte`, or `0` when `byte` is not a token byte.
///
/// Space is only a token byte in non-strict builds.
#[inline]
pub fn token(byte: u8) -> u8 {
    if cfg!(feature = "strict") && byte == b' ' {
        0
    } else {
        TOKENS[byte as usize]
    }
}

/// Indicates that a byte is a HTTP token byte in strict terms, regardless of build features.
#[inline]
pub fn is_strict_token(byte: u8) -> bool {
    byte != b' ' && TOKENS[byte as usize] != 0
}

/// Retrieve the value of a hex digit.
#[inline]
pub fn unhex(byte: u8) -> Option<u8> {
    let value = UNHEX[byte as usize];

    if value < 0 {
        None
    } else {
        Some(value as u8)
    }
}

/// Indicates that a byte is allowed within a request target path, query string or fragment.
#[inline]
pub fn is_url_char(byte: u8) -> bool {
    if cfg!(feature = "strict") {
        URL_CHARS[byte as usize]
    } else {
        URL_CHARS[byte as usize] || byte == b'\t' || byte == 0x0C || byte > 0x7F
    }
}

/// Indicates that a byte is allowed within a header value.
#[inline]
pub fn is_header_char(byte: u8) -> bool {
    byte == b'\r' || byte == b'\n' || byte == b'\t' || (byte > 0x1F && byte != 0x7F)
}

/// Indicates that a byte is an ASCII letter.
#[inline]
pub fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Indicates that a byte is a decimal digit.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Indicates that a byte is an ASCII letter or a decimal digit.
#[inline]
pub fn is_alphanum(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// Indicates that a byte is a hex digit.
#[inline]
pub fn is_hex(byte: u8) -> bool {
    UNHEX[byte as usize] >= 0
}

/// Indicates that a byte is an RFC 3986 unreserved mark.
#[inline]
pub fn is_mark(byte: u8) -> bool {
    match byte {
        b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => true,
        _ => false
    }
}

/// Indicates that a byte is allowed within URL userinfo.
#[inline]
pub fn is_userinfo_char(byte: u8) -> bool {
    is_alphanum(byte)
    || is_mark(byte)
    || match byte {
        b'%' | b';' | b':' | b'&' | b'=' | b'+' | b'$' | b',' => true,
        _ => false
    }
}

/// Indicates that a byte is allowed within a host name.
///
/// Non-strict builds also allow `_`.
#[inline]
pub fn is_host_char(byte: u8) -> bool {
    is_alphanum(byte)
    || byte == b'.'
    || byte == b'-'
    || (!cfg!(feature = "strict") && byte == b'_')
}

/// Indicates that a byte is allowed within an IPv6 zone identifier.
#[inline]
pub fn is_zone_char(byte: u8) -> bool {
    is_alphanum(byte) || byte == b'%' || byte == b'.' || byte == b'-' || byte == b'_' || byte == b'~'
}

/// Lower-case an ASCII byte.
#[inline]
pub fn lower(byte: u8) -> u8 {
    byte | 0x20
}
