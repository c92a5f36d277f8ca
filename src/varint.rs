/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! CryptoNote variable-length integers: 7 bits per byte, least significant group first,
//! with the high bit set on every byte except the last.

///Encode an integer as a varint.
pub fn encode(mut value: u64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(10);
    while value >= 0x80 {
        bytes.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    bytes.push(value as u8);
    return bytes
}

///Decode a varint from the start of `bytes`.
///
///Returns the value and the number of bytes consumed,
///or `None` if the input is truncated, overflows `u64`, or is not minimally encoded.
pub fn decode(bytes: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, byte) in bytes.iter().enumerate() {
        let shift = 7 * i as u32;
        if shift >= 64 {
            return None
        }
        let group = (byte & 0x7f) as u64;
        if shift > 0 && group >> (64 - shift) != 0 {
            return None
        }
        value |= group << shift;

        if byte & 0x80 == 0 {
            //a trailing zero group means a longer encoding than needed
            if i > 0 && *byte == 0 {
                return None
            }
            return Some((value, i + 1))
        }
    }
    return None
}
