/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! CryptoNote's block-based base58.
//!
//! Data is split into 8-byte blocks. Each block is read as a big-endian integer
//! and written as a fixed number of characters, so the encoded length only
//! depends on the input length.

use crate::errors::AddressError;

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const FULL_BLOCK_SIZE: usize = 8;
const FULL_ENCODED_BLOCK_SIZE: usize = 11;
///Encoded length of a block, indexed by its length in bytes.
const ENCODED_BLOCK_SIZES: [usize; FULL_BLOCK_SIZE + 1] = [0, 2, 3, 5, 6, 7, 9, 10, 11];

fn encode_block(block: &[u8], out: &mut Vec<u8>) {
    let mut num = block.iter().fold(0u64, |acc, byte| (acc << 8) | *byte as u64);
    let size = ENCODED_BLOCK_SIZES[block.len()];

    let mut chars = vec![ALPHABET[0]; size];
    let mut i = size;
    while num > 0 {
        i -= 1;
        chars[i] = ALPHABET[(num % 58) as usize];
        num /= 58;
    }
    out.extend(chars);
}

fn decode_block(chars: &[u8], out: &mut Vec<u8>) -> Result<(), AddressError> {
    let size = ENCODED_BLOCK_SIZES.iter()
        .position(|encoded| *encoded == chars.len())
        .filter(|size| *size > 0)
        .ok_or(AddressError::InvalidBase58)?;

    //58^11 does not fit in a u64
    let mut num: u128 = 0;
    for c in chars {
        let digit = ALPHABET.iter()
            .position(|a| a == c)
            .ok_or(AddressError::InvalidBase58)?;
        num = num * 58 + digit as u128;
    }
    if num >> (8 * size) != 0 {
        return Err(AddressError::InvalidBase58)
    }

    out.extend_from_slice(&(num as u64).to_be_bytes()[FULL_BLOCK_SIZE - size..]);
    return Ok(())
}

///Encode bytes as a base58 string.
pub fn encode(data: &[u8]) -> String {
    let mut out = Vec::with_capacity(
        data.len() / FULL_BLOCK_SIZE * FULL_ENCODED_BLOCK_SIZE + FULL_ENCODED_BLOCK_SIZE
    );
    for block in data.chunks(FULL_BLOCK_SIZE) {
        encode_block(block, &mut out);
    }
    //every byte comes from ALPHABET
    return out.into_iter().map(char::from).collect()
}

///Decode a base58 string.
pub fn decode(encoded: &str) -> Result<Vec<u8>, AddressError> {
    let chars = encoded.as_bytes();
    let mut out = Vec::with_capacity(chars.len() / FULL_ENCODED_BLOCK_SIZE * FULL_BLOCK_SIZE + FULL_BLOCK_SIZE);
    for block in chars.chunks(FULL_ENCODED_BLOCK_SIZE) {
        decode_block(block, &mut out)?;
    }
    return Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_lengths() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0]), "11");
        assert_eq!(encode(&[0xff]), "5Q");
        assert_eq!(encode(&[0u8; 8]), "11111111111");
        assert_eq!(encode(&[0u8; 69]).len(), 95);
    }

    #[test]
    fn full_block() {
        assert_eq!(encode(&[0xff; 8]), "jpXCZedGfVQ");
        assert_eq!(decode("jpXCZedGfVQ").unwrap(), vec!(0xff; 8));
    }

    #[test]
    fn decodes_what_it_encodes() {
        let data: Vec<u8> = (0u8..=70).collect();
        assert_eq!(decode(&encode(&data)).unwrap(), data);
    }

    #[test]
    fn rejects_invalid_input() {
        //'0', 'O', 'I' and 'l' are not in the alphabet
        assert_eq!(decode("0O"), Err(AddressError::InvalidBase58));
        //no block encodes to a single character
        assert_eq!(decode("1"), Err(AddressError::InvalidBase58));
        //larger than one byte
        assert_eq!(decode("zz"), Err(AddressError::InvalidBase58));
        //larger than eight bytes
        assert_eq!(decode("zzzzzzzzzzz"), Err(AddressError::InvalidBase58));
    }
}
