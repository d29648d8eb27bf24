//! Helper functions.
//!
//! These are the word-level building blocks shared by every front end of the crate: the SipRound
//! permutation, little-endian word reads, key splitting and the final-block padding.

use byteorder::{ByteOrder, LittleEndian};

use Error;

/// The size of a SipHash key in bytes.
pub const KEY_LEN: usize = 16;
/// The size of a message word in bytes.
pub const WORD_LEN: usize = 8;

/// The SipRound permutation.
///
/// This is the ARX (add-rotate-xor) mixing function at the core of SipHash. It is a bijection on
/// the 256-bit state, and the order of the operations matters.
#[inline(always)]
pub fn sip_round((mut v0, mut v1, mut v2, mut v3): (u64, u64, u64, u64)) -> (u64, u64, u64, u64) {
    v0 = v0.wrapping_add(v1);
    v2 = v2.wrapping_add(v3);
    v1 = v1.rotate_left(13);
    v3 = v3.rotate_left(16);
    v1 ^= v0;
    v3 ^= v2;
    v0 = v0.rotate_left(32);

    v2 = v2.wrapping_add(v1);
    v0 = v0.wrapping_add(v3);
    v1 = v1.rotate_left(17);
    v3 = v3.rotate_left(21);
    v1 ^= v2;
    v3 ^= v0;
    v2 = v2.rotate_left(32);

    (v0, v1, v2, v3)
}

/// Read a little-endian 64-bit integer from the first 8 bytes of some buffer.
///
/// # Panics
///
/// This panics if `buf` is shorter than 8 bytes.
#[inline(always)]
pub fn read_u64(buf: &[u8]) -> u64 {
    LittleEndian::read_u64(buf)
}

/// Read a buffer smaller than 8 bytes into an integer in little-endian.
///
/// This assumes that `buf.len() < 8`. If this is not satisfied, the behavior is unspecified.
#[inline(always)]
pub fn read_int(buf: &[u8]) -> u64 {
    match buf.len() {
        // `read_uint` does not accept empty buffers.
        0 => 0,
        n => LittleEndian::read_uint(buf, n),
    }
}

/// Build the final message word.
///
/// The excessive bytes `tail` (less than 8 of them) fill the low bytes, the remaining low bytes
/// are zero, and the most significant byte holds the low byte of the total message length `len`.
#[inline(always)]
pub fn pad_tail(tail: &[u8], len: u64) -> u64 {
    debug_assert!(tail.len() < WORD_LEN, "The tail must be shorter than a word.");

    read_int(tail) | ((len & 0xFF) << 56)
}

/// Split a 16-byte key into its two little-endian halves `(k0, k1)`.
pub fn split_key(key: &[u8]) -> Result<(u64, u64), Error> {
    if key.len() != KEY_LEN {
        return Err(Error::InvalidKeyLength(key.len()));
    }

    Ok((read_u64(&key[..8]), read_u64(&key[8..])))
}

/// Partition a message into the words absorbed by SipHash.
///
/// This yields every full 8-byte chunk of `msg` as a little-endian word, followed by the padded
/// final word (see `pad_tail`). The final word is always produced, so an `n`-byte message yields
/// `n / 8 + 1` words.
pub fn blocks<'a>(msg: &'a [u8]) -> Blocks<'a> {
    Blocks {
        chunks: msg.chunks(WORD_LEN),
        len: msg.len() as u64,
        done: false,
    }
}

/// An iterator over the padded words of a message.
///
/// See `blocks`.
#[derive(Clone)]
pub struct Blocks<'a> {
    /// The remaining chunks of the message.
    chunks: ::std::slice::Chunks<'a, u8>,
    /// The total length of the message.
    len: u64,
    /// Has the padded word been emitted?
    done: bool,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }

        match self.chunks.next() {
            Some(chunk) if chunk.len() == WORD_LEN => Some(read_u64(chunk)),
            // A short chunk is the tail, and it is necessarily the last one.
            Some(tail) => {
                self.done = true;
                Some(pad_tail(tail, self.len))
            },
            // The length is a multiple of 8, so the padded word carries only the length.
            None => {
                self.done = true;
                Some(pad_tail(&[], self.len))
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            let n = self.chunks.len() + if self.len % WORD_LEN as u64 == 0 { 1 } else { 0 };
            (n, Some(n))
        }
    }
}

impl<'a> ExactSizeIterator for Blocks<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_int_() {
        assert_eq!(read_int(&[]), 0);
        assert_eq!(read_int(&[2, 3]), 770);
        assert_eq!(read_int(&[3, 2]), 515);
        assert_eq!(read_int(&[3, 2, 5]), 328195);
    }

    #[test]
    fn read_u64_() {
        assert_eq!(read_u64(&[1, 0, 0, 0, 0, 0, 0, 0]), 1);
        assert_eq!(read_u64(&[2, 1, 0, 0, 0, 0, 0, 0]), 258);
        assert_eq!(read_u64(&[0, 0, 0, 0, 0, 0, 0, 0x80, 0xFF]), 1 << 63);
    }

    #[test]
    fn pad_tail_() {
        assert_eq!(pad_tail(&[], 0), 0);
        assert_eq!(pad_tail(&[], 8), 0x0800000000000000);
        assert_eq!(pad_tail(&[1, 2, 3], 3), 0x0300000000030201);
        // Only the low byte of the length is kept.
        assert_eq!(pad_tail(&[0xAA], 257), 0x01000000000000AA);
    }

    #[test]
    fn split_key_() {
        let key: Vec<u8> = (0..16).collect();
        assert_eq!(split_key(&key), Ok((0x0706050403020100, 0x0f0e0d0c0b0a0908)));

        assert_eq!(split_key(&key[..15]), Err(Error::InvalidKeyLength(15)));
        assert_eq!(split_key(&[0; 17]), Err(Error::InvalidKeyLength(17)));
        assert_eq!(split_key(&[]), Err(Error::InvalidKeyLength(0)));
    }

    #[test]
    fn sip_round_zero() {
        // The all-zero state is a fixed point of the permutation.
        assert_eq!(sip_round((0, 0, 0, 0)), (0, 0, 0, 0));
    }

    #[test]
    fn sip_round_single_bit() {
        // Worked by hand from the round definition.
        assert_eq!(sip_round((1, 0, 0, 0)), (1 << 32, (1 << 17) | 1, 1 << 32, 1 << 32));
    }

    #[test]
    fn blocks_count() {
        let msg = [0xEE; 17];
        for &n in &[0, 7, 8, 9, 15, 16, 17] {
            let words: Vec<u64> = blocks(&msg[..n]).collect();
            assert_eq!(words.len(), (n + 1 + 7) / 8);
            assert_eq!(blocks(&msg[..n]).len(), words.len());
            assert_eq!(words.last().unwrap() >> 56, n as u64);
        }
    }

    #[test]
    fn blocks_words() {
        let msg: Vec<u8> = (0..9).collect();
        let words: Vec<u64> = blocks(&msg).collect();
        assert_eq!(words, vec![0x0706050403020100, 0x0900000000000008]);
    }
}
