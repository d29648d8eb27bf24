//! A slow, but clear reference implementation of SipHash.

use std::num::Wrapping as W;

/// Rotate a word to the left.
fn rotl(x: W<u64>, b: u32) -> W<u64> {
    // Bits shifted out on the left come back on the right.
    W((x.0 << b) | (x.0 >> (64 - b)))
}

/// A hash state.
struct State {
    /// The state vector.
    v: [W<u64>; 4],
    /// The word currently being assembled.
    m: W<u64>,
    /// The number of bytes in `m`.
    fill: u32,
    /// The number of bytes written into the state.
    written: u64,
    /// The compression rounds.
    c: u32,
}

impl State {
    /// Set up the state for the key halves `k0` and `k1`.
    fn new(k0: u64, k1: u64, c: u32) -> State {
        State {
            v: [
                W(0x736f6d6570736575 ^ k0),
                W(0x646f72616e646f6d ^ k1),
                W(0x6c7967656e657261 ^ k0),
                W(0x7465646279746573 ^ k1),
            ],
            m: W(0),
            fill: 0,
            written: 0,
            c: c,
        }
    }

    /// Apply one SipRound.
    fn round(&mut self) {
        let v = &mut self.v;

        v[0] += v[1];
        v[2] += v[3];
        v[1] = rotl(v[1], 13);
        v[3] = rotl(v[3], 16);
        v[1] ^= v[0];
        v[3] ^= v[2];
        v[0] = rotl(v[0], 32);

        v[2] += v[1];
        v[0] += v[3];
        v[1] = rotl(v[1], 17);
        v[3] = rotl(v[3], 21);
        v[1] ^= v[2];
        v[3] ^= v[0];
        v[2] = rotl(v[2], 32);
    }

    /// Mix the assembled word into the state.
    fn digest(&mut self) {
        let m = self.m;

        self.v[3] ^= m;
        for _ in 0..self.c {
            self.round();
        }
        self.v[0] ^= m;

        // Start on a fresh word.
        self.m = W(0);
        self.fill = 0;
    }

    /// Write a single byte to the state.
    fn write_u8(&mut self, x: u8) {
        // Bytes are packed least significant first.
        self.m |= W((x as u64) << (self.fill * 8));
        self.fill += 1;
        self.written += 1;

        if self.fill == 8 {
            self.digest();
        }
    }

    /// Calculate the final hash.
    fn finish(mut self, d: u32) -> u64 {
        // The bytes between the tail and the top byte are zero already, so only the length byte is
        // left. It goes into the most significant byte, whatever the size of the tail.
        self.m |= W((self.written & 0xFF) << 56);
        self.digest();

        self.v[2] ^= W(0xFF);
        for _ in 0..d {
            self.round();
        }

        (self.v[0] ^ self.v[1] ^ self.v[2] ^ self.v[3]).0
    }
}

/// A reference implementation of SipHash-c-d.
///
/// This processes the message byte by byte and has no other goal than being readable. It expects
/// valid parameters (`c` and `d` positive).
pub fn hash(k0: u64, k1: u64, buf: &[u8], c: u32, d: u32) -> u64 {
    // Initialize the state.
    let mut state = State::new(k0, k1, c);

    // Write every byte.
    for &x in buf {
        state.write_u8(x);
    }

    // Pad, finish the hash state and return the final value.
    state.finish(d)
}
