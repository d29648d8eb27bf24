//! The SipHash state.

use helper;

/// The initialization constants.
///
/// These are the ASCII encodings of "somepseudorandomlygeneratedbytes", split into four words.
/// They are fixed by the algorithm.
const INIT: [u64; 4] = [
    0x736f6d6570736575,
    0x646f72616e646f6d,
    0x6c7967656e657261,
    0x7465646279746573,
];

/// The value XORed into `v2` before the finalization rounds.
const FINALIZE: u64 = 0xFF;

/// A SipHash state.
///
/// This is the 256-bit internal state, four 64-bit words. All arithmetic on them wraps at 64 bits.
///
/// The state is not `Copy`, since `finalize` consumes it. Use `clone` to fork a state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SipState {
    /// `v0`
    v0: u64,
    /// `v1`
    v1: u64,
    /// `v2`
    v2: u64,
    /// `v3`
    v3: u64,
}

impl SipState {
    /// Create the initial state for the key halves `k0` and `k1`.
    pub fn new(k0: u64, k1: u64) -> SipState {
        SipState {
            v0: INIT[0] ^ k0,
            v1: INIT[1] ^ k1,
            v2: INIT[2] ^ k0,
            v3: INIT[3] ^ k1,
        }
    }

    /// Create the initial state from a 16-byte key.
    pub fn with_key(key: &[u8; 16]) -> SipState {
        SipState::new(helper::read_u64(&key[..8]), helper::read_u64(&key[8..]))
    }

    /// Get the four state words `(v0, v1, v2, v3)`.
    pub fn words(&self) -> (u64, u64, u64, u64) {
        (self.v0, self.v1, self.v2, self.v3)
    }

    /// Apply `n` SipRounds.
    #[inline(always)]
    fn rounds(&mut self, n: u32) {
        let mut v = self.words();
        for _ in 0..n {
            v = helper::sip_round(v);
        }

        let (v0, v1, v2, v3) = v;
        self.v0 = v0;
        self.v1 = v1;
        self.v2 = v2;
        self.v3 = v3;
    }

    /// Absorb a message word with `c` compression rounds.
    ///
    /// `c` must be positive. Outside the crate, states are driven through `absorb_block`, which
    /// rejects zero rounds.
    #[inline]
    pub(crate) fn absorb(&mut self, m: u64, c: u32) {
        debug_assert!(c > 0, "Zero compression rounds.");

        self.v3 ^= m;
        self.rounds(c);
        self.v0 ^= m;
    }

    /// Finalize the state with `d` finalization rounds.
    ///
    /// This consumes the state and returns the 64-bit output. `d` must be positive; the public
    /// entry point is `finalize`, which checks it.
    #[inline]
    pub(crate) fn finalize(mut self, d: u32) -> u64 {
        debug_assert!(d > 0, "Zero finalization rounds.");

        self.v2 ^= FINALIZE;
        self.rounds(d);

        self.v0 ^ self.v1 ^ self.v2 ^ self.v3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> [u8; 16] {
        let mut key = [0; 16];
        for i in 0..16 {
            key[i] = i as u8;
        }
        key
    }

    #[test]
    fn init() {
        let state = SipState::new(0, 0);
        assert_eq!(state.words(), (INIT[0], INIT[1], INIT[2], INIT[3]));

        let state = SipState::new(!0, 1);
        assert_eq!(state.words(), (!INIT[0], INIT[1] ^ 1, !INIT[2], INIT[3] ^ 1));
    }

    #[test]
    fn with_key() {
        assert_eq!(SipState::with_key(&key()), SipState::new(0x0706050403020100, 0x0f0e0d0c0b0a0908));
    }

    #[test]
    fn empty_message() {
        // The empty message still absorbs the length word, which is zero.
        let mut state = SipState::with_key(&key());
        state.absorb(0, 2);
        assert_eq!(state.finalize(4), 0x726fdb47dd0e0e31);
    }

    #[test]
    fn one_byte() {
        let mut state = SipState::with_key(&key());
        state.absorb(0x0100000000000000, 2);
        assert_eq!(state.finalize(4), 0x74f839c593dc67fd);
    }

    #[test]
    fn absorb_changes_state() {
        let mut state = SipState::with_key(&key());
        let before = state.clone();
        state.absorb(0, 1);
        assert!(state != before);
    }

    #[test]
    fn forked_state() {
        let mut a = SipState::with_key(&key());
        a.absorb(0xDEADBEEF, 2);
        let b = a.clone();

        assert_eq!(a.finalize(4), b.finalize(4));
    }

    #[test]
    fn rounds_matter() {
        let mut a = SipState::with_key(&key());
        let mut b = a.clone();
        a.absorb(42, 1);
        b.absorb(42, 2);
        assert!(a != b);

        let c = a.clone();
        assert!(a.finalize(3) != c.finalize(4));
    }
}
