use std::hash::{BuildHasher, Hasher};

use helper;
use params::Params;
use state::SipState;

/// The streaming version of the algorithm.
///
/// This accepts the message in arbitrarily sized pieces and does the chunking and padding itself,
/// so the result equals the one-shot hash of everything written so far.
///
/// Note that the input type is not taken into account. Writing `1u32` hashes its native-endian
/// bytes, exactly as `write(&1u32.to_ne_bytes())` would.
#[derive(Clone, Debug)]
pub struct SipHasher {
    /// The key halves, kept for `reset`.
    keys: (u64, u64),
    /// The round parameters.
    params: Params,
    /// The state of the hasher.
    state: SipState,
    /// The unprocessed bytes, in little-endian.
    tail: u64,
    /// The number of valid bytes in `tail`.
    ntail: usize,
    /// The number of bytes written.
    length: u64,
}

impl Default for SipHasher {
    /// An all-zero key with SipHash-2-4.
    ///
    /// This is only useful when the key does not matter, e.g. for checksums.
    fn default() -> SipHasher {
        SipHasher::new_with_keys(0, 0)
    }
}

impl SipHasher {
    /// Create a SipHash-2-4 hasher keyed with `key`.
    pub fn new_with_key(key: &[u8; 16]) -> SipHasher {
        SipHasher::new_with_keys(helper::read_u64(&key[..8]), helper::read_u64(&key[8..]))
    }

    /// Create a SipHash-2-4 hasher keyed with the halves `k0` and `k1`.
    pub fn new_with_keys(k0: u64, k1: u64) -> SipHasher {
        SipHasher::with_params(k0, k1, Params::default())
    }

    /// Create a hasher for some variant.
    pub fn with_params(k0: u64, k1: u64, params: Params) -> SipHasher {
        SipHasher {
            keys: (k0, k1),
            params: params,
            state: SipState::new(k0, k1),
            tail: 0,
            ntail: 0,
            length: 0,
        }
    }

    /// Forget everything written, keeping the key and the parameters.
    pub fn reset(&mut self) {
        *self = SipHasher::with_params(self.keys.0, self.keys.1, self.params);
    }
}

impl Hasher for SipHasher {
    fn write(&mut self, msg: &[u8]) {
        let c = self.params.c();
        self.length += msg.len() as u64;

        let mut msg = msg;

        // Top up the buffered tail first.
        if self.ntail != 0 {
            let needed = helper::WORD_LEN - self.ntail;
            if msg.len() < needed {
                self.tail |= helper::read_int(msg) << (8 * self.ntail);
                self.ntail += msg.len();
                return;
            }

            let m = self.tail | helper::read_int(&msg[..needed]) << (8 * self.ntail);
            self.state.absorb(m, c);

            self.tail = 0;
            self.ntail = 0;
            msg = &msg[needed..];
        }

        // The buffered tail is flushed, process the new input.
        let end = msg.len() & !0x7;
        for chunk in msg[..end].chunks(helper::WORD_LEN) {
            self.state.absorb(helper::read_u64(chunk), c);
        }

        self.tail = helper::read_int(&msg[end..]);
        self.ntail = msg.len() - end;
    }

    fn finish(&self) -> u64 {
        // Finish a copy, so the hasher can keep going.
        let mut state = self.state.clone();
        state.absorb(self.tail | ((self.length & 0xFF) << 56), self.params.c());

        state.finalize(self.params.d())
    }
}

/// A builder of keyed `SipHasher`s.
///
/// This is meant for keying hash tables, e.g. `HashMap::with_hasher(SipBuildHasher::new(&key))`.
/// The key should come from a strong random source and stay secret.
#[derive(Clone, Debug)]
pub struct SipBuildHasher {
    /// The key halves.
    keys: (u64, u64),
    /// The round parameters.
    params: Params,
}

impl SipBuildHasher {
    /// Create a SipHash-1-3 builder keyed with `key`.
    pub fn new(key: &[u8; 16]) -> SipBuildHasher {
        SipBuildHasher::with_params(key, Params::sip13())
    }

    /// Create a builder for some variant.
    pub fn with_params(key: &[u8; 16], params: Params) -> SipBuildHasher {
        SipBuildHasher {
            keys: (helper::read_u64(&key[..8]), helper::read_u64(&key[8..])),
            params: params,
        }
    }
}

impl BuildHasher for SipBuildHasher {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> SipHasher {
        SipHasher::with_params(self.keys.0, self.keys.1, self.params)
    }
}
