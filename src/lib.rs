//! SipHash: a fast keyed pseudorandom function over byte strings.
//!
//! SipHash maps a 128-bit key and a message of any length to a 64-bit output. For a fixed secret
//! key, the output is indistinguishable from random, which makes it the standard defense of hash
//! tables against algorithmic-complexity (hash flooding) attacks, and usable as a short MAC.
//!
//! SipHash is not a general-purpose cryptographic hash. It is not collision-resistant when the
//! key is known, and this crate neither stores nor rotates keys.
//!
//! # The algorithm
//!
//! The state consists of four 64-bit words initialized from the key. The message is split into
//! 8-byte little-endian words, each absorbed with `c` rounds of the SipRound permutation. The final
//! word holds the excessive bytes (zero-padded) and, in its most significant byte, the low byte of
//! the message length. It is absorbed even when the message length is a multiple of 8. Then `d`
//! finalization rounds are applied and the four words are XORed together.
//!
//! The pair `(c, d)` names the variant: SipHash-2-4 is the standard one, SipHash-1-3 the faster
//! one used by hash tables. See `Params`.
//!
//! # Entry points
//!
//! - `hash` and `hash_formatted` compute the output of a complete message in one call.
//! - `init_state`, `absorb_block` and `finalize` expose the word-level primitives for callers
//!   owning the framing of the message. `Session` wraps them with a transition guard.
//! - `SipHasher` accepts the message in pieces of any size and implements `std::hash::Hasher`.

#![warn(missing_docs)]

extern crate byteorder;
extern crate hex;
#[macro_use]
extern crate quick_error;
#[macro_use]
extern crate slog;

mod error;

pub mod buffer;
pub mod encode;
pub mod helper;
pub mod params;
pub mod reference;
pub mod session;
pub mod state;
/// Streaming hashing.
pub mod stream;

pub use encode::{decode_hex, Style};
pub use error::Error;
pub use params::Params;
pub use session::{Phase, Session};
pub use state::SipState;
pub use stream::{SipBuildHasher, SipHasher};

/// Hash a message.
///
/// This computes SipHash-`c`-`d` of `msg` under `key`. It fails with `InvalidKeyLength` if the key
/// is not 16 bytes long and with `InvalidRoundCount` if `c` or `d` is zero. It is total otherwise.
pub fn hash(key: &[u8], msg: &[u8], c: u32, d: u32) -> Result<u64, Error> {
    let params = Params::new(c, d)?;
    let (k0, k1) = helper::split_key(key)?;

    Ok(buffer::hash_with_keys(k0, k1, msg, params))
}

/// Hash a message and encode the output in some style.
pub fn hash_formatted(key: &[u8], msg: &[u8], c: u32, d: u32, style: Style) -> Result<Vec<u8>, Error> {
    hash(key, msg, c, d).map(|x| encode::encode(x, style))
}

/// Set up the state for a 16-byte key.
pub fn init_state(key: &[u8]) -> Result<SipState, Error> {
    let (k0, k1) = helper::split_key(key)?;

    Ok(SipState::new(k0, k1))
}

/// Absorb a little-endian message word into a state with `c` compression rounds.
///
/// The caller does the framing; in particular, the last word must be padded (see
/// `helper::pad_tail` and `helper::blocks`).
pub fn absorb_block(mut state: SipState, word: u64, c: u32) -> Result<SipState, Error> {
    if c == 0 {
        return Err(Error::InvalidRoundCount(c, 0));
    }

    state.absorb(word, c);
    Ok(state)
}

/// Finalize a state with `d` finalization rounds.
///
/// The state is consumed.
pub fn finalize(state: SipState, d: u32) -> Result<u64, Error> {
    if d == 0 {
        return Err(Error::InvalidRoundCount(0, d));
    }

    Ok(state.finalize(d))
}
