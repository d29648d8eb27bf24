//! The one-shot hash over a complete buffer.

use helper;
use params::Params;
use state::SipState;

/// Hash a buffer with the key halves `k0` and `k1`.
///
/// Full 8-byte chunks are read directly as little-endian words and absorbed; the excessive bytes
/// are padded into a final word carrying the length byte. The parameters are valid by
/// construction, so this cannot fail.
pub fn hash_with_keys(k0: u64, k1: u64, buf: &[u8], params: Params) -> u64 {
    let c = params.c();
    let mut state = SipState::new(k0, k1);

    // Round down the buffer length to the nearest multiple of 8, the "main segment".
    let end = buf.len() & !0x7;

    for chunk in buf[..end].chunks(helper::WORD_LEN) {
        state.absorb(helper::read_u64(chunk), c);
    }

    // The padded word is absorbed even if there are no excessive bytes.
    state.absorb(helper::pad_tail(&buf[end..], buf.len() as u64), c);

    state.finalize(params.d())
}

/// Hash a buffer with a 16-byte key.
pub fn hash(key: &[u8; 16], buf: &[u8], params: Params) -> u64 {
    hash_with_keys(helper::read_u64(&key[..8]), helper::read_u64(&key[8..]), buf, params)
}
