//! Error handling.
//!
//! All the errors are local validation failures. They are detected before any mixing happens (or,
//! for `InvalidState`, by the session's own transition guard), so a failed call never yields a
//! partial result. None of them are transient.

quick_error! {
    /// A SipHash error.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Error {
        /// The key was not exactly 16 bytes long.
        ///
        /// The field is the length of the rejected key.
        InvalidKeyLength(len: usize) {
            display("SipHash key must be 16 bytes long, got {} bytes.", len)
            description("Invalid SipHash key length.")
        }
        /// A round count was zero.
        ///
        /// The fields are the rejected compression and finalization rounds, in that order. Zero
        /// compression rounds would XOR the message word in and out again without any mixing.
        InvalidRoundCount(c: u32, d: u32) {
            display("SipHash round counts must be positive, got c = {}, d = {}.", c, d)
            description("Invalid SipHash round count.")
        }
        /// An operation was attempted on a finalized session.
        InvalidState {
            display("The SipHash session is already finalized.")
            description("Operation on a finalized SipHash session.")
        }
        /// A digest could not be decoded from hexadecimal.
        InvalidHex {
            display("A hexadecimal digest must consist of exactly 16 hex digits.")
            description("Invalid hexadecimal digest.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::InvalidKeyLength(3).to_string(), "SipHash key must be 16 bytes long, got 3 bytes.");
        assert_eq!(Error::InvalidRoundCount(0, 4).to_string(),
                   "SipHash round counts must be positive, got c = 0, d = 4.");
        assert_eq!(Error::InvalidState.to_string(), "The SipHash session is already finalized.");
    }
}
