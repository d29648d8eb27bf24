//! Incremental hashing sessions.
//!
//! A session exposes the word-level operations of SipHash directly: the caller owns the framing
//! (chunking the message into little-endian words and padding the final one, see
//! `helper::blocks`), and feeds the words one by one. The session guards the state transitions,
//! so that a finalized state is never fed or finalized again.

use slog::{self, Logger};

use helper;
use params::Params;
use state::SipState;
use Error;

/// The phase of a session.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// The key is set up, but no word is absorbed yet.
    Initialized,
    /// One or more words are absorbed.
    Absorbing,
    /// The output is computed. This is terminal.
    Finalized,
}

/// An incremental SipHash session.
///
/// A session has a single owner; it is fed through `&mut self` and shares nothing.
pub struct Session {
    /// The state, or `None` after finalization.
    state: Option<SipState>,
    /// The round parameters.
    params: Params,
    /// The number of words absorbed so far.
    blocks: u64,
    /// The logger.
    log: Logger,
}

impl Session {
    /// Start a session with a 16-byte key.
    ///
    /// This fails with `InvalidKeyLength` if the key is not 16 bytes long. Logging is discarded.
    pub fn new(key: &[u8], params: Params) -> Result<Session, Error> {
        Session::with_logger(key, params, &Logger::root(slog::Discard, o!()))
    }

    /// Start a session logging to a child of `log`.
    pub fn with_logger(key: &[u8], params: Params, log: &Logger) -> Result<Session, Error> {
        let (k0, k1) = helper::split_key(key)?;

        Ok(Session::from_state(SipState::new(k0, k1), params, log))
    }

    /// Continue a session from some state.
    ///
    /// The state may come from `init_state` or from a previous session's `state()`.
    pub fn from_state(state: SipState, params: Params, log: &Logger) -> Session {
        let log = log.new(o!("c" => params.c(), "d" => params.d()));
        trace!(log, "starting session");

        Session {
            state: Some(state),
            params: params,
            blocks: 0,
            log: log,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            None => Phase::Finalized,
            Some(_) if self.blocks == 0 => Phase::Initialized,
            Some(_) => Phase::Absorbing,
        }
    }

    /// The number of words absorbed so far.
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    /// The round parameters.
    pub fn params(&self) -> Params {
        self.params
    }

    /// Inspect the state, or `None` if the session is finalized.
    pub fn state(&self) -> Option<&SipState> {
        self.state.as_ref()
    }

    /// Absorb a message word.
    ///
    /// This fails with `InvalidState` if the session is finalized.
    pub fn absorb(&mut self, word: u64) -> Result<(), Error> {
        match self.state {
            Some(ref mut state) => {
                state.absorb(word, self.params.c());
                self.blocks += 1;

                trace!(self.log, "absorbed word"; "blocks" => self.blocks);
                Ok(())
            },
            None => {
                warn!(self.log, "absorbing into a finalized session");
                Err(Error::InvalidState)
            },
        }
    }

    /// Absorb every word of some iterator, e.g. `helper::blocks`.
    pub fn absorb_all<I>(&mut self, words: I) -> Result<(), Error>
    where I: IntoIterator<Item = u64> {
        for word in words {
            self.absorb(word)?;
        }

        Ok(())
    }

    /// Finalize the session and get the output.
    ///
    /// This moves the session to `Phase::Finalized`. Finalizing again fails with `InvalidState`
    /// instead of recomputing anything.
    pub fn finalize(&mut self) -> Result<u64, Error> {
        match self.state.take() {
            Some(state) => {
                debug!(self.log, "finalizing session"; "blocks" => self.blocks);
                Ok(state.finalize(self.params.d()))
            },
            None => {
                warn!(self.log, "finalizing a finalized session");
                Err(Error::InvalidState)
            },
        }
    }
}
