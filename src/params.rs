//! Round parameters and presets.

use std::fmt;
use std::str::FromStr;

use Error;

/// The round parameters of SipHash.
///
/// Together with the key, these fully determine the PRF. The usual name of a variant is
/// `SipHash-c-d`, e.g. SipHash-2-4 has two compression and four finalization rounds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Params {
    /// The number of compression rounds, applied per message word.
    c: u32,
    /// The number of finalization rounds.
    d: u32,
}

impl Default for Params {
    fn default() -> Params {
        Params::sip24()
    }
}

impl Params {
    /// Create a new set of parameters.
    ///
    /// This fails with `InvalidRoundCount` if either count is zero.
    pub fn new(c: u32, d: u32) -> Result<Params, Error> {
        if c == 0 || d == 0 {
            Err(Error::InvalidRoundCount(c, d))
        } else {
            Ok(Params {
                c: c,
                d: d,
            })
        }
    }

    /// SipHash-2-4, the standard variant.
    pub fn sip24() -> Params {
        Params {
            c: 2,
            d: 4,
        }
    }

    /// SipHash-1-3, the faster variant used for hash tables.
    pub fn sip13() -> Params {
        Params {
            c: 1,
            d: 3,
        }
    }

    /// SipHash-4-8, the conservative variant.
    pub fn sip48() -> Params {
        Params {
            c: 4,
            d: 8,
        }
    }

    /// The number of compression rounds.
    pub fn c(&self) -> u32 {
        self.c
    }

    /// The number of finalization rounds.
    pub fn d(&self) -> u32 {
        self.d
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SipHash-{}-{}", self.c, self.d)
    }
}

impl FromStr for Params {
    type Err = Error;

    /// Parse the variant notation, e.g. `2-4` or `SipHash-1-3` (case-insensitive prefix).
    fn from_str(s: &str) -> Result<Params, Error> {
        let lower = s.trim().to_ascii_lowercase();
        let rounds = if lower.starts_with("siphash-") {
            &lower["siphash-".len()..]
        } else {
            &lower[..]
        };

        let mut split = rounds.splitn(2, '-');
        match (split.next().map(str::parse::<u32>), split.next().map(str::parse::<u32>)) {
            (Some(Ok(c)), Some(Ok(d))) => Params::new(c, d),
            // Malformed counts are reported as zero rounds.
            _ => Err(Error::InvalidRoundCount(0, 0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default() {
        assert_eq!(Params::default(), Params::sip24());
        assert_eq!(Params::default().c(), 2);
        assert_eq!(Params::default().d(), 4);
    }

    #[test]
    fn reject_zero() {
        assert_eq!(Params::new(0, 4), Err(Error::InvalidRoundCount(0, 4)));
        assert_eq!(Params::new(2, 0), Err(Error::InvalidRoundCount(2, 0)));
        assert_eq!(Params::new(0, 0), Err(Error::InvalidRoundCount(0, 0)));
        assert_eq!(Params::new(1, 1).map(|p| (p.c(), p.d())), Ok((1, 1)));
    }

    #[test]
    fn parse() {
        assert_eq!("2-4".parse::<Params>(), Ok(Params::sip24()));
        assert_eq!("SipHash-1-3".parse::<Params>(), Ok(Params::sip13()));
        assert_eq!(" siphash-4-8 ".parse::<Params>(), Ok(Params::sip48()));
        assert_eq!("3-5".parse::<Params>().map(|p| (p.c(), p.d())), Ok((3, 5)));

        assert!("0-4".parse::<Params>().is_err());
        assert!("2".parse::<Params>().is_err());
        assert!("2-x".parse::<Params>().is_err());
        assert!("".parse::<Params>().is_err());
        assert!("-2-4".parse::<Params>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Params::sip24().to_string(), "SipHash-2-4");
        assert_eq!(Params::sip13().to_string(), "SipHash-1-3");
        assert_eq!(Params::sip24().to_string().parse::<Params>(), Ok(Params::sip24()));
    }

    #[test]
    fn compare_presets() {
        let fast = Params::sip13();
        let strong = Params::sip48();

        assert!(fast.c() < Params::sip24().c());
        assert!(strong.c() > Params::sip24().c());
        assert!(strong.d() > fast.d());
    }
}
