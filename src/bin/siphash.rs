extern crate hex;
extern crate siphash;
#[macro_use]
extern crate slog;

use std::{env, fmt, process};
use std::io::{self, Read, Write};

use siphash::{encode, helper, Error, Params, Session, Style};
use slog::{Drain, Level, Logger, KV};

/// The help page.
const HELP: &'static [u8] = b"\
Introduction:\n\
    siphash - an utility to compute the keyed SipHash digest of stdin.\n\
Usage:\n\
    siphash [option]...\n\
Options:\n\
    -k <key>   : The key as 32 hex digits. Defaults to the all-zero key.\n\
    -r <c-d>   : The variant, e.g. 2-4 (default) or 1-3.\n\
    -f <style> : The output style, one of lower (default), upper or raw.\n\
    -v         : Log the hashing to stderr.\n\
    -h         : Write this manpage to stdout.\n\
";

/// A drain writing a line per record to stderr.
struct Stderr;

/// A serializer collecting the key-value pairs of a record into a line.
struct Line(String);

impl slog::Serializer for Line {
    fn emit_arguments(&mut self, key: slog::Key, val: &fmt::Arguments) -> slog::Result {
        self.0.push_str(&format!(" {}={}", key, val));
        Ok(())
    }
}

impl Drain for Stderr {
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &slog::Record, values: &slog::OwnedKVList) -> io::Result<()> {
        let mut line = Line(format!("{} {};", record.level().as_short_str(), record.msg()));
        // A pair that fails to serialize is left out rather than losing the whole record.
        let _ = record.kv().serialize(record, &mut line);
        let _ = values.serialize(record, &mut line);

        writeln!(io::stderr(), "{}", line.0)
    }
}

/// The command-line options.
struct Options {
    /// The key.
    key: Vec<u8>,
    /// The variant.
    params: Params,
    /// The output style.
    style: Style,
    /// Log to stderr?
    verbose: bool,
}

/// Parse the arguments, or `None` if the help page was requested.
fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Option<Options>, String> {
    let mut options = Options {
        key: vec![0; 16],
        params: Params::default(),
        style: Style::default(),
        verbose: false,
    };

    while let Some(arg) = args.next() {
        match &*arg {
            "-k" => {
                let key = args.next().ok_or("Missing key after -k.")?;
                options.key = hex::decode(&key).map_err(|_| format!("Invalid hex key: {}", key))?;
            },
            "-r" => {
                let variant = args.next().ok_or("Missing variant after -r.")?;
                options.params = variant.parse().map_err(|err: Error| err.to_string())?;
            },
            "-f" => {
                options.style = match &*args.next().unwrap_or(String::new()) {
                    "lower" => Style::LowerHex,
                    "upper" => Style::UpperHex,
                    "raw" => Style::Binary,
                    style => return Err(format!("Unknown output style: {}", style)),
                };
            },
            "-v" => options.verbose = true,
            "-h" => return Ok(None),
            arg => return Err(format!("Unknown option: {}", arg)),
        }
    }

    Ok(Some(options))
}

/// Hash stdin and write the digest to stdout.
fn run(options: Options) -> Result<(), String> {
    let level = if options.verbose { Level::Trace } else { Level::Warning };
    let log = Logger::root(Stderr.filter_level(level).fuse(), o!());

    // Read stream from stdin.
    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input).map_err(|err| err.to_string())?;
    debug!(log, "read input"; "bytes" => input.len(), "variant" => options.params.to_string());

    let mut session = Session::with_logger(&options.key, options.params, &log).map_err(|err| err.to_string())?;
    session.absorb_all(helper::blocks(&input)).map_err(|err| err.to_string())?;
    let digest = session.finalize().map_err(|err| err.to_string())?;

    // Write the digest to stdout, with a newline if it is text.
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    stdout.write_all(&encode::encode(digest, options.style)).map_err(|err| err.to_string())?;
    if options.style.is_printable() {
        stdout.write_all(b"\n").map_err(|err| err.to_string())?;
    }

    Ok(())
}

fn main() {
    let result = match parse(env::args().skip(1)) {
        Ok(Some(options)) => run(options),
        Ok(None) => io::stdout().write_all(HELP).map_err(|err| err.to_string()),
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        let _ = writeln!(io::stderr(), "siphash: {}", err);
        process::exit(1);
    }
}
