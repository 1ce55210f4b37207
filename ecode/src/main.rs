use std::env;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::process::ExitCode;

use log::debug;

use ecodelib::resolve;
use ecodelib::LookupError;

const HELP_FLAG: &str = "--help";

const HELP_TEXT: &str = r##"ecode v{version}

DESCRIPTION:
    Very simple program that outputs the name of the error associated with an
    error code and its description. Vice-versa, the name of the error code can
    be used to fetch its error code and description.

EXAMPLES:
    $ ecode 12
    12 ENOMEM Out of memory

    $ ecode EFAULT
    14 EFAULT Bad address

USAGE:
    ecode [--help] <code|name>

ARGUMENTS:
    code        The error code numerical value to lookup.
    name        The error code string name to lookup.
"##;

fn help_text() -> String {
    HELP_TEXT.replace("{version}", env!("CARGO_PKG_VERSION"))
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    // Only the first argument matters, the rest are ignored
    let raw = match env::args_os().nth(1) {
        Some(arg) => arg,
        None => {
            eprint!("{}", help_text());
            return ExitCode::FAILURE;
        }
    };
    let query = raw.to_string_lossy();
    debug!("query {:?}", query);

    // Anywhere in the argument, so "x--helpy" asks for help too
    if query.contains(HELP_FLAG) {
        print!("{}", help_text());
        return ExitCode::SUCCESS;
    }

    match resolve(&query) {
        Ok(entry) => {
            debug!("found {:?}", entry);
            println!("{}", entry);
            ExitCode::SUCCESS
        }
        Err(LookupError::UnknownName(_)) => {
            debug!("no name contains {:?}", query);
            // Echo the argument as given, even if it is not valid UTF-8
            let mut stderr = io::stderr().lock();
            let _ = stderr
                .write_all(b"? ")
                .and_then(|_| stderr.write_all(&os_bytes(&raw)))
                .and_then(|_| stderr.write_all(b" Unknown error name\n"));
            ExitCode::FAILURE
        }
        Err(err) => {
            debug!("lookup failed: {:?}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(unix)]
fn os_bytes(arg: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    arg.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn os_bytes(arg: &OsStr) -> Vec<u8> {
    arg.to_string_lossy().into_owned().into_bytes()
}
