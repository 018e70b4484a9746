//! Address worker for DKG party output.
//!
//! Pipe the raw output of a DKG party (plain status text or the HTML
//! result fragment) to stdin; the worker extracts the group public key,
//! derives the Ethereum address, and writes one JSON response to stdout.
//!
//! The surrounding orchestration owns fetching the output and choosing
//! which party to read; this process is a pure text-in/JSON-out step.

mod output;

use dkg_address::{derive_address, extract_coordinates, extract_dkg_fields};
use std::io::{self, Read, Write};

fn main() {
    let result = run();
    let out = match result {
        Ok(response) => response,
        Err(e) => output::error_response(&e),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = handle.write_all(out.as_bytes());
    let _ = handle.flush();
}

fn run() -> Result<String, String> {
    // 1. Read raw party output from stdin
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;

    // 2. Extract the group public key coordinates
    let (x, y) = extract_coordinates(&text).map_err(|e| e.to_string())?;

    // 3. Derive the address
    let address = derive_address(&x, &y).map_err(|e| e.to_string())?;

    // 4. Auxiliary HTML fields ride along when the page carried them
    let fields = extract_dkg_fields(&text);

    Ok(output::address_response(&x, &y, &address, &fields))
}
