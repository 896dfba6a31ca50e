//! The two application flows.
//!
//! Each step is a single console call; the first failing call ends the
//! session and its error is handed back to the entry point.

use log::debug;

use crate::banner;
use crate::console::Console;
use crate::format::{format_bounded_checked, Arg, Formatted};

/// Capacity, in code units, of the stack buffers formatted lines go into.
pub const LINE_CAPACITY: usize = 100;

/// `helloworld`: banner, firmware details, then wait for a key.
pub fn hello<C: Console>(console: &mut C) -> Result<(), C::Error> {
    console.clear()?;
    console.write_str(banner::HELLO_BANNER)?;
    console.write_str(banner::FIRMWARE_HEADING)?;

    let mut vendor_line = [0u16; LINE_CAPACITY];
    let mut revision_line = [0u16; LINE_CAPACITY];
    let (vendor, revision) = {
        let info = console.firmware();
        let vendor = format_bounded_checked(&mut vendor_line, banner::VENDOR_LINE, &[Arg::Str(info.vendor)]);
        let revision = format_bounded_checked(
            &mut revision_line,
            banner::REVISION_LINE,
            &[
                Arg::Hex(info.revision.into()),
                Arg::Unsigned(info.uefi_major.into()),
                Arg::Unsigned(info.uefi_minor.into()),
            ],
        );
        (vendor, revision)
    };
    write_line(console, &vendor_line, vendor)?;
    write_line(console, &revision_line, revision)?;

    console.write_str(banner::HELLO_FOOTER)?;
    wait_any_key(console)?;
    console.write_str(banner::EXITING)
}

/// `secure_loader`: banner, then wait for a key.
pub fn loader<C: Console>(console: &mut C) -> Result<(), C::Error> {
    console.clear()?;
    console.write_str(banner::LOADER_BANNER)?;
    wait_any_key(console)
}

fn write_line<C: Console>(console: &mut C, line: &[u16], written: Formatted) -> Result<(), C::Error> {
    if written.truncated {
        debug!("line cut to {} code units", written.len);
    }
    console.write_ucs2(&line[..=written.len])
}

fn wait_any_key<C: Console>(console: &mut C) -> Result<(), C::Error> {
    let key = console.wait_for_key()?;
    debug!("key: {:?}", key);
    Ok(())
}
