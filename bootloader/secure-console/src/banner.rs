//! Text shown by the two applications.
//!
//! The `&str` banners use bare `\n`; the firmware console writer turns each
//! one into CRLF. The UCS-2 format lines go straight to `OutputString`, so
//! they carry their own `\r\n`.

pub const HELLO_BANNER: &str = "
═══════════════════════════════════════════════════════
  Secure UEFI Application - Hello World
═══════════════════════════════════════════════════════

  Hello, Secure UEFI World!

  This application has been:
    ✓ Compiled successfully
    ✓ Digitally signed
    ✓ Signature verified
    ✓ Loaded into UEFI environment

";

pub const FIRMWARE_HEADING: &str = "  UEFI Firmware:\n";

/// Takes the firmware vendor string.
pub const VENDOR_LINE: &[u16] = crate::ucs2!("    Vendor: %s\r\n");

/// Takes the firmware revision and the UEFI major and minor revision.
pub const REVISION_LINE: &[u16] = crate::ucs2!("    Revision: 0x%x (UEFI %u.%u)\r\n");

pub const HELLO_FOOTER: &str = "
  Security: ✓ VERIFIED

═══════════════════════════════════════════════════════

Press any key to exit...
";

pub const EXITING: &str = "\nExiting...\n";

pub const LOADER_BANNER: &str = "
═══════════════════════════════════════════════
  Secure UEFI Loader
═══════════════════════════════════════════════

  [✓] Signature verification PASSED
  [✓] Application authorized

Press any key...
";
