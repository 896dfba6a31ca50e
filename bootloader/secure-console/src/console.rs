/// A key read from the firmware's text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// UCS-2 character.
    Printable(u16),
    /// Firmware scan code for keys without a character.
    Special(u16),
}

/// What the firmware reports about itself.
#[derive(Debug, Clone, Copy)]
pub struct FirmwareInfo<'a> {
    /// Vendor name, null-terminated UCS-2.
    pub vendor: &'a [u16],
    /// Vendor-specific firmware revision.
    pub revision: u32,
    pub uefi_major: u16,
    pub uefi_minor: u16,
}

/// The firmware text console, as used by the sessions.
///
/// Implemented on the boot-time system table itself, which the entry point
/// owns and hands down explicitly.
pub trait Console {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Writes UTF-8 text, `\n` becoming a line break.
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Writes null-terminated UCS-2 text unchanged.
    fn write_ucs2(&mut self, text: &[u16]) -> Result<(), Self::Error>;

    /// Blocks until a key is available, then reads it.
    ///
    /// `None` means the wait ended without a key being readable.
    fn wait_for_key(&mut self) -> Result<Option<KeyPress>, Self::Error>;

    fn firmware(&self) -> FirmwareInfo<'_>;
}
