//! [`Console`] on the boot-time system table.

use core::fmt::Write;

use uefi::prelude::*;
use uefi::proto::console::text::Key;
use uefi::{CStr16, ResultExt};

use crate::console::{Console, FirmwareInfo, KeyPress};

impl Console for SystemTable<Boot> {
    type Error = uefi::Error;

    fn clear(&mut self) -> uefi::Result {
        self.stdout().clear()
    }

    fn write_str(&mut self, text: &str) -> uefi::Result {
        self.stdout()
            .write_str(text)
            .map_err(|_| uefi::Error::new(Status::DEVICE_ERROR, ()))
    }

    fn write_ucs2(&mut self, text: &[u16]) -> uefi::Result {
        let text = CStr16::from_u16_with_nul(text)
            .map_err(|_| uefi::Error::new(Status::INVALID_PARAMETER, ()))?;
        self.stdout().output_string(text)
    }

    fn wait_for_key(&mut self) -> uefi::Result<Option<KeyPress>> {
        let event = self
            .stdin()
            .wait_for_key_event()
            .ok_or_else(|| uefi::Error::new(Status::UNSUPPORTED, ()))?;
        self.boot_services()
            .wait_for_event(&mut [event])
            .discard_errdata()?;

        let key = self.stdin().read_key()?;
        Ok(key.map(|key| match key {
            Key::Printable(c) => KeyPress::Printable(u16::from(c)),
            Key::Special(scan) => KeyPress::Special(scan.0),
        }))
    }

    fn firmware(&self) -> FirmwareInfo<'_> {
        let standard = self.uefi_revision();
        FirmwareInfo {
            vendor: self.firmware_vendor().to_u16_slice_with_nul(),
            revision: self.firmware_revision(),
            uefi_major: standard.major(),
            uefi_minor: standard.minor(),
        }
    }
}
