#![no_std]
#![no_main]

use log::error;
use uefi::prelude::*;

#[entry]
fn main(_image: Handle, mut system_table: SystemTable<Boot>) -> Status {
    if let Err(err) = uefi_services::init(&mut system_table) {
        return err.status();
    }

    match secure_console::session::loader(&mut system_table) {
        Ok(()) => Status::SUCCESS,
        Err(err) => {
            error!("secure_loader: console call failed: {:?}", err.status());
            err.status()
        }
    }
}
