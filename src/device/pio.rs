// Copyright (c) 2025 Syswonder
// stx7100 is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//     http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR
// FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.
//
// Syswonder Website:
//      https://www.syswonder.org
//
// Authors:
//
//! PIO (GPIO) port controllers.

use alloc::vec::Vec;

use super::{PlatformData, PlatformDevice};
use crate::consts::PIO_PORTS;
use crate::resource::Resource;

pub const PIO_PORT_SIZE: u64 = 0x100;

/// `(register window, interrupt line)` of each port.
pub const STX7100_PIO_PORTS: [(u64, i32); PIO_PORTS] = [
    (0x1802_0000, 80),
    (0x1802_1000, 84),
    (0x1802_2000, 88),
    (0x1802_3000, 115),
    (0x1802_4000, 114),
    (0x1802_5000, 113),
];

/// Pin labels only; pads are set up by the GPIO driver itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PioPlatformData {
    pub port: u32,
    pub labels_only: bool,
}

/// The stm-gpio device for `port`, or `None` past the last port.
pub fn pio_device(port: usize) -> Option<PlatformDevice> {
    let &(base, irq) = STX7100_PIO_PORTS.get(port)?;
    let device = PlatformDevice::new(
        "stm-gpio",
        port as i32,
        &[Resource::mem(base, PIO_PORT_SIZE), Resource::irq(irq, -1)],
    )
    .with_data(PlatformData::Pio(PioPlatformData {
        port: port as u32,
        labels_only: true,
    }));
    Some(device)
}

pub fn pio_devices() -> Vec<PlatformDevice> {
    (0..PIO_PORTS).filter_map(pio_device).collect()
}
