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
//! PATA drive attached to an EMI bank.
//!
//! The drive decodes its registers from EMI address lines:
//! A21 = CS1 and A20 = CS0 (both active low), A19..A17 = DA2..DA0.
//! Resources are kept bank-relative until the board names the bank.

use super::{PlatformData, PlatformDevice};
use crate::config::PataConfig;
use crate::device::emi::EmiBankSet;
use crate::error::SocResult;
use crate::host::EmiOps;
use crate::resource::Resource;

pub const PATA_NAME: &str = "pata_platform";

/// Register stride is one DA line, i.e. address bit 17.
pub const PATA_IOPORT_SHIFT: u32 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PataPlatformInfo {
    pub ioport_shift: u32,
}

pub const PATA_IO: usize = 0;
pub const PATA_CTL: usize = 1;
pub const PATA_IRQ: usize = 2;

/// Unrelocated PATA device; the IRQ is left unset.
pub fn pata_device() -> PlatformDevice {
    PlatformDevice::single(
        PATA_NAME,
        &[
            // I/O base: CS1=N, CS0=A
            Resource::mem(1 << 21, 8 << PATA_IOPORT_SHIFT),
            // CTL base: CS1=A, CS0=N, DA2=A, DA1=A, DA0=N
            Resource::mem((1 << 20) + (6 << PATA_IOPORT_SHIFT), 4),
            Resource::irq(-1, -1),
        ],
    )
    .with_data(PlatformData::Pata(PataPlatformInfo {
        ioport_shift: PATA_IOPORT_SHIFT,
    }))
}

/// Claim the configured bank, move `device` into it and program the bank
/// timings. An invalid or already taken bank is rejected before `device`
/// or `banks` change; a claimed bank is never released.
pub fn configure_pata_bank(
    device: &mut PlatformDevice,
    banks: &mut EmiBankSet,
    config: &PataConfig,
    emi: &mut impl EmiOps,
) -> SocResult {
    let bank = config.bank()?;
    banks.claim(bank)?;

    let bank_base = emi.bank_base(bank);
    debug!("PATA on EMI bank {} at {:#x}", bank, bank_base);

    device.resources[PATA_IO].relocate(bank_base);
    device.resources[PATA_CTL].relocate(bank_base);
    device.resources[PATA_IRQ].set_irq(config.irq);

    emi.config_pata(bank, config.pc_mode);
    Ok(())
}
