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
//! External Memory Interface container device and bank bookkeeping.

use bit_field::BitField;

use super::PlatformDevice;
use crate::consts::EMI_BANKS;
use crate::error::SocResult;
use crate::resource::Resource;

/// Address space decoded by the EMI banks.
pub const EMI_SPACE_BASE: u64 = 0;
pub const EMI_SPACE_SIZE: u64 = 64 * 1024 * 1024;
/// EMI configuration registers.
pub const EMI_REGS_BASE: u64 = 0x1a10_0000;
pub const EMI_REGS_SIZE: u64 = 0x874;

pub fn emi_device() -> PlatformDevice {
    PlatformDevice::single(
        "emi",
        &[
            Resource::mem(EMI_SPACE_BASE, EMI_SPACE_SIZE),
            Resource::mem(EMI_REGS_BASE, EMI_REGS_SIZE),
        ],
    )
}

/// One bit per EMI bank, set once a peripheral owns the bank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmiBankSet(u8);

impl EmiBankSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn is_claimed(&self, bank: usize) -> bool {
        bank < EMI_BANKS && self.0.get_bit(bank)
    }

    /// Claim `bank`; a bank can only ever be claimed once.
    pub fn claim(&mut self, bank: usize) -> SocResult {
        if bank >= EMI_BANKS {
            return soc_result_err!(EINVAL, format!("EMI bank {} does not exist", bank));
        }
        if self.0.get_bit(bank) {
            return soc_result_err!(EBUSY, format!("EMI bank {} already claimed", bank));
        }
        self.0.set_bit(bank, true);
        Ok(())
    }

    pub fn claimed(&self) -> impl Iterator<Item = usize> + '_ {
        (0..EMI_BANKS).filter(move |&bank| self.0.get_bit(bank))
    }
}
