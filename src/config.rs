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
use crate::consts::EMI_BANKS;
use crate::error::SocResult;

pub const CONFIG_NAME_MAXLEN: usize = 32;

/// Board wiring of a PATA drive hanging off an EMI bank.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PataConfig {
    pub emi_bank: i32,
    /// Drive the bank in PC card timing mode.
    pub pc_mode: bool,
    pub irq: i32,
}

impl PataConfig {
    pub const fn new(emi_bank: i32, pc_mode: bool, irq: i32) -> Self {
        Self {
            emi_bank,
            pc_mode,
            irq,
        }
    }

    /// The bank index, checked against the number of EMI banks.
    pub fn bank(&self) -> SocResult<usize> {
        if self.emi_bank < 0 || self.emi_bank as usize >= EMI_BANKS {
            return soc_result_err!(
                EINVAL,
                format!("EMI bank {} out of range 0..{}", self.emi_bank, EMI_BANKS)
            );
        }
        Ok(self.emi_bank as usize)
    }
}

/// What a board adds on top of the SoC description.
#[derive(Debug, Clone, Copy)]
pub struct BoardConfig {
    pub name: &'static str,
    pub pata: Option<PataConfig>,
}

impl BoardConfig {
    pub fn check(&self) -> SocResult {
        if self.name.is_empty() || self.name.len() > CONFIG_NAME_MAXLEN {
            return soc_result_err!(EINVAL, format!("bad board name {:?}", self.name));
        }
        if let Some(pata) = self.pata {
            pata.bank()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
