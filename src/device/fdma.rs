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
//! Flexible DMA engine: fixed register window plus a firmware/layout
//! descriptor matched to the silicon cut.

use super::PlatformDevice;
#[cfg(feature = "dma")]
use super::PlatformData;
use crate::chip::{ChipIdentity, ChipModel};
use crate::consts::{FDMA_MAX_CHANNEL, FDMA_MIN_CHANNEL};
use crate::error::SocResult;
use crate::resource::Resource;

pub const FDMA_BASE: u64 = 0x1922_0000;
pub const FDMA_SIZE: u64 = 0x10000;
pub const FDMA_IRQ: i32 = 140;

const SLIM_REGS_BASE: u32 = 0x0000;
const PERIPH_REGS_BASE: u32 = 0x8000;

const fn slim_reg(word: u32) -> u32 {
    SLIM_REGS_BASE + (word << 2)
}

const fn periph_reg(word: u32) -> u32 {
    PERIPH_REGS_BASE + (word << 2)
}

/// SLIM core control registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdmaSlimRegs {
    pub id: u32,
    pub ver: u32,
    pub en: u32,
    pub clk_gate: u32,
}

/// Mailbox and interrupt registers of the peripheral block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdmaPeriphRegs {
    pub sync_reg: u32,
    pub cmd_sta: u32,
    pub cmd_set: u32,
    pub cmd_clr: u32,
    pub cmd_mask: u32,
    pub int_sta: u32,
    pub int_set: u32,
    pub int_clr: u32,
    pub int_mask: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdmaHw {
    pub slim_regs: FdmaSlimRegs,
    pub periph_regs: FdmaPeriphRegs,
    pub dmem_offset: u32,
    pub dmem_size: u32,
    pub imem_offset: u32,
    pub imem_size: u32,
}

/// Firmware image, looked up by name by the DMA driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdmaFirmware {
    pub name: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FdmaPlatformData {
    pub hw: &'static FdmaHw,
    pub fw: &'static FdmaFirmware,
    pub min_ch_num: u32,
    pub max_ch_num: u32,
}

/// Register map shared by every cut; only the SLIM memories grow.
const fn fdma_layout(dmem_words: u32, imem_words: u32) -> FdmaHw {
    FdmaHw {
        slim_regs: FdmaSlimRegs {
            id: slim_reg(0x000),       // 0x0000
            ver: slim_reg(0x001),      // 0x0004
            en: slim_reg(0x002),       // 0x0008
            clk_gate: slim_reg(0x003), // 0x000c
        },
        periph_regs: FdmaPeriphRegs {
            sync_reg: periph_reg(0xfe2), // 0xbf88
            cmd_sta: periph_reg(0xff0),  // 0xbfc0
            cmd_set: periph_reg(0xff1),  // 0xbfc4
            cmd_clr: periph_reg(0xff2),  // 0xbfc8
            cmd_mask: periph_reg(0xff3), // 0xbfcc
            int_sta: periph_reg(0xff4),  // 0xbfd0
            int_set: periph_reg(0xff5),  // 0xbfd4
            int_clr: periph_reg(0xff6),  // 0xbfd8
            int_mask: periph_reg(0xff7), // 0xbfdc
        },
        dmem_offset: 0x8000,
        dmem_size: dmem_words << 2,
        imem_offset: 0xc000,
        imem_size: imem_words << 2,
    }
}

pub static STX7100_FDMA_HW: FdmaHw = fdma_layout(0x600, 0xa00); // 6144 / 10240
pub static STX7109C2_FDMA_HW: FdmaHw = fdma_layout(0x600, 0xa00); // 6144 / 10240
pub static STX7109C3_FDMA_HW: FdmaHw = fdma_layout(0x800, 0x1000); // 8192 / 16384

pub static STX7100_FDMA_FW: FdmaFirmware = FdmaFirmware { name: "fdma_7100" };
pub static STX7109C2_FDMA_FW: FdmaFirmware = FdmaFirmware { name: "fdma_7109c2" };
pub static STX7109C3_FDMA_FW: FdmaFirmware = FdmaFirmware { name: "fdma_7109c3" };

pub static STX7100_FDMA_DATA: FdmaPlatformData = FdmaPlatformData {
    hw: &STX7100_FDMA_HW,
    fw: &STX7100_FDMA_FW,
    min_ch_num: FDMA_MIN_CHANNEL,
    max_ch_num: FDMA_MAX_CHANNEL,
};

pub static STX7109C2_FDMA_DATA: FdmaPlatformData = FdmaPlatformData {
    hw: &STX7109C2_FDMA_HW,
    fw: &STX7109C2_FDMA_FW,
    min_ch_num: FDMA_MIN_CHANNEL,
    max_ch_num: FDMA_MAX_CHANNEL,
};

pub static STX7109C3_FDMA_DATA: FdmaPlatformData = FdmaPlatformData {
    hw: &STX7109C3_FDMA_HW,
    fw: &STX7109C3_FDMA_FW,
    min_ch_num: FDMA_MIN_CHANNEL,
    max_ch_num: FDMA_MAX_CHANNEL,
};

/// Which FDMA descriptor a chip needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FdmaVariant {
    /// STx7100, any cut.
    Baseline,
    /// STx7109 cut 1: no working firmware exists.
    HighCapRev1Unsupported,
    /// STx7109 cut 2.
    HighCapRev2,
    /// STx7109 cut 3 and anything newer.
    HighCapRevN,
}

impl FdmaVariant {
    pub fn from_identity(identity: &ChipIdentity) -> Self {
        match identity.model {
            ChipModel::Stx7100 => Self::Baseline,
            ChipModel::Stx7109 => match identity.cut_major {
                1 => Self::HighCapRev1Unsupported,
                2 => Self::HighCapRev2,
                _ => Self::HighCapRevN,
            },
        }
    }

    pub fn platform_data(self) -> SocResult<&'static FdmaPlatformData> {
        match self {
            Self::Baseline => Ok(&STX7100_FDMA_DATA),
            Self::HighCapRev1Unsupported => {
                soc_result_err!(ENODEV, "no FDMA firmware for STx7109 cut 1")
            }
            Self::HighCapRev2 => Ok(&STX7109C2_FDMA_DATA),
            Self::HighCapRevN => Ok(&STX7109C3_FDMA_DATA),
        }
    }
}

/// FDMA descriptor for `identity`.
pub fn select_fdma(identity: &ChipIdentity) -> SocResult<&'static FdmaPlatformData> {
    let variant = FdmaVariant::from_identity(identity);
    let data = variant.platform_data()?;
    info!("FDMA: {:?}, firmware {}", variant, data.fw.name);
    Ok(data)
}

/// The stm-fdma device with its descriptor attached.
pub fn fdma_device(identity: &ChipIdentity) -> SocResult<PlatformDevice> {
    let device = PlatformDevice::single(
        "stm-fdma",
        &[
            Resource::mem(FDMA_BASE, FDMA_SIZE),
            Resource::irq(FDMA_IRQ, -1),
        ],
    );
    #[cfg(feature = "dma")]
    let device = device.with_data(PlatformData::Fdma(select_fdma(identity)?));
    #[cfg(not(feature = "dma"))]
    let _ = identity;
    Ok(device)
}
