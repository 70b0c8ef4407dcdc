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
//! Boot-phase entry points.
//!
//! The host calls these in order: `early_device_init` from its early
//! setup, `postcore_setup` once the driver core is up, then board code may
//! call `configure_pata`, and finally `devices_setup`. Every failure is a
//! wrong board or chip description; the caller must not continue booting.

use alloc::vec::Vec;

use crate::chip::{self, ChipIdentity};
use crate::config::PataConfig;
use crate::consts::{PERIPH_MAP_BASE, PERIPH_MAP_SIZE, PIO_FIRST_PIN};
use crate::device::emi::{emi_device, EmiBankSet};
use crate::device::fdma::fdma_device;
use crate::device::pata::{configure_pata_bank, pata_device, PATA_NAME};
use crate::device::pio::pio_devices;
use crate::device::rng::{rng_devrandom_device, rng_hwrandom_device};
use crate::device::sysconf::{sysconf_device, SysconfGroup};
use crate::device::PlatformDevice;
use crate::error::SocResult;
use crate::host::{DeviceRegistry, GpioOps, Host, SysconfOps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BootPhase {
    Reset,
    Early,
    Postcore,
    Devices,
}

/// State shared by the boot phases. Owned by the host's boot sequencer.
pub struct BootContext {
    phase: BootPhase,
    chip: Option<ChipIdentity>,
    emi_banks: EmiBankSet,
    /// Held until the board wires it to a bank.
    pata: Option<PlatformDevice>,
    registered: Vec<(&'static str, i32)>,
}

impl Default for BootContext {
    fn default() -> Self {
        Self::new()
    }
}

impl BootContext {
    pub fn new() -> Self {
        Self {
            phase: BootPhase::Reset,
            chip: None,
            emi_banks: EmiBankSet::new(),
            pata: Some(pata_device()),
            registered: Vec::new(),
        }
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Chip identity, known from the early phase on.
    pub fn cpu_data(&self) -> Option<&ChipIdentity> {
        self.chip.as_ref()
    }

    pub fn emi_banks(&self) -> &EmiBankSet {
        &self.emi_banks
    }

    /// `{name, id}` of every device handed to the host so far.
    pub fn registered(&self) -> &[(&'static str, i32)] {
        &self.registered
    }

    fn expect_phase(&self, phase: BootPhase, what: &str) -> SocResult {
        if self.phase != phase {
            return soc_result_err!(
                EPERM,
                format!("{} in boot phase {:?}, expected {:?}", what, self.phase, phase)
            );
        }
        Ok(())
    }

    fn check_unregistered(&self, device: &PlatformDevice) -> SocResult {
        if self.registered.contains(&device.key()) {
            return soc_result_err!(
                EEXIST,
                format!("device {}.{} already registered", device.name, device.id)
            );
        }
        Ok(())
    }

    fn register(&mut self, registry: &mut impl DeviceRegistry, device: PlatformDevice) -> SocResult {
        self.check_unregistered(&device)?;
        let key = device.key();
        debug!("registering {}.{}", key.0, key.1);
        registry.register(device)?;
        self.registered.push(key);
        Ok(())
    }

    /// Bring up what the rest of the boot needs before the device
    /// registry exists, and find out which chip we run on.
    pub fn early_device_init(&mut self, host: &mut impl Host) -> SocResult {
        self.expect_phase(BootPhase::Reset, "early_device_init")?;

        // One mapping for the whole peripheral window, so later driver
        // mappings are satisfied without faulting.
        host.ioremap_nocache(PERIPH_MAP_BASE, PERIPH_MAP_SIZE)?;

        SysconfOps::early_init(host, &sysconf_device())?;
        GpioOps::early_init(host, &pio_devices(), PIO_FIRST_PIN)?;

        let identity = chip::identify(host)?;
        host.set_boot_cpu_data(&identity);
        self.chip = Some(identity);

        // ST40 RTC runs from clockgen B.
        let rtc = host.claim(SysconfGroup::SysCfg, 8, 1, 1, "rtc")?;
        host.write(&rtc, 1);

        // The LPC is left unconfigured, so sleep is not safe.
        host.disable_hlt();

        self.phase = BootPhase::Early;
        Ok(())
    }

    /// Register the EMI container; bank relocation depends on it.
    pub fn postcore_setup(&mut self, host: &mut impl Host) -> SocResult {
        self.expect_phase(BootPhase::Early, "postcore_setup")?;
        self.register(host, emi_device())?;
        self.phase = BootPhase::Postcore;
        Ok(())
    }

    /// Attach the board's PATA drive to its EMI bank and register it.
    /// If the host then refuses the device, the bank stays claimed and
    /// the descriptor is consumed.
    pub fn configure_pata(&mut self, config: &PataConfig, host: &mut impl Host) -> SocResult {
        let bank = config.bank()?;
        if self.emi_banks.is_claimed(bank) {
            return soc_result_err!(EBUSY, format!("EMI bank {} already claimed", bank));
        }
        let Some(mut device) = self.pata.take() else {
            return soc_result_err!(EEXIST, format!("{} already configured", PATA_NAME));
        };
        if let Err(err) = self.expect_phase(BootPhase::Postcore, "configure_pata") {
            self.pata = Some(device);
            return Err(err);
        }

        configure_pata_bank(&mut device, &mut self.emi_banks, config, host)?;
        info!(
            "PATA on EMI bank {}, irq {}, {} mode",
            bank,
            config.irq,
            if config.pc_mode { "PC card" } else { "true IDE" }
        );
        self.register(host, device)
    }

    /// Register the PIO ports and the remaining on-chip devices.
    pub fn devices_setup(&mut self, host: &mut impl Host) -> SocResult {
        self.expect_phase(BootPhase::Postcore, "devices_setup")?;
        let Some(identity) = self.chip else {
            return soc_result_err!(EPERM, "chip identity unknown");
        };

        let fdma = fdma_device(&identity)?;
        let devices = [
            fdma,
            sysconf_device(),
            rng_hwrandom_device(),
            rng_devrandom_device(),
        ];

        let ports = pio_devices();
        for device in ports.iter().chain(devices.iter()) {
            self.check_unregistered(device)?;
        }
        for port in ports {
            self.register(host, port)?;
        }
        for device in devices {
            self.register(host, device)?;
        }

        self.phase = BootPhase::Devices;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
