use super::emi::{emi_device, EmiBankSet};
use super::pata::{configure_pata_bank, pata_device, PATA_CTL, PATA_IO, PATA_IRQ};
use super::pio::{pio_device, pio_devices};
use super::rng::{rng_devrandom_device, rng_hwrandom_device};
use super::sysconf::{sysconf_device, SysconfField, SysconfGroup};
use super::*;
use crate::config::PataConfig;
use crate::consts::{EMI_BANKS, PIO_PORTS};
use crate::error::SocErrorNum;
use crate::tests::{HostEvent, MockHost, MOCK_EMI_BANK_SIZE};

#[test]
fn test_pio_table() {
    let ports = pio_devices();
    let irqs: Vec<u32> = ports.iter().filter_map(|dev| dev.irq()).collect();
    assert_eq!(irqs, vec![80, 84, 88, 115, 114, 113]);
    for (idx, dev) in ports.iter().enumerate() {
        assert_eq!(dev.key(), ("stm-gpio", idx as i32));
        assert_eq!(dev.resources[0].start, 0x1802_0000 + 0x1000 * idx as u64);
        assert_eq!(dev.resources[0].size(), 0x100);
    }
}

#[test]
fn test_pio_port_out_of_range() {
    assert_eq!(pio_device(5).map(|dev| dev.key()), Some(("stm-gpio", 5)));
    assert!(pio_device(PIO_PORTS).is_none());
    assert!(pio_device(usize::MAX).is_none());
}

#[test]
fn test_rng_devices_share_window() {
    let hw = rng_hwrandom_device();
    let dev = rng_devrandom_device();
    assert_ne!(hw.key(), dev.key());
    assert_eq!(hw.resources, dev.resources);
    assert_eq!(hw.irq(), None);
}

#[test]
fn test_sysconf_groups() {
    let dev = sysconf_device();
    assert_eq!(dev.resources[0], Resource::mem(0x1900_1000, 0x194));
    let PlatformData::Sysconf(data) = &dev.platform_data else {
        panic!("sysconf device without group table");
    };
    assert_eq!(data.register_offset(SysconfGroup::SysDev, 0), Some(0x000));
    assert_eq!(data.register_offset(SysconfGroup::SysSta, 9), Some(0x008 + 9 * 4));
    assert_eq!(data.register_offset(SysconfGroup::SysCfg, 8), Some(0x120));
    assert_eq!(SysconfGroup::try_from(2u32), Ok(SysconfGroup::SysCfg));
}

#[test]
fn test_sysconf_field_bits() {
    let rtc = SysconfField::new(SysconfGroup::SysCfg, 8, 1, 1, "rtc");
    assert_eq!(rtc.insert(0xf0, 1), 0xf2);
    assert_eq!(rtc.extract(0xf2), 1);
    let devid = SysconfField::new(SysconfGroup::SysDev, 0, 0, 31, "devid");
    assert_eq!(devid.extract(0xdead_beef), 0xdead_beef);
    assert!(!rtc.overlaps(&SysconfField::new(SysconfGroup::SysCfg, 8, 2, 3, "other")));
    assert!(rtc.overlaps(&SysconfField::new(SysconfGroup::SysCfg, 8, 0, 7, "other")));
}

#[test]
fn test_emi_device() {
    let dev = emi_device();
    assert_eq!(dev.key(), ("emi", -1));
    assert_eq!(dev.resources[0].size(), 64 * 1024 * 1024);
    assert_eq!(dev.resources[1], Resource::mem(0x1a10_0000, 0x874));
}

#[test]
fn test_emi_bank_claimed_once() {
    let mut banks = EmiBankSet::new();
    for bank in 0..EMI_BANKS {
        assert!(!banks.is_claimed(bank));
        banks.claim(bank).unwrap();
        assert!(banks.is_claimed(bank));
        assert_eq!(banks.claim(bank).unwrap_err().num, SocErrorNum::EBUSY);
    }
    assert_eq!(banks.claimed().count(), EMI_BANKS);
    assert_eq!(banks.claim(EMI_BANKS).unwrap_err().num, SocErrorNum::EINVAL);
}

#[test]
fn test_pata_unrelocated() {
    let dev = pata_device();
    assert_eq!(dev.resources[PATA_IO].start, 0x0020_0000);
    assert_eq!(dev.resources[PATA_IO].size(), 0x0010_0000);
    assert_eq!(dev.resources[PATA_CTL].start, 0x001c_0000);
    assert_eq!(dev.resources[PATA_CTL].size(), 4);
    assert_eq!(dev.mem_resources().count(), 2);
    assert_eq!(dev.irq(), None);
    assert_eq!(
        dev.platform_data,
        PlatformData::Pata(PataPlatformInfo { ioport_shift: 17 })
    );
}

#[test]
fn test_pata_relocated_into_each_bank() {
    for bank in 0..EMI_BANKS {
        let mut host = MockHost::default();
        let mut banks = EmiBankSet::new();
        let mut dev = pata_device();
        let config = PataConfig::new(bank as i32, bank % 2 == 0, 7);
        configure_pata_bank(&mut dev, &mut banks, &config, &mut host).unwrap();

        let base = bank as u64 * MOCK_EMI_BANK_SIZE;
        let fresh = pata_device();
        assert_eq!(dev.resources[PATA_IO].start, fresh.resources[PATA_IO].start + base);
        assert_eq!(dev.resources[PATA_IO].end, fresh.resources[PATA_IO].end + base);
        assert_eq!(dev.resources[PATA_CTL].start, fresh.resources[PATA_CTL].start + base);
        assert_eq!(dev.resources[PATA_CTL].end, fresh.resources[PATA_CTL].end + base);
        assert_eq!(dev.resources[PATA_IRQ].irq_number(), Some(7));
        assert!(banks.is_claimed(bank));
        assert_eq!(host.events, vec![HostEvent::EmiPata(bank, bank % 2 == 0)]);
    }
}

#[test]
fn test_pata_bad_bank_leaves_device_alone() {
    let mut host = MockHost::default();
    let mut banks = EmiBankSet::new();
    let mut dev = pata_device();
    for bank in [-1, EMI_BANKS as i32, 42] {
        let err = configure_pata_bank(&mut dev, &mut banks, &PataConfig::new(bank, true, 7), &mut host)
            .unwrap_err();
        assert_eq!(err.num, SocErrorNum::EINVAL);
    }
    assert_eq!(dev, pata_device());
    assert_eq!(banks, EmiBankSet::new());
    assert!(host.events.is_empty());
}
