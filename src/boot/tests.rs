use super::*;
use crate::chip::ChipModel;
use crate::consts::EMI_BANKS;
#[cfg(feature = "dma")]
use crate::device::fdma::{STX7100_FDMA_DATA, STX7109C2_FDMA_DATA};
use crate::device::pata::{PATA_CTL, PATA_IO};
#[cfg(feature = "dma")]
use crate::device::PlatformData;
use crate::error::SocErrorNum;
#[cfg(feature = "dma")]
use crate::tests::DEVID_STX7100_C3;
use crate::tests::{HostEvent, MockHost, MOCK_EMI_BANK_SIZE};

fn booted_to_postcore(host: &mut MockHost) -> BootContext {
    let mut ctx = BootContext::new();
    ctx.early_device_init(host).unwrap();
    ctx.postcore_setup(host).unwrap();
    ctx
}

#[test]
fn test_early_phase_sequence() {
    let mut host = MockHost::stx7109(0x13);
    let mut ctx = BootContext::new();
    ctx.early_device_init(&mut host).unwrap();

    let identity = ChipIdentity {
        model: ChipModel::Stx7109,
        cut_major: 2,
        cut_minor: 3,
    };
    assert_eq!(
        host.events,
        vec![
            HostEvent::Map(0x1800_0000, 0x0400_0000),
            HostEvent::SysconfInit("stm-sysconf"),
            HostEvent::GpioInit(6, 176),
            HostEvent::Claim(SysconfGroup::SysDev, 0, "devid"),
            HostEvent::Claim(SysconfGroup::SysSta, 9, "devid"),
            HostEvent::CpuData(identity),
            HostEvent::Claim(SysconfGroup::SysCfg, 8, "rtc"),
            HostEvent::Write(SysconfGroup::SysCfg, 8, 1),
            HostEvent::DisableHlt,
        ]
    );
    assert_eq!(host.reg(SysconfGroup::SysCfg, 8), 0b10);
    assert_eq!(ctx.cpu_data(), Some(&identity));
    assert_eq!(ctx.phase(), BootPhase::Early);
    assert!(ctx.registered().is_empty());
}

#[test]
fn test_postcore_registers_emi() {
    let mut host = MockHost::stx7109(0x13);
    let ctx = booted_to_postcore(&mut host);
    assert_eq!(ctx.registered(), &[("emi", -1)]);
    assert_eq!(host.registered(), vec![("emi", -1)]);
    assert_eq!(ctx.phase(), BootPhase::Postcore);
}

#[test]
fn test_phases_run_once_and_in_order() {
    let mut host = MockHost::stx7109(0x13);
    let mut ctx = BootContext::new();
    assert_eq!(ctx.postcore_setup(&mut host).unwrap_err().num, SocErrorNum::EPERM);
    assert_eq!(ctx.devices_setup(&mut host).unwrap_err().num, SocErrorNum::EPERM);
    assert!(host.events.is_empty());

    ctx.early_device_init(&mut host).unwrap();
    let events = host.events.len();
    assert_eq!(ctx.early_device_init(&mut host).unwrap_err().num, SocErrorNum::EPERM);
    assert_eq!(host.events.len(), events);

    ctx.postcore_setup(&mut host).unwrap();
    assert_eq!(ctx.postcore_setup(&mut host).unwrap_err().num, SocErrorNum::EPERM);
    ctx.devices_setup(&mut host).unwrap();
    assert_eq!(ctx.devices_setup(&mut host).unwrap_err().num, SocErrorNum::EPERM);
    assert_eq!(ctx.phase(), BootPhase::Devices);
}

#[test]
fn test_configure_pata_every_bank() {
    for bank in 0..EMI_BANKS {
        let mut host = MockHost::stx7109(0x13);
        let mut ctx = booted_to_postcore(&mut host);
        let config = PataConfig::new(bank as i32, true, 7);
        ctx.configure_pata(&config, &mut host).unwrap();

        let dev = host.device("pata_platform", -1).unwrap();
        let base = bank as u64 * MOCK_EMI_BANK_SIZE;
        assert_eq!(dev.resources[PATA_IO].start, 0x0020_0000 + base);
        assert_eq!(dev.resources[PATA_CTL].start, 0x001c_0000 + base);
        assert_eq!(dev.irq(), Some(7));
        assert!(ctx.emi_banks().is_claimed(bank));
        assert!(host.events.contains(&HostEvent::EmiPata(bank, true)));

        let err = ctx.configure_pata(&config, &mut host).unwrap_err();
        assert_eq!(err.num, SocErrorNum::EBUSY);
    }
}

#[test]
fn test_configure_pata_twice_on_other_bank() {
    let mut host = MockHost::stx7109(0x13);
    let mut ctx = booted_to_postcore(&mut host);
    ctx.configure_pata(&PataConfig::new(2, false, 7), &mut host)
        .unwrap();
    let err = ctx
        .configure_pata(&PataConfig::new(3, false, 7), &mut host)
        .unwrap_err();
    assert_eq!(err.num, SocErrorNum::EEXIST);
    assert!(!ctx.emi_banks().is_claimed(3));
}

#[test]
fn test_configure_pata_registry_failure_is_final() {
    let mut host = MockHost::stx7109(0x13);
    let mut ctx = booted_to_postcore(&mut host);
    host.refuse = Some("pata_platform");
    let err = ctx
        .configure_pata(&PataConfig::new(1, true, 7), &mut host)
        .unwrap_err();
    assert_eq!(err.num, SocErrorNum::EIO);
    assert!(ctx.emi_banks().is_claimed(1));
    assert!(host.device("pata_platform", -1).is_none());

    host.refuse = None;
    let err = ctx
        .configure_pata(&PataConfig::new(1, true, 7), &mut host)
        .unwrap_err();
    assert_eq!(err.num, SocErrorNum::EBUSY);
    let err = ctx
        .configure_pata(&PataConfig::new(2, true, 7), &mut host)
        .unwrap_err();
    assert_eq!(err.num, SocErrorNum::EEXIST);
}

#[test]
fn test_configure_pata_bad_bank() {
    let mut host = MockHost::stx7109(0x13);
    let mut ctx = booted_to_postcore(&mut host);
    let events = host.events.len();
    for bank in [-1, EMI_BANKS as i32] {
        let err = ctx
            .configure_pata(&PataConfig::new(bank, true, 7), &mut host)
            .unwrap_err();
        assert_eq!(err.num, SocErrorNum::EINVAL);
    }
    assert_eq!(ctx.emi_banks().claimed().count(), 0);
    assert_eq!(host.events.len(), events);

    // still usable with a valid bank afterwards
    ctx.configure_pata(&PataConfig::new(0, true, 7), &mut host)
        .unwrap();
}

#[test]
fn test_configure_pata_needs_emi() {
    let mut host = MockHost::stx7109(0x13);
    let mut ctx = BootContext::new();
    ctx.early_device_init(&mut host).unwrap();
    let err = ctx
        .configure_pata(&PataConfig::new(3, true, 7), &mut host)
        .unwrap_err();
    assert_eq!(err.num, SocErrorNum::EPERM);
    assert!(!ctx.emi_banks().is_claimed(3));

    // the device is kept for the right phase
    ctx.postcore_setup(&mut host).unwrap();
    ctx.configure_pata(&PataConfig::new(3, true, 7), &mut host)
        .unwrap();
}

#[test]
fn test_devices_phase_registers_table() {
    let mut host = MockHost::stx7109(0x13);
    let mut ctx = booted_to_postcore(&mut host);
    ctx.devices_setup(&mut host).unwrap();

    assert_eq!(
        host.registered(),
        vec![
            ("emi", -1),
            ("stm-gpio", 0),
            ("stm-gpio", 1),
            ("stm-gpio", 2),
            ("stm-gpio", 3),
            ("stm-gpio", 4),
            ("stm-gpio", 5),
            ("stm-fdma", -1),
            ("stm-sysconf", -1),
            ("stm-hwrandom", -1),
            ("stm-rng", -1),
        ]
    );
    assert_eq!(ctx.registered(), host.registered().as_slice());
}

#[test]
fn test_no_duplicate_registrations() {
    let mut host = MockHost::stx7109(0x13);
    let mut ctx = booted_to_postcore(&mut host);
    ctx.configure_pata(&PataConfig::new(3, true, 7), &mut host)
        .unwrap();
    ctx.devices_setup(&mut host).unwrap();

    let keys = host.registered();
    for (idx, key) in keys.iter().enumerate() {
        assert!(!keys[idx + 1..].contains(key), "{:?} registered twice", key);
    }
    assert_eq!(keys.len(), 12);
}

#[cfg(feature = "dma")]
#[test]
fn test_stx7109_cut1_stops_device_phase() {
    let mut host = MockHost::stx7109(0x02);
    let mut ctx = booted_to_postcore(&mut host);
    assert_eq!(ctx.cpu_data().unwrap().cut_major, 1);

    let err = ctx.devices_setup(&mut host).unwrap_err();
    assert_eq!(err.num, SocErrorNum::ENODEV);
    // nothing from the device table reached the host
    assert_eq!(host.registered(), vec![("emi", -1)]);
}

#[cfg(feature = "dma")]
#[test]
fn test_fdma_descriptor_follows_chip() {
    let mut host = MockHost::new(DEVID_STX7100_C3, 0);
    let mut ctx = booted_to_postcore(&mut host);
    ctx.devices_setup(&mut host).unwrap();
    let fdma = host.device("stm-fdma", -1).unwrap();
    assert_eq!(fdma.platform_data, PlatformData::Fdma(&STX7100_FDMA_DATA));
}

/// Part number 0x02c with version nibble 0, then cut byte 0x13: an
/// STx7109 cut 2.3, which takes the cut 2 firmware.
#[cfg(feature = "dma")]
#[test]
fn test_end_to_end_stx7109_cut2() {
    let mut host = MockHost::stx7109(0x13);
    let mut ctx = booted_to_postcore(&mut host);
    assert_eq!(
        ctx.cpu_data(),
        Some(&ChipIdentity {
            model: ChipModel::Stx7109,
            cut_major: 2,
            cut_minor: 3,
        })
    );
    ctx.devices_setup(&mut host).unwrap();
    let fdma = host.device("stm-fdma", -1).unwrap();
    assert_eq!(fdma.platform_data, PlatformData::Fdma(&STX7109C2_FDMA_DATA));
}
