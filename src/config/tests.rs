use super::*;
use crate::error::SocErrorNum;

#[test]
fn test_pata_bank_in_range() {
    for bank in 0..EMI_BANKS as i32 {
        assert_eq!(PataConfig::new(bank, true, 7).bank().unwrap(), bank as usize);
    }
}

#[test]
fn test_pata_bank_out_of_range() {
    let err = PataConfig::new(-1, false, 7).bank().unwrap_err();
    assert_eq!(err.num, SocErrorNum::EINVAL);
    let err = PataConfig::new(EMI_BANKS as i32, false, 7).bank().unwrap_err();
    assert_eq!(err.num, SocErrorNum::EINVAL);
}

#[test]
fn test_board_check() {
    let board = BoardConfig {
        name: "mb411",
        pata: Some(PataConfig::new(3, true, 7)),
    };
    assert!(board.check().is_ok());

    let board = BoardConfig {
        name: "",
        pata: None,
    };
    assert!(board.check().is_err());

    let board = BoardConfig {
        name: "bad-bank",
        pata: Some(PataConfig::new(9, true, 7)),
    };
    assert_eq!(board.check().unwrap_err().num, SocErrorNum::EINVAL);
}
