/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use dms_base::{ElementAddress, ParseError};

#[test]
fn parse_address() {
    assert_eq!(
        "12/345".parse::<ElementAddress>().unwrap(),
        ElementAddress::new(12, 345)
    );
    assert_eq!(
        " 12 / 345 ".parse::<ElementAddress>().unwrap(),
        ElementAddress::new(12, 345)
    );
    assert_eq!(
        "12/345/7".parse::<ElementAddress>().unwrap(),
        ElementAddress::new(12, 345)
    );
}

#[test]
fn parse_invalid_address() {
    assert_eq!(
        "12".parse::<ElementAddress>(),
        Err(ParseError::MissingSeparator(String::from("12")))
    );
    assert_eq!(
        "".parse::<ElementAddress>(),
        Err(ParseError::MissingSeparator(String::new()))
    );
    assert_eq!(
        "12/abc".parse::<ElementAddress>(),
        Err(ParseError::InvalidId(
            String::from("12/abc"),
            String::from("abc")
        ))
    );
    assert!("/345".parse::<ElementAddress>().is_err());
    assert!("99999999999/1".parse::<ElementAddress>().is_err());
}

#[test]
fn address_serde() {
    let addr: ElementAddress = serde_json::from_str("\"7/8\"").unwrap();
    assert_eq!(addr, ElementAddress::new(7, 8));
    assert_eq!(addr.to_string(), "7/8");
    assert_eq!(serde_json::to_string(&addr).unwrap(), "\"7/8\"");
    assert!(serde_json::from_str::<ElementAddress>("\"7-8\"").is_err());
}
