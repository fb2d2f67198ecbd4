//! EMV data object tags
//!
//! The two tags the PIN policy consumes, plus the tags commonly present in
//! the card dumps this crate is fed.

use pinsight_tlv::Tag;

/// Application Interchange Profile (2 bytes)
pub const AIP: Tag = Tag::new(0x82);
/// Cardholder Verification Method List
pub const CVM_LIST: Tag = Tag::new(0x8E);

/// Application Identifier (AID)
pub const AID: Tag = Tag::new(0x4F);
/// Application Label
pub const APPLICATION_LABEL: Tag = Tag::new(0x50);
/// Track 2 Equivalent Data
pub const TRACK_2_EQUIVALENT_DATA: Tag = Tag::new(0x57);
/// Application Primary Account Number
pub const PAN: Tag = Tag::new(0x5A);
/// Dedicated File Name
pub const DF_NAME: Tag = Tag::new(0x84);
/// Application File Locator
pub const AFL: Tag = Tag::new(0x94);
/// Terminal Verification Results
pub const TVR: Tag = Tag::new(0x95);
/// Cardholder Name
pub const CARDHOLDER_NAME: Tag = Tag::new(0x5F20);
/// Application Expiration Date
pub const APPLICATION_EXPIRATION_DATE: Tag = Tag::new(0x5F24);
/// Issuer Country Code
pub const ISSUER_COUNTRY_CODE: Tag = Tag::new(0x5F28);
/// Transaction Currency Code
pub const TRANSACTION_CURRENCY_CODE: Tag = Tag::new(0x5F2A);
/// Amount, Authorised (Numeric)
pub const AMOUNT_AUTHORISED: Tag = Tag::new(0x9F02);
/// Processing Options Data Object List
pub const PDOL: Tag = Tag::new(0x9F38);

/// Human-readable name for a known EMV tag
pub fn tag_name(tag: Tag) -> Option<&'static str> {
    let name = match tag.to_u16() {
        0x4F => "Application Identifier (AID)",
        0x50 => "Application Label",
        0x57 => "Track 2 Equivalent Data",
        0x5A => "Application PAN",
        0x82 => "Application Interchange Profile",
        0x84 => "Dedicated File Name",
        0x8E => "CVM List",
        0x94 => "Application File Locator",
        0x95 => "Terminal Verification Results",
        0x5F20 => "Cardholder Name",
        0x5F24 => "Application Expiration Date",
        0x5F28 => "Issuer Country Code",
        0x5F2A => "Transaction Currency Code",
        0x9F02 => "Amount, Authorised (Numeric)",
        0x9F38 => "Processing Options Data Object List (PDOL)",
        _ => return None,
    };
    Some(name)
}
