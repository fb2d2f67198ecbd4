//! The PIN policy itself

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::types::{Aip, CardTags, CvmList};

/// CVM code for a plaintext PIN verified by the ICC, the code the policy
/// treats as "offline PIN" by default
pub const OFFLINE_PLAINTEXT_PIN: u8 = 0x01;

/// Evaluates whether a card will always request an offline PIN
///
/// The verdict is the conjunction of two checks: the AIP advertises
/// cardholder verification, and the configured offline-PIN code is the
/// highest-priority entry of the CVM List. Priority is list order alone;
/// condition codes carry no weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    offline_pin_code: u8,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Evaluator with the default offline-PIN code ([`OFFLINE_PLAINTEXT_PIN`])
    pub const fn new() -> Self {
        Self {
            offline_pin_code: OFFLINE_PLAINTEXT_PIN,
        }
    }

    /// Evaluator treating `code` as the offline-PIN CVM code
    pub const fn with_offline_pin_code(code: u8) -> Self {
        Self {
            offline_pin_code: code,
        }
    }

    /// Whether the configured offline-PIN code tops the CVM List
    pub fn offline_pin_highest_priority(&self, cvm_list: &CvmList) -> bool {
        cvm_list.first_method() == Some(self.offline_pin_code)
    }

    /// Compute the policy verdict for the supplied card tags
    ///
    /// Missing tags degrade to `false`; only malformed hex input errors.
    pub fn verdict(&self, tags: &CardTags) -> Result<Verdict> {
        Ok(self.report(tags)?.verdict)
    }

    /// Compute the verdict together with the resolved inputs it was
    /// derived from
    pub fn report(&self, tags: &CardTags) -> Result<Report> {
        let (aip, cvm_list) = tags.resolve()?;
        let aip = aip.map(Aip::new);
        let cvm_list = cvm_list.map(CvmList::new);

        let cv_supported = aip
            .as_ref()
            .is_some_and(Aip::supports_cardholder_verification);
        let offline_pin_highest_priority = cvm_list
            .as_ref()
            .is_some_and(|list| self.offline_pin_highest_priority(list));

        let verdict = Verdict {
            cv_supported,
            offline_pin_highest_priority,
            will_always_request_pin: cv_supported && offline_pin_highest_priority,
        };
        debug!(
            cv_supported,
            offline_pin_highest_priority, "evaluated PIN policy"
        );

        Ok(Report {
            aip,
            cvm_list,
            verdict,
        })
    }
}

/// Outcome of one policy evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// The AIP advertises cardholder verification
    pub cv_supported: bool,
    /// The offline-PIN code is the highest-priority CVM
    pub offline_pin_highest_priority: bool,
    /// Conjunction of the two: the card will always request a PIN
    pub will_always_request_pin: bool,
}

/// Verdict plus the resolved inputs it was derived from
///
/// The `Display` rendering is the explanation consumed by humans and by
/// downstream report tooling; field order is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    aip: Option<Aip>,
    cvm_list: Option<CvmList>,
    verdict: Verdict,
}

impl Report {
    /// The policy verdict
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// The resolved AIP, if one was supplied
    pub fn aip(&self) -> Option<&Aip> {
        self.aip.as_ref()
    }

    /// The resolved CVM List, if one was supplied
    pub fn cvm_list(&self) -> Option<&CvmList> {
        self.cvm_list.as_ref()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // an empty value renders as Missing, same as an absent one
        let aip_hex = self
            .aip
            .as_ref()
            .filter(|aip| !aip.is_empty())
            .map(|aip| hex::encode_upper(aip.as_bytes()));
        let cvm_hex = self
            .cvm_list
            .as_ref()
            .filter(|list| !list.is_empty())
            .map(|list| hex::encode_upper(list.as_bytes()));

        writeln!(f, "AIP (tag 82): {}", aip_hex.as_deref().unwrap_or("Missing"))?;
        writeln!(
            f,
            "CVM List (tag 8E): {}",
            cvm_hex.as_deref().unwrap_or("Missing")
        )?;
        writeln!(
            f,
            "Cardholder verification supported in AIP: {}",
            yes_no(self.verdict.cv_supported)
        )?;
        writeln!(
            f,
            "Offline PIN for CA is highest priority in CVM list: {}",
            yes_no(self.verdict.offline_pin_highest_priority)
        )?;
        write!(
            f,
            "Result: Card {} always request PIN for transaction.",
            if self.verdict.will_always_request_pin {
                "will"
            } else {
                "will NOT"
            }
        )
    }
}

const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
