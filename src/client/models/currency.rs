//! Currency rate table

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DecodeError, FromPayload};

/// Exchange rates relative to `base`: one unit of `base` buys `rates[code]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRates {
    pub base: String,
    pub date: NaiveDate,
    pub rates: BTreeMap<String, f64>,
}

impl CurrencyRates {
    /// Rates for the given currency codes only, in the order given
    pub fn select<'a>(&self, codes: impl IntoIterator<Item = &'a str>) -> Vec<(String, f64)> {
        codes
            .into_iter()
            .filter_map(|code| {
                let code = code.to_uppercase();
                self.rates.get(&code).map(|rate| (code, *rate))
            })
            .collect()
    }
}

impl FromPayload for CurrencyRates {
    fn from_payload(payload: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::RATES_PAYLOAD;

    #[test]
    fn test_decode_rates() {
        let rates = CurrencyRates::from_payload(RATES_PAYLOAD.as_bytes()).unwrap();

        assert_eq!(rates.base, "RUB");
        assert_eq!(rates.date, NaiveDate::from_ymd_opt(2022, 9, 14).unwrap());
        assert_eq!(rates.rates.get("EUR"), Some(&0.016503));
    }

    #[test]
    fn test_decode_rejects_missing_rates() {
        let payload = br#"{"base": "RUB", "date": "2022-09-14"}"#;
        assert!(CurrencyRates::from_payload(payload).is_err());
    }

    #[test]
    fn test_decode_rejects_bad_date() {
        let payload = br#"{"base": "RUB", "date": "14.09.2022", "rates": {}}"#;
        assert!(CurrencyRates::from_payload(payload).is_err());
    }

    #[test]
    fn test_select_filters_and_uppercases() {
        let rates = CurrencyRates::from_payload(RATES_PAYLOAD.as_bytes()).unwrap();

        let selected = rates.select(["eur", "XXX"]);
        assert_eq!(selected, vec![("EUR".to_string(), 0.016503)]);
    }
}
