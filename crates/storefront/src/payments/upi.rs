//! UPI deep-link construction.
//!
//! The alternate checkout flow hands the browser a `upi://pay` URI; the
//! payer's UPI app reads the payee address, amount, and transaction
//! reference from the query string. Amounts always carry two decimal places.

use uuid::Uuid;

use charkha_core::Price;

use crate::config::UpiConfig;

/// Build a `upi://pay` deep link for the given amount.
///
/// `reference` becomes the transaction reference (`tr`); generate one with
/// [`generate_reference`] per checkout attempt. Query values are
/// percent-encoded.
#[must_use]
pub fn payment_link(config: &UpiConfig, amount: Price, note: &str, reference: &str) -> String {
    format!(
        "upi://pay?pa={pa}&pn={pn}&am={am}&cu=INR&tn={tn}&tr={tr}",
        pa = urlencoding::encode(&config.payee_vpa),
        pn = urlencoding::encode(&config.payee_name),
        am = amount.to_decimal(),
        tn = urlencoding::encode(note),
        tr = urlencoding::encode(reference),
    )
}

/// Generate a transaction reference for a UPI payment attempt.
#[must_use]
pub fn generate_reference() -> String {
    format!("CHK{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> UpiConfig {
        UpiConfig {
            payee_vpa: "charkha@upi".to_string(),
            payee_name: "Charkha Bazaar".to_string(),
        }
    }

    #[test]
    fn test_link_layout() {
        let link = payment_link(&config(), Price::new(300), "Order payment", "CHKREF1");
        assert_eq!(
            link,
            "upi://pay?pa=charkha%40upi&pn=Charkha%20Bazaar&am=300.00&cu=INR&tn=Order%20payment&tr=CHKREF1"
        );
    }

    #[test]
    fn test_amount_always_has_two_decimals() {
        let link = payment_link(&config(), Price::new(1299), "n", "r");
        assert!(link.contains("am=1299.00"));
    }

    #[test]
    fn test_spaces_encode_as_percent_20() {
        let link = payment_link(&config(), Price::new(10), "thank you", "r");
        assert!(link.contains("tn=thank%20you"));
        assert!(!link.contains('+'));
    }

    #[test]
    fn test_reference_shape() {
        let reference = generate_reference();
        assert!(reference.starts_with("CHK"));
        assert_eq!(reference.len(), 3 + 32);
        assert_ne!(reference, generate_reference());
    }
}
