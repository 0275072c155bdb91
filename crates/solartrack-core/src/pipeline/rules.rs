//! Conditional applicability rules.

use serde::{Deserialize, Serialize};

use crate::models::Customer;

const FINANCE: &str = "Finance";
const YES: &str = "Yes";
const REQUIRED: &str = "Required";

/// Predicate deciding whether a conditional step is required for a customer.
///
/// A step without a rule is always required. A step with a rule whose
/// predicate is false is reported as not applicable, unless a task already
/// exists for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionalRule {
    /// Payment mode is "Finance" or special finance is "Yes"
    FinanceRequired,
    /// Payment mode is not "Finance" and special finance is not "Yes"
    SelfFunded,
    /// Change of tenancy is "Required"
    CotRequired,
    /// Name correction is "Required"
    NameCorrectionRequired,
    /// Load enhancement is "Required"
    LoadEnhancementRequired,
}

impl ConditionalRule {
    /// Evaluates the rule against the customer's attributes.
    pub fn is_required(&self, customer: &Customer) -> bool {
        match self {
            ConditionalRule::FinanceRequired => is_financed(customer),
            ConditionalRule::SelfFunded => !is_financed(customer),
            ConditionalRule::CotRequired => {
                Customer::attribute_is(customer.cot_required.as_ref(), REQUIRED)
            }
            ConditionalRule::NameCorrectionRequired => {
                Customer::attribute_is(customer.name_correction_required.as_ref(), REQUIRED)
            }
            ConditionalRule::LoadEnhancementRequired => {
                Customer::attribute_is(customer.load_enhancement_required.as_ref(), REQUIRED)
            }
        }
    }

    /// Short description shown next to conditional steps.
    pub fn describe(&self) -> &'static str {
        match self {
            ConditionalRule::FinanceRequired => "only when financed",
            ConditionalRule::SelfFunded => "only when not financed",
            ConditionalRule::CotRequired => "only when change of tenancy is required",
            ConditionalRule::NameCorrectionRequired => "only when name correction is required",
            ConditionalRule::LoadEnhancementRequired => "only when load enhancement is required",
        }
    }
}

fn is_financed(customer: &Customer) -> bool {
    Customer::attribute_is(customer.payment_mode.as_ref(), FINANCE)
        || Customer::attribute_is(customer.special_finance_required.as_ref(), YES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(payment_mode: &str, special_finance: &str) -> Customer {
        Customer {
            payment_mode: Some(payment_mode.to_string()),
            special_finance_required: Some(special_finance.to_string()),
            ..Customer::new("Test")
        }
    }

    #[test]
    fn test_finance_rules_are_complementary() {
        for (mode, special, financed) in [
            ("Finance", "No", true),
            ("Cash", "Yes", true),
            ("Finance", "Yes", true),
            ("Cash", "No", false),
            ("finance", "yes", false),
        ] {
            let c = customer(mode, special);
            assert_eq!(
                ConditionalRule::FinanceRequired.is_required(&c),
                financed,
                "{mode}/{special}"
            );
            assert_eq!(
                ConditionalRule::SelfFunded.is_required(&c),
                !financed,
                "{mode}/{special}"
            );
        }
    }

    #[test]
    fn test_missing_attributes_mean_not_financed() {
        let c = Customer::new("Blank");
        assert!(!ConditionalRule::FinanceRequired.is_required(&c));
        assert!(ConditionalRule::SelfFunded.is_required(&c));
        assert!(!ConditionalRule::CotRequired.is_required(&c));
        assert!(!ConditionalRule::NameCorrectionRequired.is_required(&c));
        assert!(!ConditionalRule::LoadEnhancementRequired.is_required(&c));
    }

    #[test]
    fn test_requirement_flags_match_literally() {
        let c = Customer {
            cot_required: Some("Required".to_string()),
            name_correction_required: Some("Not Required".to_string()),
            load_enhancement_required: Some("required".to_string()),
            ..Customer::new("Flags")
        };
        assert!(ConditionalRule::CotRequired.is_required(&c));
        assert!(!ConditionalRule::NameCorrectionRequired.is_required(&c));
        assert!(!ConditionalRule::LoadEnhancementRequired.is_required(&c));
    }
}
