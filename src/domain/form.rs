#![allow(dead_code)]

use super::input::{parse_value, percent_to_fraction, sanitize};
use super::pricing::PricingInputs;

/// One of the ten calculator fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    ProductCost,
    ShippingCost,
    MarketingCost,
    OtherCosts,
    PlatformFeeRate,
    PaymentFeeRate,
    OtherFeeRate,
    TaxRate,
    ProfitMargin,
    DiscountRate,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::ProductCost,
        Field::ShippingCost,
        Field::MarketingCost,
        Field::OtherCosts,
        Field::PlatformFeeRate,
        Field::PaymentFeeRate,
        Field::OtherFeeRate,
        Field::TaxRate,
        Field::ProfitMargin,
        Field::DiscountRate,
    ];

    /// Rate fields are entered as percentages and converted before pricing.
    pub fn is_rate(&self) -> bool {
        !matches!(
            self,
            Field::ProductCost | Field::ShippingCost | Field::MarketingCost | Field::OtherCosts
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::ProductCost => "Product cost",
            Field::ShippingCost => "Shipping cost",
            Field::MarketingCost => "Marketing cost",
            Field::OtherCosts => "Other costs",
            Field::PlatformFeeRate => "Platform fee %",
            Field::PaymentFeeRate => "Payment fee %",
            Field::OtherFeeRate => "Other fee %",
            Field::TaxRate => "Tax %",
            Field::ProfitMargin => "Target margin %",
            Field::DiscountRate => "Discount %",
        }
    }
}

/// Raw text of all ten fields, exactly as shown in the inputs.
///
/// Lives behind the app-level signal so the entered values survive route
/// changes; never written to disk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PricingForm {
    product_cost: String,
    shipping_cost: String,
    marketing_cost: String,
    other_costs: String,
    platform_fee_rate: String,
    payment_fee_rate: String,
    other_fee_rate: String,
    tax_rate: String,
    profit_margin: String,
    discount_rate: String,
}

impl PricingForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ProductCost => &self.product_cost,
            Field::ShippingCost => &self.shipping_cost,
            Field::MarketingCost => &self.marketing_cost,
            Field::OtherCosts => &self.other_costs,
            Field::PlatformFeeRate => &self.platform_fee_rate,
            Field::PaymentFeeRate => &self.payment_fee_rate,
            Field::OtherFeeRate => &self.other_fee_rate,
            Field::TaxRate => &self.tax_rate,
            Field::ProfitMargin => &self.profit_margin,
            Field::DiscountRate => &self.discount_rate,
        }
    }

    /// Store an edit, sanitized. The sanitized text is what the input shows
    /// afterwards, so stray characters disappear as the user types.
    pub fn set(&mut self, field: Field, raw: &str) {
        let sanitized = sanitize(raw);
        let slot = match field {
            Field::ProductCost => &mut self.product_cost,
            Field::ShippingCost => &mut self.shipping_cost,
            Field::MarketingCost => &mut self.marketing_cost,
            Field::OtherCosts => &mut self.other_costs,
            Field::PlatformFeeRate => &mut self.platform_fee_rate,
            Field::PaymentFeeRate => &mut self.payment_fee_rate,
            Field::OtherFeeRate => &mut self.other_fee_rate,
            Field::TaxRate => &mut self.tax_rate,
            Field::ProfitMargin => &mut self.profit_margin,
            Field::DiscountRate => &mut self.discount_rate,
        };
        *slot = sanitized;
    }

    /// Empty every field; the next recomputation yields the zero result.
    pub fn clear(&mut self) {
        *self = PricingForm::default();
    }

    /// Sanitize and parse all ten fields into engine inputs, converting the
    /// six rate fields from percentages to fractions.
    pub fn to_inputs(&self) -> PricingInputs {
        let value = |field: Field| {
            let parsed = parse_value(&sanitize(self.get(field)));
            if field.is_rate() {
                percent_to_fraction(parsed)
            } else {
                parsed
            }
        };

        PricingInputs {
            product_cost: value(Field::ProductCost),
            shipping_cost: value(Field::ShippingCost),
            marketing_cost: value(Field::MarketingCost),
            other_costs: value(Field::OtherCosts),
            platform_fee_rate: value(Field::PlatformFeeRate),
            payment_fee_rate: value(Field::PaymentFeeRate),
            other_fee_rate: value(Field::OtherFeeRate),
            tax_rate: value(Field::TaxRate),
            profit_margin: value(Field::ProfitMargin),
            discount_rate: value(Field::DiscountRate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::{compute_pricing, PricingResult};

    #[test]
    fn set_writes_back_sanitized_text() {
        let mut form = PricingForm::default();
        form.set(Field::ProductCost, "$1,2.3.4");
        assert_eq!(form.get(Field::ProductCost), "12.34");
        form.set(Field::TaxRate, "-19%");
        assert_eq!(form.get(Field::TaxRate), "19");
    }

    #[test]
    fn rate_fields_convert_from_percent() {
        let mut form = PricingForm::default();
        form.set(Field::ProductCost, "10");
        form.set(Field::PlatformFeeRate, "10");
        let inputs = form.to_inputs();
        assert_eq!(inputs.product_cost, 10.0);
        assert_eq!(inputs.platform_fee_rate, 0.1);
    }

    #[test]
    fn empty_form_prices_to_zero() {
        let form = PricingForm::default();
        let result = compute_pricing(&form.to_inputs());
        assert_eq!(result, PricingResult::default());
    }

    #[test]
    fn clear_restores_the_zero_state() {
        let mut form = PricingForm::default();
        for field in Field::ALL {
            form.set(field, "12.5abc");
        }
        form.clear();
        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }
        let result = compute_pricing(&form.to_inputs());
        assert_eq!(result, PricingResult::default());
    }

    #[test]
    fn reset_yields_the_zero_displays() {
        use crate::ui::format::{format_currency, format_percentage};

        let mut form = PricingForm::default();
        form.set(Field::ProductCost, "19.99");
        form.set(Field::PlatformFeeRate, "15");
        form.set(Field::DiscountRate, "30");
        form.clear();

        let result = compute_pricing(&form.to_inputs());
        assert_eq!(format_currency(result.suggested_price), "$ 0.00");
        assert_eq!(format_currency(result.discounted_price), "$ 0.00");
        assert_eq!(format_currency(result.net_profit), "$ 0.00");
        assert_eq!(format_percentage(result.net_margin), "0.00%");
    }

    #[test]
    fn garbage_in_every_field_still_computes() {
        let mut form = PricingForm::default();
        for field in Field::ALL {
            form.set(field, "..--..");
        }
        let result = compute_pricing(&form.to_inputs());
        assert_eq!(result, PricingResult::default());
    }
}
