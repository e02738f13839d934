use serde::{Deserialize, Serialize};

/// The ten numeric inputs of one pricing run.
///
/// Costs are absolute currency amounts, rates are fractions (the form layer
/// converts entered percentages via [`super::input::percent_to_fraction`]).
/// Rebuilt in full from the form on every recomputation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    pub product_cost: f64,
    pub shipping_cost: f64,
    pub marketing_cost: f64,
    pub other_costs: f64,
    pub platform_fee_rate: f64,
    pub payment_fee_rate: f64,
    pub other_fee_rate: f64,
    pub tax_rate: f64,
    pub profit_margin: f64,
    pub discount_rate: f64,
}

impl PricingInputs {
    pub fn total_cost(&self) -> f64 {
        self.product_cost + self.shipping_cost + self.marketing_cost + self.other_costs
    }

    pub fn total_fee_rate(&self) -> f64 {
        self.platform_fee_rate + self.payment_fee_rate + self.other_fee_rate + self.tax_rate
    }
}

/// The four derived figures; `net_margin` is in percentage points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub suggested_price: f64,
    pub discounted_price: f64,
    pub net_profit: f64,
    pub net_margin: f64,
}

/// Solve for the sale price that hits the target margin after fees.
///
/// Fee and tax amounts are charged on the discounted price, i.e. on what the
/// buyer actually pays. That makes a discount cost more than its face value:
/// revenue shrinks while `total_cost` stays fixed.
///
/// When the combined fee rates reach 100% of revenue no price can recover
/// the costs; the result saturates to all zeros rather than dividing by a
/// non-positive denominator.
pub fn compute_pricing(inputs: &PricingInputs) -> PricingResult {
    let total_cost = inputs.total_cost();
    let revenue_fraction = 1.0 - inputs.total_fee_rate();
    if revenue_fraction <= 0.0 {
        return PricingResult::default();
    }

    let desired_revenue = total_cost * (1.0 + inputs.profit_margin);
    let suggested_price = desired_revenue / revenue_fraction;
    let discounted_price = suggested_price * (1.0 - inputs.discount_rate);

    let platform_fee = discounted_price * inputs.platform_fee_rate;
    let payment_fee = discounted_price * inputs.payment_fee_rate;
    let other_fee = discounted_price * inputs.other_fee_rate;
    let tax = discounted_price * inputs.tax_rate;

    let total_expenses = total_cost + platform_fee + payment_fee + other_fee + tax;
    let net_profit = discounted_price - total_expenses;
    let net_margin = if discounted_price == 0.0 {
        0.0
    } else {
        net_profit / discounted_price * 100.0
    };

    PricingResult {
        suggested_price,
        discounted_price,
        net_profit,
        net_margin,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarginIndicator {
    pub status: MarginStatus,
    pub rationale: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarginStatus {
    Green,
    Yellow,
    Red,
}

/// Traffic-light read on a computed result, relative to the entered target.
///
/// The target profit is what the margin input asks for on top of cost. With
/// no discount the solved price delivers it exactly; a discount erodes it.
/// Green tolerates a 5% shortfall, anything profitable below that is Yellow.
pub fn margin_indicator(inputs: &PricingInputs, result: &PricingResult) -> MarginIndicator {
    if 1.0 - inputs.total_fee_rate() <= 0.0 {
        return MarginIndicator {
            status: MarginStatus::Red,
            rationale: "Fees and tax consume the full sale price".to_string(),
        };
    }

    if result.discounted_price <= 0.0 {
        return MarginIndicator {
            status: MarginStatus::Red,
            rationale: "Nothing to price yet".to_string(),
        };
    }

    if result.net_profit <= 0.0 {
        return MarginIndicator {
            status: MarginStatus::Red,
            rationale: format!("Selling at a loss of {:.2}", -result.net_profit),
        };
    }

    let target_profit = inputs.total_cost() * inputs.profit_margin;
    let status = if result.net_profit >= target_profit * 0.95 {
        MarginStatus::Green
    } else {
        MarginStatus::Yellow
    };

    MarginIndicator {
        status,
        rationale: format!(
            "Net profit {:.2} vs {:.2} target",
            result.net_profit, target_profit
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zero_inputs_give_zero_result() {
        let result = compute_pricing(&PricingInputs::default());
        assert_eq!(result, PricingResult::default());
    }

    #[test]
    fn saturates_when_fees_reach_full_price() {
        let inputs = PricingInputs {
            product_cost: 50.0,
            platform_fee_rate: 0.6,
            tax_rate: 0.4,
            profit_margin: 0.2,
            ..Default::default()
        };
        assert_eq!(compute_pricing(&inputs), PricingResult::default());

        let beyond = PricingInputs {
            payment_fee_rate: 1.5,
            ..inputs
        };
        assert_eq!(compute_pricing(&beyond), PricingResult::default());
    }

    #[test]
    fn worked_example_matches_reference() {
        let inputs = PricingInputs {
            product_cost: 10.0,
            shipping_cost: 2.0,
            platform_fee_rate: 0.1,
            payment_fee_rate: 0.03,
            profit_margin: 0.2,
            ..Default::default()
        };
        let result = compute_pricing(&inputs);

        assert!(close(result.suggested_price, 14.4 / 0.87));
        assert!(close(result.discounted_price, result.suggested_price));
        // 16.5517... * 0.13 in fees on top of 12.0 in costs leaves 2.40
        assert!(close(result.net_profit, 2.4));
        assert!(close(result.net_margin, 2.4 * 0.87 / 14.4 * 100.0));
        assert!((result.net_margin - 14.5).abs() < 0.01);
    }

    #[test]
    fn fees_are_charged_on_the_discounted_price() {
        let inputs = PricingInputs {
            product_cost: 100.0,
            platform_fee_rate: 0.1,
            profit_margin: 0.5,
            discount_rate: 0.2,
            ..Default::default()
        };
        let result = compute_pricing(&inputs);

        let expected_fee = result.discounted_price * 0.1;
        let expected_profit = result.discounted_price - 100.0 - expected_fee;
        assert!(close(result.net_profit, expected_profit));
    }

    #[test]
    fn discount_erodes_profit_and_margin_monotonically() {
        let base = PricingInputs {
            product_cost: 80.0,
            shipping_cost: 5.0,
            platform_fee_rate: 0.12,
            payment_fee_rate: 0.029,
            tax_rate: 0.08,
            profit_margin: 0.3,
            ..Default::default()
        };

        let mut last_profit = f64::INFINITY;
        let mut last_margin = f64::INFINITY;
        for step in 0..20 {
            let inputs = PricingInputs {
                discount_rate: step as f64 * 0.05,
                ..base
            };
            let result = compute_pricing(&inputs);
            assert!(result.net_profit < last_profit, "profit rose at step {step}");
            assert!(result.net_margin < last_margin, "margin rose at step {step}");
            last_profit = result.net_profit;
            last_margin = result.net_margin;
        }
    }

    #[test]
    fn deep_discount_can_push_profit_negative() {
        let inputs = PricingInputs {
            product_cost: 100.0,
            platform_fee_rate: 0.1,
            profit_margin: 0.1,
            discount_rate: 0.5,
            ..Default::default()
        };
        let result = compute_pricing(&inputs);
        assert!(result.net_profit < 0.0);
        assert!(result.net_margin < 0.0);
    }

    #[test]
    fn indicator_is_red_on_saturation_and_loss() {
        let saturated = PricingInputs {
            product_cost: 10.0,
            tax_rate: 1.0,
            ..Default::default()
        };
        let result = compute_pricing(&saturated);
        assert_eq!(
            margin_indicator(&saturated, &result).status,
            MarginStatus::Red
        );

        let losing = PricingInputs {
            product_cost: 100.0,
            platform_fee_rate: 0.1,
            profit_margin: 0.1,
            discount_rate: 0.5,
            ..Default::default()
        };
        let result = compute_pricing(&losing);
        assert_eq!(margin_indicator(&losing, &result).status, MarginStatus::Red);
    }

    #[test]
    fn indicator_green_without_discount_yellow_with() {
        let base = PricingInputs {
            product_cost: 50.0,
            platform_fee_rate: 0.1,
            profit_margin: 0.25,
            ..Default::default()
        };
        let result = compute_pricing(&base);
        // No discount: the solved price hits the target exactly.
        assert!(close(result.net_profit, 50.0 * 0.25));
        assert_eq!(margin_indicator(&base, &result).status, MarginStatus::Green);

        let discounted = PricingInputs {
            discount_rate: 0.05,
            ..base
        };
        let result = compute_pricing(&discounted);
        assert!(result.net_profit > 0.0);
        assert_eq!(
            margin_indicator(&discounted, &result).status,
            MarginStatus::Yellow
        );
    }
}
