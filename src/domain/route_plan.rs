//! Route cost planning ("Gestão de Rotas").
//!
//! An independently evolved formula set from the freight quote. The two
//! calculators encode different business rules and share no constants, so
//! they must not be folded into one implementation.

use serde::{Deserialize, Serialize};

use crate::util::parse_field;

/// Arla 32 additive consumption, charged as a share of the diesel cost.
pub const ARLA32_RATE: f64 = 0.05;

/// Raw text fields as captured from the route planning screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteCostForm {
    pub distance_km: String,
    pub diesel_price_per_liter: String,
    pub fuel_consumption_km_per_liter: String,
    pub toll_cost: String,
    pub driver_daily_cost: String,
    pub return_ticket_cost: String,
    pub extra_expenses: String,
    pub ad_valorem_percent: String,
    pub vehicle_value: String,
    pub profit_margin_percent: String,
    pub admin_fee: String,
}

impl RouteCostForm {
    /// Parse every field with a plain zero fallback. Unlike the freight
    /// quote, a missing consumption figure stays zero here.
    pub fn resolve(&self) -> RouteCostInput {
        RouteCostInput {
            distance_km: parse_field(&self.distance_km, 0.0),
            diesel_price_per_liter: parse_field(&self.diesel_price_per_liter, 0.0),
            fuel_consumption_km_per_liter: parse_field(&self.fuel_consumption_km_per_liter, 0.0),
            toll_cost: parse_field(&self.toll_cost, 0.0),
            driver_daily_cost: parse_field(&self.driver_daily_cost, 0.0),
            return_ticket_cost: parse_field(&self.return_ticket_cost, 0.0),
            extra_expenses: parse_field(&self.extra_expenses, 0.0),
            ad_valorem_percent: parse_field(&self.ad_valorem_percent, 0.0),
            vehicle_value: parse_field(&self.vehicle_value, 0.0),
            profit_margin_percent: parse_field(&self.profit_margin_percent, 0.0),
            admin_fee: parse_field(&self.admin_fee, 0.0),
        }
    }

    pub fn plan(&self) -> RouteCostBreakdown {
        compute_route_cost(&self.resolve())
    }
}

/// Resolved numeric inputs for a route plan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCostInput {
    pub distance_km: f64,
    pub diesel_price_per_liter: f64,
    pub fuel_consumption_km_per_liter: f64,
    pub toll_cost: f64,
    pub driver_daily_cost: f64,
    pub return_ticket_cost: f64,
    pub extra_expenses: f64,
    pub ad_valorem_percent: f64,
    pub vehicle_value: f64,
    pub profit_margin_percent: f64,
    pub admin_fee: f64,
}

/// Itemized route cost with the suggested sale price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCostBreakdown {
    pub fuel_cost: f64,
    pub arla32_cost: f64,
    pub ad_valorem_cost: f64,
    pub total_cost: f64,
    pub suggested_price: f64,
    pub net_profit: f64,
    pub toll_cost: f64,
    pub driver_daily_cost: f64,
    pub return_ticket_cost: f64,
    pub extra_expenses: f64,
    pub admin_fee: f64,
}

/// Derive the route cost sheet from already-resolved numbers.
///
/// A consumption of zero means the field was never filled in; the fuel term
/// simply stays out of the total instead of borrowing a substitute
/// efficiency.
pub fn compute_route_cost(input: &RouteCostInput) -> RouteCostBreakdown {
    let fuel_cost = if input.fuel_consumption_km_per_liter > 0.0 {
        (input.distance_km / input.fuel_consumption_km_per_liter) * input.diesel_price_per_liter
    } else {
        0.0
    };
    let arla32_cost = fuel_cost * ARLA32_RATE;
    let ad_valorem_cost = (input.vehicle_value * input.ad_valorem_percent) / 100.0;
    let total_cost = fuel_cost
        + arla32_cost
        + input.toll_cost
        + input.driver_daily_cost
        + input.return_ticket_cost
        + input.extra_expenses
        + ad_valorem_cost
        + input.admin_fee;
    let suggested_price = total_cost * (1.0 + input.profit_margin_percent / 100.0);
    let net_profit = suggested_price - total_cost;

    RouteCostBreakdown {
        fuel_cost,
        arla32_cost,
        ad_valorem_cost,
        total_cost,
        suggested_price,
        net_profit,
        toll_cost: input.toll_cost,
        driver_daily_cost: input.driver_daily_cost,
        return_ticket_cost: input.return_ticket_cost,
        extra_expenses: input.extra_expenses,
        admin_fee: input.admin_fee,
    }
}
