//! Freight quote calculation ("Cotação de Frete").

use serde::{Deserialize, Serialize};

use crate::util::parse_field;

/// Combined tax burden embedded in the CTe gross total.
pub const TAX_RATE: f64 = 0.2125;
/// Driver commission per driven kilometer.
pub const DRIVER_RATE_PER_KM: f64 = 0.50;
/// Insurance charge as a fraction of the declared asset value.
pub const INSURANCE_RATE: f64 = 0.0003;
/// Fallback pump price when the form field is empty or unreadable.
pub const DEFAULT_FUEL_PRICE_PER_LITER: f64 = 6.00;

/// Raw text fields as captured from the quote screen's form controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FreightQuoteForm {
    pub asset_value: String,
    pub distance_km: String,
    pub flat_freight_fee: String,
    pub driver_return_fee: String,
    pub toll_cost: String,
    pub vehicle_fuel_efficiency_km_per_liter: String,
    pub fuel_price_per_liter: String,
}

impl FreightQuoteForm {
    /// Parse every field, substituting defaults before any arithmetic runs.
    pub fn resolve(&self) -> CostInput {
        let efficiency = parse_field(&self.vehicle_fuel_efficiency_km_per_liter, 1.0);
        CostInput {
            asset_value: parse_field(&self.asset_value, 0.0),
            distance_km: parse_field(&self.distance_km, 0.0),
            flat_freight_fee: parse_field(&self.flat_freight_fee, 0.0),
            driver_return_fee: parse_field(&self.driver_return_fee, 0.0),
            toll_cost: parse_field(&self.toll_cost, 0.0),
            // Zero would put a division by zero into the fuel term; treat it
            // like a missing field.
            vehicle_fuel_efficiency_km_per_liter: if efficiency == 0.0 { 1.0 } else { efficiency },
            fuel_price_per_liter: parse_field(
                &self.fuel_price_per_liter,
                DEFAULT_FUEL_PRICE_PER_LITER,
            ),
        }
    }

    /// Resolve and compute in one step, as the live preview does on every
    /// field change.
    pub fn quote(&self) -> CostBreakdown {
        compute_freight_cost(&self.resolve())
    }
}

/// Resolved numeric inputs for a freight quote.
///
/// Always produced through [`FreightQuoteForm::resolve`], so the fuel
/// efficiency is never zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostInput {
    pub asset_value: f64,
    pub distance_km: f64,
    pub flat_freight_fee: f64,
    pub driver_return_fee: f64,
    pub toll_cost: f64,
    pub vehicle_fuel_efficiency_km_per_liter: f64,
    pub fuel_price_per_liter: f64,
}

impl Default for CostInput {
    fn default() -> Self {
        Self {
            asset_value: 0.0,
            distance_km: 0.0,
            flat_freight_fee: 0.0,
            driver_return_fee: 0.0,
            toll_cost: 0.0,
            vehicle_fuel_efficiency_km_per_liter: 1.0,
            fuel_price_per_liter: DEFAULT_FUEL_PRICE_PER_LITER,
        }
    }
}

/// Itemized quote derived from a [`CostInput`].
///
/// The fixed fees are carried through so the quote screen can show every
/// line without holding on to the input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub driver_commission: f64,
    pub fuel_cost: f64,
    pub insurance_cost: f64,
    pub base_cost: f64,
    pub gross_total: f64,
    pub tax_amount: f64,
    pub margin_percent: f64,
    pub flat_freight_fee: f64,
    pub driver_return_fee: f64,
    pub toll_cost: f64,
}

/// Derive the itemized quote from already-resolved numbers.
///
/// Pure arithmetic with no validation and no rounding: negative inputs flow
/// through unchanged, and formatting to two decimals is a rendering or
/// persistence concern. The gross total divides the base cost by
/// `1 - TAX_RATE`, so the tax share of the gross equals the tax rate.
pub fn compute_freight_cost(input: &CostInput) -> CostBreakdown {
    let driver_commission = DRIVER_RATE_PER_KM * input.distance_km;
    let fuel_cost =
        (input.distance_km / input.vehicle_fuel_efficiency_km_per_liter) * input.fuel_price_per_liter;
    let insurance_cost = input.asset_value * INSURANCE_RATE;
    let base_cost = driver_commission
        + fuel_cost
        + input.driver_return_fee
        + insurance_cost
        + input.toll_cost
        + input.flat_freight_fee;
    let gross_total = base_cost / (1.0 - TAX_RATE);
    let tax_amount = gross_total - base_cost;
    let margin_percent = if gross_total > 0.0 {
        (tax_amount / gross_total) * 100.0
    } else {
        0.0
    };

    CostBreakdown {
        driver_commission,
        fuel_cost,
        insurance_cost,
        base_cost,
        gross_total,
        tax_amount,
        margin_percent,
        flat_freight_fee: input.flat_freight_fee,
        driver_return_fee: input.driver_return_fee,
        toll_cost: input.toll_cost,
    }
}

/// One slice of the cost composition donut.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSegment {
    pub label: &'static str,
    pub value: f64,
}

/// Cost composition for the quote donut chart.
///
/// Zero-valued components are dropped so the chart only draws slices that
/// exist.
pub fn breakdown_segments(breakdown: &CostBreakdown) -> Vec<ChartSegment> {
    let components = [
        ("Comissão do motorista", breakdown.driver_commission),
        ("Combustível", breakdown.fuel_cost),
        ("Retorno do motorista", breakdown.driver_return_fee),
        ("Seguro", breakdown.insurance_cost),
        ("Pedágios", breakdown.toll_cost),
        ("Frete OTD", breakdown.flat_freight_fee),
        ("Impostos", breakdown.tax_amount),
    ];

    components
        .into_iter()
        .filter(|(_, value)| *value != 0.0)
        .map(|(label, value)| ChartSegment { label, value })
        .collect()
}
