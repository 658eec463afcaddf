//! Saved freight quotes.
//!
//! A saved quote snapshots the resolved input and its breakdown as of save
//! time. Later edits to the form never touch an existing snapshot; the
//! breakdown is only ever recomputed when a new quote is recorded.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::freight_quote::{compute_freight_cost, CostBreakdown, CostInput};
use super::vehicle::Vehicle;

/// One persisted quote record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuote {
    pub id: Uuid,
    pub vehicle_plate: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
    pub input: CostInput,
    pub breakdown: CostBreakdown,
}

/// In-memory collection of saved quotes, oldest first.
#[derive(Clone, Debug, Default)]
pub struct QuoteBook {
    quotes: Vec<SavedQuote>,
}

impl QuoteBook {
    /// Snapshot a quote: the breakdown is computed from the input now and
    /// stored next to it.
    pub fn record(
        &mut self,
        vehicle_plate: Option<String>,
        input: CostInput,
        saved_at: OffsetDateTime,
    ) -> &SavedQuote {
        let breakdown = compute_freight_cost(&input);
        self.quotes.push(SavedQuote {
            id: Uuid::new_v4(),
            vehicle_plate,
            saved_at,
            input,
            breakdown,
        });
        self.quotes.last().unwrap()
    }

    /// Record against a vehicle. A declared value the form left at zero is
    /// filled from the vehicle record, mirroring the prefilled quote screen.
    pub fn record_for_vehicle(
        &mut self,
        vehicle: &Vehicle,
        mut input: CostInput,
        saved_at: OffsetDateTime,
    ) -> &SavedQuote {
        if input.asset_value == 0.0 {
            input.asset_value = vehicle.declared_value;
        }
        self.record(Some(vehicle.plate.clone()), input, saved_at)
    }

    pub fn quotes(&self) -> &[SavedQuote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Most recently recorded quote for a plate, if any.
    pub fn latest_for_plate(&self, plate: &str) -> Option<&SavedQuote> {
        self.quotes
            .iter()
            .rev()
            .find(|quote| quote.vehicle_plate.as_deref() == Some(plate))
    }

    pub fn apply_persisted(&mut self, persisted: PersistedQuotes) {
        self.quotes = persisted.quotes;
    }

    pub fn to_persisted(&self) -> PersistedQuotes {
        PersistedQuotes {
            quotes: self.quotes.clone(),
        }
    }
}

/// On-disk payload for the quote book.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedQuotes {
    #[serde(default)]
    pub quotes: Vec<SavedQuote>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::freight_quote::FreightQuoteForm;

    fn sample_input() -> CostInput {
        FreightQuoteForm {
            asset_value: "500000".to_string(),
            distance_km: "500".to_string(),
            flat_freight_fee: "1200".to_string(),
            driver_return_fee: "400".to_string(),
            toll_cost: "189".to_string(),
            vehicle_fuel_efficiency_km_per_liter: "2.5".to_string(),
            fuel_price_per_liter: "6.00".to_string(),
        }
        .resolve()
    }

    #[test]
    fn recorded_quote_snapshots_the_breakdown() {
        let mut book = QuoteBook::default();
        let quote = book.record(None, sample_input(), OffsetDateTime::UNIX_EPOCH);

        assert_eq!(quote.breakdown, compute_freight_cost(&sample_input()));
    }

    #[test]
    fn snapshots_do_not_track_later_input_changes() {
        let mut book = QuoteBook::default();
        book.record(None, sample_input(), OffsetDateTime::UNIX_EPOCH);
        let first_total = book.quotes()[0].breakdown.gross_total;

        let mut changed = sample_input();
        changed.distance_km = 1.0;
        book.record(None, changed, OffsetDateTime::UNIX_EPOCH);

        assert_eq!(book.quotes()[0].breakdown.gross_total, first_total);
        assert_ne!(book.quotes()[1].breakdown.gross_total, first_total);
    }

    #[test]
    fn vehicle_record_fills_a_blank_asset_value() {
        let vehicle = Vehicle::new("RIO4A21", "VW Nivus", 120000.0);
        let mut input = sample_input();
        input.asset_value = 0.0;

        let mut book = QuoteBook::default();
        let quote = book.record_for_vehicle(&vehicle, input, OffsetDateTime::UNIX_EPOCH);

        assert_eq!(quote.vehicle_plate.as_deref(), Some("RIO4A21"));
        assert_eq!(quote.input.asset_value, 120000.0);
        assert_eq!(quote.breakdown.insurance_cost, 120000.0 * 0.0003);
    }

    #[test]
    fn latest_for_plate_picks_the_newest() {
        let vehicle = Vehicle::new("SAO1B23", "Onix", 60000.0);
        let mut book = QuoteBook::default();
        book.record_for_vehicle(&vehicle, sample_input(), OffsetDateTime::UNIX_EPOCH);
        let mut second = sample_input();
        second.toll_cost = 999.0;
        book.record_for_vehicle(
            &vehicle,
            second,
            OffsetDateTime::UNIX_EPOCH + time::Duration::hours(1),
        );

        let latest = book.latest_for_plate("SAO1B23").unwrap();
        assert_eq!(latest.input.toll_cost, 999.0);
        assert!(book.latest_for_plate("XXX0X00").is_none());
    }

    #[test]
    fn persisted_round_trip_keeps_every_quote() {
        let mut book = QuoteBook::default();
        book.record(Some("BHZ9C87".to_string()), sample_input(), OffsetDateTime::UNIX_EPOCH);

        let json = serde_json::to_string(&book.to_persisted()).unwrap();
        let reloaded: PersistedQuotes = serde_json::from_str(&json).unwrap();

        let mut restored = QuoteBook::default();
        restored.apply_persisted(reloaded);
        assert_eq!(restored.quotes(), book.quotes());
    }
}
