//! Domain logic for freight pricing lives here.

pub mod freight_quote;
pub mod quote_book;
pub mod route_plan;
pub mod vehicle;

pub use freight_quote::{
    breakdown_segments, compute_freight_cost, ChartSegment, CostBreakdown, CostInput,
    FreightQuoteForm, DEFAULT_FUEL_PRICE_PER_LITER, DRIVER_RATE_PER_KM, INSURANCE_RATE, TAX_RATE,
};
pub use quote_book::{PersistedQuotes, QuoteBook, SavedQuote};
pub use route_plan::{
    compute_route_cost, RouteCostBreakdown, RouteCostForm, RouteCostInput, ARLA32_RATE,
};
pub use vehicle::{Vehicle, VehicleStatus};
