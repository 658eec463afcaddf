//! Pricing core for a vehicle logistics back office.
//!
//! Two independent calculators live here: the freight quote ("Cotação de
//! Frete") and the route cost planner ("Gestão de Rotas"). Both are pure f64
//! arithmetic over form fields that arrive as free text; saved quotes are
//! snapshotted and persisted as JSON in the platform config directory.

pub mod domain;
pub mod util;

pub use domain::{
    breakdown_segments, compute_freight_cost, compute_route_cost, ChartSegment, CostBreakdown,
    CostInput, FreightQuoteForm, PersistedQuotes, QuoteBook, RouteCostBreakdown, RouteCostForm,
    RouteCostInput, SavedQuote, Vehicle, VehicleStatus,
};
