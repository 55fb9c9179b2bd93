use common::OrderId;

/// One persisted order row.
///
/// The store seam speaks in plain records so that backends do not depend on
/// the domain layer; the domain maps its entity to a record on save and a
/// record back to an output DTO on list.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

impl OrderRecord {
    /// Creates a record from its four column values.
    pub fn new(id: impl Into<OrderId>, price: f64, tax: f64, final_price: f64) -> Self {
        Self {
            id: id.into(),
            price,
            tax,
            final_price,
        }
    }
}
