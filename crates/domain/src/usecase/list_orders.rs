//! List-orders use case.

use order_store::{OrderStore, PageRequest};
use serde::Serialize;

use crate::error::DomainError;

use super::OrderOutput;

/// Raw caller input for listing. Values are taken as-is from the transport
/// layer; normalization happens inside the use case, so out-of-range values
/// are corrected rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct ListOrdersInput {
    pub page: i64,
    pub limit: i64,
    pub sort: String,
}

/// One page of orders plus pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct OrdersPage {
    pub orders: Vec<OrderOutput>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

/// Lists orders with pagination.
pub struct ListOrdersUseCase<S: OrderStore> {
    store: S,
}

impl<S: OrderStore> ListOrdersUseCase<S> {
    /// Creates the use case over a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Executes the use case.
    ///
    /// Two round trips: the page query and the total count. Either failing
    /// fails the whole operation; a partially populated page is never
    /// returned. Ordering beyond the ascending sort field is left entirely
    /// to the backend.
    #[tracing::instrument(skip(self, input), fields(page = input.page, limit = input.limit))]
    pub async fn execute(&self, input: ListOrdersInput) -> Result<OrdersPage, DomainError> {
        let page = PageRequest::normalized(input.page, input.limit, &input.sort);

        let records = self.store.find_all(&page).await?;
        let total = self.store.get_total().await?;

        let orders = records.iter().map(OrderOutput::from).collect();

        let limit = u64::from(page.limit());
        let mut total_pages = total / limit;
        if total % limit > 0 {
            total_pages += 1;
        }

        Ok(OrdersPage {
            orders,
            page: page.page(),
            limit: page.limit(),
            total,
            total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_store::{InMemoryOrderStore, OrderRecord};

    async fn seeded_store(count: u32) -> InMemoryOrderStore {
        let store = InMemoryOrderStore::new();
        for i in 0..count {
            let price = f64::from(i + 1);
            store
                .save(&OrderRecord::new(format!("o{i:02}"), price, 0.5, price + 0.5))
                .await
                .unwrap();
        }
        store
    }

    fn list(page: i64, limit: i64, sort: &str) -> ListOrdersInput {
        ListOrdersInput {
            page,
            limit,
            sort: sort.to_string(),
        }
    }

    #[tokio::test]
    async fn normalizes_out_of_range_input() {
        let use_case = ListOrdersUseCase::new(seeded_store(3).await);

        let result = use_case.execute(list(0, -5, "")).await.unwrap();

        assert_eq!(result.page, 1);
        assert_eq!(result.limit, 10);
        assert_eq!(result.orders.len(), 3);
        // Default sort is by id.
        assert_eq!(result.orders[0].id, "o00");
    }

    #[tokio::test]
    async fn pages_through_23_orders() {
        let use_case = ListOrdersUseCase::new(seeded_store(23).await);

        let result = use_case.execute(list(3, 10, "id")).await.unwrap();

        assert_eq!(result.orders.len(), 3);
        assert_eq!(result.orders[0].id, "o20");
        assert_eq!(result.page, 3);
        assert_eq!(result.limit, 10);
        assert_eq!(result.total, 23);
        assert_eq!(result.total_pages, 3);
    }

    #[tokio::test]
    async fn total_pages_arithmetic() {
        for (count, limit, expected) in [(25u32, 10, 3u64), (20, 10, 2), (0, 10, 0), (1, 10, 1)] {
            let use_case = ListOrdersUseCase::new(seeded_store(count).await);
            let result = use_case.execute(list(1, limit, "id")).await.unwrap();
            assert_eq!(
                result.total_pages, expected,
                "total={count} limit={limit}"
            );
        }
    }

    #[tokio::test]
    async fn empty_store_yields_an_empty_page() {
        let use_case = ListOrdersUseCase::new(InMemoryOrderStore::new());

        let result = use_case.execute(list(1, 10, "id")).await.unwrap();

        assert!(result.orders.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }

    #[tokio::test]
    async fn sort_field_is_passed_through() {
        let store = InMemoryOrderStore::new();
        store
            .save(&OrderRecord::new("a", 30.0, 0.0, 30.0))
            .await
            .unwrap();
        store
            .save(&OrderRecord::new("b", 10.0, 0.0, 10.0))
            .await
            .unwrap();
        let use_case = ListOrdersUseCase::new(store);

        let result = use_case.execute(list(1, 10, "price")).await.unwrap();

        assert_eq!(result.orders[0].id, "b");
        assert_eq!(result.orders[1].id, "a");
    }

    #[tokio::test]
    async fn find_failure_fails_the_whole_operation() {
        let store = seeded_store(3).await;
        store.set_fail_on_find(true).await;
        let use_case = ListOrdersUseCase::new(store);

        let err = use_case.execute(list(1, 10, "id")).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn count_failure_fails_the_whole_operation() {
        let store = seeded_store(3).await;
        store.set_fail_on_count(true).await;
        let use_case = ListOrdersUseCase::new(store);

        let err = use_case.execute(list(1, 10, "id")).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }
}
