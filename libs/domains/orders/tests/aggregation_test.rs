//! Aggregation tests for the Orders domain
//!
//! These drive [`OrderItemsService`] end to end, over HTTP against wiremock
//! and over a scripted in-memory client, to verify:
//! - Items come back in package order regardless of completion order
//! - Package fetches overlap in time
//! - One failing package fails the whole lookup
//! - Outstanding package fetches are cancelled before the error returns

use async_trait::async_trait;
use domain_orders::*;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use uuid::Uuid;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> OrderItemsService<HttpOrderClient> {
    let config = UpstreamConfig::new(
        format!("{}/maestro/v1", server.uri()),
        "secret",
        "tenant-1",
    );
    OrderItemsService::new(HttpOrderClient::new(&config).unwrap())
}

async fn mount_order(server: &MockServer, order_id: Uuid, packages: &[Uuid]) {
    let packages: Vec<_> = packages.iter().map(|id| json!({"uuid": id})).collect();
    Mock::given(method("GET"))
        .and(path(format!("/maestro/v1/orders/{}", order_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": order_id,
            "packages": packages
        })))
        .mount(server)
        .await;
}

async fn mount_items(
    server: &MockServer,
    order_id: Uuid,
    package_id: Uuid,
    skus: &[&str],
    delay: Duration,
) {
    let records: Vec<_> = skus
        .iter()
        .map(|sku| json!({"product": {"code": sku}, "quantity": 1}))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!(
            "/maestro/v1/orders/{}/packages/{}/items",
            order_id, package_id
        )))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(records)
                .set_delay(delay),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn skus(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.sku.as_str()).collect()
}

#[tokio::test]
async fn test_order_without_packages_makes_no_package_calls() {
    let server = MockServer::start().await;
    let order_id = Uuid::new_v4();
    mount_order(&server, order_id, &[]).await;

    Mock::given(method("GET"))
        .and(path_regex(r"/packages/.+/items$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let items = service_for(&server).get_order_items(order_id).await.unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_items_follow_package_order_not_completion_order() {
    let server = MockServer::start().await;
    let order_id = Uuid::new_v4();
    let packages = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
    mount_order(&server, order_id, &packages).await;

    // The first package finishes last, the last package first.
    mount_items(&server, order_id, packages[0], &["A1", "A2"], Duration::from_millis(300)).await;
    mount_items(&server, order_id, packages[1], &["B1"], Duration::from_millis(150)).await;
    mount_items(&server, order_id, packages[2], &["C1", "C2"], Duration::ZERO).await;

    let items = service_for(&server).get_order_items(order_id).await.unwrap();

    assert_eq!(skus(&items), vec!["A1", "A2", "B1", "C1", "C2"]);
}

#[tokio::test]
async fn test_empty_packages_contribute_nothing() {
    let server = MockServer::start().await;
    let order_id = Uuid::new_v4();
    let packages = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
    mount_order(&server, order_id, &packages).await;

    mount_items(&server, order_id, packages[0], &[], Duration::ZERO).await;
    mount_items(&server, order_id, packages[1], &["B1"], Duration::ZERO).await;
    mount_items(&server, order_id, packages[2], &[], Duration::ZERO).await;

    let items = service_for(&server).get_order_items(order_id).await.unwrap();

    assert_eq!(skus(&items), vec!["B1"]);
}

#[tokio::test]
async fn test_package_fetches_run_concurrently() {
    let server = MockServer::start().await;
    let order_id = Uuid::new_v4();
    let packages: Vec<Uuid> = (0..10).map(|_| Uuid::new_v4()).collect();
    mount_order(&server, order_id, &packages).await;

    for (index, package_id) in packages.iter().enumerate() {
        let sku = format!("P{}", index);
        mount_items(&server, order_id, *package_id, &[sku.as_str()], Duration::from_millis(200)).await;
    }

    let started = Instant::now();
    let items = service_for(&server).get_order_items(order_id).await.unwrap();
    let elapsed = started.elapsed();

    let expected: Vec<String> = (0..10).map(|index| format!("P{}", index)).collect();
    assert_eq!(skus(&items), expected.iter().map(String::as_str).collect::<Vec<_>>());
    // Ten sequential 200ms calls would take at least two seconds.
    assert!(elapsed < Duration::from_millis(1500), "took {:?}", elapsed);
}

#[tokio::test]
async fn test_concurrent_lookups_do_not_mix_results() {
    let server = MockServer::start().await;
    let mut orders = Vec::new();

    for order_index in 0..5 {
        let order_id = Uuid::new_v4();
        let packages: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        mount_order(&server, order_id, &packages).await;
        for (package_index, package_id) in packages.iter().enumerate() {
            let sku = format!("O{}-P{}", order_index, package_index);
            let delay = Duration::from_millis(20 * (3 - package_index as u64));
            mount_items(&server, order_id, *package_id, &[sku.as_str()], delay).await;
        }
        orders.push(order_id);
    }

    let service = service_for(&server);
    let results =
        futures::future::join_all(orders.iter().map(|order_id| service.get_order_items(*order_id)))
            .await;

    for (order_index, result) in results.into_iter().enumerate() {
        let items = result.unwrap();
        let expected: Vec<String> = (0..3)
            .map(|package_index| format!("O{}-P{}", order_index, package_index))
            .collect();
        assert_eq!(skus(&items), expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

#[tokio::test]
async fn test_one_failing_package_fails_the_order() {
    let server = MockServer::start().await;
    let order_id = Uuid::new_v4();
    let packages = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
    mount_order(&server, order_id, &packages).await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/maestro/v1/orders/{}/packages/{}/items",
            order_id, packages[1]
        )))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    for package_id in [packages[0], packages[2]] {
        Mock::given(method("GET"))
            .and(path(format!(
                "/maestro/v1/orders/{}/packages/{}/items",
                order_id, package_id
            )))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"product": {"code": "OK"}, "quantity": 1}])),
            )
            .mount(&server)
            .await;
    }

    let result = service_for(&server).get_order_items(order_id).await;

    assert_eq!(result, Err(OrderError::CommunicationFailed));
}

#[tokio::test]
async fn test_missing_order_makes_no_package_calls() {
    let server = MockServer::start().await;
    let order_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/maestro/v1/orders/{}", order_id)))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"/packages/.+/items$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let result = service_for(&server).get_order_items(order_id).await;

    assert_eq!(result, Err(OrderError::OrderNotFound));
}

/// Increments a counter when the owning future is dropped.
struct DropGuard(Arc<AtomicUsize>);

impl Drop for DropGuard {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

enum Script {
    Items(&'static str),
    FailAfter(Duration),
    Hang,
    Panic,
}

struct ScriptedClient {
    packages: Vec<(Uuid, Script)>,
    hanging_started: Arc<AtomicUsize>,
    hanging_dropped: Arc<AtomicUsize>,
}

impl ScriptedClient {
    fn new(scripts: Vec<Script>) -> Self {
        Self {
            packages: scripts.into_iter().map(|s| (Uuid::new_v4(), s)).collect(),
            hanging_started: Arc::new(AtomicUsize::new(0)),
            hanging_dropped: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl OrderClient for ScriptedClient {
    async fn fetch_order(&self, _order_id: Uuid) -> OrderResult<Vec<Uuid>> {
        Ok(self.packages.iter().map(|(id, _)| *id).collect())
    }

    async fn fetch_package_items(
        &self,
        _order_id: Uuid,
        package_id: Uuid,
    ) -> OrderResult<Vec<Item>> {
        let (_, script) = self
            .packages
            .iter()
            .find(|(id, _)| *id == package_id)
            .unwrap();

        match script {
            Script::Items(sku) => Ok(vec![Item {
                sku: sku.to_string(),
                description: String::new(),
                image_url: String::new(),
                reference: String::new(),
                quantity: 1,
            }]),
            Script::FailAfter(delay) => {
                tokio::time::sleep(*delay).await;
                Err(OrderError::CommunicationFailed)
            }
            Script::Hang => {
                let _guard = DropGuard(Arc::clone(&self.hanging_dropped));
                self.hanging_started.fetch_add(1, Ordering::SeqCst);
                std::future::pending::<OrderResult<Vec<Item>>>().await
            }
            Script::Panic => panic!("package fetch panicked"),
        }
    }
}

#[tokio::test]
async fn test_failure_cancels_outstanding_fetches_before_returning() {
    let client = ScriptedClient::new(vec![
        Script::Items("A"),
        Script::Hang,
        Script::FailAfter(Duration::from_millis(50)),
        Script::Hang,
    ]);
    let started = Arc::clone(&client.hanging_started);
    let dropped = Arc::clone(&client.hanging_dropped);
    let service = OrderItemsService::new(client);

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        service.get_order_items(Uuid::new_v4()),
    )
    .await
    .expect("lookup should fail fast instead of waiting on hung packages");

    assert_eq!(result, Err(OrderError::CommunicationFailed));
    assert_eq!(started.load(Ordering::SeqCst), 2);
    assert_eq!(dropped.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_panicking_fetch_is_communication_failure() {
    let client = ScriptedClient::new(vec![Script::Items("A"), Script::Panic, Script::Hang]);
    let started = Arc::clone(&client.hanging_started);
    let dropped = Arc::clone(&client.hanging_dropped);
    let service = OrderItemsService::new(client);

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        service.get_order_items(Uuid::new_v4()),
    )
    .await
    .unwrap();

    assert_eq!(result, Err(OrderError::CommunicationFailed));
    assert_eq!(dropped.load(Ordering::SeqCst), started.load(Ordering::SeqCst));
}
