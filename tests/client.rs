use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use stockdesk::client::{ApiClient, ApiResult, Transport};
use stockdesk::domain::customer::{Customer, NewCustomer};
use stockdesk::domain::inventory::InventoryItem;
use stockdesk::domain::product::Product;
use stockdesk::domain::sale::Sale;
use stockdesk::domain::types::{CompanyId, CustomerId};
use stockdesk::query::{QueryRequest, SortDirection};

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Get(String, String),
    Post(String, Value),
    Put(String, Value),
    Delete(String),
}

/// Transport that records every call and replays a scripted response.
struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    response: Value,
}

impl RecordingTransport {
    fn new(response: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response,
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    fn get(&self, path: &str, query: &str) -> ApiResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Get(path.to_string(), query.to_string()));
        Ok(self.response.clone())
    }

    fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Post(path.to_string(), body));
        Ok(self.response.clone())
    }

    fn put(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Put(path.to_string(), body));
        Ok(self.response.clone())
    }

    fn delete(&self, path: &str) -> ApiResult<()> {
        self.calls.lock().unwrap().push(Call::Delete(path.to_string()));
        Ok(())
    }
}

fn empty_page() -> Value {
    json!({
        "data": [],
        "pagedResult": {
            "currentPage": 1,
            "pageCount": 0,
            "pageSize": 20,
            "rowCount": 0
        },
        "success": true,
        "message": ""
    })
}

#[test]
fn product_list_translates_grid_state_onto_the_wire() {
    let transport = Arc::new(RecordingTransport::new(empty_page()));
    let client = ApiClient::new(transport.clone());

    let request = QueryRequest::new(25)
        .page(3)
        .sort("name", SortDirection::Descending)
        .filter("categoryId", "7")
        .filter("ignored", "x");
    client.list::<Product>(&request).unwrap();

    match &transport.calls()[0] {
        Call::Get(path, query) => {
            assert_eq!(path, "Products");
            assert_eq!(query, "PageIndex=4&PageSize=25&Order=name+desc&CategoryId=7");
        }
        other => panic!("expected GET, got {other:?}"),
    }
}

#[test]
fn inventory_search_folds_onto_the_location_field() {
    let transport = Arc::new(RecordingTransport::new(empty_page()));
    let client = ApiClient::new(transport.clone());

    client
        .list::<InventoryItem>(&QueryRequest::new(10).search("warehouse 9"))
        .unwrap();

    match &transport.calls()[0] {
        Call::Get(_, query) => {
            assert!(query.contains("Location=warehouse+9"));
            assert!(!query.contains("Name="));
        }
        other => panic!("expected GET, got {other:?}"),
    }
}

#[test]
fn sale_search_folds_onto_the_reference_field() {
    let transport = Arc::new(RecordingTransport::new(empty_page()));
    let client = ApiClient::new(transport.clone());

    client
        .list::<Sale>(&QueryRequest::new(10).search("INV-2026"))
        .unwrap();

    match &transport.calls()[0] {
        Call::Get(_, query) => assert!(query.contains("Reference=INV-2026")),
        other => panic!("expected GET, got {other:?}"),
    }
}

#[test]
fn customer_crud_uses_collection_and_detail_paths() {
    let customer = json!({
        "data": {
            "id": 12,
            "name": "Acme Buyer",
            "email": "buyer@acme.test",
            "phone": null,
            "companyId": 3
        },
        "success": true,
        "message": ""
    });
    let transport = Arc::new(RecordingTransport::new(customer));
    let client = ApiClient::new(transport.clone());

    let new = NewCustomer::new(
        "Acme Buyer".to_string(),
        Some("buyer@acme.test".to_string()),
        None,
        Some(CompanyId::new(3).unwrap()),
    );
    let created = client.create::<Customer>(&new).unwrap();
    assert_eq!(created.id, CustomerId::new(12).unwrap());

    let fetched = client.get::<Customer>(created.id).unwrap().unwrap();
    assert_eq!(fetched.name, "Acme Buyer");

    client.delete::<Customer>(created.id).unwrap();

    let calls = transport.calls();
    assert!(matches!(&calls[0], Call::Post(path, _) if path == "Customers"));
    assert!(matches!(&calls[1], Call::Get(path, query) if path == "Customers/12" && query.is_empty()));
    assert!(matches!(&calls[2], Call::Delete(path) if path == "Customers/12"));
}
