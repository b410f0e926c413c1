//! Mock transport for isolating the client stack in tests.

use mockall::mock;
use serde_json::Value;

use crate::client::{ApiResult, Transport};

mock! {
    pub Transport {}

    impl Transport for Transport {
        fn get(&self, path: &str, query: &str) -> ApiResult<Value>;
        fn post(&self, path: &str, body: Value) -> ApiResult<Value>;
        fn put(&self, path: &str, body: Value) -> ApiResult<Value>;
        fn delete(&self, path: &str) -> ApiResult<()>;
    }
}
