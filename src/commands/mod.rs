pub mod gatling;
pub mod jmeter;
pub mod k6;
pub mod locust;

pub use gatling::execute_gatling;
pub use jmeter::execute_jmeter;
pub use k6::execute_k6;
pub use locust::execute_locust;
