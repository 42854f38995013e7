#![allow(dead_code)]

mod fixtures;
mod test_db;

pub use fixtures::{create_test_admin, create_test_secretary};
pub use test_db::create_test_pool;
