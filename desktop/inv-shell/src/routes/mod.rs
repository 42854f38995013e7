mod route;
pub(crate) mod route_table;
mod view;

pub use route::{Route, RouteMeta, RouteTarget};
pub use route_table::RouteTable;
pub use view::View;
