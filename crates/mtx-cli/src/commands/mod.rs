pub mod annotate;
pub mod check;
pub mod dispatch;
pub mod rpc;
pub mod schema;
pub mod violations;
