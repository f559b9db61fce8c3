pub mod cash_count;
pub mod dashboard;
pub mod dispatch;
pub mod expense;
pub mod navigation;
pub mod sales;
pub mod shared;
pub mod shift;
