mod expense;
mod sales;
mod shift;

pub use expense::{ExpenseCaptureArgs, ExpenseCommands, ExpenseFieldArgs};
pub use sales::SalesCommands;
pub use shift::{ShiftCloseArgs, ShiftCommands, ShiftFormArgs};
