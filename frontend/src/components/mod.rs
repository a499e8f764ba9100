pub mod alert;
pub mod forms;
pub mod layout;
