pub mod dashboard;
pub mod home;
pub mod payroll;
pub mod settings;
