pub mod event;
pub mod form;
pub mod health;
pub mod listing;
pub mod restaurant;
pub mod review;
pub mod thing_to_do;
