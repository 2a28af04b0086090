pub mod campaign_categories;
pub mod campaign_statuses;
pub mod review_decisions;
pub mod donation_statuses;
pub mod payment_statuses;
pub mod sort_order;
pub mod user_roles;
