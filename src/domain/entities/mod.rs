pub mod admin_reviews;
pub mod campaign_updates;
pub mod campaigns;
pub mod comments;
pub mod donations;
pub mod follows;
pub mod payments;
pub mod users;
