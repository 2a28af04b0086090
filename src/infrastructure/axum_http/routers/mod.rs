pub mod admin_reviews;
pub mod campaigns;
pub mod comments;
pub mod donations;
pub mod follows;
pub mod payments;
pub mod reporting;
pub mod users;
