pub mod admin_reviews;
pub mod campaigns;
pub mod comments;
pub mod donations;
pub mod enums;
pub mod follows;
pub mod funding;
pub mod payments;
pub mod reporting;
pub mod users;
