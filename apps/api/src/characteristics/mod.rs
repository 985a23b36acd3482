// Characteristics Store: per-user free-form attributes, upserted by user id.

pub mod handlers;
pub mod store;
