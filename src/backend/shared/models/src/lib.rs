// Common shared types and traits
pub trait Identifiable {
    fn id(&self) -> &str;
}

pub trait Timestamped {
    fn created_at(&self) -> chrono::DateTime<chrono::Utc>;
}
