pub mod chat;
pub mod medication;
pub mod record;
pub mod recovery;
pub mod scan;
pub mod transcript;
pub mod wound;
