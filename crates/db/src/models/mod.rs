pub mod contact;
pub mod deployment_history;
pub mod faq;
pub mod gallery_item;
pub mod hero_video;
pub mod legal_document;
pub mod session;
pub mod user;
