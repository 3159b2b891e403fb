pub mod auth;
pub mod contacts;
pub mod deployment_history;
pub mod faqs;
pub mod gallery_items;
pub mod hero_videos;
pub mod legal_documents;
pub mod uploads;
pub mod video_cache;
pub mod video_proxy;
