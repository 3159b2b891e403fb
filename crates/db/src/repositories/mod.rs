mod contact_repo;
mod deployment_history_repo;
mod faq_repo;
mod gallery_item_repo;
mod hero_video_repo;
mod legal_document_repo;
mod session_repo;
mod user_repo;

pub use contact_repo::ContactRepo;
pub use deployment_history_repo::DeploymentHistoryRepo;
pub use faq_repo::FaqRepo;
pub use gallery_item_repo::GalleryItemRepo;
pub use hero_video_repo::HeroVideoRepo;
pub use legal_document_repo::LegalDocumentRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
