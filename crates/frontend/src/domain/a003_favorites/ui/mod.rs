pub mod badge;
pub mod modal;
pub mod view_model;

pub use badge::FavoritesBadge;
pub use modal::FavoritesModal;
