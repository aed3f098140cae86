//! UI Components
//!
//! Reusable Leptos components.

mod app_link;
mod list_header;
mod popover;
mod type_selector;
mod list_filter;
mod lazy_image;
mod favorite_toggle;
mod pokemon_card;
mod infinite_scroll;
mod list_content;
mod pokemon_detail;

pub use app_link::AppLink;
pub use list_header::ListHeader;
pub use popover::Popover;
pub use type_selector::TypeSelector;
pub use list_filter::ListFilter;
pub use lazy_image::LazyImage;
pub use favorite_toggle::FavoriteToggle;
pub use pokemon_card::PokemonCard;
pub use infinite_scroll::ScrollSentinel;
pub use list_content::ListContent;
pub use pokemon_detail::PokemonDetailView;
