pub mod filter_bar;
pub mod header;
pub mod hero_card;
pub mod photo_gallery;
pub mod profile_panel;
pub mod score_bar;
pub mod shortlist_panel;
pub mod weight_panel;
