mod author;
mod catalog;
mod characters;
mod games;
mod hero;
mod history;
mod modern;
mod navigation;
mod page;
mod story;
mod themes;

pub use author::AuthorSection;
pub use catalog::CatalogExplorer;
pub use characters::CharactersSection;
pub use games::GamesSection;
pub use hero::HeroSection;
pub use history::HistorySection;
pub use modern::ModernSection;
pub use navigation::NavBar;
pub use page::PageView;
pub use story::StorySection;
pub use themes::ThemesSection;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
