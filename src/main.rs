use iced::widget::{column, image, scrollable};
use iced::{Element, Task, Theme};
use std::collections::HashMap;

use env_logger::{Builder, Target};
use log::LevelFilter;

mod config;
mod error;
mod state;
mod ui;

use config::AppConfig;
use state::catalog::Catalog;
use state::data::Category;
use state::favorites::Favorites;
use state::filter::FilterState;

/// Main application state
struct OutfitCatalog {
    /// The fixed list of outfits
    catalog: Catalog,
    /// Current category/search selection
    filter: FilterState,
    /// Favorited outfit ids, persisted on every change
    favorites: Favorites,
    /// Resolved image handles by outfit id (missing files are absent)
    images: HashMap<u32, image::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked a category on the category bar
    CategorySelected(Category),
    /// Search box contents changed
    SearchChanged(String),
    /// Heart button on a card
    ToggleFavorite(u32),
    /// Favorites button in the header: back to every category
    ShowAll,
    /// "Reset filters" on the empty result notice
    ClearFilters,
}

impl OutfitCatalog {
    /// Create a new instance of the application
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let catalog = load_catalog(&config);

        let store = state::storage::open_or_memory(config.data_dir.as_deref());
        let favorites = Favorites::load(store, |id| catalog.contains(id));

        let images: HashMap<u32, image::Handle> = catalog
            .records()
            .iter()
            .filter_map(|record| {
                let path = config.resolve_image(&record.image);
                if path.is_none() {
                    log::debug!("No image for outfit {} ({})", record.id, record.image);
                }
                path.map(|p| (record.id, image::Handle::from_path(p)))
            })
            .collect();

        log::info!(
            "🎨 Outfit catalog initialized with {} outfits, {} favorites",
            catalog.len(),
            favorites.len()
        );

        (
            OutfitCatalog {
                catalog,
                filter: FilterState::new(),
                favorites,
                images,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CategorySelected(category) => {
                self.filter.select_category(category);
            }
            Message::SearchChanged(query) => {
                self.filter.set_query(query);
            }
            Message::ToggleFavorite(id) => {
                let Some(record) = self.catalog.get(id) else {
                    log::warn!("Ignoring favorite toggle for unknown outfit {}", id);
                    return Task::none();
                };
                let title = record.title.clone();
                let now_favorite = self.favorites.toggle(id);
                log::debug!(
                    "{} {}, favorites now {:?}",
                    if now_favorite { "♥ Added" } else { "♡ Removed" },
                    title,
                    self.favorites.ids()
                );
            }
            Message::ShowAll => {
                self.filter.select_category(Category::All);
            }
            Message::ClearFilters => {
                self.filter.reset();
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let visible = self.filter.apply(self.catalog.records());

        let content = column![
            ui::header::view_header(&self.favorites),
            ui::header::view_hero(&self.filter.query),
            ui::header::view_categories(self.filter.category),
            ui::card::view_grid(&visible, &self.favorites, &self.images),
            ui::header::view_footer(),
        ]
        .spacing(8);

        scrollable(content).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Use the configured catalog file if there is one, the built-in list otherwise
fn load_catalog(config: &AppConfig) -> Catalog {
    let Some(path) = &config.catalog_file else {
        return Catalog::builtin();
    };

    match Catalog::from_json_file(path) {
        Ok(catalog) if catalog.is_empty() => {
            log::warn!("⚠️  {} holds no outfits; using built-in list", path.display());
            Catalog::builtin()
        }
        Ok(catalog) => {
            log::info!("📁 Loaded {} outfits from {}", catalog.len(), path.display());
            catalog
        }
        Err(e) => {
            log::warn!("⚠️  Could not load catalog from {}: {}; using built-in list", path.display(), e);
            Catalog::builtin()
        }
    }
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("outfit_catalog", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment();

    iced::application("Outfit Collection", OutfitCatalog::update, OutfitCatalog::view)
        .theme(OutfitCatalog::theme)
        .centered()
        .run_with(move || OutfitCatalog::new(config))
}
