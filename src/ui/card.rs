use std::collections::HashMap;

use iced::widget::{button, column, container, horizontal_space, image, row, text, Row};
use iced::{Alignment, ContentFit, Element, Length, Pixels};
use iced_aw::Wrap;

use crate::state::data::OutfitRecord;
use crate::state::favorites::Favorites;
use crate::Message;

const CARD_WIDTH: f32 = 320.0;
const IMAGE_HEIGHT: f32 = 400.0;

/// Grid of outfit cards, or the "nothing found" notice when empty
pub fn view_grid<'a>(
    records: &[&'a OutfitRecord],
    favorites: &Favorites,
    images: &HashMap<u32, image::Handle>,
) -> Element<'a, Message> {
    if records.is_empty() {
        return view_empty();
    }

    let cards: Vec<Element<'a, Message>> = records
        .iter()
        .map(|&record| view_card(record, favorites.is_favorite(record.id), images.get(&record.id)))
        .collect();

    container(
        Wrap::with_elements(cards)
            .spacing(Pixels(32.0))
            .line_spacing(Pixels(32.0)),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding([16, 32])
    .into()
}

/// A single outfit card
pub fn view_card<'a>(
    record: &'a OutfitRecord,
    is_favorite: bool,
    handle: Option<&image::Handle>,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        // Image file missing: show the title in its place
        None => container(text(&record.title).size(20))
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(IMAGE_HEIGHT))
            .style(container::rounded_box)
            .into(),
    };

    let heart = button(text(if is_favorite { "♥" } else { "♡" }).size(20))
        .on_press(Message::ToggleFavorite(record.id))
        .style(if is_favorite { button::primary } else { button::secondary })
        .padding([4, 10]);

    let tags = Row::with_children(record.tags.iter().map(|tag| -> Element<'a, Message> {
        container(text(tag).size(12))
            .padding([2, 8])
            .style(container::rounded_box)
            .into()
    }))
    .spacing(6);

    let content = column![
        picture,
        row![
            text(&record.title).size(22),
            horizontal_space(),
            container(text(badge_text(record)).size(12))
                .padding([2, 8])
                .style(container::rounded_box),
        ]
        .align_y(Alignment::Center),
        tags,
        text(&record.description).size(14),
        row![
            text(&record.price).size(24),
            horizontal_space(),
            heart,
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(12)
    .padding(16);

    container(content)
        .width(Length::Fixed(CARD_WIDTH))
        .style(container::rounded_box)
        .into()
}

/// Category badge text, worded like the category bar
fn badge_text(record: &OutfitRecord) -> &'static str {
    record.category.label()
}

/// Shown when no outfit matches the current filter
pub fn view_empty<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Ничего не найдено").size(24),
            text("Попробуйте изменить фильтры или поисковый запрос").size(16),
            button(text("Сбросить фильтры"))
                .on_press(Message::ClearFilters)
                .style(button::secondary)
                .padding([8, 16]),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding([64, 16])
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;
    use crate::state::data::Category;

    #[test]
    fn test_badge_matches_category_bar() {
        let catalog = Catalog::builtin();

        let badges: Vec<&str> = catalog.records().iter().map(badge_text).collect();
        assert_eq!(
            badges,
            vec!["Casual", "Business", "Спорт", "Вечерний", "Casual", "Business"]
        );

        for record in catalog.records() {
            assert!(Category::ALL.iter().any(|c| c.label() == badge_text(record)));
        }
    }
}
