use iced::widget::{button, column, container, horizontal_space, row, text, text_input, Row};
use iced::{Alignment, Element, Length};

use crate::state::data::Category;
use crate::state::favorites::Favorites;
use crate::Message;

/// Top bar: app name and the favorites button with its count badge
pub fn view_header<'a>(favorites: &Favorites) -> Element<'a, Message> {
    // Badge only when something is favorited
    let label = if favorites.is_empty() {
        "♡".to_string()
    } else {
        format!("♥ {}", favorites.len())
    };

    row![
        text("Wildberries").size(28),
        horizontal_space(),
        button(text(label).size(18))
            .on_press(Message::ShowAll)
            .style(button::text)
            .padding([6, 12]),
    ]
    .align_y(Alignment::Center)
    .padding([16, 32])
    .into()
}

/// Title, subtitle and the search box
pub fn view_hero(query: &str) -> Element<'_, Message> {
    let search = text_input("Поиск образов...", query)
        .on_input(Message::SearchChanged)
        .padding(12)
        .size(18)
        .width(Length::Fixed(640.0));

    container(
        column![
            text("Outfit Collection").size(48),
            text("Сборник стильных образов для любого случая").size(18),
            search,
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding([32, 16])
    .into()
}

/// One button per category, the selected one highlighted
pub fn view_categories<'a>(selected: Category) -> Element<'a, Message> {
    let buttons = Category::ALL.into_iter().map(|category| -> Element<'a, Message> {
        let style = if category == selected {
            button::primary
        } else {
            button::secondary
        };

        button(text(category.label()).size(16))
            .on_press(Message::CategorySelected(category))
            .style(style)
            .padding([8, 16])
            .into()
    });

    container(Row::with_children(buttons).spacing(12))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([16, 16])
        .into()
}

pub fn view_footer<'a>() -> Element<'a, Message> {
    container(text("© 2024 Wildberries Outfit Collection").size(14))
        .width(Length::Fill)
        .padding([24, 32])
        .into()
}
