// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Everything is stacked over the full-window slide stage: the cursor
//! follower, the header with the pixel star, the navigation chrome, and the
//! social links panel once revealed. All animated values are read from state;
//! the view itself never advances time.

use super::{App, Message};
use crate::navigation::Direction;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{FollowerDot, PixelStar, SlideLayer, SlideStage};
use iced::widget::{button, container, image, mouse_area, text, Column, Row, Space, Stack};
use iced::{Alignment, Color, ContentFit, Element, Length};

/// The two profile links shown in the revealed panel.
pub(super) const SOCIAL_LINKS: [(&str, &str); 2] = [
    ("GitHub", "github.com/atelier-iced"),
    ("Instagram", "instagram.com/atelier.iced"),
];

pub fn view(app: &App) -> Element<'_, Message> {
    let stage = SlideStage::new(
        current_layer(app),
        outgoing_layer(app),
        app.pointer.parallax(),
    )
    .into_element();

    let follower = FollowerDot::new(app.pointer.smoothed()).into_element();

    let stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(stage)
        .push(follower)
        .push(header(app))
        .push(arrows())
        .push(bottom_chrome(app));

    let stack = match links_panel(app) {
        Some(panel) => stack.push(panel),
        None => stack,
    };

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}

/// The layer for the active slide. Mid-transition this is the entering slide;
/// otherwise it is centered, shifted only by an in-flight drag or its
/// snap-back spring.
fn current_layer(app: &App) -> Option<SlideLayer> {
    match &app.transition {
        Some(t) => layer(
            app,
            t.to(),
            t.entering_offset(),
            t.entering_opacity(),
            t.entering_scale(),
        ),
        None => {
            let offset = if app.drag.is_dragging() {
                app.drag.offset_x()
            } else {
                app.drag_offset.value()
            };
            layer(app, app.navigator.current_index(), offset, 1.0, 1.0)
        }
    }
}

/// The outgoing layer, present only mid-transition.
fn outgoing_layer(app: &App) -> Option<SlideLayer> {
    let t = app.transition.as_ref()?;
    layer(
        app,
        t.from(),
        t.exiting_offset(),
        t.exiting_opacity(),
        t.exiting_scale(),
    )
}

/// Builds a drawable layer for a slide index, or `None` while its image is
/// still decoding (the backdrop shows through until the prefetch lands).
fn layer(app: &App, index: usize, offset_x: f32, opacity: f32, scale: f32) -> Option<SlideLayer> {
    let slide = app.deck.get(index)?;
    let image = app.cache.peek(slide.asset)?;
    Some(SlideLayer {
        handle: image.handle.clone(),
        width: image.width,
        height: image.height,
        offset_x,
        opacity,
        scale,
    })
}

/// App title on the left, the clickable pixel star on the right.
fn header(app: &App) -> Element<'_, Message> {
    let progress = app
        .last_tick
        .map_or(0.0, |now| app.reveal.animation_progress(now));
    let star = mouse_area(PixelStar::new(progress).into_element()).on_press(Message::StarClicked);

    let bar = Row::new()
        .push(
            text("ICED GALLERY")
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(Space::new().width(Length::Fill))
        .push(star)
        .align_y(Alignment::Center)
        .width(Length::Fill);

    container(bar)
        .width(Length::Fill)
        .padding(spacing::LG)
        .into()
}

/// Previous/next arrow buttons, vertically centered at the window edges.
fn arrows<'a>() -> Element<'a, Message> {
    let arrow = |label: &'a str, direction: Direction| {
        button(
            text(label)
                .size(sizing::ICON_MD)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Alignment::Center)
                .align_y(Alignment::Center),
        )
        .width(sizing::ARROW_BUTTON)
        .height(sizing::ARROW_BUTTON)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Paginate(direction))
    };

    let row = Row::new()
        .push(arrow("‹", Direction::Previous))
        .push(Space::new().width(Length::Fill))
        .push(arrow("›", Direction::Next))
        .align_y(Alignment::Center)
        .width(Length::Fill);

    container(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Alignment::Center)
        .padding(spacing::LG)
        .into()
}

/// Caption badge, slide counter, thumbnail rail, and the hint footer.
fn bottom_chrome(app: &App) -> Element<'_, Message> {
    let caption = app
        .deck
        .get(app.navigator.current_index())
        .map(|slide| slide.caption)
        .unwrap_or_default();

    let badge = |content: String| {
        container(text(content).size(typography::CAPTION).color(palette::WHITE))
            .style(styles::container::badge)
            .padding([spacing::XXS, spacing::SM])
    };

    let left = Column::new()
        .push(badge(caption.to_string()))
        .push(badge(app.navigator.position_label()))
        .spacing(spacing::XS)
        .align_x(Alignment::Start);

    let center = Column::new()
        .push(thumbnail_rail(app))
        .push(
            text("drag, swipe, or use arrow keys")
                .size(typography::CAPTION)
                .color(Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::WHITE
                }),
        )
        .spacing(spacing::XS)
        .align_x(Alignment::Center);

    let row = Row::new()
        .push(left)
        .push(Space::new().width(Length::Fill))
        .push(center)
        .push(Space::new().width(Length::Fill))
        .align_y(Alignment::End)
        .width(Length::Fill);

    container(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Alignment::End)
        .padding(spacing::LG)
        .into()
}

/// One clickable thumbnail per slide; the active one is fully opaque, the
/// rest dimmed. Falls back to the slide number while its image decodes.
fn thumbnail_rail(app: &App) -> Element<'_, Message> {
    let mut rail = Row::new().spacing(spacing::XS);
    for (index, slide) in app.deck.iter().enumerate() {
        let active = index == app.navigator.current_index();
        let alpha = if active {
            opacity::OPAQUE
        } else {
            opacity::THUMBNAIL_INACTIVE
        };

        let content: Element<'_, Message> = match app.cache.peek(slide.asset) {
            Some(decoded) => image(decoded.handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .content_fit(ContentFit::Cover)
                .opacity(alpha)
                .into(),
            None => text(format!("{:02}", slide.id))
                .size(typography::CAPTION)
                .width(Length::Fill)
                .align_x(Alignment::Center)
                .into(),
        };

        rail = rail.push(
            button(content)
                .width(sizing::THUMBNAIL_WIDTH)
                .padding(spacing::XXS)
                .style(styles::button::thumbnail(active))
                .on_press(Message::SelectSlide(index)),
        );
    }
    rail.into()
}

/// The social links panel; absent until the reveal sequence finishes. Each
/// row fades in with the sequencer's stagger.
fn links_panel(app: &App) -> Option<Element<'_, Message>> {
    if !app.reveal.is_revealed() {
        return None;
    }

    let mut rows = Column::new().spacing(spacing::SM);
    for (index, (label, target)) in SOCIAL_LINKS.iter().enumerate() {
        let alpha = app
            .last_tick
            .map_or(1.0, |now| app.reveal.link_opacity(index, now));
        rows = rows.push(
            Column::new()
                .push(
                    text(*label)
                        .size(typography::BODY)
                        .color(Color { a: alpha, ..palette::WHITE }),
                )
                .push(text(*target).size(typography::CAPTION).color(Color {
                    a: alpha * opacity::OVERLAY_STRONG,
                    ..palette::WHITE
                }))
                .spacing(spacing::XXS),
        );
    }

    let panel = container(rows)
        .style(styles::container::panel)
        .padding(spacing::MD);

    Some(
        container(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::End)
            .align_y(Alignment::Center)
            .padding(spacing::LG)
            .into(),
    )
}
