// SPDX-License-Identifier: MPL-2.0
//! Page layout: header, toolbar, stage, contact form.

use super::Message;
use crate::composition::{background_bounds, OverlayChoice};
use crate::i18n::fluent::I18n;
use crate::preview::{Field, PreviewState};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{stage, styles};
use iced::widget::{
    button, center_x, column, container, image, row, scrollable, text, text_input, Column, Text,
};
use iced::{Alignment, Element, Length};

/// Context required to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a PreviewState,
    pub frame: &'a image::Handle,
    pub stage_size: (u32, u32),
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = text(ctx.i18n.tr("header-title")).size(typography::TITLE_LG);

    let page = column![
        header,
        view_toolbar(ctx.i18n, ctx.state),
        view_stage(&ctx),
        view_form(ctx.i18n, ctx.state),
    ]
    .spacing(spacing::LG)
    .padding(spacing::LG)
    .align_x(Alignment::Center);

    scrollable(center_x(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_toolbar<'a>(i18n: &I18n, state: &PreviewState) -> Element<'a, Message> {
    let upload = button(text(i18n.tr("toolbar-upload")))
        .on_press(Message::OpenFileDialog)
        .height(sizing::BUTTON_HEIGHT)
        .style(styles::button::primary);

    let overlay_buttons = OverlayChoice::ALL.into_iter().map(|choice| {
        Element::from(
            button(text(i18n.tr(choice.i18n_key())))
                .on_press(Message::SelectOverlay(choice))
                .height(sizing::BUTTON_HEIGHT)
                .style(styles::button::toggle(state.overlay == choice)),
        )
    });

    let download = button(text(i18n.tr("toolbar-download")))
        .on_press(Message::Download)
        .height(sizing::BUTTON_HEIGHT)
        .style(styles::button::primary);

    row![upload, row(overlay_buttons).spacing(spacing::XXS), download]
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .into()
}

fn view_stage<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let stage = stage::view(stage::ViewContext {
        frame: ctx.frame,
        size: ctx.stage_size,
        background_bounds: ctx
            .state
            .background
            .as_ref()
            .map(|background| background_bounds(background, ctx.state.position)),
        dragging: ctx.state.is_dragging(),
    })
    .map(Message::Stage);

    if ctx.state.background.is_some() {
        stage
    } else {
        column![
            text(ctx.i18n.tr("stage-empty-hint")).size(typography::CAPTION),
            stage
        ]
        .spacing(spacing::XS)
        .align_x(Alignment::Center)
        .into()
    }
}

fn view_form<'a>(i18n: &I18n, state: &'a PreviewState) -> Element<'a, Message> {
    let input = |field: Field, placeholder_key: &str| {
        text_input(&i18n.tr(placeholder_key), state.form.get(field))
            .on_input(move |value| Message::FieldChanged(field, value))
            .padding(sizing::INPUT_PADDING)
            .size(typography::BODY)
    };

    let submit = button(text(i18n.tr("form-submit")))
        .on_press_maybe(state.can_submit().then_some(Message::Submit))
        .height(sizing::BUTTON_HEIGHT)
        .style(styles::button::primary);

    let mut form = Column::new()
        .push(text(i18n.tr("form-title")).size(typography::TITLE_SM))
        .push(input(Field::Name, "form-name-placeholder"))
        .push(input(Field::Email, "form-email-placeholder"))
        .push(input(Field::Phone, "form-phone-placeholder"))
        .push(submit)
        .spacing(spacing::SM);

    if let Some(line) = success_line(i18n, state) {
        form = form.push(line);
    }

    container(form)
        .width(sizing::FORM_WIDTH)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

/// The single confirmation line under the form, once any submission has
/// succeeded.
fn success_line<'a>(i18n: &I18n, state: &PreviewState) -> Option<Text<'a>> {
    state.success_message_visible().then(|| {
        text(i18n.tr("submit-success"))
            .size(typography::BODY)
            .color(palette::SUCCESS_500)
    })
}
