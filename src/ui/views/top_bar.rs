use gpui::*;
use lucide_icons::Icon;

use crate::ui::icons::lucide_icon;

pub struct TopBar {
    title: SharedString,
    subtitle: SharedString,
}

impl TopBar {
    pub fn new(title: String, subtitle: String) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    fn on_close(&mut self, _event: &MouseDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        cx.quit();
    }
}

impl Render for TopBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .justify_between()
            .h(px(36.0))
            .bg(rgb(0x0a0a0a))
            .border_b_1()
            .border_color(rgb(0x2a2a2a))
            .px(px(12.0))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(10.0))
                    .child(lucide_icon(Icon::ChevronRight, 14.0, 0x6b9eff))
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(rgb(0xcccccc))
                            .child(self.title.clone()),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(rgb(0x7a7a7a))
                            .child(self.subtitle.clone()),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_center()
                    .w(px(28.0))
                    .h(px(28.0))
                    .rounded(px(14.0))
                    .bg(rgb(0x1a1a1a))
                    .border_1()
                    .border_color(rgb(0x2a2a2a))
                    .on_mouse_down(gpui::MouseButton::Left, cx.listener(Self::on_close))
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(rgb(0x888888))
                            .child("×"),
                    ),
            )
    }
}
