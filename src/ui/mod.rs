use gpui::*;
use termfolio::TerminalSession;

pub mod views {
    pub mod terminal_view;
    pub mod top_bar;
}

pub mod icons;
pub mod text_edit;

pub struct Workspace {
    top_bar: Entity<views::top_bar::TopBar>,
    terminal: Entity<views::terminal_view::TerminalView>,
}

impl Workspace {
    pub fn new(session: TerminalSession, cx: &mut Context<Self>) -> Self {
        let profile = &session.registry().profile;
        let title = format!("{} · terminal resume", profile.name);
        let subtitle = profile.role.clone();
        let top_bar = cx.new(|_| views::top_bar::TopBar::new(title, subtitle));
        let terminal = cx.new(|cx| views::terminal_view::TerminalView::new(session, cx));
        Self { top_bar, terminal }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(rgb(0x0a0a0a))
            .child(self.top_bar.clone())
            .child(div().flex_1().min_h(px(0.0)).child(self.terminal.clone()))
    }
}
