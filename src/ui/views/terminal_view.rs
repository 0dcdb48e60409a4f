use gpui::*;
use lucide_icons::Icon;
use std::time::{Duration, Instant};
use termfolio::core::CommandHistoryEntry;
use termfolio::scheduler::ScheduledTask;
use termfolio::terminal::{OutputLine, TerminalBuffer};
use termfolio::{SubmitOutcome, TerminalSession};

use crate::ui::icons::{line_color, lucide_icon};
use crate::ui::text_edit::TextEditState;

const MATRIX_GLYPHS: &[char] = &[
    'ア', 'カ', 'サ', 'タ', 'ナ', 'ハ', 'マ', 'ヤ', 'ラ', 'ワ', '0', '1', '2', '3', '4', '5', '7',
    '9', 'Z', ':', '=', '*', '+', '<', '>',
];

pub struct TerminalView {
    session: TerminalSession,
    focus_handle: FocusHandle,
    cursor: usize,
    scroll_handle: ScrollHandle,
    auto_focus: bool,
    last_tick: Instant,
    timer_generation: u64,
}

impl TerminalView {
    pub fn new(mut session: TerminalSession, cx: &mut Context<Self>) -> Self {
        session.start();
        let mut view = Self {
            session,
            focus_handle: cx.focus_handle(),
            cursor: 0,
            scroll_handle: ScrollHandle::new(),
            auto_focus: true,
            last_tick: Instant::now(),
            timer_generation: 0,
        };
        view.arm_timer(cx);
        view
    }

    /// Real time since the clock was last caught up.
    fn take_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }

    /// Catches the session clock up with real time and applies whatever fell due.
    fn tick(&mut self, cx: &mut Context<Self>) {
        let elapsed = self.take_elapsed();
        let fired = self.session.advance(elapsed);
        if fired
            .iter()
            .any(|task| matches!(task, ScheduledTask::AutoSubmit(_)))
        {
            self.scroll_handle.scroll_to_bottom();
        }
        self.settle(cx);
    }

    /// Quits if the session asked to, otherwise re-arms the timer for
    /// whatever is due next.
    fn settle(&mut self, cx: &mut Context<Self>) {
        if self.session.exit_requested() {
            tracing::info!("exit requested, closing window");
            cx.quit();
            return;
        }
        self.arm_timer(cx);
        cx.notify();
    }

    fn arm_timer(&mut self, cx: &mut Context<Self>) {
        let Some(delay) = self.session.until_next_task() else {
            return;
        };
        self.timer_generation += 1;
        let generation = self.timer_generation;
        cx.spawn(move |view: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut cx = cx.clone();
            async move {
                cx.background_executor()
                    .timer(delay + Duration::from_millis(1))
                    .await;
                let _ = view.update(&mut cx, |view, cx| {
                    // A newer timer superseded this one.
                    if view.timer_generation == generation {
                        view.tick(cx);
                    }
                });
            }
        })
        .detach();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let ctrl = event.keystroke.modifiers.control;
        let shift = event.keystroke.modifiers.shift;
        let key = event.keystroke.key.as_str();

        if ctrl && key.eq_ignore_ascii_case("l") {
            self.session.clear_screen();
            cx.notify();
            cx.stop_propagation();
            return;
        }
        if ctrl && shift && key.eq_ignore_ascii_case("c") {
            self.copy_transcript(cx);
            cx.stop_propagation();
            return;
        }
        if ctrl && key.eq_ignore_ascii_case("c") {
            self.session.input_mut().clear();
            self.cursor = 0;
            cx.notify();
            cx.stop_propagation();
            return;
        }

        match key {
            "enter" | "return" | "numpadenter" => {
                self.commit_input(cx);
                cx.stop_propagation();
            }
            "backspace" => {
                TextEditState::pop_char_before_cursor(self.session.input_mut(), &mut self.cursor);
                cx.notify();
                cx.stop_propagation();
            }
            "space" => {
                self.insert_text(" ");
                cx.notify();
                cx.stop_propagation();
            }
            "tab" => {
                self.session.tab_complete();
                self.cursor_to_end();
                cx.notify();
                cx.stop_propagation();
            }
            "left" | "arrowleft" => {
                TextEditState::move_left(&mut self.cursor);
                cx.notify();
                cx.stop_propagation();
            }
            "right" | "arrowright" => {
                TextEditState::move_right(&self.session.state().input, &mut self.cursor);
                cx.notify();
                cx.stop_propagation();
            }
            "home" => {
                self.cursor = 0;
                cx.notify();
                cx.stop_propagation();
            }
            "end" => {
                self.cursor_to_end();
                cx.notify();
                cx.stop_propagation();
            }
            "up" | "arrowup" => {
                self.session.history_previous();
                self.cursor_to_end();
                cx.notify();
            }
            "down" | "arrowdown" => {
                self.session.history_next();
                self.cursor_to_end();
                cx.notify();
            }
            _ => {
                if let Some(text) = event.keystroke.key_char.as_deref() {
                    if !text.is_empty() && !ctrl {
                        self.insert_text(text);
                        cx.notify();
                        cx.stop_propagation();
                    }
                } else if key.len() == 1 && !ctrl {
                    let key = key.to_string();
                    self.insert_text(&key);
                    cx.notify();
                    cx.stop_propagation();
                }
            }
        }
    }

    fn on_focus_input(
        &mut self,
        _event: &MouseDownEvent,
        window: &mut Window,
        _cx: &mut Context<Self>,
    ) {
        window.focus(&self.focus_handle);
    }

    fn on_copy_clicked(
        &mut self,
        _event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.copy_transcript(cx);
    }

    fn insert_text(&mut self, text: &str) {
        TextEditState::insert_text(self.session.input_mut(), &mut self.cursor, text);
    }

    fn cursor_to_end(&mut self) {
        TextEditState::move_to_end(&self.session.state().input, &mut self.cursor);
    }

    fn commit_input(&mut self, cx: &mut Context<Self>) {
        self.cursor = 0;
        let idle = self.take_elapsed();
        if self.session.submit_input_after(idle) != SubmitOutcome::Ignored {
            self.scroll_handle.scroll_to_bottom();
        }
        self.settle(cx);
    }

    fn copy_transcript(&self, cx: &mut Context<Self>) {
        let config = self.session.config();
        let mut buffer = TerminalBuffer::new(config.max_scrollback);
        buffer.rebuild(&config.prompt(), self.session.scrollback());
        cx.write_to_clipboard(ClipboardItem::new_string(buffer.to_text()));
    }

    fn render_output_line(&self, line: &OutputLine) -> Div {
        let row = div()
            .min_h(px(16.0))
            .text_color(rgb(line_color(line.style)))
            .child(line.text.clone());
        match line.link.clone() {
            Some(url) => row.on_mouse_down(gpui::MouseButton::Left, move |_, _, _| {
                if let Err(err) = webbrowser::open(&url) {
                    tracing::warn!("failed to open {url}: {err}");
                }
            }),
            None => row,
        }
    }

    fn render_block(&self, entry: &CommandHistoryEntry, index: usize, active_index: usize) -> Div {
        let is_active = index == active_index;
        let has_error = entry.output.is_error();
        let block_bg = if has_error {
            rgb(0x2a1515)
        } else if is_active {
            rgb(0x0e2a33)
        } else {
            rgb(0x0a0a0a)
        };
        let divider_color = if index > 0 {
            rgb(0x1a1a1a)
        } else {
            rgb(0x0a0a0a)
        };
        let accent_color = if is_active {
            rgb(0x2b7a8f)
        } else {
            rgb(0x0a0a0a)
        };

        let context_line = div()
            .text_size(px(11.0))
            .text_color(rgb(0x7a7a7a))
            .child(format!(
                "{}:{}  {}",
                self.session.config().prompt(),
                entry.directory,
                entry.timestamp.with_timezone(&chrono::Local).format("%H:%M:%S")
            ));

        let header = div()
            .text_size(px(13.0))
            .text_color(if has_error {
                rgb(0xffa3a3)
            } else {
                rgb(0xffe29a)
            })
            .font_weight(FontWeight::BOLD)
            .child(entry.command.clone());

        let output = div()
            .flex_col()
            .gap(px(2.0))
            .text_size(px(12.0))
            .children(
                entry
                    .output
                    .lines
                    .iter()
                    .map(|line| self.render_output_line(line)),
            );

        div()
            .flex()
            .gap(px(12.0))
            .px(px(12.0))
            .py(px(10.0))
            .border_t_1()
            .border_color(divider_color)
            .bg(block_bg)
            .child(div().w(px(3.0)).bg(accent_color))
            .child(
                div()
                    .flex_1()
                    .flex_col()
                    .gap(px(6.0))
                    .child(context_line)
                    .child(header)
                    .child(output),
            )
    }

    fn render_suggestions(&self) -> Div {
        let suggestions = &self.session.state().suggestions;
        if suggestions.is_empty() {
            return div();
        }
        div()
            .flex()
            .flex_wrap()
            .gap(px(6.0))
            .px(px(16.0))
            .pb(px(6.0))
            .children(suggestions.iter().map(|name| {
                div()
                    .px(px(8.0))
                    .py(px(2.0))
                    .rounded(px(4.0))
                    .bg(rgb(0x141414))
                    .border_1()
                    .border_color(rgb(0x2a2a2a))
                    .text_size(px(12.0))
                    .text_color(rgb(0xcfcfcf))
                    .child(name.to_string())
            }))
    }

    fn render_input_bar(&self, window: &Window, cx: &Context<Self>) -> Div {
        let is_focused = self.focus_handle.is_focused(window);
        div()
            .flex()
            .flex_col()
            .gap(px(8.0))
            .px(px(16.0))
            .py(px(10.0))
            .h(px(84.0))
            .bg(rgb(0x1a1a1a))
            .border_t_1()
            .border_color(rgb(0x2a2a2a))
            .on_mouse_down(gpui::MouseButton::Left, cx.listener(Self::on_focus_input))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(8.0))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap(px(8.0))
                            .px(px(10.0))
                            .py(px(6.0))
                            .rounded(px(6.0))
                            .bg(rgb(0x141414))
                            .border_1()
                            .border_color(rgb(0x2a2a2a))
                            .child(lucide_icon(Icon::Folder, 12.0, 0x6b9eff))
                            .child(
                                div()
                                    .text_size(px(12.0))
                                    .text_color(rgb(0xcfcfcf))
                                    .child(self.session.state().current_directory.clone()),
                            ),
                    )
                    .child(
                        div()
                            .text_size(px(11.0))
                            .text_color(rgb(0x7a7a7a))
                            .child(format!("{} entries", self.session.state().history.len())),
                    ),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .gap(px(8.0))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap(px(8.0))
                            .flex_1()
                            .child(lucide_icon(Icon::ChevronRight, 16.0, 0x6b9eff))
                            .child(self.render_input_text(is_focused)),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .justify_center()
                            .w(px(24.0))
                            .h(px(24.0))
                            .rounded(px(6.0))
                            .bg(rgb(0x141414))
                            .border_1()
                            .border_color(rgb(0x2a2a2a))
                            .on_mouse_down(
                                gpui::MouseButton::Left,
                                cx.listener(Self::on_copy_clicked),
                            )
                            .child(lucide_icon(Icon::Clipboard, 12.0, 0x8a8a8a)),
                    ),
            )
    }

    fn render_input_text(&self, is_focused: bool) -> Div {
        let input = &self.session.state().input;
        let caret = div()
            .w(px(2.0))
            .h(px(16.0))
            .rounded(px(1.0))
            .bg(if is_focused {
                rgb(0x6b9eff)
            } else {
                rgb(0x2a2a2a)
            });

        let text_normal = |text: String| {
            div()
                .text_size(px(15.0))
                .text_color(rgb(0xdddddd))
                .font_family("Cascadia Code")
                .child(text)
        };

        if input.is_empty() {
            return div().flex().child(caret).child(
                div()
                    .text_size(px(15.0))
                    .text_color(rgb(0x666666))
                    .child("Type 'help' and press Enter..."),
            );
        }

        let (left, right) = TextEditState::split_at_cursor(input, self.cursor);
        div()
            .flex()
            .child(text_normal(left))
            .child(caret)
            .child(text_normal(right))
    }

    fn render_matrix(&self) -> Div {
        if !self.session.state().matrix_active {
            return div();
        }
        let mut seed = self.session.state().history.len() as u64 * 7919 + 17;
        let lines = (0..32).map(|_| {
            let line: String = (0..96)
                .map(|_| {
                    seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    MATRIX_GLYPHS[(seed >> 33) as usize % MATRIX_GLYPHS.len()]
                })
                .collect();
            div().child(line)
        });
        div()
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(rgba(0x000000e6))
            .font_family("Cascadia Code")
            .text_size(px(13.0))
            .text_color(rgb(0x00ff41))
            .flex_col()
            .children(lines)
    }
}

impl Render for TerminalView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.auto_focus {
            window.focus(&self.focus_handle);
            self.auto_focus = false;
        }

        let scrollback = self.session.scrollback();
        let active_index = scrollback.len().saturating_sub(1);
        let blocks: Vec<Div> = scrollback
            .iter()
            .enumerate()
            .map(|(i, entry)| self.render_block(entry, i, active_index))
            .collect();

        div()
            .id("terminal_root")
            .track_focus(&self.focus_handle)
            .focusable()
            .on_key_down(cx.listener(Self::on_key_down))
            .on_mouse_down(gpui::MouseButton::Left, cx.listener(Self::on_focus_input))
            .relative()
            .flex()
            .flex_col()
            .size_full()
            .min_h(px(0.0))
            .bg(rgb(0x0a0a0a))
            .child(
                div()
                    .flex_1()
                    .min_h(px(0.0))
                    .p(px(16.0))
                    .id("terminal_output")
                    .track_scroll(&self.scroll_handle)
                    .overflow_scroll()
                    .font_family("Cascadia Code")
                    .text_size(px(13.0))
                    .text_color(rgb(0xcccccc))
                    .child(div().flex_col().min_h(px(0.0)).children(blocks)),
            )
            .child(
                div()
                    .flex_none()
                    .child(self.render_suggestions())
                    .child(
                        div()
                            .px(px(16.0))
                            .pb(px(12.0))
                            .child(self.render_input_bar(window, cx)),
                    ),
            )
            .child(self.render_matrix())
    }
}

impl Focusable for TerminalView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
