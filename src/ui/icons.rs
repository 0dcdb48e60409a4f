use gpui::*;
use lucide_icons::Icon;
use termfolio::terminal::LineStyle;

pub fn lucide_icon(icon: Icon, size: f32, color: u32) -> Div {
    div()
        .font_family("lucide")
        .text_size(px(size))
        .text_color(rgb(color))
        .child(char::from(icon).to_string())
}

pub fn line_color(style: LineStyle) -> u32 {
    match style {
        LineStyle::Plain => 0xcccccc,
        LineStyle::Heading => 0xffe29a,
        LineStyle::Accent => 0x6b9eff,
        LineStyle::Success => 0x8bd06f,
        LineStyle::Muted => 0x7a7a7a,
        LineStyle::Error => 0xff7b72,
    }
}
