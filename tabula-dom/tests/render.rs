use tabula_dom::render::render_to_buffer;
use tabula_dom::{
    layout, Border, Buffer, Color, Edges, Element, Rect, Rgb, Size, Style, TextAlign,
};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let result = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buf);
    buf
}

#[test]
fn test_text_is_written_at_layout_position() {
    let root = Element::col()
        .child(Element::text("Alice"))
        .child(Element::text("Bob"));

    let buf = render(&root, 20, 4);

    assert_eq!(buf.line(0), "Alice");
    assert_eq!(buf.line(1), "Bob");
    assert_eq!(buf.line(2), "");
}

#[test]
fn test_long_text_is_truncated_with_ellipsis() {
    let root = Element::text("abcdefghij").width(Size::Fixed(5));

    let buf = render(&root, 20, 1);

    assert_eq!(buf.line(0), "abcd…");
}

#[test]
fn test_centered_text() {
    let root = Element::text("ab")
        .width(Size::Fixed(6))
        .text_align(TextAlign::Center);

    let buf = render(&root, 10, 1);

    assert_eq!(buf.line(0), "  ab");
}

#[test]
fn test_right_aligned_text() {
    let root = Element::text("42")
        .width(Size::Fixed(5))
        .text_align(TextAlign::Right);

    let buf = render(&root, 10, 1);

    assert_eq!(buf.line(0), "   42");
}

#[test]
fn test_rounded_border_is_drawn_around_content() {
    let root = Element::col()
        .style(Style::new().border(Border::Rounded))
        .child(Element::text("ok"));

    let buf = render(&root, 10, 3);

    assert_eq!(buf.line(0), "╭──╮");
    assert_eq!(buf.line(1), "│ok│");
    assert_eq!(buf.line(2), "╰──╯");
}

#[test]
fn test_background_fills_rect_and_survives_text() {
    let root = Element::row()
        .width(Size::Fixed(6))
        .style(Style::new().background(Color::rgb(10, 20, 30)))
        .child(Element::text("x"));

    let buf = render(&root, 10, 1);

    let bg = Rgb::new(10, 20, 30);
    assert_eq!(buf.get(0, 0).unwrap().bg, bg);
    assert_eq!(buf.get(0, 0).unwrap().glyph, 'x');
    assert_eq!(buf.get(5, 0).unwrap().bg, bg);
    assert_ne!(buf.get(6, 0).unwrap().bg, bg);
}

#[test]
fn test_foreground_and_text_style_are_inherited() {
    let root = Element::row()
        .style(Style::new().foreground(Color::rgb(1, 2, 3)).bold())
        .child(Element::text("x"));

    let buf = render(&root, 4, 1);

    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.fg, Rgb::new(1, 2, 3));
    assert!(cell.attrs.bold);
}

#[test]
fn test_wide_chars_mark_continuation_cells() {
    let root = Element::text("日本");

    let buf = render(&root, 6, 1);

    assert_eq!(buf.get(0, 0).unwrap().glyph, '日');
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.line(0), "日本");
}

#[test]
fn test_paints_only_the_rows_that_fit_a_very_long_column() {
    let root = Element::col()
        .padding(Edges::all(1))
        .style(Style::new().border(Border::Single))
        .children((0..70_000).map(|i| Element::text(format!("row {i}"))));

    let buf = render(&root, 20, 6);

    // Width comes from the widest label, "row 69999".
    assert_eq!(buf.line(2), "│ row 0     │");
    assert_eq!(buf.line(3), "│ row 1     │");
    assert!(buf.line(5).starts_with('└'));
}
