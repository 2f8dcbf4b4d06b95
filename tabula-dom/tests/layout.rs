use tabula_dom::{layout, Align, Border, Edges, Element, Justify, Rect, Size, Style};

// ============================================================================
// Row / column placement
// ============================================================================

#[test]
fn test_row_places_fixed_children_with_gap() {
    let root = Element::row()
        .id("root")
        .gap(1)
        .child(Element::text("a").id("a").width(Size::Fixed(4)))
        .child(Element::text("b").id("b").width(Size::Fixed(6)));

    let result = layout(&root, Rect::from_size(40, 10));

    assert_eq!(result["a"], Rect::new(0, 0, 4, 1));
    assert_eq!(result["b"], Rect::new(5, 0, 6, 1));
    assert_eq!(result["root"].width, 11);
}

#[test]
fn test_column_stacks_auto_children() {
    let root = Element::col()
        .id("root")
        .child(Element::text("first").id("one"))
        .child(Element::text("second line").id("two"));

    let result = layout(&root, Rect::from_size(40, 10));

    assert_eq!(result["one"], Rect::new(0, 0, 5, 1));
    assert_eq!(result["two"], Rect::new(0, 1, 11, 1));
}

#[test]
fn test_fill_children_share_remaining_space() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .child(Element::text("x").id("fixed").width(Size::Fixed(10)))
        .child(Element::box_().id("f1").width(Size::Fill))
        .child(Element::box_().id("f2").width(Size::Fill));

    let result = layout(&root, Rect::from_size(30, 5));

    assert_eq!(result["f1"].x, 10);
    assert_eq!(result["f1"].width, 10);
    assert_eq!(result["f2"].x, 20);
    assert_eq!(result["f2"].width, 10);
}

#[test]
fn test_space_between_pushes_last_child_to_end() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .justify(Justify::SpaceBetween)
        .child(Element::text("left").id("l"))
        .child(Element::text("right").id("r"));

    let result = layout(&root, Rect::from_size(40, 5));

    assert_eq!(result["l"].x, 0);
    assert_eq!(result["r"].x, 15);
}

#[test]
fn test_center_alignment_on_cross_axis() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .align(Align::Center)
        .child(Element::text("abcd").id("t"));

    let result = layout(&root, Rect::from_size(40, 5));

    assert_eq!(result["t"].x, 8);
}

// ============================================================================
// Box model
// ============================================================================

#[test]
fn test_padding_and_border_offset_children() {
    let root = Element::col()
        .id("root")
        .padding(Edges::horizontal(2))
        .style(Style::new().border(Border::Rounded))
        .child(Element::text("hi").id("t"));

    let result = layout(&root, Rect::from_size(40, 10));

    assert_eq!(result["t"], Rect::new(3, 1, 2, 1));
    // 2 text + 2*2 padding + 2 border
    assert_eq!(result["root"], Rect::new(0, 0, 8, 3));
}

#[test]
fn test_children_are_clamped_to_parent() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(5))
        .child(Element::text("abcdefghij").id("t"));

    let result = layout(&root, Rect::from_size(40, 5));

    assert_eq!(result["t"].width, 5);
}

// ============================================================================
// Coordinate limits
// ============================================================================

#[test]
fn test_more_rows_than_coordinates_saturate() {
    let root = Element::col()
        .id("root")
        .padding(Edges::all(1))
        .children((0..70_000).map(|i| Element::text(i.to_string()).id(format!("r{i}"))));

    let area = Rect::from_size(60, 10);
    let result = layout(&root, area);

    // Widest label "69999" plus padding.
    assert_eq!(result["root"], Rect::new(0, 0, 7, 10));
    assert_eq!(result["r0"], Rect::new(1, 1, 1, 1));
    assert_eq!(result["r7"], Rect::new(1, 8, 1, 1));
    assert_eq!(result["r8"].height, 0);
    assert_eq!(result["r69999"].height, 0);
    for rect in result.values().filter(|r| !r.is_empty()) {
        assert!(rect.bottom() <= area.bottom() && rect.right() <= area.right());
    }
}

#[test]
fn test_huge_gap_saturates() {
    let root = Element::row()
        .id("root")
        .gap(u16::MAX)
        .child(Element::text("a").id("a"))
        .child(Element::text("b").id("b"))
        .child(Element::text("c").id("c"));

    let result = layout(&root, Rect::from_size(20, 1));

    assert_eq!(result["root"].width, 20);
    assert_eq!(result["a"], Rect::new(0, 0, 1, 1));
    assert_eq!(result["c"].width, 0);
}
