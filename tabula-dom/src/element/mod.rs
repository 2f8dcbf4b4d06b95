mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every text leaf in tree order.
pub fn collect_text(root: &Element) -> Vec<&str> {
    let mut out = Vec::new();
    collect_text_into(root, &mut out);
    out
}

fn collect_text_into<'a>(element: &'a Element, out: &mut Vec<&'a str>) {
    match &element.content {
        Content::Text(text) => out.push(text),
        Content::Children(children) => {
            for child in children {
                collect_text_into(child, out);
            }
        }
        Content::None => {}
    }
}

/// Whether any text leaf in the tree equals `needle`.
pub fn contains_text(root: &Element, needle: &str) -> bool {
    collect_text(root).iter().any(|t| *t == needle)
}
