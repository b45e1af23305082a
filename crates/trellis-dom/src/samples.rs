//! Built-in preview content.
//!
//! The design canvas previews one of a handful of sample files. Each sample is
//! a small content tree rooted at the canvas's `w-full h-full` wrapper, the
//! element the layer panel inspects.

use crate::{DomTree, NodeId, NodeType};

/// File names that have built-in preview content, in explorer order.
pub const SAMPLE_FILES: &[&str] = &["app.swift", "navbar.swift", "modal.swift", "inputField.swift"];

/// Build the preview content for `file`.
///
/// Returns the tree and the wrapper element to inspect, or `None` if the file
/// has no preview.
#[must_use]
pub fn sample_document(file: &str) -> Option<(DomTree, NodeId)> {
    let mut tree = DomTree::new();
    let root = tree.create_element("div", Some("w-full h-full"));
    tree.append_child(NodeId::ROOT, root);

    match file {
        "app.swift" => {
            let page = child(&mut tree, root, "div", "w-full h-full bg-[#f0e6dc] flex flex-col");
            let header = child(&mut tree, page, "div", "p-4 text-center");
            let title = child(
                &mut tree,
                header,
                "h1",
                "text-xl font-semibold text-white bg-black bg-opacity-50 p-2 rounded",
            );
            text(&mut tree, title, "LET'S LEARN");
        }
        "navbar.swift" => {
            let bar = child(
                &mut tree,
                root,
                "div",
                "w-full bg-black bg-opacity-80 p-4 flex items-center justify-between",
            );
            let brand = child(&mut tree, bar, "h1", "text-lg font-semibold text-white");
            text(&mut tree, brand, "Codejc");
            let settings = child(&mut tree, bar, "button", "text-white");
            let icon = tree.create_element("svg", None);
            tree.append_child(settings, icon);
            for shape in ["circle", "path"] {
                let id = tree.create_element(shape, None);
                tree.append_child(icon, id);
            }
        }
        "modal.swift" => {
            let backdrop = child(
                &mut tree,
                root,
                "div",
                "w-full h-full flex items-center justify-center bg-black bg-opacity-50",
            );
            let dialog = child(
                &mut tree,
                backdrop,
                "div",
                "bg-white rounded-xl shadow-xl p-6 w-4/5 max-w-md",
            );
            let title = child(&mut tree, dialog, "h2", "text-xl font-bold text-center mb-4");
            text(&mut tree, title, "Modal Title");
            let body = child(&mut tree, dialog, "p", "text-gray-700 mb-6 text-center");
            text(&mut tree, body, "This is a modal view");
            let actions = child(&mut tree, dialog, "div", "flex justify-center");
            let close = child(
                &mut tree,
                actions,
                "button",
                "bg-blue-500 text-white px-4 py-2 rounded-lg",
            );
            text(
                &mut tree,
                close,
                "\n                          Close\n                        ",
            );
        }
        "inputField.swift" => {
            let center = child(
                &mut tree,
                root,
                "div",
                "w-full h-full flex items-center justify-center p-4",
            );
            let field = child(&mut tree, center, "div", "w-full");
            let input = child(
                &mut tree,
                field,
                "input",
                "w-full p-4 bg-gray-100 rounded-lg text-gray-800",
            );
            if let Some(NodeType::Element(data)) = tree.get_mut(input).map(|n| &mut n.node_type) {
                let _ = data.attrs.insert("type".to_string(), "text".to_string());
                let _ = data
                    .attrs
                    .insert("placeholder".to_string(), "Enter text here".to_string());
            }
        }
        _ => return None,
    }

    Some((tree, root))
}

fn child(tree: &mut DomTree, parent: NodeId, tag: &str, class: &str) -> NodeId {
    let id = tree.create_element(tag, Some(class));
    tree.append_child(parent, id);
    id
}

fn text(tree: &mut DomTree, parent: NodeId, data: &str) {
    let id = tree.create_text(data);
    tree.append_child(parent, id);
}
