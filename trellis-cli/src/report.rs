//! Terminal and JSON rendering of the inspector state.

use owo_colors::OwoColorize;
use serde_json::{Value, json};
use strum::IntoEnumIterator;
use trellis_inspector::{HighlightBox, Inspector, LayerRow, PropertyField};

/// Print the design view as text.
pub fn print(inspector: &Inspector, highlight: Option<HighlightBox>) {
    print_viewport(inspector);

    let rows = inspector.rows();
    println!("\n=== Layers ({}) ===", rows.len());
    for row in &rows {
        print_row(row);
    }

    println!("\n=== Selection ===");
    match (inspector.selected_layer(), highlight) {
        (Some(layer), Some(bounds)) => {
            println!("{} ({})", layer.tag.bold(), layer.id);
            println!(
                "top {}  left {}  {}",
                bounds.top,
                bounds.left,
                bounds.dimension_label().green()
            );
        }
        _ => println!("{}", "nothing selected".dimmed()),
    }

    println!("\n=== Properties ===");
    let properties = inspector.properties();
    for field in PropertyField::iter() {
        println!("{:<14} {}", field.as_ref(), properties.get(field));
    }
}

fn print_viewport(inspector: &Inspector) {
    let viewport = inspector.viewport();
    let size = viewport.canvas_size();
    let (display_width, display_height) = viewport.display_size();

    println!("=== Viewport ===");
    println!("device  {} ({} \u{00d7} {})", viewport.device(), size.width, size.height);
    println!(
        "zoom    {}% ({} \u{00d7} {} on screen)",
        viewport.zoom_percent(),
        display_width.round(),
        display_height.round()
    );
    println!("grid    {}", if inspector.show_grid() { "on" } else { "off" });
}

fn print_row(row: &LayerRow) {
    let disclosure = match (row.has_children, row.expanded) {
        (false, _) => ' ',
        (true, true) => '\u{25be}',
        (true, false) => '\u{25b8}',
    };
    let line = format!("{}{disclosure} {}", "  ".repeat(row.level), row.label);
    if row.selected {
        println!("{:<48} {}", line.cyan().bold(), row.layer_type.dimmed());
    } else {
        println!("{line:<48} {}", row.layer_type.dimmed());
    }
}

/// The design view as a JSON document.
pub fn json(inspector: &Inspector, highlight: Option<HighlightBox>) -> Value {
    let viewport = inspector.viewport();
    let (display_width, display_height) = viewport.display_size();

    json!({
        "content": inspector.content_key(),
        "viewport": {
            "device": viewport.device(),
            "zoom": viewport.zoom_percent(),
            "canvas": viewport.canvas_size(),
            "display": { "width": display_width, "height": display_height },
        },
        "showGrid": inspector.show_grid(),
        "layers": inspector.tree(),
        "rows": inspector.rows(),
        "selected": inspector.selected(),
        "highlight": highlight,
        "properties": inspector.properties(),
    })
}
