//! Element palette, grouped the way the builder offers new fields

use super::element::ElementType;

#[derive(Debug, Clone, Copy)]
pub struct PaletteEntry {
    pub element_type: ElementType,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PaletteCategory {
    pub name: &'static str,
    pub entries: &'static [PaletteEntry],
}

const fn entry(element_type: ElementType, label: &'static str) -> PaletteEntry {
    PaletteEntry { element_type, label }
}

pub const PALETTE: &[PaletteCategory] = &[
    PaletteCategory {
        name: "TYPE",
        entries: &[
            entry(ElementType::Text, "Text field"),
            entry(ElementType::Number, "Quantity field"),
            entry(ElementType::ValidatedInput, "Validated form"),
        ],
    },
    PaletteCategory {
        name: "SELECTION",
        entries: &[
            entry(ElementType::Select, "Dropdown"),
            entry(ElementType::ImageSelect, "Image dropdown"),
            entry(ElementType::Radio, "Radio select"),
        ],
    },
    PaletteCategory {
        name: "DATE AND TIME",
        entries: &[
            entry(ElementType::Date, "Date picker"),
            entry(ElementType::Time, "Time picker"),
        ],
    },
    PaletteCategory {
        name: "SLIDER",
        entries: &[entry(ElementType::Slider, "Basic slider")],
    },
    PaletteCategory {
        name: "OTHER",
        entries: &[
            entry(ElementType::File, "File upload"),
            entry(ElementType::Html, "HTML"),
        ],
    },
    PaletteCategory {
        name: "GROUPING",
        entries: &[
            entry(ElementType::Group, "Group"),
            entry(ElementType::Divider, "Divider"),
            entry(ElementType::PageBreak, "Page breaker"),
            entry(ElementType::Section, "Section"),
        ],
    },
];

/// Default label given to a freshly dropped element
pub fn label_for(element_type: ElementType) -> &'static str {
    PALETTE
        .iter()
        .flat_map(|category| category.entries.iter())
        .find(|entry| entry.element_type == element_type)
        .map(|entry| entry.label)
        .unwrap_or("Field")
}
