/// Editing tests: the form tree and everything derived from it

pub mod drag_drop;
pub mod pricing;
pub mod tree_properties;

use calc_builder::model::Element;

/// A calculator tree in the JSON shape the builder stores
pub fn sample_tree() -> Vec<Element> {
    serde_json::from_str(SAMPLE_TREE).expect("sample tree is valid")
}

pub const SAMPLE_TREE: &str = r#"[
  {"id": 1, "type": "text", "label": "Company", "value": "Acme"},
  {"id": 2, "type": "number", "label": "Pages", "value": 5, "cost": 150},
  {"id": 3, "type": "pagebreak", "label": "Page breaker"},
  {"id": 4, "type": "group", "label": "Extras", "children": [
    {"id": 5, "type": "number", "label": "Hours", "value": "2", "cost": 5},
    {"id": 6, "type": "select", "label": "Hosting", "value": "vps",
     "options": [{"label": "Shared", "value": "shared", "cost": 10},
                 {"label": "VPS", "value": "vps", "cost": 40, "imageUrl": null}]},
    {"id": 7, "type": "group", "label": "Nested", "children": [
      {"id": 8, "type": "radio", "label": "Support", "value": "",
       "options": [{"label": "Basic", "value": "basic", "cost": 0}]}
    ]}
  ]},
  {"id": 9, "type": "slider", "label": "Priority", "value": "", "cost": 3, "min": 1, "max": 10, "step": 1},
  {"id": 10, "type": "pagebreak", "label": "Page breaker"}
]"#;
