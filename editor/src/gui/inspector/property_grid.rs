// editor/src/gui/inspector/property_grid.rs
//! Headless model of the inspector: one row per property, with the data a
//! widget needs to draw it.
use glam::{Vec2, Vec3, Vec4};
use reflect_core::ecs::component::{ComponentRef, PropertyIndex};
use reflect_core::reflect::scalar::DecimalRange;
use reflect_core::reflect::string::ResourceType;
use reflect_core::reflect::{PropertyBody, PropertyDescriptor, PropertyKind};
use std::borrow::Cow;
use std::fmt::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRow {
    pub name: &'static str,
    pub label: String,
    pub kind: PropertyKind,
    pub widget: PropertyWidget,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyWidget {
    Int {
        value: i32,
        limits: Option<(i32, i32)>,
    },
    Checkbox(bool),
    Text(String),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Color(Vec3),
    Decimal {
        value: f32,
        range: DecimalRange,
    },
    Dropdown {
        selected: i32,
        options: Vec<String>,
    },
    FilePicker {
        path: String,
        filter: &'static str,
    },
    ResourcePicker {
        path: String,
        filter: &'static str,
        resource_type: ResourceType,
    },
    Curve {
        samples: Vec<f32>,
        min: f32,
        max: f32,
    },
    /// One list of child rows per item.
    List {
        items: Vec<Vec<PropertyRow>>,
    },
}

/// Builds the rows of a component, in descriptor order.
pub fn build_rows(properties: &[PropertyDescriptor], cmp: ComponentRef<'_>) -> Vec<PropertyRow> {
    properties
        .iter()
        .map(|property| build_row(property, cmp, PropertyIndex::Scalar))
        .collect()
}

pub fn build_row(property: &PropertyDescriptor, cmp: ComponentRef<'_>, index: PropertyIndex) -> PropertyRow {
    let widget = match property.body() {
        PropertyBody::Int(int) => PropertyWidget::Int {
            value: int.value().get(cmp, index),
            limits: int.limits(),
        },
        PropertyBody::Bool(value) => PropertyWidget::Checkbox(value.get(cmp, index)),
        PropertyBody::String(text) => PropertyWidget::Text(text.get(cmp, index).to_string()),
        PropertyBody::Vec2(value) => PropertyWidget::Vec2(value.get(cmp, index)),
        PropertyBody::Vec3(value) => PropertyWidget::Vec3(value.get(cmp, index)),
        PropertyBody::Vec4(value) => PropertyWidget::Vec4(value.get(cmp, index)),
        PropertyBody::Color(value) => PropertyWidget::Color(value.get(cmp, index)),
        PropertyBody::Decimal(decimal) => PropertyWidget::Decimal {
            value: decimal.value().get(cmp, index),
            range: decimal.range(),
        },
        PropertyBody::Enum(enumeration) => PropertyWidget::Dropdown {
            selected: enumeration.value().get(cmp, index),
            options: enumeration
                .enum_labels(cmp.scene)
                .into_iter()
                .map(str::to_string)
                .collect(),
        },
        PropertyBody::File(file) => PropertyWidget::FilePicker {
            path: file.text().get(cmp, index).to_string(),
            filter: file.file_type(),
        },
        PropertyBody::Resource(resource) => PropertyWidget::ResourcePicker {
            path: resource.file().text().get(cmp, index).to_string(),
            filter: resource.file().file_type(),
            resource_type: resource.resource_type(),
        },
        PropertyBody::SampledFunction(function) => PropertyWidget::Curve {
            samples: function.samples(cmp),
            min: function.min(),
            max: function.max(),
        },
        PropertyBody::Array(array) => PropertyWidget::List {
            items: (0..array.count(cmp))
                .map(|item| {
                    array
                        .children()
                        .iter()
                        .map(|child| build_row(child, cmp, PropertyIndex::Element(item)))
                        .collect()
                })
                .collect(),
        },
    };

    PropertyRow {
        name: property.name(),
        label: parse_field_name(property.name()).into_owned(),
        kind: property.kind(),
        widget,
    }
}

/// Plain text dump of the rows, nested items indented.
pub fn format_rows(rows: &[PropertyRow]) -> String {
    let mut out = String::new();
    write_rows(&mut out, rows, 0);
    out
}

fn write_rows(out: &mut String, rows: &[PropertyRow], depth: usize) {
    let indent = "  ".repeat(depth);
    for row in rows {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{indent}{}: {}", row.label, row.widget);
        if let PropertyWidget::List { items } = &row.widget {
            for (i, item) in items.iter().enumerate() {
                let _ = writeln!(out, "{indent}  [{i}]");
                write_rows(out, item, depth + 2);
            }
        }
    }
}

impl fmt::Display for PropertyWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyWidget::Int { value, limits: Some((min, max)) } => write!(f, "{value} ({min}..={max})"),
            PropertyWidget::Int { value, limits: None } => write!(f, "{value}"),
            PropertyWidget::Checkbox(value) => write!(f, "{}", if *value { "[x]" } else { "[ ]" }),
            PropertyWidget::Text(text) => write!(f, "\"{text}\""),
            PropertyWidget::Vec2(v) => write!(f, "({}, {})", v.x, v.y),
            PropertyWidget::Vec3(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            PropertyWidget::Vec4(v) => write!(f, "({}, {}, {}, {})", v.x, v.y, v.z, v.w),
            PropertyWidget::Color(c) => write!(f, "rgb({}, {}, {})", c.x, c.y, c.z),
            PropertyWidget::Decimal { value, range } => {
                write!(f, "{value} ({}..={}, step {})", range.min, range.max, range.step)
            }
            PropertyWidget::Dropdown { selected, options } => {
                let label = usize::try_from(*selected)
                    .ok()
                    .and_then(|i| options.get(i))
                    .map(String::as_str)
                    .unwrap_or("<invalid>");
                write!(f, "{label} [{}]", options.join("|"))
            }
            PropertyWidget::FilePicker { path, filter } => write!(f, "\"{path}\" ({filter})"),
            PropertyWidget::ResourcePicker { path, filter, resource_type } => {
                write!(f, "\"{path}\" ({filter}, resource {})", resource_type.0)
            }
            PropertyWidget::Curve { samples, min, max } => {
                write!(f, "{} samples in {min}..={max}", samples.len())
            }
            PropertyWidget::List { items } => write!(f, "{} items", items.len()),
        }
    }
}

/// `snake_case` field name to a `Title Case` label.
pub fn parse_field_name(name: &str) -> Cow<'_, str> {
    // Fast path
    if !name.contains('_') && name.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        return Cow::Borrowed(name);
    }

    let words: Vec<String> = name
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        return Cow::Borrowed(name);
    }
    Cow::Owned(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflect_core::ecs::component::ComponentIndex;
    use reflect_core::test_utils::*;

    fn sample_rows() -> Vec<PropertyRow> {
        let mut scene = TestScene::with_components(1);
        scene.components[0] = sample_component();
        build_rows(&test_properties(), ComponentRef::new(&scene, ComponentIndex(0)))
    }

    fn row<'a>(rows: &'a [PropertyRow], name: &str) -> &'a PropertyRow {
        rows.iter().find(|r| r.name == name).expect("row exists")
    }

    #[test]
    fn field_names_become_labels() {
        assert_eq!(parse_field_name("spawn_rate"), "Spawn Rate");
        assert_eq!(parse_field_name("tint"), "Tint");
        assert_eq!(parse_field_name("Already"), "Already");
        assert_eq!(parse_field_name("_leading__gaps_"), "Leading Gaps");
        assert_eq!(parse_field_name(""), "");
    }

    #[test]
    fn one_row_per_property_in_order() {
        let rows = sample_rows();
        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        let expected: Vec<_> = test_properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, expected);
        assert_eq!(row(&rows, "count").kind, PropertyKind::Integer);
    }

    #[test]
    fn rows_carry_presentation_metadata() {
        let rows = sample_rows();
        assert_eq!(
            row(&rows, "count").widget,
            PropertyWidget::Int { value: 42, limits: Some((0, 100)) }
        );
        assert_eq!(
            row(&rows, "speed").widget,
            PropertyWidget::Decimal { value: 3.75, range: DecimalRange::new(0.0, 10.0, 0.5) }
        );
        assert_eq!(
            row(&rows, "mode").widget,
            PropertyWidget::Dropdown {
                selected: 2,
                options: vec!["Off".into(), "Loop".into(), "PingPong".into()],
            }
        );
        assert_eq!(
            row(&rows, "texture").widget,
            PropertyWidget::ResourcePicker {
                path: "textures/crate.png".into(),
                filter: "*.png",
                resource_type: TEXTURE_RESOURCE,
            }
        );
        let PropertyWidget::Curve { samples, min, max } = &row(&rows, "curve").widget else {
            panic!("curve row");
        };
        assert_eq!((samples.len(), *min, *max), (CURVE_SAMPLES, 0.0, 1.0));
    }

    #[test]
    fn array_rows_nest_per_item() {
        let rows = sample_rows();
        let PropertyWidget::List { items } = &row(&rows, "items").widget else {
            panic!("items row");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[1][0].widget, PropertyWidget::Int { value: 9, limits: None });
        assert_eq!(items[1][1].widget, PropertyWidget::Text("hinge".into()));
        assert_eq!(items[0][1].label, "Tag");
    }

    #[test]
    fn text_dump_indents_items() {
        let dump = format_rows(&sample_rows());
        assert!(dump.contains("Count: 42 (0..=100)\n"));
        assert!(dump.contains("Mode: PingPong [Off|Loop|PingPong]\n"));
        assert!(dump.contains("Items: 2 items\n  [0]\n    Id: 7\n    Tag: \"lid\"\n"));
    }
}
