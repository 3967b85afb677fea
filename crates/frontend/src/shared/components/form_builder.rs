//! Form generated from field descriptors.
//!
//! Every field reports edits through the form-level change handler as a
//! [`FieldChange`] keyed by the field `name`; the page state decides what to do
//! with it. The form has exactly one submit button.

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Number,
    Select,
    Checkbox,
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Select => "text",
            FieldKind::Password => "password",
            FieldKind::Number => "number",
            FieldKind::Checkbox => "checkbox",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
    Many(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    pub fn text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checked(b) => b.to_string(),
            FieldValue::Many(values) => values.join(","),
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }

    /// Whether the option `value` is selected.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            FieldValue::Text(s) => s == value,
            FieldValue::Many(values) => values.iter().any(|v| v == value),
            FieldValue::Checked(_) => false,
        }
    }
}

/// One edit reported by the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub name: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn labelled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<String> for SelectOption {
    fn from(value: String) -> Self {
        Self {
            label: value.clone(),
            value,
        }
    }
}

impl From<&str> for SelectOption {
    fn from(value: &str) -> Self {
        SelectOption::from(value.to_string())
    }
}

#[derive(Clone)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    pub id: String,
    pub name: String,
    pub label: Option<String>,
    pub mandatory: bool,
    pub multiple: bool,
    pub options: Signal<Vec<SelectOption>>,
    pub value: Signal<FieldValue>,
    pub on_change: Callback<FieldChange>,
}

impl FieldDescriptor {
    /// Field whose id and name are both `name`.
    pub fn new(
        kind: FieldKind,
        name: &str,
        value: Signal<FieldValue>,
        on_change: Callback<FieldChange>,
    ) -> Self {
        Self {
            kind,
            id: name.to_string(),
            name: name.to_string(),
            label: None,
            mandatory: false,
            multiple: false,
            options: Signal::stored(Vec::new()),
            value,
            on_change,
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn options(mut self, options: Signal<Vec<SelectOption>>) -> Self {
        self.options = options;
        self
    }
}

#[derive(Clone)]
pub struct SubmitDescriptor {
    pub id: String,
    pub label: String,
    pub action: Callback<()>,
}

impl SubmitDescriptor {
    /// "Enregistrer" button.
    pub fn save(id: &str, action: Callback<()>) -> Self {
        Self {
            id: id.to_string(),
            label: "Enregistrer".to_string(),
            action,
        }
    }
}

/// Label text, with ` *` appended for mandatory fields.
pub fn label_text(label: &str, mandatory: bool) -> String {
    if mandatory {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

/// One element rendered for a field, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldControl {
    Label { id: String, for_id: String, text: String },
    Input { id: String, name: String, input_type: &'static str },
    Select { id: String, name: String, multiple: bool },
}

/// The submit button of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub id: String,
    pub label: String,
}

/// Label (when the field has one) followed by the input or select.
pub fn field_controls(field: &FieldDescriptor) -> Vec<FieldControl> {
    let mut controls = Vec::with_capacity(2);
    if let Some(label) = &field.label {
        controls.push(FieldControl::Label {
            id: format!("label-{}", field.name),
            for_id: field.id.clone(),
            text: label_text(label, field.mandatory),
        });
    }
    controls.push(match field.kind {
        FieldKind::Select => FieldControl::Select {
            id: field.id.clone(),
            name: field.name.clone(),
            multiple: field.multiple,
        },
        kind => FieldControl::Input {
            id: field.id.clone(),
            name: field.name.clone(),
            input_type: kind.input_type(),
        },
    });
    controls
}

pub fn submit_control(submit: &SubmitDescriptor) -> SubmitControl {
    SubmitControl {
        id: submit.id.clone(),
        label: submit.label.clone(),
    }
}

fn selected_values(ev: &web_sys::Event) -> Vec<String> {
    let Some(select) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
    else {
        return Vec::new();
    };
    let selected = select.selected_options();
    (0..selected.length())
        .filter_map(|i| selected.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .map(|opt| opt.value())
        .collect()
}

fn field_view(field: FieldDescriptor) -> AnyView {
    let controls = field_controls(&field);
    let FieldDescriptor {
        options,
        value,
        on_change,
        ..
    } = field;

    let views = controls
        .into_iter()
        .map(|control| match control {
            FieldControl::Label { id, for_id, text } => view! {
                <label id=id class="form__label" for=for_id>
                    {text}
                </label>
            }
            .into_any(),
            FieldControl::Select { id, name, multiple } => view! {
                <select
                    id=id
                    name=name.clone()
                    class="form__select"
                    multiple=multiple
                    on:change=move |ev| {
                        let picked = if multiple {
                            FieldValue::Many(selected_values(&ev))
                        } else {
                            FieldValue::Text(event_target_value(&ev))
                        };
                        on_change.run(FieldChange { name: name.clone(), value: picked });
                    }
                >
                    {move || options.get().into_iter().map(|opt| {
                        let key = opt.value.clone();
                        view! {
                            <option value=opt.value prop:selected=move || value.get().contains(&key)>
                                {opt.label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            }
            .into_any(),
            FieldControl::Input {
                id,
                name,
                input_type: "checkbox",
            } => view! {
                <input
                    type="checkbox"
                    id=id
                    name=name.clone()
                    class="form__checkbox"
                    prop:checked=move || value.get().is_checked()
                    on:change=move |ev| {
                        on_change.run(FieldChange {
                            name: name.clone(),
                            value: FieldValue::Checked(event_target_checked(&ev)),
                        });
                    }
                />
            }
            .into_any(),
            FieldControl::Input {
                id,
                name,
                input_type,
            } => view! {
                <input
                    type=input_type
                    id=id
                    name=name.clone()
                    class="form__input"
                    prop:value=move || value.get().text()
                    on:input=move |ev| {
                        on_change.run(FieldChange {
                            name: name.clone(),
                            value: FieldValue::Text(event_target_value(&ev)),
                        });
                    }
                />
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div class="form__group">
            {views}
        </div>
    }
    .into_any()
}

#[component]
pub fn FormBuilder(fields: Vec<FieldDescriptor>, submit: SubmitDescriptor) -> impl IntoView {
    let SubmitControl { id, label } = submit_control(&submit);
    let action = submit.action;

    view! {
        <div class="wrapper-form">
            <form class="form" on:submit=|ev| ev.prevent_default()>
                {fields.into_iter().map(field_view).collect_view()}
                <div id="actions" class="form__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        attr:id=id
                        on_click=move |_| action.run(())
                    >
                        {label}
                    </Button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Everything the form renders, fields first, then the submit button.
    #[derive(Debug, PartialEq)]
    enum Rendered {
        Field(FieldControl),
        Submit(SubmitControl),
    }

    fn rendered(fields: &[FieldDescriptor], submit: &SubmitDescriptor) -> Vec<Rendered> {
        fields
            .iter()
            .flat_map(field_controls)
            .map(Rendered::Field)
            .chain(std::iter::once(Rendered::Submit(submit_control(submit))))
            .collect()
    }

    fn text_field(name: &str) -> FieldDescriptor {
        FieldDescriptor::new(
            FieldKind::Text,
            name,
            Signal::stored(FieldValue::default()),
            Callback::new(|_| {}),
        )
    }

    #[test]
    fn test_single_text_field() {
        let owner = Owner::new();
        owner.set();

        let fields = vec![text_field("nom").label("Nom")];
        let submit = SubmitDescriptor::save("save-classe", Callback::new(|_| {}));

        assert_eq!(
            rendered(&fields, &submit),
            vec![
                Rendered::Field(FieldControl::Label {
                    id: "label-nom".into(),
                    for_id: "nom".into(),
                    text: "Nom".into()
                }),
                Rendered::Field(FieldControl::Input {
                    id: "nom".into(),
                    name: "nom".into(),
                    input_type: "text"
                }),
                Rendered::Submit(SubmitControl {
                    id: "save-classe".into(),
                    label: "Enregistrer".into()
                }),
            ]
        );
    }

    #[test]
    fn test_mandatory_marker_only_changes_label() {
        assert_eq!(label_text("Nom", true), "Nom *");
        assert_eq!(label_text("Nom", false), "Nom");

        let owner = Owner::new();
        owner.set();
        let plain = field_controls(&text_field("nom").label("Nom"));
        let marked = field_controls(&text_field("nom").label("Nom").mandatory());
        assert_eq!(plain.len(), marked.len());
        assert_eq!(plain[1], marked[1]);
        assert!(matches!(&marked[0], FieldControl::Label { text, .. } if text == "Nom *"));
    }

    #[test]
    fn test_select_and_checkbox_controls() {
        let owner = Owner::new();
        owner.set();
        let noop = Callback::new(|_| {});
        let fields = vec![
            FieldDescriptor::new(
                FieldKind::Select,
                "slots",
                Signal::stored(FieldValue::Many(vec![])),
                noop,
            )
            .multiple(),
            FieldDescriptor::new(
                FieldKind::Checkbox,
                "saturdayUsed",
                Signal::stored(FieldValue::Checked(false)),
                noop,
            ),
        ];
        let submit = SubmitDescriptor::save("s", Callback::new(|_| {}));
        let controls = rendered(&fields, &submit);
        assert_eq!(
            controls[0],
            Rendered::Field(FieldControl::Select {
                id: "slots".into(),
                name: "slots".into(),
                multiple: true
            })
        );
        assert!(matches!(
            controls[1],
            Rendered::Field(FieldControl::Input { input_type: "checkbox", .. })
        ));
        assert_eq!(controls.len(), 3);
    }

    #[test]
    fn test_select_option_from_string() {
        let opt = SelectOption::from("30".to_string());
        assert_eq!(opt.label, "30");
        assert_eq!(opt.value, "30");
    }

    #[test]
    fn test_field_value_contains() {
        assert!(FieldValue::Many(vec!["1".into(), "4".into()]).contains("4"));
        assert!(FieldValue::Text("2".into()).contains("2"));
        assert!(!FieldValue::Checked(true).contains("true"));
    }
}
