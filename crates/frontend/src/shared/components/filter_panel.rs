use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::shared::table::{FieldDef, FieldKind, FilterKind, FilterSpec, FilterValue, TableSchema};
use leptos::prelude::*;
use thaw::*;

/// Inputs of one filterable field; range fields use both, the others only `primary`
#[derive(Clone, Copy)]
struct FieldInputs {
    field: &'static FieldDef,
    primary: RwSignal<String>,
    secondary: RwSignal<String>,
}

impl FieldInputs {
    fn from_spec(field: &'static FieldDef, spec: &FilterSpec) -> Self {
        let (primary, secondary) = match spec.get(field.id) {
            Some(FilterValue::Contains { pattern }) => (pattern.clone(), String::new()),
            Some(FilterValue::Exact { value }) => (value.clone(), String::new()),
            Some(FilterValue::Range { min, max }) => (
                min.map(|v| v.to_string()).unwrap_or_default(),
                max.map(|v| v.to_string()).unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };
        Self {
            field,
            primary: RwSignal::new(primary),
            secondary: RwSignal::new(secondary),
        }
    }

    fn to_value(&self) -> Option<FilterValue> {
        let primary = self.primary.get_untracked();
        let value = match self.field.filter {
            FilterKind::None => return None,
            FilterKind::Contains => FilterValue::contains(primary),
            FilterKind::Exact => FilterValue::exact(primary),
            FilterKind::Range => {
                FilterValue::range_from_inputs(&primary, &self.secondary.get_untracked())
            }
        };
        Some(value)
    }

    fn clear(&self) {
        self.primary.set(String::new());
        self.secondary.set(String::new());
    }
}

/// Filter dialog generated from the table schema
#[component]
pub fn FilterModal(
    schema: TableSchema,

    /// Filters currently applied to the table
    current: FilterSpec,

    on_apply: Callback<FilterSpec>,

    on_clear: Callback<()>,

    on_close: Callback<()>,
) -> impl IntoView {
    let inputs: Vec<FieldInputs> = schema
        .filterable_fields()
        .map(|f| FieldInputs::from_spec(f, &current))
        .collect();
    let inputs = StoredValue::new(inputs);

    let apply = move |_| {
        let spec = inputs.with_value(|all| {
            all.iter().fold(FilterSpec::new(), |spec, input| match input.to_value() {
                Some(value) if !value.is_blank() => spec.with(input.field.id, value),
                _ => spec,
            })
        });
        on_apply.run(spec);
    };

    let clear = move |_| {
        inputs.with_value(|all| all.iter().for_each(FieldInputs::clear));
        on_clear.run(());
    };

    view! {
        <ModalFrame
            title=format!("Filter: {}", schema.title)
            on_close=on_close
            modal_class="modal--filters"
        >
            <div class="filter-form">
                {inputs
                    .get_value()
                    .into_iter()
                    .map(|input| view! { <FilterField input=input /> })
                    .collect_view()}
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=clear>
                    "Clear filters"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=apply>
                    "Apply"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
fn FilterField(input: FieldInputs) -> impl IntoView {
    let field = input.field;
    let control = match (field.filter, field.kind) {
        (FilterKind::Range, _) => view! {
            <div class="filter-form__range">
                <Input value=input.primary placeholder="Min" />
                <span>"–"</span>
                <Input value=input.secondary placeholder="Max" />
            </div>
        }
        .into_any(),
        (FilterKind::Exact, FieldKind::Enum(values)) => view! {
            <select
                class="filter-form__select"
                prop:value=move || input.primary.get()
                on:change=move |ev| input.primary.set(event_target_value(&ev))
            >
                <option value="">"All"</option>
                {values
                    .iter()
                    .map(|v| view! { <option value=*v>{*v}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        _ => view! {
            <Input value=input.primary placeholder=format!("Search {}", field.label.to_lowercase()) />
        }
        .into_any(),
    };

    view! {
        <label class="filter-form__field">
            <span class="filter-form__label">{field.label}</span>
            {control}
        </label>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
