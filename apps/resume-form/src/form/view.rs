//! Markup-free projection of controller state. A renderer draws exactly this.

use serde::Serialize;

use crate::models::form::{Field, FormSnapshot};

pub const INPUT_ROWS: u16 = 10;
pub const SUBMIT_LABEL: &str = "Analyze Resume";
pub const SUBMITTING_LABEL: &str = "Analyzing...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputView {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub rows: u16,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerView {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub inputs: Vec<InputView>,
    pub submit: TriggerView,
    pub error: Option<String>,
}

impl FormView {
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        let inputs = Field::ALL
            .into_iter()
            .map(|field| {
                let (label, placeholder) = input_copy(field);
                InputView {
                    id: field.name(),
                    label,
                    placeholder,
                    rows: INPUT_ROWS,
                    value: snapshot.form.get(field).to_string(),
                }
            })
            .collect();

        // The trigger is the only thing disabled while an attempt runs; inputs stay editable.
        let submitting = snapshot.status.is_submitting();
        let submit = TriggerView {
            label: if submitting {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            disabled: submitting,
        };

        Self {
            inputs,
            submit,
            error: snapshot.status.error_message().map(str::to_string),
        }
    }

    #[allow(dead_code)]
    pub fn input(&self, field: Field) -> Option<&InputView> {
        self.inputs.iter().find(|input| input.id == field.name())
    }
}

fn input_copy(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Resume => ("Your Resume", "Paste your resume here..."),
        Field::JobDescription => ("Job Description", "Paste the job description here..."),
    }
}
