use serde::Serialize;
use utoipa::ToSchema;

/// 바인딩되지 않은 폼 설명
///
/// 클라이언트가 입력 폼을 그릴 때 사용합니다. hidden 필드는 `value`를 가집니다.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormDescriptor {
    pub action: String,
    pub method: &'static str,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub name: &'static str,
    pub input_type: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FormField {
    pub fn input(name: &'static str, input_type: &'static str, required: bool) -> Self {
        Self {
            name,
            input_type,
            required,
            value: None,
        }
    }

    pub fn hidden(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            input_type: "hidden",
            required: true,
            value: Some(value.into()),
        }
    }
}

impl FormDescriptor {
    pub fn post(action: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            action: action.into(),
            method: "POST",
            fields,
        }
    }
}
