use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MahasiswaDto {
    pub id: Uuid,
    pub nim: String,
    pub nama: String,
    pub prodi: String,
    pub fakultas: String,
    pub is_active: bool,
}

/// Body of `POST /mahasiswa`.
///
/// Missing fields deserialize to empty strings so validation can report them
/// alongside every other violation instead of failing on the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMahasiswaDto {
    #[serde(default)]
    pub nim: String,
    #[serde(default)]
    #[schema(min_length = 3)]
    pub nama: String,
    #[serde(default)]
    pub prodi: String,
    #[serde(default)]
    pub fakultas: String,
}

/// Body of `PATCH /mahasiswa/{id}`; only supplied fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMahasiswaDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nim: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(min_length = 3)]
    pub nama: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prodi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fakultas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
