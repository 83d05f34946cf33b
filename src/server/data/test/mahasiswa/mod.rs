use crate::server::{
    data::mahasiswa::MahasiswaRepository,
    model::mahasiswa::{CreateMahasiswaParam, UpdateMahasiswaParam},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;
mod update;

fn create_param(nim: &str) -> CreateMahasiswaParam {
    CreateMahasiswaParam {
        nim: nim.to_string(),
        nama: "Budi Santoso".to_string(),
        prodi: "TI".to_string(),
        fakultas: "Teknik".to_string(),
    }
}
