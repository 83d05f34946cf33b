pub use super::mahasiswa::Entity as Mahasiswa;
