use super::*;

/// Tests that a partial update writes only the supplied column.
///
/// Expected: Ok(1) with other columns unchanged
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_mahasiswa(db).await?;

    let rows = MahasiswaRepository::new(db)
        .update(
            entity.id,
            UpdateMahasiswaParam {
                nama: Some("Budi Hartono".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(rows, 1);

    let stored = Mahasiswa::find_by_id(entity.id).one(db).await?.unwrap();
    assert_eq!(stored.nama, "Budi Hartono");
    assert_eq!(stored.nim, entity.nim);
    assert_eq!(stored.prodi, entity.prodi);
    assert_eq!(stored.fakultas, entity.fakultas);
    assert_eq!(stored.is_active, entity.is_active);

    Ok(())
}

/// Tests updating every mutable column at once, including nim.
///
/// Expected: Ok(1) with all columns replaced
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_mahasiswa(db).await?;

    MahasiswaRepository::new(db)
        .update(
            entity.id,
            UpdateMahasiswaParam {
                nim: Some("999".to_string()),
                nama: Some("Rina Wati".to_string()),
                prodi: Some("SI".to_string()),
                fakultas: Some("Ilmu Komputer".to_string()),
                is_active: Some(false),
            },
        )
        .await?;

    let stored = Mahasiswa::find_by_id(entity.id).one(db).await?.unwrap();
    assert_eq!(stored.nim, "999");
    assert_eq!(stored.nama, "Rina Wati");
    assert_eq!(stored.prodi, "SI");
    assert_eq!(stored.fakultas, "Ilmu Komputer");
    assert!(!stored.is_active);

    Ok(())
}

/// Tests that an empty parameter set issues no write.
///
/// Expected: Ok(0) with record unchanged
#[tokio::test]
async fn empty_update_writes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_mahasiswa(db).await?;

    let rows = MahasiswaRepository::new(db)
        .update(entity.id, UpdateMahasiswaParam::default())
        .await?;

    assert_eq!(rows, 0);
    let stored = Mahasiswa::find_by_id(entity.id).one(db).await?.unwrap();
    assert_eq!(stored, entity);

    Ok(())
}

/// Tests updating an ID that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = MahasiswaRepository::new(db)
        .update(
            Uuid::new_v4(),
            UpdateMahasiswaParam {
                prodi: Some("SI".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests that changing nim to one already taken is rejected by the store.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_nim_taken_by_another_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_mahasiswa(db).await?;
    let second = factory::create_mahasiswa(db).await?;

    let result = MahasiswaRepository::new(db)
        .update(
            second.id,
            UpdateMahasiswaParam {
                nim: Some(first.nim.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
