use super::*;

/// Tests deleting an existing record.
///
/// Expected: Ok(1) with row gone
#[tokio::test]
async fn deletes_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_mahasiswa(db).await?;

    let rows = MahasiswaRepository::new(db).delete(entity.id).await?;

    assert_eq!(rows, 1);
    assert!(Mahasiswa::find_by_id(entity.id).one(db).await?.is_none());

    Ok(())
}

/// Tests that deleting leaves other records in place.
///
/// Expected: Ok with remaining record intact
#[tokio::test]
async fn leaves_other_records_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_mahasiswa(db).await?;
    let kept = factory::create_mahasiswa(db).await?;

    MahasiswaRepository::new(db).delete(doomed.id).await?;

    let remaining = Mahasiswa::find().all(db).await?;
    assert_eq!(remaining, vec![kept]);

    Ok(())
}

/// Tests deleting an ID that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = MahasiswaRepository::new(db).delete(Uuid::new_v4()).await?;

    assert_eq!(rows, 0);

    Ok(())
}
