use super::*;

/// Tests deleting a record.
///
/// Expected: Ok with the fixed acknowledgment and the record gone
#[tokio::test]
async fn removes_record_and_acknowledges() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_mahasiswa(db).await?;
    let id = entity.id.to_string();
    let service = MahasiswaService::new(db);

    let ack = service.remove(&id).await?;

    assert_eq!(ack.message, DELETED_MESSAGE);
    assert_not_found(service.find_one(&id).await, &id);

    Ok(())
}

/// Tests that a second delete of the same ID fails.
///
/// Expected: Ok then Err(AppError::NotFound)
#[tokio::test]
async fn second_remove_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_mahasiswa(db).await?;
    let id = entity.id.to_string();
    let service = MahasiswaService::new(db);

    assert!(service.remove(&id).await.is_ok());
    assert_not_found(service.remove(&id).await, &id);

    Ok(())
}

/// Tests deleting IDs that never existed, well-formed or not.
///
/// Expected: Err(AppError::NotFound) naming each ID
#[tokio::test]
async fn unknown_ids_are_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MahasiswaService::new(db);
    let id = Uuid::new_v4().to_string();

    assert_not_found(service.remove(&id).await, &id);
    assert_not_found(service.remove("badId").await, "badId");

    Ok(())
}
