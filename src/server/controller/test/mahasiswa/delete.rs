use super::*;

/// Tests deleting a record twice.
///
/// Expected: 200 with confirmation, then 404
#[tokio::test]
async fn deletes_then_reports_not_found() {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_mahasiswa(db).await.unwrap();
    let uri = format!("/mahasiswa/{}", entity.id);

    let (status, body) = send(app(db), Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "statusCode": 200, "data": { "message": "Berhasil dihapus" } })
    );

    let (status, body) = send(app(db), Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        json!(format!("ID {} tidak ditemukan", entity.id))
    );
}

/// Tests that a deleted record disappears from the listing.
///
/// Expected: listing no longer contains the ID
#[tokio::test]
async fn deleted_record_leaves_listing() {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_many_mahasiswa(db, 2).await.unwrap();

    send(
        app(db),
        Method::DELETE,
        &format!("/mahasiswa/{}", created[0].id),
        None,
    )
    .await;

    let (_, body) = send(app(db), Method::GET, "/mahasiswa", None).await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![created[1].id.to_string().as_str()]);
}
