use super::*;

/// Tests creating a record over HTTP.
///
/// Expected: 201 with the record inside the envelope
#[tokio::test]
async fn creates_record() {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), Method::POST, "/mahasiswa", Some(budi())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["statusCode"], json!(201));
    assert_eq!(body["data"]["nim"], json!("123"));
    assert_eq!(body["data"]["nama"], json!("Budi Santoso"));
    assert_eq!(body["data"]["prodi"], json!("TI"));
    assert_eq!(body["data"]["fakultas"], json!("Teknik"));
    assert_eq!(body["data"]["isActive"], json!(true));
    assert!(!body["data"]["id"].as_str().unwrap().is_empty());
}

/// Tests that missing fields are all reported at once.
///
/// Expected: 400 with one violation per broken rule
#[tokio::test]
async fn rejects_missing_fields() {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db),
        Method::POST,
        "/mahasiswa",
        Some(json!({ "nim": "123" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["statusCode"], json!(400));
    assert_eq!(body["error"], json!("Bad Request"));

    let fields: Vec<&str> = body["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["nama", "nama", "prodi", "fakultas"]);
}

/// Tests the minimum length rule on nama.
///
/// Expected: 400 and nothing stored
#[tokio::test]
async fn rejects_short_nama() {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut payload = budi();
    payload["nama"] = json!("Bu");

    let (status, body) = send(app(db), Method::POST, "/mahasiswa", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["violations"][0]["field"], json!("nama"));

    let (_, list) = send(app(db), Method::GET, "/mahasiswa", None).await;
    assert_eq!(list["data"], json!([]));
}

/// Tests that properties outside the DTO are refused.
///
/// Expected: 400
#[tokio::test]
async fn rejects_unknown_property() {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut payload = budi();
    payload["isActive"] = json!(false);

    let (status, body) = send(app(db), Method::POST, "/mahasiswa", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

/// Tests a body that is not JSON at all.
///
/// Expected: 400
#[tokio::test]
async fn rejects_malformed_json() {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/mahasiswa")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app(db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests a second record with the same nim.
///
/// Expected: 409
#[tokio::test]
async fn duplicate_nim_conflicts() {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = send(app(db), Method::POST, "/mahasiswa", Some(budi())).await;
    let (second, body) = send(app(db), Method::POST, "/mahasiswa", Some(budi())).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["statusCode"], json!(409));
}

/// Tests a JSON body sent without a JSON content type.
///
/// Expected: 400 rather than 415
#[tokio::test]
async fn missing_content_type_is_bad_request() {
    let test = TestBuilder::new().with_mahasiswa_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/mahasiswa")
        .body(Body::from(budi().to_string()))
        .unwrap();

    let response = app(db).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
