use super::*;

/// Tests creating a client.
///
/// Verifies that the repository generates a non-zero id, returns it in the
/// acknowledgment, and stores every submitted field under that id.
///
/// Expected: Ok with client stored
#[tokio::test]
async fn creates_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let ack = repo
        .create(CreateClientParams {
            name: "Acme".to_string(),
            contact: "a@b.com".to_string(),
            invitation_types: "wedding".to_string(),
        })
        .await
        .unwrap();

    assert!(!ack.inserted_id.is_zero());

    let stored = entity::prelude::Client::find_by_id(ack.inserted_id.to_hex())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Acme");
    assert_eq!(stored.contact, "a@b.com");
    assert_eq!(stored.invitation_types, "wedding");

    Ok(())
}

/// Tests creating two clients with identical fields.
///
/// Verifies that each insert gets its own id.
///
/// Expected: Ok with two distinct records
#[tokio::test]
async fn generates_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = CreateClientParams {
        name: "Acme".to_string(),
        contact: "a@b.com".to_string(),
        invitation_types: "wedding".to_string(),
    };

    let repo = ClientRepository::new(db);
    let first = repo.create(params.clone()).await.unwrap();
    let second = repo.create(params).await.unwrap();

    assert_ne!(first.inserted_id, second.inserted_id);
    assert_eq!(entity::prelude::Client::find().count(db).await?, 2);

    Ok(())
}

/// Tests creating a client when the table does not exist.
///
/// Expected: Err from the store
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let result = repo
        .create(CreateClientParams {
            name: "Acme".to_string(),
            contact: "a@b.com".to_string(),
            invitation_types: "wedding".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
