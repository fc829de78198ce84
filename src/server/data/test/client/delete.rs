use super::*;

/// Tests deleting an existing client.
///
/// Expected: Ok with deleted count 1 and the record gone
#[tokio::test]
async fn deletes_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let id: RecordId = client.id.parse().unwrap();

    let repo = ClientRepository::new(db);
    let ack = repo.delete(&id).await.unwrap();

    assert_eq!(ack.deleted_count, 1);
    assert!(entity::prelude::Client::find_by_id(client.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting an id no client has.
///
/// Expected: Ok with deleted count 0
#[tokio::test]
async fn unknown_id_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_client(db).await?;

    let repo = ClientRepository::new(db);
    let ack = repo.delete(&RecordId::generate()).await.unwrap();

    assert_eq!(ack.deleted_count, 0);
    assert_eq!(entity::prelude::Client::find().count(db).await?, 1);

    Ok(())
}

/// Tests that deleting a client leaves its guests in place.
///
/// Expected: Ok with guests still stored
#[tokio::test]
async fn keeps_guests_of_deleted_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, _guests) = factory::helpers::create_client_with_guests(db, 2).await?;
    let id: RecordId = client.id.parse().unwrap();

    let repo = ClientRepository::new(db);
    repo.delete(&id).await.unwrap();

    assert_eq!(entity::prelude::Guest::find().count(db).await?, 2);

    Ok(())
}
