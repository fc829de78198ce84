use super::*;

/// Tests listing the guests of a client.
///
/// Verifies that guests of other clients are excluded.
///
/// Expected: Ok with only the client's guests
#[tokio::test]
async fn returns_guests_of_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, guests) = factory::helpers::create_client_with_guests(db, 3).await?;
    factory::helpers::create_client_with_guests(db, 2).await?;
    let client_id: RecordId = client.id.parse().unwrap();

    let repo = GuestRepository::new(db);
    let result = repo.list_by_client(&client_id).await.unwrap();

    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|g| g.client_id == client_id));
    for guest in &guests {
        assert!(result.iter().any(|g| g.id.to_hex() == guest.id));
    }

    Ok(())
}

/// Tests listing for a client without guests.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_client_without_guests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let client_id: RecordId = client.id.parse().unwrap();

    let repo = GuestRepository::new(db);
    let result = repo.list_by_client(&client_id).await.unwrap();

    assert!(result.is_empty());

    Ok(())
}

/// Tests listing guests whose client was deleted.
///
/// Expected: Ok with the orphaned guests
#[tokio::test]
async fn returns_guests_of_deleted_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, _guests) = factory::helpers::create_client_with_guests(db, 2).await?;
    entity::prelude::Client::delete_by_id(client.id.clone())
        .exec(db)
        .await?;
    let client_id: RecordId = client.id.parse().unwrap();

    let repo = GuestRepository::new(db);
    let result = repo.list_by_client(&client_id).await.unwrap();

    assert_eq!(result.len(), 2);

    Ok(())
}
