use super::*;

/// Tests overwriting a guest's fields while keeping its client.
///
/// Verifies that the client lookup is skipped when the reference does not change.
///
/// Expected: Ok with matched 1, modified 1
#[tokio::test]
async fn updates_fields_without_lookup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let guest = factory::create_guest(db, &client.id).await?;
    let id: RecordId = guest.id.parse().unwrap();
    let lookup = StubLookup::answering(false);

    let repo = GuestRepository::new(db);
    let ack = repo
        .update(&id, fields(client.id.parse().unwrap()), &lookup)
        .await
        .unwrap();

    assert_eq!(ack.matched_count, 1);
    assert_eq!(ack.modified_count, 1);
    assert_eq!(lookup.calls(), 0);

    let stored = entity::prelude::Guest::find_by_id(guest.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Jo");
    assert_eq!(stored.message, "See you there");
    assert_eq!(stored.confirmation, "yes");
    assert_eq!(stored.client_id, client.id);

    Ok(())
}

/// Tests moving a guest to another existing client.
///
/// Expected: Ok with the new reference stored
#[tokio::test]
async fn moves_guest_to_existing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_client, guests) = factory::helpers::create_client_with_guests(db, 1).await?;
    let other = factory::create_client(db).await?;
    let id: RecordId = guests[0].id.parse().unwrap();

    let repo = GuestRepository::new(db);
    repo.update(
        &id,
        fields(other.id.parse().unwrap()),
        &ClientRepository::new(db),
    )
    .await
    .unwrap();

    let moved = entity::prelude::Guest::find()
        .filter(entity::guest::Column::ClientId.eq(other.id.clone()))
        .count(db)
        .await?;
    assert_eq!(moved, 1);

    Ok(())
}

/// Tests moving a guest to a client that does not exist.
///
/// Expected: Err(Reference) and the stored reference unchanged
#[tokio::test]
async fn rejects_move_to_unknown_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let guest = factory::create_guest(db, &client.id).await?;
    let id: RecordId = guest.id.parse().unwrap();

    let repo = GuestRepository::new(db);
    let result = repo
        .update(&id, fields(RecordId::generate()), &ClientRepository::new(db))
        .await;

    assert!(matches!(result, Err(AppError::Reference(_))));

    let stored = entity::prelude::Guest::find_by_id(guest.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.client_id, client.id);
    assert_eq!(stored.name, guest.name);

    Ok(())
}

/// Tests an update carrying a zero client id.
///
/// Expected: Err(Validation) before any lookup
#[tokio::test]
async fn rejects_zero_client_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let guest = factory::create_guest(db, &client.id).await?;
    let id: RecordId = guest.id.parse().unwrap();
    let lookup = StubLookup::answering(true);

    let repo = GuestRepository::new(db);
    let result = repo.update(&id, fields(RecordId::ZERO), &lookup).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(lookup.calls(), 0);

    Ok(())
}

/// Tests writing identical values.
///
/// Expected: Ok with matched 1, modified 0
#[tokio::test]
async fn unchanged_fields_modify_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let guest = factory::guest::GuestFactory::new(db, client.id.clone())
        .name("Jo")
        .message("See you there")
        .confirmation("yes")
        .build()
        .await?;
    let id: RecordId = guest.id.parse().unwrap();

    let repo = GuestRepository::new(db);
    let ack = repo
        .update(
            &id,
            fields(client.id.parse().unwrap()),
            &ClientRepository::new(db),
        )
        .await
        .unwrap();

    assert_eq!(ack.matched_count, 1);
    assert_eq!(ack.modified_count, 0);

    Ok(())
}

/// Expected: Ok with matched 0 for an unknown guest id
#[tokio::test]
async fn unknown_id_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;

    let repo = GuestRepository::new(db);
    let ack = repo
        .update(
            &RecordId::generate(),
            fields(client.id.parse().unwrap()),
            &ClientRepository::new(db),
        )
        .await
        .unwrap();

    assert_eq!(ack.matched_count, 0);
    assert_eq!(entity::prelude::Guest::find().count(db).await?, 0);

    Ok(())
}
