use super::*;

/// Tests patching a single field.
///
/// Verifies that only the patched field changes and the others keep their values.
///
/// Expected: Ok with matched 1, modified 1
#[tokio::test]
async fn updates_only_patched_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::ClientFactory::new(db)
        .name("Acme")
        .contact("a@b.com")
        .invitation_types("wedding")
        .build()
        .await?;
    let id: RecordId = client.id.parse().unwrap();

    let repo = ClientRepository::new(db);
    let ack = repo
        .update(
            &id,
            &ClientPatch {
                contact: Some("new@b.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(ack.matched_count, 1);
    assert_eq!(ack.modified_count, 1);

    let stored = entity::prelude::Client::find_by_id(client.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Acme");
    assert_eq!(stored.contact, "new@b.com");
    assert_eq!(stored.invitation_types, "wedding");

    Ok(())
}

/// Tests applying the same patch twice.
///
/// Expected: the second update matches but modifies nothing
#[tokio::test]
async fn repeated_patch_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let id: RecordId = client.id.parse().unwrap();
    let patch = ClientPatch {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };

    let repo = ClientRepository::new(db);
    let first = repo.update(&id, &patch).await.unwrap();
    let second = repo.update(&id, &patch).await.unwrap();

    assert_eq!(first.modified_count, 1);
    assert_eq!(second.matched_count, 1);
    assert_eq!(second.modified_count, 0);

    let stored = entity::prelude::Client::find_by_id(client.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Renamed");

    Ok(())
}

/// Tests patching an id no client has.
///
/// Expected: Ok with matched 0 and nothing inserted
#[tokio::test]
async fn unknown_id_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let ack = repo
        .update(
            &RecordId::generate(),
            &ClientPatch {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(ack.matched_count, 0);
    assert_eq!(ack.modified_count, 0);
    assert_eq!(entity::prelude::Client::find().count(db).await?, 0);

    Ok(())
}
