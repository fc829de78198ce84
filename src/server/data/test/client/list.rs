use super::*;

/// Tests listing clients from an empty collection.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let clients = repo.list().await.unwrap();

    assert!(clients.is_empty());

    Ok(())
}

/// Tests listing every stored client.
///
/// Expected: Ok with all clients and their fields
#[tokio::test]
async fn returns_all_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::client::ClientFactory::new(db)
        .name("Acme")
        .build()
        .await?;
    let second = factory::client::ClientFactory::new(db)
        .name("Globex")
        .invitation_types("birthday")
        .build()
        .await?;

    let repo = ClientRepository::new(db);
    let clients = repo.list().await.unwrap();

    assert_eq!(clients.len(), 2);

    let acme = clients
        .iter()
        .find(|c| c.id.to_hex() == first.id)
        .unwrap();
    assert_eq!(acme.name, "Acme");

    let globex = clients
        .iter()
        .find(|c| c.id.to_hex() == second.id)
        .unwrap();
    assert_eq!(globex.name, "Globex");
    assert_eq!(globex.invitation_types, "birthday");

    Ok(())
}

/// Tests listing when a stored id is not a valid record id.
///
/// Expected: Err instead of a partially converted list
#[tokio::test]
async fn fails_on_corrupt_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::client::ClientFactory::new(db)
        .id("not-a-record-id")
        .build()
        .await?;

    let repo = ClientRepository::new(db);
    let result = repo.list().await;

    assert!(result.is_err());

    Ok(())
}
