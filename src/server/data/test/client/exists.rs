use super::*;

/// Expected: true for a stored client
#[tokio::test]
async fn finds_existing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let id: RecordId = client.id.parse().unwrap();

    let repo = ClientRepository::new(db);

    assert!(repo.exists(&id).await.unwrap());

    Ok(())
}

/// Expected: false for an unknown id
#[tokio::test]
async fn reports_missing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_invitation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_client(db).await?;

    let repo = ClientRepository::new(db);

    assert!(!repo.exists(&RecordId::generate()).await.unwrap());

    Ok(())
}
