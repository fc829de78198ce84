use std::sync::atomic::{AtomicUsize, Ordering};

use crate::server::{
    data::{
        client::{ClientLookup, ClientRepository},
        guest::GuestRepository,
    },
    error::{store::StoreError, AppError},
    model::{guest::GuestFields, id::RecordId},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod list_by_client;
mod update;

/// Client lookup with a fixed answer that records how often it was asked.
struct StubLookup {
    exists: bool,
    calls: AtomicUsize,
}

impl StubLookup {
    fn answering(exists: bool) -> Self {
        Self {
            exists,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ClientLookup for StubLookup {
    async fn exists(&self, _id: &RecordId) -> Result<bool, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.exists)
    }
}

fn fields(client_id: RecordId) -> GuestFields {
    GuestFields {
        name: "Jo".to_string(),
        message: "See you there".to_string(),
        confirmation: "yes".to_string(),
        client_id,
    }
}
