use crate::server::{
    data::client::{ClientLookup, ClientRepository},
    model::{
        client::{ClientPatch, CreateClientParams},
        id::RecordId,
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists;
mod list;
mod update;
