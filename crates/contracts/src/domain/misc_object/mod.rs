pub mod aggregate;

pub use aggregate::{
    CreateMiscObject, MiscObject, MiscObjectFilters, MiscObjectsResponse, Pagination,
    UpdateMiscObject,
};
